use egui::Color32;

use crate::geometry::Point;
use crate::stroke::StrokeRef;

/// Actions handed to the canvas by the interaction controller and the shell
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Commit a finished stroke
    AddStroke(StrokeRef),
    /// Flood fill the flattened scene from `seed`
    Fill { seed: Point, color: Color32 },
    Undo,
    Redo,
    Clear,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddStroke(_) => "Add Stroke",
            Command::Fill { .. } => "Fill",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
        }
    }
}
