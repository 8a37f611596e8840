use egui::Color32;

use crate::brush::BrushStyle;
use crate::command::Command;
use crate::config::ToolSettings;
use crate::geometry::Point;
use crate::state::EditorState;
use crate::stroke::{MutableStroke, Stroke, VectorStroke};
use crate::tools::{TextPrompt, Tool};

/// Turns pointer input into strokes.
///
/// Owns the current tool settings and the transient stroke. Nothing here
/// touches the scene; finished actions come back as [`Command`]s.
#[derive(Debug, Default)]
pub struct DrawStrokeTool {
    settings: ToolSettings,
    state: EditorState,
}

impl DrawStrokeTool {
    pub fn new(settings: ToolSettings) -> Self {
        Self {
            settings: ToolSettings {
                width: settings.width.max(1),
                ..settings
            },
            state: EditorState::Idle,
        }
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.settings.tool != tool {
            log::info!("Tool changed: {} -> {}", self.settings.tool.name(), tool.name());
            self.settings.tool = tool;
        }
    }

    pub fn set_brush(&mut self, brush: BrushStyle) {
        self.settings.brush = brush;
    }

    pub fn set_width(&mut self, width: u32) {
        if width == 0 {
            log::warn!("Stroke width must be positive, using 1");
        }
        self.settings.width = width.max(1);
    }

    pub fn set_color(&mut self, color: Color32) {
        self.settings.color = color;
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn transient(&self) -> Option<&MutableStroke> {
        self.state.transient()
    }

    /// Discard the transient stroke, if any
    pub fn abort(&mut self) -> bool {
        self.state.take_stroke().is_some()
    }

    pub fn on_pointer_down(&mut self, pos: Point, prompt: &mut dyn TextPrompt) -> Option<Command> {
        if self.abort() {
            log::debug!("Pointer down while drawing, dropped stale stroke");
        }

        let ToolSettings {
            tool,
            brush,
            width,
            color,
        } = self.settings.clone();

        match tool {
            Tool::Bucket => Some(Command::Fill { seed: pos, color }),
            Tool::Text => {
                // Only an explicit cancel discards; empty text still commits
                match prompt.request_text() {
                    Some(text) => {
                        let stroke = VectorStroke::text(text, pos, width, color);
                        Some(Command::AddStroke(Stroke::new_ref(stroke)))
                    }
                    None => {
                        log::debug!("Text input cancelled");
                        None
                    }
                }
            }
            _ => {
                let stroke = MutableStroke::begin(tool, brush, width, color, pos);
                self.state = EditorState::Drawing { stroke };
                None
            }
        }
    }

    pub fn on_pointer_move(&mut self, pos: Point) {
        if let Some(stroke) = self.state.transient_mut() {
            stroke.update(pos);
        }
    }

    pub fn on_pointer_up(&mut self, pos: Point) -> Option<Command> {
        let mut stroke = self.state.take_stroke()?;
        stroke.update(pos);
        Some(Command::AddStroke(stroke.finish()))
    }
}
