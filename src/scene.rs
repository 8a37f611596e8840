use egui::Color32;

use crate::stroke::{MutableStroke, StrokeRef};
use crate::surface::Surface;

/// Ordered sequence of committed strokes, replayed in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    strokes: Vec<StrokeRef>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stroke(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Paint the background, every committed stroke, then the transient stroke
    pub fn render(
        &self,
        surface: &mut Surface,
        background: Color32,
        transient: Option<&MutableStroke>,
    ) {
        surface.fill(background);
        for stroke in &self.strokes {
            stroke.render(surface, background);
        }
        if let Some(stroke) = transient {
            stroke.render(surface, background);
        }
    }
}
