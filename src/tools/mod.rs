use serde::{Deserialize, Serialize};

/// Drawing tools available on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
    Text,
    Rect,
    Oval,
    Line,
    /// Flood fill
    Bucket,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Self::Pen,
        Self::Eraser,
        Self::Text,
        Self::Rect,
        Self::Oval,
        Self::Line,
        Self::Bucket,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
            Self::Text => "Text",
            Self::Rect => "Rect",
            Self::Oval => "Oval",
            Self::Line => "Line",
            Self::Bucket => "Bucket",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pen => "✏",
            Self::Eraser => "⌫",
            Self::Text => "T",
            Self::Rect => "▭",
            Self::Oval => "◯",
            Self::Line => "╱",
            Self::Bucket => "🪣",
        }
    }

    /// Two-point tools whose second point follows the drag
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Rect | Self::Oval | Self::Line)
    }
}

/// Synchronous source of text for the Text tool.
///
/// Returning `None` cancels the pending text stroke.
pub trait TextPrompt {
    fn request_text(&mut self) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: FnMut() -> Option<String>,
{
    fn request_text(&mut self) -> Option<String> {
        self()
    }
}

// Tool implementations
mod draw_stroke_tool;
pub use draw_stroke_tool::DrawStrokeTool;
