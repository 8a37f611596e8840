//! Brush styles and the cap/join/dash parameters they resolve to.

use serde::{Deserialize, Serialize};

/// Length of each dash and each gap for [`BrushStyle::Dashed`], in pixels
pub const DASH_LENGTH: f32 = 10.0;

pub const MITER_LIMIT: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrushStyle {
    #[default]
    Round,
    Square,
    Dashed,
    /// Round nib drawn twice, the copy offset by the stroke width
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
}

/// Concrete parameters for stroking a path
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    /// On/off lengths, `None` for a solid line
    pub dash: Option<[f32; 2]>,
}

impl BrushStyle {
    pub const ALL: [BrushStyle; 4] = [Self::Round, Self::Square, Self::Dashed, Self::Double];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Round => "Round",
            Self::Square => "Square",
            Self::Dashed => "Dashed",
            Self::Double => "Double",
        }
    }

    pub fn resolve(self, width: u32) -> StrokeStyle {
        let width = width as f32;
        match self {
            Self::Round | Self::Double => StrokeStyle {
                width,
                cap: LineCap::Round,
                join: LineJoin::Round,
                dash: None,
            },
            Self::Square => StrokeStyle {
                width,
                cap: LineCap::Square,
                join: LineJoin::Miter,
                dash: None,
            },
            Self::Dashed => StrokeStyle {
                width,
                cap: LineCap::Butt,
                join: LineJoin::Miter,
                dash: Some([DASH_LENGTH, DASH_LENGTH]),
            },
        }
    }
}

impl StrokeStyle {
    pub fn to_skia(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.width,
            miter_limit: MITER_LIMIT,
            line_cap: match self.cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Round => tiny_skia::LineCap::Round,
                LineCap::Square => tiny_skia::LineCap::Square,
            },
            line_join: match self.join {
                LineJoin::Miter => tiny_skia::LineJoin::Miter,
                LineJoin::Round => tiny_skia::LineJoin::Round,
            },
            dash: self
                .dash
                .and_then(|intervals| tiny_skia::StrokeDash::new(intervals.to_vec(), 0.0)),
        }
    }
}
