use egui::Pos2;
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Center of this pixel in continuous coordinates
    pub fn center(self) -> (f32, f32) {
        (self.x as f32 + 0.5, self.y as f32 + 0.5)
    }

    /// Snap a continuous position to the pixel containing it
    pub fn from_pos2(pos: Pos2) -> Self {
        Self::new(pos.x.floor() as i32, pos.y.floor() as i32)
    }
}

/// Axis-aligned rectangle normalized from two drag corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// `x=min, y=min, w=|dx|, h=|dy|`. Identical corners give a zero-size rect.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
