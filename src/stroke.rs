use egui::Color32;
use std::sync::Arc;

use crate::brush::BrushStyle;
use crate::geometry::{PixelRect, Point};
use crate::surface::Surface;
use crate::text;
use crate::tools::Tool;

/// Vector geometry for every tool except the bucket
#[derive(Debug, Clone, PartialEq)]
pub struct VectorStroke {
    tool: Tool,
    brush: BrushStyle,
    width: u32,
    color: Color32,
    points: Vec<Point>,
    text: Option<String>,
}

/// Pre-rendered patch produced by a flood fill, drawn at the origin
#[derive(Debug, Clone, PartialEq)]
pub struct RasterStroke {
    patch: Surface,
}

/// Immutable, committed drawing action
#[derive(Debug, Clone, PartialEq)]
pub enum Stroke {
    Vector(VectorStroke),
    Raster(RasterStroke),
}

// Shared handle; snapshots clone the handle, never the stroke
pub type StrokeRef = Arc<Stroke>;

impl VectorStroke {
    pub fn new(
        tool: Tool,
        brush: BrushStyle,
        width: u32,
        color: Color32,
        points: Vec<Point>,
    ) -> Self {
        Self {
            tool,
            brush,
            width: width.max(1),
            color,
            points,
            text: None,
        }
    }

    pub fn text(text: impl Into<String>, at: Point, width: u32, color: Color32) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(Tool::Text, BrushStyle::default(), width, color, vec![at])
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn brush(&self) -> BrushStyle {
        self.brush
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn render(&self, surface: &mut Surface, background: Color32) {
        let style = self.brush.resolve(self.width);
        let color = match self.tool {
            Tool::Eraser => background,
            _ => self.color,
        };

        match self.tool {
            Tool::Text => {
                if let (Some(text), Some(&at)) = (&self.text, self.points.first()) {
                    text::draw_text(surface, text, at, color);
                }
            }
            Tool::Rect | Tool::Oval | Tool::Line => {
                let &[start, end, ..] = self.points.as_slice() else {
                    return;
                };
                let bounds = PixelRect::from_corners(start, end);
                match self.tool {
                    Tool::Rect => surface.stroke_rect(bounds, color, &style),
                    Tool::Oval => surface.stroke_oval(bounds, color, &style),
                    _ => surface.stroke_line(start, end, color, &style),
                }
            }
            Tool::Pen | Tool::Eraser => {
                let offset = self.width as i32;
                for segment in self.points.windows(2) {
                    let (from, to) = (segment[0], segment[1]);
                    surface.stroke_line(from, to, color, &style);
                    match self.brush {
                        BrushStyle::Square => {
                            let half = offset / 2;
                            let nib = PixelRect {
                                x: to.x - half,
                                y: to.y - half,
                                width: self.width,
                                height: self.width,
                            };
                            surface.fill_rect(nib, color);
                        }
                        BrushStyle::Double => surface.stroke_line(
                            from.offset(offset, offset),
                            to.offset(offset, offset),
                            color,
                            &style,
                        ),
                        BrushStyle::Round | BrushStyle::Dashed => {}
                    }
                }
            }
            Tool::Bucket => {
                log::warn!("Vector stroke tagged as bucket fill, nothing to draw");
            }
        }
    }
}

impl RasterStroke {
    pub fn new(patch: Surface) -> Self {
        Self { patch }
    }

    pub fn patch(&self) -> &Surface {
        &self.patch
    }
}

impl Stroke {
    pub fn new_ref(stroke: impl Into<Stroke>) -> StrokeRef {
        Arc::new(stroke.into())
    }

    pub fn tool(&self) -> Tool {
        match self {
            Self::Vector(stroke) => stroke.tool(),
            Self::Raster(_) => Tool::Bucket,
        }
    }

    pub fn as_vector(&self) -> Option<&VectorStroke> {
        match self {
            Self::Vector(stroke) => Some(stroke),
            Self::Raster(_) => None,
        }
    }

    pub fn render(&self, surface: &mut Surface, background: Color32) {
        match self {
            Self::Vector(stroke) => stroke.render(surface, background),
            Self::Raster(stroke) => surface.blit(&stroke.patch),
        }
    }
}

impl From<VectorStroke> for Stroke {
    fn from(stroke: VectorStroke) -> Self {
        Self::Vector(stroke)
    }
}

impl From<RasterStroke> for Stroke {
    fn from(stroke: RasterStroke) -> Self {
        Self::Raster(stroke)
    }
}

/// The in-progress stroke built from live pointer input
#[derive(Debug, Clone)]
pub struct MutableStroke {
    inner: VectorStroke,
}

impl MutableStroke {
    /// Start a stroke at `start`: one seed point for freehand tools,
    /// two identical points for shapes
    pub fn begin(tool: Tool, brush: BrushStyle, width: u32, color: Color32, start: Point) -> Self {
        let points = if tool.is_shape() {
            vec![start, start]
        } else {
            vec![start]
        };
        Self {
            inner: VectorStroke::new(tool, brush, width, color, points),
        }
    }

    pub fn tool(&self) -> Tool {
        self.inner.tool
    }

    pub fn points(&self) -> &[Point] {
        &self.inner.points
    }

    /// Extend a freehand stroke, or move the end corner of a shape
    pub fn update(&mut self, point: Point) {
        if self.inner.tool.is_shape() {
            if let Some(end) = self.inner.points.get_mut(1) {
                *end = point;
            }
        } else {
            self.inner.points.push(point);
        }
    }

    pub fn render(&self, surface: &mut Surface, background: Color32) {
        self.inner.render(surface, background);
    }

    pub fn finish(self) -> StrokeRef {
        Stroke::new_ref(self.inner)
    }
}
