//! Offscreen RGBA pixel buffer that every render pass targets.

use egui::Color32;
use tiny_skia::{
    ColorU8, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8, Transform,
};

use crate::brush::StrokeStyle;
use crate::error::{PaintError, PaintResult};
use crate::geometry::{PixelRect, Point};

/// A pixel buffer backed by a tiny-skia [`Pixmap`].
///
/// All drawing is done without anti-aliasing so that flood fill can rely on
/// exact color equality.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl PartialEq for Surface {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.pixmap.data() == other.pixmap.data()
    }
}

/// Convert an egui color into a premultiplied pixel value
pub(crate) fn premultiplied(color: Color32) -> PremultipliedColorU8 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    ColorU8::from_rgba(r, g, b, a).premultiply()
}

fn paint_for(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;
    paint
}

impl Surface {
    /// Allocate a transparent surface
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(PaintError::InvalidCanvasSize { width, height })?;
        Ok(Self { pixmap })
    }

    /// Allocate a surface filled with `color`
    pub fn filled(width: u32, height: u32, color: Color32) -> PaintResult<Self> {
        let mut surface = Self::new(width, height)?;
        surface.fill(color);
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width()
            && (point.y as u32) < self.height()
    }

    /// Index of `point` in the flat pixel arena, if in bounds
    pub(crate) fn index_of(&self, point: Point) -> Option<usize> {
        self.contains(point)
            .then(|| point.y as usize * self.width() as usize + point.x as usize)
    }

    pub fn fill(&mut self, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    pub fn pixel(&self, point: Point) -> Option<Color32> {
        let index = self.index_of(point)?;
        let p = self.pixmap.pixels()[index];
        Some(Color32::from_rgba_premultiplied(p.red(), p.green(), p.blue(), p.alpha()))
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [PremultipliedColorU8] {
        self.pixmap.pixels_mut()
    }

    /// Stroke a single segment; endpoints address pixel centers
    pub fn stroke_line(&mut self, from: Point, to: Point, color: Color32, style: &StrokeStyle) {
        let (x0, y0) = from.center();
        let (x1, y1) = to.center();
        let mut pb = PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint_for(color),
                &style.to_skia(),
                Transform::identity(),
                None,
            );
        }
    }

    pub fn stroke_rect(&mut self, rect: PixelRect, color: Color32, style: &StrokeStyle) {
        let (x, y) = Point::new(rect.x, rect.y).center();
        let bounds = tiny_skia::Rect::from_xywh(x, y, rect.width as f32, rect.height as f32);
        if let Some(bounds) = bounds {
            let path = PathBuilder::from_rect(bounds);
            self.pixmap.stroke_path(
                &path,
                &paint_for(color),
                &style.to_skia(),
                Transform::identity(),
                None,
            );
        }
    }

    /// Stroke the ellipse inscribed in `rect`
    pub fn stroke_oval(&mut self, rect: PixelRect, color: Color32, style: &StrokeStyle) {
        let (x, y) = Point::new(rect.x, rect.y).center();
        let path = tiny_skia::Rect::from_xywh(x, y, rect.width as f32, rect.height as f32)
            .and_then(PathBuilder::from_oval);
        if let Some(path) = path {
            self.pixmap.stroke_path(
                &path,
                &paint_for(color),
                &style.to_skia(),
                Transform::identity(),
                None,
            );
        }
    }

    /// Fill whole pixels covered by `rect`
    pub fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        if rect.is_empty() {
            return;
        }
        if let Some(bounds) = tiny_skia::Rect::from_xywh(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        ) {
            let path = PathBuilder::from_rect(bounds);
            self.pixmap.fill_path(
                &path,
                &paint_for(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Copy `patch` onto this surface at the origin, unscaled
    pub fn blit(&mut self, patch: &Surface) {
        self.pixmap.draw_pixmap(
            0,
            0,
            patch.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_premultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixmap.data(),
        )
    }

    /// Flatten to an opaque RGB raster
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let width = self.width();
        let pixels = self.pixmap.pixels();
        image::RgbImage::from_fn(width, self.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            image::Rgb([c.red(), c.green(), c.blue()])
        })
    }
}
