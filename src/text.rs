use std::sync::OnceLock;

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use egui::Color32;

use crate::geometry::{PixelRect, Point};
use crate::surface::Surface;

/// Pixel height of text strokes
pub const FONT_SIZE: f32 = 20.0;

/// Glyph coverage at or above which a pixel is painted solid
const COVERAGE_THRESHOLD: f32 = 0.5;

static FONT: OnceLock<Option<FontVec>> = OnceLock::new();

/// The proportional face bundled with egui, parsed once
fn default_font() -> Option<&'static FontVec> {
    FONT.get_or_init(|| {
        let definitions = egui::FontDefinitions::default();
        let name = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .and_then(|names| names.first())?;
        let data = definitions.font_data.get(name)?;
        match FontVec::try_from_vec_and_index(data.font.to_vec(), data.index) {
            Ok(font) => Some(font),
            Err(err) => {
                log::error!("Failed to parse bundled font {name}: {err}");
                None
            }
        }
    })
    .as_ref()
}

/// Draw `text` with its baseline starting at `origin`
pub fn draw_text(surface: &mut Surface, text: &str, origin: Point, color: Color32) {
    let Some(font) = default_font() else {
        log::warn!("No font available, skipping text {text:?}");
        return;
    };
    let scale = PxScale::from(FONT_SIZE);
    let scaled = font.as_scaled(scale);
    let baseline = origin.y as f32;
    let mut caret = origin.x as f32;
    let mut last_glyph: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = last_glyph {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        last_glyph = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            if coverage >= COVERAGE_THRESHOLD {
                let pixel = PixelRect {
                    x: bounds.min.x as i32 + gx as i32,
                    y: bounds.min.y as i32 + gy as i32,
                    width: 1,
                    height: 1,
                };
                surface.fill_rect(pixel, color);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted_in(surface: &Surface, xs: std::ops::Range<i32>, ys: std::ops::Range<i32>) -> usize {
        ys.flat_map(|y| xs.clone().map(move |x| Point::new(x, y)))
            .filter(|p| surface.pixel(*p) == Some(Color32::BLACK))
            .count()
    }

    #[test]
    fn test_text_sits_above_baseline() {
        let mut surface = Surface::filled(120, 60, Color32::WHITE).unwrap();
        draw_text(&mut surface, "Hi", Point::new(10, 40), Color32::BLACK);

        assert!(painted_in(&surface, 10..60, 20..40) > 0);
        // nothing below the baseline for these glyphs
        assert_eq!(painted_in(&surface, 0..120, 42..60), 0);
    }

    #[test]
    fn test_text_is_solid_colored() {
        let mut surface = Surface::filled(80, 40, Color32::WHITE).unwrap();
        draw_text(&mut surface, "W", Point::new(5, 30), Color32::RED);

        for y in 0..40 {
            for x in 0..80 {
                let pixel = surface.pixel(Point::new(x, y)).unwrap();
                assert!(pixel == Color32::WHITE || pixel == Color32::RED);
            }
        }
    }
}
