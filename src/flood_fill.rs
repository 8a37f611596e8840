//! Bucket fill: flatten the scene, grow a region from a seed pixel, and
//! commit the recolored raster back as a stroke.

use egui::Color32;
use std::collections::VecDeque;

use crate::geometry::Point;
use crate::history::History;
use crate::scene::Scene;
use crate::stroke::{RasterStroke, Stroke, StrokeRef};
use crate::surface::{Surface, premultiplied};

/// Recolor the 4-connected region of pixels matching the seed's color.
///
/// Returns the number of pixels recolored; zero when the seed is out of
/// bounds or already has the fill color. Fill colors are made opaque.
pub fn flood_fill(surface: &mut Surface, seed: Point, color: Color32) -> usize {
    let Some(start) = surface.index_of(seed) else {
        return 0;
    };
    let width = surface.width() as usize;
    let height = surface.height() as usize;
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    let new = premultiplied(Color32::from_rgb(r, g, b));

    let pixels = surface.pixels_mut();
    let old = pixels[start];
    if old == new {
        return 0;
    }

    // Pixels are recolored as they are queued, so each enters the queue once
    let mut queue = VecDeque::new();
    pixels[start] = new;
    queue.push_back(start);
    let mut filled = 1;

    while let Some(index) = queue.pop_front() {
        let (x, y) = (index % width, index / width);
        let neighbors = [
            (x + 1 < width).then(|| index + 1),
            (x > 0).then(|| index - 1),
            (y + 1 < height).then(|| index + width),
            (y > 0).then(|| index - width),
        ];
        for next in neighbors.into_iter().flatten() {
            if pixels[next] == old {
                pixels[next] = new;
                filled += 1;
                queue.push_back(next);
            }
        }
    }

    filled
}

/// Flatten `scene` onto a fresh canvas-sized surface and fill from `seed`.
///
/// Returns the recolored raster as a stroke, or `None` when nothing changed.
pub fn fill_scene(
    scene: &Scene,
    width: u32,
    height: u32,
    background: Color32,
    seed: Point,
    color: Color32,
) -> Option<StrokeRef> {
    let mut surface = match Surface::new(width, height) {
        Ok(surface) => surface,
        Err(err) => {
            log::error!("Cannot rasterize scene for fill: {err}");
            return None;
        }
    };
    scene.render(&mut surface, background, None);

    let filled = flood_fill(&mut surface, seed, color);
    if filled == 0 {
        log::debug!("Fill at ({}, {}) changed nothing", seed.x, seed.y);
        return None;
    }
    log::info!("Filled {filled} pixels from ({}, {})", seed.x, seed.y);
    Some(Stroke::new_ref(RasterStroke::new(surface)))
}

/// Fill and commit the result through `history`. Returns whether a stroke was committed.
pub fn fill(
    history: &mut History,
    width: u32,
    height: u32,
    background: Color32,
    seed: Point,
    color: Color32,
) -> bool {
    match fill_scene(history.scene(), width, height, background, seed, color) {
        Some(stroke) => {
            history.commit(stroke);
            true
        }
        None => false,
    }
}
