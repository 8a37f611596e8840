use eframe::egui::{self, TextureOptions};

use crate::canvas::Canvas;
use crate::error::PaintResult;
use crate::surface::Surface;

const CANVAS_TEXTURE: &str = "canvas";

/// Keeps the GPU texture showing the canvas in sync with the drawing model
pub struct Renderer {
    surface: Surface,
    texture: Option<egui::TextureHandle>,
    dirty: bool,
}

impl Renderer {
    pub fn new(canvas: &Canvas) -> PaintResult<Self> {
        Ok(Self {
            surface: canvas.new_surface()?,
            texture: None,
            dirty: true,
        })
    }

    /// Re-render on the next call to [`Renderer::texture`]
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The canvas texture, re-rendered and uploaded if anything changed
    pub fn texture(&mut self, ctx: &egui::Context, canvas: &Canvas) -> &egui::TextureHandle {
        if self.dirty {
            canvas.render(&mut self.surface);
            let image = self.surface.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    let texture = ctx.load_texture(CANVAS_TEXTURE, image, TextureOptions::NEAREST);
                    self.texture = Some(texture);
                }
            }
            self.dirty = false;
        }

        let surface = &self.surface;
        self.texture.get_or_insert_with(|| {
            ctx.load_texture(CANVAS_TEXTURE, surface.to_color_image(), TextureOptions::NEAREST)
        })
    }
}
