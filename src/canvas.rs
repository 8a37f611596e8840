use egui::Color32;

use crate::brush::BrushStyle;
use crate::command::Command;
use crate::config::{CanvasConfig, ToolSettings};
use crate::error::PaintResult;
use crate::flood_fill;
use crate::geometry::Point;
use crate::history::History;
use crate::input::InputEvent;
use crate::scene::Scene;
use crate::stroke::MutableStroke;
use crate::surface::Surface;
use crate::tools::{DrawStrokeTool, TextPrompt, Tool};

/// The drawing model behind the shell: settings, pointer handling,
/// history and rendering for one fixed-size canvas.
#[derive(Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Color32,
    history: History,
    tool: DrawStrokeTool,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> PaintResult<Self> {
        config.validate()?;
        // Fail early if the size cannot back a pixel buffer
        Surface::new(config.width, config.height)?;
        log::info!("Created {}x{} canvas", config.width, config.height);
        Ok(Self {
            width: config.width,
            height: config.height,
            background: config.background,
            history: History::new(),
            tool: DrawStrokeTool::new(config.tools),
        })
    }

    pub fn with_size(width: u32, height: u32) -> PaintResult<Self> {
        Self::new(CanvasConfig::with_size(width, height))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn scene(&self) -> &Scene {
        self.history.scene()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn settings(&self) -> &ToolSettings {
        self.tool.settings()
    }

    pub fn is_drawing(&self) -> bool {
        self.tool.is_drawing()
    }

    pub fn transient(&self) -> Option<&MutableStroke> {
        self.tool.transient()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool.set_tool(tool);
    }

    pub fn set_brush(&mut self, brush: BrushStyle) {
        self.tool.set_brush(brush);
    }

    pub fn set_width(&mut self, width: u32) {
        self.tool.set_width(width);
    }

    pub fn set_color(&mut self, color: Color32) {
        self.tool.set_color(color);
    }

    /// Returns whether the scene changed
    pub fn pointer_down(&mut self, pos: Point, prompt: &mut dyn TextPrompt) -> bool {
        match self.tool.on_pointer_down(pos, prompt) {
            Some(command) => self.execute(command),
            None => false,
        }
    }

    pub fn pointer_move(&mut self, pos: Point) {
        self.tool.on_pointer_move(pos);
    }

    /// Returns whether the scene changed
    pub fn pointer_up(&mut self, pos: Point) -> bool {
        match self.tool.on_pointer_up(pos) {
            Some(command) => self.execute(command),
            None => false,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent, prompt: &mut dyn TextPrompt) -> bool {
        match event {
            InputEvent::PointerDown(pos) => self.pointer_down(pos, prompt),
            InputEvent::PointerMove(pos) => {
                self.pointer_move(pos);
                false
            }
            InputEvent::PointerUp(pos) => self.pointer_up(pos),
            InputEvent::Undo => self.undo(),
            InputEvent::Redo => self.redo(),
        }
    }

    /// Apply `command`; returns whether the scene changed
    pub fn execute(&mut self, command: Command) -> bool {
        log::debug!("Executing {}", command.name());
        match command {
            Command::AddStroke(stroke) => {
                log::info!("Committed {} stroke", stroke.tool().name());
                self.history.commit(stroke);
                true
            }
            Command::Fill { seed, color } => self.fill(seed, color),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Clear => self.clear(),
        }
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn clear(&mut self) -> bool {
        self.history.clear()
    }

    pub fn fill(&mut self, seed: Point, color: Color32) -> bool {
        flood_fill::fill(
            &mut self.history,
            self.width,
            self.height,
            self.background,
            seed,
            color,
        )
    }

    /// A transparent surface matching the canvas size
    pub fn new_surface(&self) -> PaintResult<Surface> {
        Surface::new(self.width, self.height)
    }

    /// Draw background, committed strokes and the transient stroke
    pub fn render(&self, surface: &mut Surface) {
        self.scene()
            .render(surface, self.background, self.tool.transient());
    }

    /// The committed scene flattened to opaque RGB, without any transient stroke
    pub fn export_flattened(&self) -> PaintResult<image::RgbImage> {
        let mut surface = self.new_surface()?;
        self.scene().render(&mut surface, self.background, None);
        Ok(surface.to_rgb_image())
    }
}
