use crate::brush::BrushStyle;
use crate::canvas::Canvas;
use crate::command::Command;
use crate::config::{CanvasConfig, ToolSettings};
use crate::error::PaintResult;
use crate::file_handler;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::tools::Tool;

const SETTINGS_KEY: &str = "freehand_paint_settings";

/// What the shell remembers between runs.
/// We derive Deserialize/Serialize so we can persist it on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ShellState {
    tools: ToolSettings,
    text_input: String,
    export_path: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            tools: ToolSettings::default(),
            text_input: String::new(),
            export_path: "drawing.png".to_owned(),
        }
    }
}

pub struct PaintApp {
    canvas: Canvas,
    renderer: Renderer,
    input: InputHandler,
    shell: ShellState,
    status: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> PaintResult<Self> {
        let shell = cc
            .storage
            .and_then(|storage| eframe::get_value::<ShellState>(storage, SETTINGS_KEY))
            .unwrap_or_else(|| ShellState {
                tools: config.tools.clone(),
                ..Default::default()
            });

        let canvas = Canvas::new(CanvasConfig {
            tools: shell.tools.clone(),
            ..config
        })?;
        let renderer = Renderer::new(&canvas)?;

        Ok(Self {
            canvas,
            renderer,
            input: InputHandler::new(),
            shell,
            status: None,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_size(&self) -> [u32; 2] {
        [self.canvas.width(), self.canvas.height()]
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.canvas.set_tool(tool);
        self.shell.tools = self.canvas.settings().clone();
    }

    pub fn set_brush(&mut self, brush: BrushStyle) {
        self.canvas.set_brush(brush);
        self.shell.tools = self.canvas.settings().clone();
    }

    pub fn set_width(&mut self, width: u32) {
        self.canvas.set_width(width);
        self.shell.tools = self.canvas.settings().clone();
    }

    pub fn set_color(&mut self, color: egui::Color32) {
        self.canvas.set_color(color);
        self.shell.tools = self.canvas.settings().clone();
    }

    pub fn execute(&mut self, command: Command) {
        if self.canvas.execute(command) {
            self.renderer.invalidate();
        }
    }

    /// Feed this frame's pointer and shortcut input to the canvas
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let canvas_size = self.canvas_size();
        let events = self.input.process_input(ctx, canvas_rect, canvas_size);
        if events.is_empty() {
            return;
        }

        // The text tool places whatever is typed in the side panel; an empty field cancels
        let text = self.shell.text_input.clone();
        let mut prompt = move || (!text.is_empty()).then(|| text.clone());
        for event in events {
            self.canvas.handle_input(event, &mut prompt);
        }
        // Transient strokes change the picture without touching the scene
        self.renderer.invalidate();
    }

    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> &egui::TextureHandle {
        self.renderer.texture(ctx, &self.canvas)
    }

    pub fn text_input_mut(&mut self) -> &mut String {
        &mut self.shell.text_input
    }

    pub fn export_path_mut(&mut self) -> &mut String {
        &mut self.shell.export_path
    }

    pub fn save_image(&mut self) {
        let message = match file_handler::export_canvas(&self.canvas, &self.shell.export_path) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Failed to save image: {err}");
                format!("Save failed: {err}")
            }
        };
        self.status = Some(message);
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.shell);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
