#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod flood_fill;
pub mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod text;
pub mod tools;

pub use app::PaintApp;
pub use brush::{BrushStyle, StrokeStyle};
pub use canvas::Canvas;
pub use command::Command;
pub use config::{CanvasConfig, ToolSettings};
pub use error::{PaintError, PaintResult};
pub use geometry::Point;
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use scene::Scene;
pub use state::EditorState;
pub use stroke::{MutableStroke, RasterStroke, Stroke, StrokeRef, VectorStroke};
pub use surface::Surface;
pub use tools::{DrawStrokeTool, TextPrompt, Tool};
