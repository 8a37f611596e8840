use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::brush::BrushStyle;
use crate::error::{PaintError, PaintResult};
use crate::tools::Tool;

/// Stroke widths offered by the shell
pub const WIDTH_PRESETS: [u32; 4] = [2, 4, 8, 16];

/// Quick-pick colors offered by the shell
pub const PALETTE: [Color32; 8] = [
    Color32::BLACK,
    Color32::RED,
    Color32::BLUE,
    Color32::GREEN,
    Color32::from_rgb(255, 200, 0),
    Color32::from_rgb(255, 0, 255),
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(255, 175, 175),
];

/// Settings copied into every new stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ToolSettings {
    pub tool: Tool,
    pub brush: BrushStyle,
    pub width: u32,
    pub color: Color32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            brush: BrushStyle::Round,
            width: 4,
            color: Color32::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color32,
    pub tools: ToolSettings,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color32::WHITE,
            tools: ToolSettings::default(),
        }
    }
}

impl CanvasConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> PaintResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> PaintResult<Self> {
        let path = path.as_ref();
        log::info!("Loading canvas config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> PaintResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PaintError::InvalidCanvasSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
