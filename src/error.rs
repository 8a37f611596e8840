use thiserror::Error;

/// Errors raised at the edges of the drawing model: canvas allocation,
/// configuration loading and image export.
///
/// Drawing operations themselves never fail; they degrade to no-ops.
#[derive(Debug, Error)]
pub enum PaintError {
    /// The requested canvas cannot back a pixel buffer (zero or too large)
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("Failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for fallible paint operations
pub type PaintResult<T> = Result<T, PaintError>;
