use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::error::PaintResult;

/// `path` with `.png` appended unless its file name already ends in it
pub fn png_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let has_png = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".png"))
        .unwrap_or(false);
    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}

/// Write `image` as a PNG, returning the path actually written
pub fn save_png(image: &image::RgbImage, path: impl AsRef<Path>) -> PaintResult<PathBuf> {
    let path = png_path(path);
    image.save_with_format(&path, image::ImageFormat::Png)?;
    log::info!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(path)
}

/// Flatten the committed scene and save it as a PNG
pub fn export_canvas(canvas: &Canvas, path: impl AsRef<Path>) -> PaintResult<PathBuf> {
    let image = canvas.export_flattened()?;
    save_png(&image, path)
}
