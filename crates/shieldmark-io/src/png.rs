use std::path::Path;

use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use shieldmark_raster::Surface;

#[derive(Error, Debug)]
pub enum PngError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("surface dimensions {width}x{height} do not match the pixel data")]
    DimensionMismatch { width: u32, height: u32 },
}

/// Write a surface to `path` as RGBA8 PNG.
pub fn write_surface(path: &Path, surface: &Surface) -> Result<(), PngError> {
    let (width, height) = (surface.width(), surface.height());
    let img = RgbaImage::from_raw(width, height, surface.data().to_vec())
        .ok_or(PngError::DimensionMismatch { width, height })?;
    img.save_with_format(path, ImageFormat::Png)?;
    log::info!("wrote {}x{} PNG to {}", width, height, path.display());
    Ok(())
}

/// Read a PNG from `path` into a surface, converting to RGBA8 if needed.
pub fn read_surface(path: &Path) -> Result<Surface, PngError> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    let surface = Surface::from_raw(width, height, img.into_raw())
        .ok_or(PngError::DimensionMismatch { width, height })?;
    log::debug!("read {}x{} PNG from {}", width, height, path.display());
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shieldmark_core::Rgba;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("shieldmark-png-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_png_round_trip() {
        let mut surface = Surface::new(3, 2);
        surface.put_pixel(0, 0, Rgba::rgb(228, 77, 38));
        surface.put_pixel(2, 1, Rgba::rgba(10, 20, 30, 40));

        let path = temp_path("round-trip.png");
        write_surface(&path, &surface).unwrap();
        let loaded = read_surface(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, surface);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_surface(Path::new("/nonexistent/missing.png"));
        assert!(err.is_err());
    }
}
