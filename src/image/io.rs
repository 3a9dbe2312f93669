//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned RGB grid. Gray and
//!   alpha inputs are converted to 3-channel RGB on the way in.
//! - `save_rgb_image`: write an `RgbImage`, format chosen by extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbImage;
use ::image::{ImageBuffer, Rgb};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    let img = ::image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbImage::from_raw(width, height, img.into_raw())
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Convert an `RgbImage` into the `image` crate's buffer type.
pub fn to_image_buffer(image: &RgbImage) -> Result<::image::RgbImage, String> {
    ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(
        image.w as u32,
        image.h as u32,
        image.clone().into_raw(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())
}

/// Save an RGB grid; the encoder is picked from the file extension.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    to_image_buffer(image)?
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_round_trip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("img.png");
        let img = RgbImage::from_raw(2, 2, (0u8..12).collect()).unwrap();
        save_rgb_image(&img, &path).unwrap();
        let loaded = load_rgb_image(&path).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn grayscale_input_is_normalized_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let gray = ::image::GrayImage::from_raw(3, 1, vec![10, 20, 30]).unwrap();
        gray.save(&path).unwrap();
        let loaded = load_rgb_image(&path).unwrap();
        assert_eq!(loaded.pixels(), &[[10; 3], [20; 3], [30; 3]]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_rgb_image(Path::new("does/not/exist.png")).unwrap_err();
        assert!(err.contains("does/not/exist.png"), "{err}");
    }
}
