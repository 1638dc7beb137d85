//! I/O helpers for grayscale images, label grids and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_label_map`: write a `LabelMap` to a grayscale PNG with ids spread
//!   over distinct gray levels.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageU8, ImageView, LabelMap};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw bytes in row-major order
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Save a label grid to a grayscale PNG.
///
/// Background stays black; chain ids are spread over mid-to-bright gray
/// levels so neighboring ids remain distinguishable by eye.
pub fn save_label_map(labels: &LabelMap, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(labels.w as u32, labels.h as u32);
    for (y, row) in labels.rows().enumerate() {
        for (x, &id) in row.iter().enumerate() {
            let v = if id == 0 {
                0u8
            } else {
                55 + (id.wrapping_mul(73) % 200) as u8
            };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
