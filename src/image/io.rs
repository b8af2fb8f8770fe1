//! I/O helpers for grayscale images, RGB overlays and JSON reports.
//!
//! - `load_luminance`: read a PNG/JPEG/etc. into an owned `GrayF32` (0..255).
//! - `save_luminance_png`: write a `GrayF32` to a grayscale PNG.
//! - `RgbCanvas` + `save_rgb_png`: a small overlay buffer for visualization.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::GrayF32;
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to grayscale and into 0..255 luminance.
pub fn load_luminance(path: &Path) -> Result<GrayF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let data = img.into_raw().into_iter().map(|v| v as f32).collect();
    Ok(GrayF32::from_vec(w, h, data))
}

/// Save a luminance buffer to a grayscale PNG, clamping values to [0, 255].
pub fn save_luminance_png(image: &GrayF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = px.clamp(0.0, 255.0).round() as u8;
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Owned RGB drawing surface used by the demo to overlay detections.
#[derive(Clone, Debug)]
pub struct RgbCanvas {
    pub w: usize,
    pub h: usize,
    /// Interleaved RGB, `3 * w * h` bytes
    pub data: Vec<u8>,
}

impl RgbCanvas {
    /// Replicate a luminance buffer into all three channels.
    pub fn from_luminance(image: &GrayF32) -> Self {
        let mut data = Vec::with_capacity(3 * image.w * image.h);
        for &px in &image.data {
            let v = px.clamp(0.0, 255.0).round() as u8;
            data.extend_from_slice(&[v, v, v]);
        }
        Self {
            w: image.w,
            h: image.h,
            data,
        }
    }

    #[inline]
    /// Set a pixel; coordinates outside the canvas are ignored.
    pub fn plot(&mut self, x: i32, y: i32, color: [u8; 3]) {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return;
        }
        let i = 3 * (y as usize * self.w + x as usize);
        self.data[i..i + 3].copy_from_slice(&color);
    }
}

/// Save an RGB canvas to a PNG.
pub fn save_rgb_png(canvas: &RgbCanvas, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(canvas.w as u32, canvas.h as u32);
    for y in 0..canvas.h {
        for x in 0..canvas.w {
            let i = 3 * (y * canvas.w + x);
            out.put_pixel(
                x as u32,
                y as u32,
                Rgb([canvas.data[i], canvas.data[i + 1], canvas.data[i + 2]]),
            );
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_plot_ignores_out_of_range() {
        let img = GrayF32::new(4, 3);
        let mut canvas = RgbCanvas::from_luminance(&img);
        canvas.plot(-1, 0, [255, 0, 0]);
        canvas.plot(0, 3, [255, 0, 0]);
        canvas.plot(1, 1, [0, 255, 0]);
        assert_eq!(&canvas.data[3 * (4 + 1)..3 * (4 + 1) + 3], &[0, 255, 0]);
        assert!(canvas.data.iter().step_by(3).all(|&r| r != 255));
    }
}
