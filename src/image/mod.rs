//! Single-channel luminance buffers used throughout the pipeline.
//!
//! The core works on row-major `f32` luminance, conventionally in 0..255 but
//! never clamped. Out-of-range addressing replicates the nearest edge pixel
//! (Neumann boundary), which the pyramid Laplacian and the decimation step
//! rely on.

pub mod io;

/// Owned single-channel f32 image in row-major layout.
#[derive(Clone, Debug)]
pub struct GrayF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage, `w * h` elements in row-major order
    pub data: Vec<f32>,
}

impl GrayF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), w * h, "buffer size does not match dimensions");
        Self { w, h, data }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    /// Get the pixel at (x, y) with replicate (clamp-to-edge) addressing.
    ///
    /// Returns 0 for an empty image.
    pub fn get_clamped(&self, x: i64, y: i64) -> f32 {
        if self.w == 0 || self.h == 0 {
            return 0.0;
        }
        let xc = x.clamp(0, self.w as i64 - 1) as usize;
        let yc = y.clamp(0, self.h as i64 - 1) as usize;
        self.data[yc * self.w + xc]
    }

    #[inline]
    /// Borrow row `y` as a slice.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    #[inline]
    /// Borrow row `y` mutably.
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

/// Borrowed 8-bit grayscale view, as handed in by acquisition code.
#[derive(Clone, Debug)]
pub struct GrayU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows (>= `w`)
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> GrayU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Convert to an owned luminance buffer. Values stay in 0..255 — the
    /// detector thresholds are calibrated against raw intensities.
    pub fn to_luminance(&self) -> GrayF32 {
        let mut out = GrayF32::new(self.w, self.h);
        for y in 0..self.h {
            let start = y * self.stride;
            let src = &self.data[start..start + self.w];
            let dst = out.row_mut(y);
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = s as f32;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_access_replicates_edges() {
        let img = GrayF32::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(img.get_clamped(-5, 0), 1.0);
        assert_eq!(img.get_clamped(7, 0), 2.0);
        assert_eq!(img.get_clamped(0, 9), 3.0);
        assert_eq!(img.get_clamped(3, 3), 4.0);
    }

    #[test]
    fn u8_view_respects_stride() {
        let data = [10u8, 20, 99, 30, 40, 99];
        let view = GrayU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let lum = view.to_luminance();
        assert_eq!(lum.get(0, 0), 10.0);
        assert_eq!(lum.get(1, 1), 40.0);
    }
}
