//! CPU-side RGBA bitmap — the drawing surface icons are rasterized into.
//!
//! Pixels are stored row-major, 4 bytes per pixel, non-premultiplied.
//! Drawing is clipped to the surface; blending is plain source-over.

use crate::color::Color;

/// Largest edge length a surface may have, in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Offscreen RGBA8 surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    /// RGBA pixel data (width * height * 4 bytes).
    data: Vec<u8>,
}

impl Bitmap {
    /// Allocate a fully transparent surface.
    ///
    /// Returns `None` for empty surfaces or edges above [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return None;
        }
        let len = (width as usize) * (height as usize) * 4;
        Some(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixels as `[r, g, b, a]` quads.
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, a] = self.pixels()[(y * self.width + x) as usize];
        Some(Color::rgba(r, g, b, a))
    }

    /// True when no pixel has any coverage.
    pub fn is_blank(&self) -> bool {
        self.pixels().iter().all(|p| p[3] == 0)
    }

    /// Number of pixels with non-zero alpha.
    pub fn covered_pixels(&self) -> usize {
        self.pixels().iter().filter(|p| p[3] != 0).count()
    }

    /// Blend `color` over the pixel at (`x`, `y`). Out-of-bounds writes
    /// are dropped.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height || color.a == 0 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        let dst = &mut self.data[idx..idx + 4];

        let src_a = color.a as u32;
        if src_a == 255 {
            dst.copy_from_slice(&color.to_array());
            return;
        }

        let dst_a = dst[3] as u32;
        // out_a = src_a + dst_a * (1 - src_a), in 0..=255 fixed point.
        let out_a = src_a + dst_a * (255 - src_a) / 255;
        if out_a == 0 {
            return;
        }
        let src = color.to_array();
        for c in 0..3 {
            let s = src[c] as u32 * src_a;
            let d = dst[c] as u32 * dst_a * (255 - src_a) / 255;
            dst[c] = ((s + d) / out_a).min(255) as u8;
        }
        dst[3] = out_a as u8;
    }

    /// Blend a solid rectangle, clipped to the surface.
    pub fn blend_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.blend_pixel(x + dx, y + dy, color);
            }
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
