//! Convert RGBA samples to 8-bit luminance.
//! Y = 0.299*R + 0.587*G + 0.114*B
//! Uses fast integer arithmetic: Y = (76*R + 150*G + 29*B) >> 8
//! The alpha channel is ignored.

use crate::config;
use crate::models::PixelGrid;
use crate::models::pixel_grid::CHANNELS;
use rayon::prelude::*;

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

#[inline]
fn luma(px: &[u8]) -> u8 {
    let lum = (COEF_R * px[0] as u32 + COEF_G * px[1] as u32 + COEF_B * px[2] as u32) >> 8;
    lum.min(255) as u8
}

/// Convert an RGBA buffer to grayscale on the calling thread
pub fn rgba_to_grayscale(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    rgba[..pixel_count * CHANNELS]
        .chunks_exact(CHANNELS)
        .map(luma)
        .collect()
}

/// Convert an RGBA buffer to grayscale, processing rows in parallel
pub fn rgba_to_grayscale_parallel(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut gray = vec![0u8; width * height];
    if width == 0 {
        return gray;
    }

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * CHANNELS;
        let src = &rgba[row_start..row_start + width * CHANNELS];
        for (out, px) in row.iter_mut().zip(src.chunks_exact(CHANNELS)) {
            *out = luma(px);
        }
    });

    gray
}

/// Luminance plane for a grid, going parallel once the grid is large enough
pub fn grid_to_grayscale(grid: &PixelGrid) -> Vec<u8> {
    let (width, height) = (grid.width(), grid.height());
    if width * height >= config::parallel_min_pixels() {
        rgba_to_grayscale_parallel(grid.as_bytes(), width, height)
    } else {
        rgba_to_grayscale(grid.as_bytes(), width, height)
    }
}
