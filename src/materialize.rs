//! Image materialization
//!
//! Loads an image source completely, then copies one rectangular region of
//! it into a [`PixelGrid`]. Samples are copied verbatim: no resampling,
//! filtering, or color conversion beyond normalizing the decoded image to
//! 8-bit RGBA.

use crate::error::{Result, ScanError};
use crate::models::pixel_grid::CHANNELS;
use crate::models::{PixelGrid, Region};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::RgbaImage;
use std::path::PathBuf;
use tracing::debug;

/// Where the image to scan comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Encoded image file contents (PNG, JPEG, ...)
    Bytes(Vec<u8>),
    /// Path to an image file
    Path(PathBuf),
    /// `data:image/...;base64,...` URL, or a bare base64 body
    DataUrl(String),
}

impl ImageSource {
    /// Decode the whole image into 8-bit RGBA.
    pub fn load(&self) -> Result<RgbaImage> {
        let image = match self {
            ImageSource::Bytes(bytes) => image::load_from_memory(bytes)?,
            ImageSource::Path(path) => image::open(path)?,
            ImageSource::DataUrl(url) => {
                let bytes = decode_data_url(url)?;
                image::load_from_memory(&bytes)?
            }
        };
        let rgba = image.to_rgba8();
        debug!(width = rgba.width(), height = rgba.height(), "image loaded");
        Ok(rgba)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

/// Strip an optional `data:...,` header and decode the base64 body.
fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let body = match url.split_once(',') {
        Some((_, body)) if !body.is_empty() => body,
        _ => url,
    };
    STANDARD
        .decode(body.trim())
        .map_err(|err| ScanError::ImageLoad(format!("invalid base64 image data: {err}")))
}

/// Load `source` and copy `region` out of it.
///
/// An empty region is rejected before the source is touched.
pub fn materialize(source: &ImageSource, region: Region) -> Result<PixelGrid> {
    if region.is_empty() {
        return Err(ScanError::EmptyRegion);
    }
    let image = source.load()?;
    materialize_image(&image, region)
}

/// Copy `region` out of an already decoded image.
pub fn materialize_image(image: &RgbaImage, region: Region) -> Result<PixelGrid> {
    if region.is_empty() {
        return Err(ScanError::EmptyRegion);
    }
    let (image_width, image_height) = image.dimensions();
    if !region.fits_within(image_width, image_height) {
        return Err(ScanError::RegionOutOfBounds {
            region,
            image_width,
            image_height,
        });
    }

    let src = image.as_raw();
    let src_stride = image_width as usize * CHANNELS;
    let row_len = region.width as usize * CHANNELS;
    let mut data = vec![0u8; region.area() * CHANNELS];

    // Copy pixel data row by row
    for (y, dst_row) in data.chunks_exact_mut(row_len).enumerate() {
        let src_start = (region.y as usize + y) * src_stride + region.x as usize * CHANNELS;
        dst_row.copy_from_slice(&src[src_start..src_start + row_len]);
    }

    PixelGrid::from_raw(region.width as usize, region.height as usize, data)
        .ok_or_else(|| ScanError::ImageLoad("region buffer size mismatch".to_string()))
}
