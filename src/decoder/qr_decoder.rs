use crate::config;
use crate::decoder::SymbolDecoder;
use crate::models::{PixelGrid, RawPayload};
use crate::utils::grayscale::grid_to_grayscale;
use rqrr::PreparedImage;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// QR decoder for a single still frame
#[derive(Debug, Clone, Copy)]
pub struct QrDecoder {
    max_candidates: usize,
}

impl QrDecoder {
    /// Decoder using the configured candidate limit
    pub fn new() -> Self {
        Self {
            max_candidates: config::max_symbol_candidates(),
        }
    }

    /// Decoder that tries at most `max_candidates` detected symbols (at least one)
    pub fn with_max_candidates(max_candidates: usize) -> Self {
        Self {
            max_candidates: max_candidates.max(1),
        }
    }

    /// Decode from a pre-computed luminance plane.
    ///
    /// Dark-on-light symbols are tried first. If none of the candidates
    /// decodes, the plane is inverted and searched again, so light-on-dark
    /// symbols are found too.
    pub fn decode_grayscale(&self, gray: &[u8], width: usize, height: usize) -> Option<RawPayload> {
        if width == 0 || height == 0 || gray.len() < width * height {
            return None;
        }

        if let Some(payload) = self.decode_plane(width, height, |x, y| gray[y * width + x], false) {
            return Some(payload);
        }

        debug!("retrying with inverted luminance");
        self.decode_plane(width, height, |x, y| 255 - gray[y * width + x], true)
    }

    fn decode_plane<F>(&self, width: usize, height: usize, luma: F, inverted: bool) -> Option<RawPayload>
    where
        F: FnMut(usize, usize) -> u8,
    {
        let mut prepared = PreparedImage::prepare_from_greyscale(width, height, luma);
        let grids = prepared.detect_grids();
        debug!(candidates = grids.len(), inverted, "symbol candidates located");

        for (idx, grid) in grids.iter().take(self.max_candidates).enumerate() {
            match grid.decode() {
                Ok((meta, content)) => {
                    debug!(
                        candidate = idx,
                        inverted,
                        version = meta.version.0,
                        ecc_level = meta.ecc_level,
                        "symbol decoded"
                    );
                    return Some(RawPayload::from(content));
                }
                Err(err) => debug!(candidate = idx, error = ?err, "symbol failed to decode"),
            }
        }

        None
    }
}

impl Default for QrDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolDecoder for QrDecoder {
    fn decode(&self, grid: &PixelGrid) -> Option<RawPayload> {
        let gray = grid_to_grayscale(grid);
        let (width, height) = (grid.width(), grid.height());

        panic::catch_unwind(AssertUnwindSafe(|| self.decode_grayscale(&gray, width, height)))
            .unwrap_or_else(|_| {
                warn!(width, height, "symbol decoder panicked, treating grid as empty");
                None
            })
    }
}
