//! Matrix symbol decoding
//!
//! A [`SymbolDecoder`] turns one still [`PixelGrid`] into the text of the
//! first QR symbol it can locate and error-correct. Failing to find one is a
//! normal outcome and is reported as `None`.

use crate::models::{PixelGrid, RawPayload};

/// QR decoder backed by `rqrr`
pub mod qr_decoder;

pub use qr_decoder::QrDecoder;

/// Locates and decodes a 2D matrix symbol in a pixel grid
pub trait SymbolDecoder {
    /// Decode the first readable symbol in `grid`, or `None` if there is none
    fn decode(&self, grid: &PixelGrid) -> Option<RawPayload>;
}

impl<D: SymbolDecoder + ?Sized> SymbolDecoder for &D {
    fn decode(&self, grid: &PixelGrid) -> Option<RawPayload> {
        (**self).decode(grid)
    }
}
