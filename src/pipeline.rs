//! Scan pipeline: materialize → decode → parse
//!
//! Every stage failure is mapped to a [`FailureReason`]; nothing is retried
//! and nothing escapes as an error or a panic.

use crate::decoder::{QrDecoder, SymbolDecoder};
use crate::error::{Result, ScanError};
use crate::materialize::{ImageSource, materialize};
use crate::models::{CredentialRecord, ExtractionResult, FailureReason, PixelGrid, Region};
use crate::parser::parse_wifi_payload;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Something that can pull WiFi credentials out of an image region
pub trait Extractor {
    /// Run one extraction attempt
    fn extract(&self, source: &ImageSource, region: Region) -> ExtractionResult;
}

/// Extraction through the local decode pipeline
#[derive(Debug, Clone, Default)]
pub struct LocalExtractor<D = QrDecoder> {
    decoder: D,
}

impl LocalExtractor<QrDecoder> {
    /// Local extractor with the default QR decoder
    pub fn new() -> Self {
        Self::with_decoder(QrDecoder::new())
    }
}

impl<D: SymbolDecoder> LocalExtractor<D> {
    /// Local extractor around a specific decoder
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// The decoder in use
    pub fn decoder(&self) -> &D {
        &self.decoder
    }
}

impl<D: SymbolDecoder> Extractor for LocalExtractor<D> {
    fn extract(&self, source: &ImageSource, region: Region) -> ExtractionResult {
        scan_with(&self.decoder, source, region)
    }
}

/// Scan `region` of `source` with the default QR decoder
pub fn scan(source: &ImageSource, region: Region) -> ExtractionResult {
    scan_with(&QrDecoder::new(), source, region)
}

/// Scan `region` of `source` with a specific decoder
pub fn scan_with<D: SymbolDecoder>(
    decoder: &D,
    source: &ImageSource,
    region: Region,
) -> ExtractionResult {
    let outcome = materialize_guarded(source, region)
        .and_then(|grid| decode_and_parse(decoder, &grid));

    match outcome {
        Ok(record) => ExtractionResult::success(record),
        Err(err) => {
            warn!(error = %err, ?region, "scan failed");
            ExtractionResult::failure(FailureReason::from(&err))
        }
    }
}

/// Decode and parse an already materialized grid
pub fn scan_grid<D: SymbolDecoder>(decoder: &D, grid: &PixelGrid) -> ExtractionResult {
    match decode_and_parse(decoder, grid) {
        Ok(record) => ExtractionResult::success(record),
        Err(err) => {
            warn!(error = %err, "scan failed");
            ExtractionResult::failure(FailureReason::from(&err))
        }
    }
}

/// Materialize, turning a panic in the image primitives into a load error.
pub(crate) fn materialize_guarded(source: &ImageSource, region: Region) -> Result<PixelGrid> {
    panic::catch_unwind(AssertUnwindSafe(|| materialize(source, region))).unwrap_or_else(|_| {
        Err(ScanError::ImageLoad(
            "image decoder panicked while loading the source".to_string(),
        ))
    })
}

fn decode_and_parse<D: SymbolDecoder>(decoder: &D, grid: &PixelGrid) -> Result<CredentialRecord> {
    let payload = decoder.decode(grid).ok_or(ScanError::NotFound)?;
    debug!(payload_len = payload.as_str().len(), "QR code detected");
    Ok(parse_wifi_payload(payload.as_str())?)
}
