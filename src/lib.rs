//! wifi_qr - WiFi credentials from a QR code in an image region
//!
//! Copies a selected rectangle out of an image, decodes the QR symbol in it,
//! and parses the `WIFI:` payload into a [`CredentialRecord`]. Every failure
//! comes back as an [`ExtractionResult::Failure`] with a user-facing reason.
//!
//! # Example
//! ```no_run
//! use wifi_qr::{ImageSource, Region, scan};
//!
//! let source = ImageSource::Path("router-sticker.jpg".into());
//! match scan(&source, Region::new(120, 80, 400, 400)).into_result() {
//!     Ok(record) => println!("{} / {}", record.ssid, record.password),
//!     Err(reason) => eprintln!("{reason}"),
//! }
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod config;
/// Matrix symbol decoding (QR)
pub mod decoder;
/// Error types for each pipeline stage
pub mod error;
/// Image loading and region copy
pub mod materialize;
/// Core data structures (Region, PixelGrid, CredentialRecord, ...)
pub mod models;
/// `WIFI:` payload parser
pub mod parser;
/// Materialize → decode → parse orchestration
pub mod pipeline;
/// Hosted vision-model extraction path
pub mod remote;
/// Utility functions (grayscale)
pub mod utils;

pub use decoder::{QrDecoder, SymbolDecoder};
pub use error::{ParseError, ScanError};
pub use materialize::{ImageSource, materialize, materialize_image};
pub use models::{
    CredentialRecord, ExtractionResult, FailureReason, PixelGrid, RawPayload, Region,
};
pub use parser::parse_wifi_payload;
pub use pipeline::{Extractor, LocalExtractor, scan, scan_grid, scan_with};
pub use remote::{RemoteExtractor, RemoteReport, VisionClient};
