//! Remote extraction through a hosted vision model
//!
//! The service receives the selected region as a PNG together with
//! [`EXTRACTION_PROMPT`] and answers with a JSON object shaped like
//! [`RemoteReport`]. Transport (HTTP client, auth, model choice) is behind
//! [`VisionClient`] and is the caller's business.
//!
//! The service applies its own "is this a WiFi QR" gate. After that gate the
//! report goes through the same rule as the local path: a record without an
//! SSID is not a valid extraction.

use crate::materialize::ImageSource;
use crate::models::{
    CredentialRecord, DEFAULT_NETWORK_TYPE, ExtractionResult, FailureReason, PixelGrid, Region,
};
use crate::pipeline::{Extractor, materialize_guarded};
use image::{ImageOutputFormat, RgbaImage};
use serde::Deserialize;
use std::io::Cursor;
use thiserror::Error;
use tracing::{debug, warn};

/// Instruction sent with every image
pub const EXTRACTION_PROMPT: &str = "Analyze this image. It should contain a WiFi QR code. \
Decode it and extract the SSID, Password, Network Type, and Hidden status. \
If it is not a WiFi QR code, set isValidWifiQr to false.";

/// Failure talking to, or understanding, the remote service
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Transport or service-side failure reported by the client
    #[error("vision service call failed: {0}")]
    Client(String),

    /// Response was not the expected JSON object
    #[error("malformed service response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The region could not be encoded for upload
    #[error("failed to encode image for upload: {0}")]
    Encode(String),
}

/// Transport to a hosted vision model
pub trait VisionClient {
    /// Send a PNG image and an instruction; return the response text, `None` if empty.
    fn analyze(&self, png: &[u8], prompt: &str) -> Result<Option<String>, RemoteError>;
}

/// JSON object the service is asked to return
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteReport {
    /// Network name
    #[serde(default)]
    pub ssid: String,
    /// Passphrase, absent for open networks
    #[serde(default)]
    pub password: Option<String>,
    /// Security type (WPA, WEP, ...)
    #[serde(default = "default_network_type")]
    pub network_type: String,
    /// Hidden network flag
    #[serde(default)]
    pub hidden: bool,
    /// Service's own verdict on whether the image holds a WiFi QR code
    #[serde(default)]
    pub is_valid_wifi_qr: bool,
}

fn default_network_type() -> String {
    DEFAULT_NETWORK_TYPE.to_string()
}

impl RemoteReport {
    /// Deserialize a response body
    pub fn from_json(text: &str) -> Result<Self, RemoteError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply the service gate and the SSID rule.
    pub fn into_record(self) -> Result<CredentialRecord, FailureReason> {
        if !self.is_valid_wifi_qr || self.ssid.is_empty() {
            return Err(FailureReason::ServiceRejected);
        }
        Ok(CredentialRecord {
            ssid: self.ssid,
            password: self.password.unwrap_or_default(),
            network_type: self.network_type,
            hidden: self.hidden,
        })
    }
}

/// Extraction through a [`VisionClient`]
#[derive(Debug, Clone)]
pub struct RemoteExtractor<C> {
    client: C,
}

impl<C: VisionClient> RemoteExtractor<C> {
    /// Wrap a client
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The client in use
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Send an already materialized grid to the service
    pub fn extract_grid(&self, grid: &PixelGrid) -> ExtractionResult {
        let png = match encode_png(grid) {
            Ok(png) => png,
            Err(err) => {
                warn!(error = %err, "remote extraction failed");
                return ExtractionResult::failure(FailureReason::ImageProcessing);
            }
        };

        let text = match self.client.analyze(&png, EXTRACTION_PROMPT) {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => return ExtractionResult::failure(FailureReason::NoServiceResponse),
            Err(err) => {
                warn!(error = %err, "remote extraction failed");
                return ExtractionResult::failure(FailureReason::ServiceError);
            }
        };

        match RemoteReport::from_json(&text) {
            Ok(report) => {
                debug!(valid = report.is_valid_wifi_qr, "service report received");
                report.into_record().into()
            }
            Err(err) => {
                warn!(error = %err, "remote extraction failed");
                ExtractionResult::failure(FailureReason::ServiceError)
            }
        }
    }
}

impl<C: VisionClient> Extractor for RemoteExtractor<C> {
    fn extract(&self, source: &ImageSource, region: Region) -> ExtractionResult {
        match materialize_guarded(source, region) {
            Ok(grid) => self.extract_grid(&grid),
            Err(err) => {
                warn!(error = %err, ?region, "remote extraction failed");
                ExtractionResult::failure(FailureReason::from(&err))
            }
        }
    }
}

fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, RemoteError> {
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    let image = RgbaImage::from_raw(width, height, grid.as_bytes().to_vec())
        .ok_or_else(|| RemoteError::Encode("grid size mismatch".to_string()))?;
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
        .map_err(|err| RemoteError::Encode(err.to_string()))?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Client that replays one canned answer and records what it was sent
    struct CannedClient {
        answer: Result<Option<String>, String>,
        seen: RefCell<Vec<(usize, String)>>,
    }

    impl CannedClient {
        fn json(text: &str) -> Self {
            Self {
                answer: Ok(Some(text.to_string())),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                answer: Ok(None),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                answer: Err("connection reset".to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl VisionClient for CannedClient {
        fn analyze(&self, png: &[u8], prompt: &str) -> Result<Option<String>, RemoteError> {
            self.seen.borrow_mut().push((png.len(), prompt.to_string()));
            self.answer.clone().map_err(RemoteError::Client)
        }
    }

    fn grid() -> PixelGrid {
        PixelGrid::from_raw(4, 4, vec![200; 64]).unwrap()
    }

    #[test]
    fn test_valid_report() {
        let client = CannedClient::json(
            r#"{"ssid":"Office","password":"hunter2","networkType":"WPA","hidden":false,"isValidWifiQr":true}"#,
        );
        let extractor = RemoteExtractor::new(client);
        let result = extractor.extract_grid(&grid());

        assert_eq!(
            result.record(),
            Some(
                &CredentialRecord::new("Office")
                    .with_password("hunter2")
                    .with_network_type("WPA")
            )
        );
        let seen = extractor.client().seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].0 > 0);
        assert_eq!(seen[0].1, EXTRACTION_PROMPT);
    }

    #[test]
    fn test_missing_password_defaults_empty() {
        let client = CannedClient::json(
            r#"{"ssid":"Open","networkType":"nopass","hidden":true,"isValidWifiQr":true}"#,
        );
        let result = RemoteExtractor::new(client).extract_grid(&grid());
        let record = result.record().expect("should succeed");
        assert_eq!(record.password, "");
        assert!(record.hidden);
    }

    #[test]
    fn test_missing_network_type_defaults() {
        let report = RemoteReport::from_json(r#"{"ssid":"Cafe","isValidWifiQr":true}"#).unwrap();
        assert_eq!(report.into_record(), Ok(CredentialRecord::new("Cafe")));
    }

    #[test]
    fn test_gate_rejects() {
        let client = CannedClient::json(
            r#"{"ssid":"Menu","networkType":"","hidden":false,"isValidWifiQr":false}"#,
        );
        let result = RemoteExtractor::new(client).extract_grid(&grid());
        assert_eq!(result.failure_reason(), Some(FailureReason::ServiceRejected));
    }

    #[test]
    fn test_empty_ssid_rejected_even_when_gate_passes() {
        let client = CannedClient::json(
            r#"{"ssid":"","networkType":"WPA","hidden":false,"isValidWifiQr":true}"#,
        );
        let result = RemoteExtractor::new(client).extract_grid(&grid());
        assert_eq!(result.failure_reason(), Some(FailureReason::ServiceRejected));
    }

    #[test]
    fn test_empty_response() {
        let result = RemoteExtractor::new(CannedClient::empty()).extract_grid(&grid());
        assert_eq!(result.failure_reason(), Some(FailureReason::NoServiceResponse));

        let result = RemoteExtractor::new(CannedClient::json("  ")).extract_grid(&grid());
        assert_eq!(result.failure_reason(), Some(FailureReason::NoServiceResponse));
    }

    #[test]
    fn test_malformed_response() {
        let result = RemoteExtractor::new(CannedClient::json("not json")).extract_grid(&grid());
        assert_eq!(result.failure_reason(), Some(FailureReason::ServiceError));
    }

    #[test]
    fn test_client_error() {
        let result = RemoteExtractor::new(CannedClient::failing()).extract_grid(&grid());
        assert_eq!(result.failure_reason(), Some(FailureReason::ServiceError));
    }

    #[test]
    fn test_bad_source_never_reaches_client() {
        let extractor = RemoteExtractor::new(CannedClient::empty());
        let result = extractor.extract(&ImageSource::Bytes(vec![1, 2, 3]), Region::new(0, 0, 2, 2));
        assert_eq!(result.failure_reason(), Some(FailureReason::ImageProcessing));
        assert!(extractor.client().seen.borrow().is_empty());
    }

    #[test]
    fn test_png_encoding_round_trips() {
        let grid = grid();
        let png = encode_png(&grid).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw(), grid.as_bytes());
    }
}
