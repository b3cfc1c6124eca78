use super::CredentialRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an extraction attempt produced no credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The image could not be loaded, or the region was unusable
    ImageProcessing,
    /// No QR symbol could be located and decoded in the region
    NoSymbolFound,
    /// A symbol was decoded but it does not hold WiFi credentials
    NotWifiPayload,
    /// The remote service returned nothing
    NoServiceResponse,
    /// The remote service reported no WiFi QR code in the image
    ServiceRejected,
    /// The remote service call failed or returned something unreadable
    ServiceError,
}

impl FailureReason {
    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            FailureReason::ImageProcessing => "failed to process image data",
            FailureReason::NoSymbolFound => {
                "no symbol found; make sure the QR code is clear and inside the selected area"
            }
            FailureReason::NotWifiPayload => {
                "QR code is valid but does not contain standard WiFi data"
            }
            FailureReason::NoServiceResponse => "no response from the extraction service",
            FailureReason::ServiceRejected => "no valid WiFi QR code detected in the image",
            FailureReason::ServiceError => "failed to decode the image, please try again",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of one extraction attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionResult {
    /// Credentials were recovered
    Success {
        /// The recovered record
        record: CredentialRecord,
    },
    /// Nothing usable was recovered
    Failure {
        /// Cause of the failure
        reason: FailureReason,
    },
}

impl ExtractionResult {
    /// Wrap a record
    pub fn success(record: CredentialRecord) -> Self {
        ExtractionResult::Success { record }
    }

    /// Wrap a failure cause
    pub fn failure(reason: FailureReason) -> Self {
        ExtractionResult::Failure { reason }
    }

    /// True for `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success { .. })
    }

    /// The record, if any
    pub fn record(&self) -> Option<&CredentialRecord> {
        match self {
            ExtractionResult::Success { record } => Some(record),
            ExtractionResult::Failure { .. } => None,
        }
    }

    /// The failure cause, if any
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            ExtractionResult::Success { .. } => None,
            ExtractionResult::Failure { reason } => Some(*reason),
        }
    }

    /// Convert into a `Result`
    pub fn into_result(self) -> Result<CredentialRecord, FailureReason> {
        match self {
            ExtractionResult::Success { record } => Ok(record),
            ExtractionResult::Failure { reason } => Err(reason),
        }
    }
}

impl From<Result<CredentialRecord, FailureReason>> for ExtractionResult {
    fn from(result: Result<CredentialRecord, FailureReason>) -> Self {
        match result {
            Ok(record) => ExtractionResult::success(record),
            Err(reason) => ExtractionResult::failure(reason),
        }
    }
}
