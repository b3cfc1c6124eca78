pub mod credential;
pub mod payload;
pub mod pixel_grid;
pub mod region;
pub mod result;

pub use credential::{CredentialRecord, DEFAULT_NETWORK_TYPE};
pub use payload::RawPayload;
pub use pixel_grid::PixelGrid;
pub use region::Region;
pub use result::{ExtractionResult, FailureReason};
