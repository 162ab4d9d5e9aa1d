//! Catalog Source Port - where the catalog document comes from
//!
//! Adapters fetch the raw JSON document once at startup. Decoding happens in
//! the application layer so every source fails the same way on bad data.

use lootlens_domain::DomainError;
use thiserror::Error;

/// Why the catalog could not be loaded. Terminal for the session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    /// Transport failure before any response arrived
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Unexpected status {status} from {location}")]
    Status { status: u16, location: String },

    /// Reading a local catalog file failed
    #[error("Could not read {path}: {message}")]
    Io { path: String, message: String },

    /// The document is not a valid catalog
    #[error("Malformed catalog: {0}")]
    Parse(String),
}

impl From<DomainError> for LoadError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Parse(msg) | DomainError::Validation(msg) => Self::Parse(msg),
        }
    }
}

/// Port for fetching the catalog document
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait CatalogSourcePort: Send + Sync {
    /// Fetch the raw catalog document
    async fn fetch_catalog(&self) -> Result<String, LoadError>;

    /// Human-readable location of the catalog (URL or path), for logs
    fn location(&self) -> String;
}
