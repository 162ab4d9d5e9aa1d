//! Report Sink Port - outbound problem reports
//!
//! A report is an item name plus free text, delivered as a url-encoded form
//! post. Delivery is fire-and-forget from the catalog's point of view.

use thiserror::Error;

/// Form field carrying the item name
pub const ITEM_FIELD: &str = "Item";
/// Form field carrying the free-text message
pub const MESSAGE_FIELD: &str = "Mensagem";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Report message must not be empty")]
    EmptyMessage,

    #[error("Report must name an item")]
    MissingItem,

    /// The endpoint could not be reached
    #[error("Report could not be delivered: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("Report endpoint answered with status {0}")]
    Rejected(u16),
}

/// A validated problem report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemReport {
    item: String,
    message: String,
}

impl ProblemReport {
    /// Build a report, trimming the message. Blank items or messages are
    /// rejected before anything is sent.
    pub fn new(item: impl Into<String>, message: impl AsRef<str>) -> Result<Self, ReportError> {
        let item = item.into();
        if item.trim().is_empty() {
            return Err(ReportError::MissingItem);
        }
        let message = message.as_ref().trim();
        if message.is_empty() {
            return Err(ReportError::EmptyMessage);
        }
        Ok(Self {
            item,
            message: message.to_string(),
        })
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Form fields in submission order
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [(ITEM_FIELD, &self.item), (MESSAGE_FIELD, &self.message)]
    }
}

/// Port for delivering problem reports
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ReportSinkPort: Send + Sync {
    async fn submit(&self, report: &ProblemReport) -> Result<(), ReportError>;
}
