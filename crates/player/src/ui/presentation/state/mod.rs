//! Reactive UI state shared through Dioxus context

pub mod catalog_state;
pub mod report_state;

pub use catalog_state::{CatalogState, LoadStatus};
pub use report_state::{ReportLedger, ReportState, ReportStatus};
