//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to reach the network or filesystem without
//! depending on concrete implementations.

pub mod catalog_source_port;
pub mod report_sink_port;

pub use catalog_source_port::{CatalogSourcePort, LoadError};
pub use report_sink_port::{ProblemReport, ReportError, ReportSinkPort, ITEM_FIELD, MESSAGE_FIELD};

#[cfg(any(test, feature = "testing"))]
pub use catalog_source_port::MockCatalogSourcePort;
#[cfg(any(test, feature = "testing"))]
pub use report_sink_port::MockReportSinkPort;
