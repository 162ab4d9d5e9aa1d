//! Application services - use cases consumed by the presentation layer

pub mod catalog_service;
pub mod report_service;

pub use catalog_service::CatalogService;
pub use report_service::ReportService;
