//! Service providers for the presentation layer
//!
//! Components reach application services through Dioxus context instead of
//! constructing adapters themselves.

use dioxus::prelude::*;
use std::sync::Arc;

use lootlens_domain::BrowserConfig;

use crate::application::services::{CatalogService, ReportService};
use crate::ports::outbound::{CatalogSourcePort, ReportSinkPort};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<CatalogService>,
    pub reports: Arc<ReportService>,
}

impl Services {
    pub fn new(
        source: Arc<dyn CatalogSourcePort>,
        sink: Arc<dyn ReportSinkPort>,
        config: BrowserConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(source, config)),
            reports: Arc::new(ReportService::new(sink)),
        }
    }
}

/// Hook to access the CatalogService from context
pub fn use_catalog_service() -> Arc<CatalogService> {
    let services = use_context::<Services>();
    services.catalog.clone()
}

/// Hook to access the ReportService from context
pub fn use_report_service() -> Arc<ReportService> {
    let services = use_context::<Services>();
    services.reports.clone()
}
