//! Catalog Service - loads the catalog once and opens a browser over it
//!
//! Loading is all-or-nothing: a transport failure or a single malformed
//! entry fails the whole load and the UI stays in its error state.

use std::sync::Arc;

use lootlens_domain::{BrowserConfig, Catalog, CatalogBrowser};

use crate::ports::outbound::{CatalogSourcePort, LoadError};

pub struct CatalogService {
    source: Arc<dyn CatalogSourcePort>,
    config: BrowserConfig,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSourcePort>, config: BrowserConfig) -> Self {
        Self { source, config }
    }

    /// Fetch and decode the catalog
    pub async fn load_catalog(&self) -> Result<Catalog, LoadError> {
        let location = self.source.location();
        tracing::info!(%location, "Loading catalog");

        let document = self.source.fetch_catalog().await.inspect_err(|e| {
            tracing::error!(%location, error = %e, "Failed to fetch catalog");
        })?;

        let catalog = Catalog::from_json(&document).map_err(|e| {
            tracing::error!(%location, error = %e, "Catalog document is malformed");
            LoadError::from(e)
        })?;

        tracing::info!(%location, items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Open a browser over an already loaded catalog
    pub fn browse(&self, catalog: Catalog) -> CatalogBrowser {
        CatalogBrowser::new(catalog, &self.config)
    }

    /// Load the catalog and open a browser showing every item
    pub async fn open(&self) -> Result<CatalogBrowser, LoadError> {
        let catalog = self.load_catalog().await?;
        Ok(self.browse(catalog))
    }
}
