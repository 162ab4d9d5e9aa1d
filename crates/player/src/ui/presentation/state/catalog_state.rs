//! Catalog state management
//!
//! Holds the load status and the [`CatalogBrowser`] for the session. The
//! browser only exists once the catalog has loaded, so filter components
//! never see an empty or half-loaded collection.

use dioxus::prelude::*;
use lootlens_domain::{CatalogBrowser, CatalogView, Dropdown, Facet};

use crate::ports::outbound::LoadError;

/// Where the one-shot catalog load stands
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(LoadError),
}

#[derive(Clone, Copy)]
pub struct CatalogState {
    pub status: Signal<LoadStatus>,
    pub browser: Signal<Option<CatalogBrowser>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            status: Signal::new(LoadStatus::Loading),
            browser: Signal::new(None),
        }
    }

    pub fn set_ready(&mut self, browser: CatalogBrowser) {
        tracing::debug!(
            visible = browser.visible_count(),
            policy = %browser.policy(),
            "Catalog ready"
        );
        self.browser.set(Some(browser));
        self.status.set(LoadStatus::Ready);
    }

    pub fn set_failed(&mut self, error: LoadError) {
        self.browser.set(None);
        self.status.set(LoadStatus::Failed(error));
    }

    /// Apply a dropdown change. An empty value clears the facet.
    pub fn select(&mut self, facet: Facet, value: String) {
        let mut guard = self.browser.write();
        let Some(browser) = guard.as_mut() else {
            tracing::warn!(%facet, "Selection ignored, catalog not loaded");
            return;
        };

        for reverted in browser.select(facet, Some(value)) {
            tracing::debug!(facet = %reverted, "Selected value no longer offered, cleared");
        }
        tracing::debug!(
            %facet,
            active = browser.selection().iter().count(),
            visible = browser.visible_count(),
            "Filters applied"
        );
    }

    /// Clear every facet
    pub fn reset(&mut self) {
        if let Some(browser) = self.browser.write().as_mut() {
            browser.reset();
        }
    }

    /// Snapshot of the dropdowns, empty until loaded
    pub fn dropdowns(&self) -> Vec<Dropdown> {
        self.browser
            .read()
            .as_ref()
            .map(|b| b.dropdowns().to_vec())
            .unwrap_or_default()
    }

    /// Number of items matching the current selection
    pub fn visible_count(&self) -> usize {
        self.browser
            .read()
            .as_ref()
            .map(CatalogBrowser::visible_count)
            .unwrap_or_default()
    }

    /// The card list for the current selection
    pub fn view(&self) -> CatalogView {
        self.browser
            .read()
            .as_ref()
            .map(CatalogBrowser::view)
            .unwrap_or(CatalogView::Empty)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
