//! Catalog page - loads the catalog once, then shows filters and cards

use dioxus::prelude::*;

use crate::ui::presentation::components::{CardRenderer, FilterBar};
use crate::ui::presentation::messages::{LOADING, LOAD_ERROR, TITLE};
use crate::ui::presentation::services::use_catalog_service;
use crate::ui::presentation::state::{CatalogState, LoadStatus};

#[component]
pub fn CatalogPage() -> Element {
    let catalog_service = use_catalog_service();
    let state = use_context::<CatalogState>();

    // One-shot load on mount
    use_effect(move || {
        let svc = catalog_service.clone();
        let mut state = state;
        spawn(async move {
            match svc.open().await {
                Ok(browser) => state.set_ready(browser),
                Err(e) => state.set_failed(e),
            }
        });
    });

    let status = state.status.read().clone();

    rsx! {
        div { class: "catalog",
            header { h1 { "{TITLE}" } }
            match status {
                LoadStatus::Loading => rsx! {
                    div { id: "item-list", p { class: "loading", "{LOADING}" } }
                },
                LoadStatus::Failed(_) => rsx! {
                    div { id: "item-list", p { class: "load-error", "{LOAD_ERROR}" } }
                },
                LoadStatus::Ready => rsx! {
                    FilterBar {}
                    CatalogList {}
                },
            }
        }
    }
}

#[component]
fn CatalogList() -> Element {
    let state = use_context::<CatalogState>();
    let nodes = state.view().render_with(&CardRenderer);

    rsx! {
        div { id: "item-list", class: "item-list",
            {nodes.into_iter()}
        }
    }
}
