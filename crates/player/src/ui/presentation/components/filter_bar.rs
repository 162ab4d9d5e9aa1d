use dioxus::prelude::*;

use super::facet_select::FacetSelect;
use crate::ui::presentation::messages::{item_count, CLEAR_FILTERS};
use crate::ui::presentation::state::CatalogState;

/// All five facet dropdowns plus the match count
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<CatalogState>();
    let dropdowns = state.dropdowns();
    let count = item_count(state.visible_count());

    rsx! {
        div { class: "filters",
            for (facet, dropdown) in dropdowns.into_iter().map(|d| (d.facet(), d)) {
                FacetSelect { key: "{facet}", dropdown }
            }
            div { class: "filter-summary",
                span { class: "item-count", "{count}" }
                button {
                    r#type: "button",
                    class: "clear-filters",
                    onclick: move |_| state.reset(),
                    "{CLEAR_FILTERS}"
                }
            }
        }
    }
}
