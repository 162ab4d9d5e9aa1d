//! One facet dropdown

use dioxus::prelude::*;
use lootlens_domain::Dropdown;

use crate::ui::presentation::messages::{facet_label, NO_FILTER};
use crate::ui::presentation::state::CatalogState;

/// A `select` bound to a facet. The empty value is the "no filter" entry.
#[component]
pub fn FacetSelect(dropdown: Dropdown) -> Element {
    let mut state = use_context::<CatalogState>();
    let facet = dropdown.facet();
    let current = dropdown.selected().unwrap_or_default().to_string();
    let id = format!("filter-{}", facet.key());

    let entries: Vec<(String, String)> = dropdown
        .entries()
        .map(|entry| match entry {
            None => (String::new(), NO_FILTER.to_string()),
            Some(value) => (value.to_string(), value.to_string()),
        })
        .collect();

    rsx! {
        div { class: "filter",
            label { r#for: "{id}", "{facet_label(facet)}" }
            select {
                id: "{id}",
                value: "{current}",
                onchange: move |e| state.select(facet, e.value()),

                for (value, label) in entries {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: value == current,
                        "{label}"
                    }
                }
            }
        }
    }
}
