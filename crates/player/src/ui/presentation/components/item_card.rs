//! Item cards and the renderer that turns a catalog view into nodes

use dioxus::prelude::*;
use lootlens_domain::{CatalogRenderer, ChartSurface, ItemCard, PriceChart};

use super::price_chart::PriceChartPopup;
use super::report_form::ReportForm;
use crate::ui::presentation::messages::{
    ADDONS_LABEL, CLASS_LABEL, LEVEL_LABEL, NO_MATCH, PRICE_LABEL, TYPE_LABEL,
};

/// Renders catalog views as Dioxus elements
pub struct CardRenderer;

impl CatalogRenderer for CardRenderer {
    type Node = Element;

    fn placeholder(&self) -> Element {
        rsx! {
            p { class: "no-items", "{NO_MATCH}" }
        }
    }

    fn card(&self, key: &str, card: &ItemCard) -> Element {
        let card = card.clone();
        rsx! {
            ItemCardView { key: "{key}", card }
        }
    }
}

/// One card. Hovering the name shows the price history when there is one.
#[component]
pub fn ItemCardView(card: ItemCard) -> Element {
    let mut hovering = use_signal(|| false);
    let chart = PriceChart::plot(&card.price_history, ChartSurface::default());

    rsx! {
        div { class: "item-card",
            div {
                class: "item-name",
                onmouseenter: move |_| hovering.set(true),
                onmouseleave: move |_| hovering.set(false),
                h3 { "{card.name}" }
                if hovering() {
                    if let Some(chart) = chart {
                        PriceChartPopup { chart }
                    }
                }
            }
            p { strong { "{PRICE_LABEL}" } " {card.price}" }
            p { strong { "{CLASS_LABEL}" } " {card.class}" }
            p { strong { "{TYPE_LABEL}" } " {card.item_type}" }
            if let Some(addons) = &card.addons {
                p { strong { "{ADDONS_LABEL}" } " {addons}" }
            }
            if let Some(level) = &card.level {
                p { strong { "{LEVEL_LABEL}" } " {level}" }
            }
            ReportForm { item: card.name.clone() }
        }
    }
}
