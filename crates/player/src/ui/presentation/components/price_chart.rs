//! SVG rendering of a plotted price history

use dioxus::prelude::*;
use lootlens_domain::views::{LINE_COLOR, LINE_WIDTH, MARKER_COLOR, MARKER_RADIUS};
use lootlens_domain::PriceChart;

use crate::ui::presentation::messages::HISTORY_TITLE;

#[component]
pub fn PriceChartPopup(chart: PriceChart) -> Element {
    let surface = chart.surface();
    let points = chart.polyline();
    let markers: Vec<(String, String)> = chart
        .points()
        .iter()
        .map(|p| (format!("{:.1}", p.x), format!("{:.1}", p.y)))
        .collect();

    rsx! {
        div { class: "price-popup",
            span { class: "price-popup-title", "{HISTORY_TITLE}" }
            svg {
                width: "{surface.width}",
                height: "{surface.height}",
                view_box: "0 0 {surface.width} {surface.height}",
                polyline {
                    points: "{points}",
                    fill: "none",
                    stroke: LINE_COLOR,
                    stroke_width: "{LINE_WIDTH}",
                }
                for (cx, cy) in markers {
                    circle {
                        cx: "{cx}",
                        cy: "{cy}",
                        r: "{MARKER_RADIUS}",
                        fill: MARKER_COLOR,
                    }
                }
            }
        }
    }
}
