//! Toolkit-independent descriptions of what the catalog displays

mod card;
mod chart;

pub use card::{CatalogRenderer, CatalogView, ItemCard, LIST_SEPARATOR};
pub use chart::{
    ChartPoint, ChartSurface, PriceChart, LINE_COLOR, LINE_WIDTH, MARKER_COLOR, MARKER_RADIUS,
};
