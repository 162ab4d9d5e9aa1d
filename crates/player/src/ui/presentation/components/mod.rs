//! Reusable UI components

pub mod facet_select;
pub mod filter_bar;
pub mod item_card;
pub mod price_chart;
pub mod report_form;

pub use filter_bar::FilterBar;
pub use item_card::{CardRenderer, ItemCardView};
