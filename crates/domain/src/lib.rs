//! LootLens domain: the catalog model and the cascading filter/display engine.
//!
//! Everything here is toolkit-free and synchronous. The player crate wraps
//! [`CatalogBrowser`] in UI state and adapts [`CatalogView`] into components.

extern crate self as lootlens_domain;

pub mod browser;
pub mod common;
pub mod entities;
pub mod error;
pub mod filter;
pub mod value_objects;
pub mod views;

pub use browser::{BrowserConfig, CatalogBrowser};
pub use entities::{Catalog, Item};
pub use error::DomainError;
pub use filter::{apply_filters, CascadePolicy};
pub use value_objects::{Dropdown, Facet, FacetKind, FacetValues, OptionOrder, Selection};
pub use views::{
    CatalogRenderer, CatalogView, ChartPoint, ChartSurface, ItemCard, PriceChart,
};
