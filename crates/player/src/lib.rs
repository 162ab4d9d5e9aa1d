//! LootLens player - the catalog browser application
//!
//! Layers, inside out:
//! - `ports`: traits for the catalog source and the report sink
//! - `application`: services that load the catalog and send reports
//! - `infrastructure`: HTTP and filesystem adapters for the ports
//! - `ui`: Dioxus components over [`lootlens_domain::CatalogBrowser`]

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use config::PlayerConfig;
