//! HTTP adapters, one implementation per target

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{FormReportSink, HttpCatalogSource};
#[cfg(target_arch = "wasm32")]
pub use wasm::{FormReportSink, HttpCatalogSource};
