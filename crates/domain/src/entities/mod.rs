//! Entities - the catalog and its items

mod catalog;
mod item;

pub use catalog::Catalog;
pub use item::Item;
