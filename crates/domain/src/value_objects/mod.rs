//! Value objects - Immutable objects defined by their attributes

mod dropdown;
mod facet;
mod option_order;
mod selection;

pub use dropdown::Dropdown;
pub use facet::{Facet, FacetKind, FacetValues};
pub use option_order::OptionOrder;
pub use selection::Selection;
