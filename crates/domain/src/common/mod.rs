//! Small helpers shared across the domain.

mod string;

pub use string::{format_price, none_if_empty, some_if_not_empty};
