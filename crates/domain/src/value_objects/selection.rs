//! Selection state - the chosen value (or "no filter") per facet

use std::collections::BTreeMap;

use crate::common::some_if_not_empty;
use crate::value_objects::Facet;

/// Current selection across all facets.
///
/// A facet absent from the map is "no filter". An empty string is treated the
/// same way, since that is the value of the default dropdown option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    chosen: BTreeMap<Facet, String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Selection::set`]
    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.set(facet, Some(value.into()));
        self
    }

    /// Set or clear the selection for one facet.
    pub fn set(&mut self, facet: Facet, value: Option<String>) {
        match value.and_then(some_if_not_empty) {
            Some(value) => {
                self.chosen.insert(facet, value);
            }
            None => {
                self.chosen.remove(&facet);
            }
        }
    }

    pub fn clear(&mut self, facet: Facet) {
        self.chosen.remove(&facet);
    }

    pub fn get(&self, facet: Facet) -> Option<&str> {
        self.chosen.get(&facet).map(String::as_str)
    }

    /// True when no facet constrains the result
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// The same selection with `facet` relaxed to "no filter"
    pub fn without(&self, facet: Facet) -> Self {
        let mut relaxed = self.clone();
        relaxed.clear(facet);
        relaxed
    }

    /// Active constraints, in facet order
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &str)> {
        self.chosen.iter().map(|(facet, value)| (*facet, value.as_str()))
    }
}
