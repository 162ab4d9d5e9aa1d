//! Item entity - one entry of the price catalog
//!
//! Field names on the wire follow the catalog document (`nome`, `classe`,
//! `tipo`, ...). Only `historicoPreco` may be absent; everything else is
//! required and a missing field fails the whole load.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Facet, FacetKind};

/// A catalog entry
///
/// Plain data: the catalog is authoritative and immutable for the session,
/// so there are no invariants beyond what the document provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "classe")]
    pub class: String,
    #[serde(rename = "tipo")]
    pub item_type: String,
    #[serde(rename = "precoMedio")]
    pub average_price: f64,
    #[serde(rename = "adicionais")]
    pub addons: Vec<String>,
    #[serde(rename = "nivel")]
    pub level: Vec<String>,
    /// Chronological price samples; may be empty
    #[serde(rename = "historicoPreco", default)]
    pub price_history: Vec<f64>,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        item_type: impl Into<String>,
        average_price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            item_type: item_type.into(),
            average_price,
            addons: Vec::new(),
            level: Vec::new(),
            price_history: Vec::new(),
        }
    }

    pub fn with_addons<I, S>(mut self, addons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.addons = addons.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_level<I, S>(mut self, level: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.level = level.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_history(mut self, history: impl Into<Vec<f64>>) -> Self {
        self.price_history = history.into();
        self
    }

    /// The values this item holds for `facet`.
    ///
    /// Scalar facets return a one-element slice.
    pub fn facet_values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Class => std::slice::from_ref(&self.class),
            Facet::Type => std::slice::from_ref(&self.item_type),
            Facet::Name => std::slice::from_ref(&self.name),
            Facet::Addons => &self.addons,
            Facet::Level => &self.level,
        }
    }

    /// Whether this item satisfies `facet == value`.
    ///
    /// Scalar facets compare for equality, multi-valued facets test membership.
    pub fn matches(&self, facet: Facet, value: &str) -> bool {
        let values = self.facet_values(facet);
        match facet.kind() {
            FacetKind::Scalar => values.first().is_some_and(|v| v == value),
            FacetKind::MultiValued => values.iter().any(|v| v == value),
        }
    }
}
