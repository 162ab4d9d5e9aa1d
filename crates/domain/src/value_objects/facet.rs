//! Facets - the filterable dimensions of a catalog item
//!
//! Scalar facets carry exactly one value per item; multi-valued facets carry
//! zero or more. [`FacetValues`] is always rebuilt from a collection and
//! never edited in place.

use std::collections::HashSet;
use std::fmt;

use crate::entities::Item;

/// How many values an item holds for a facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    /// Exactly one value per item (class, type, name)
    Scalar,
    /// Zero or more values per item (add-ons, level)
    MultiValued,
}

/// A filterable dimension of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Class,
    Type,
    Name,
    Addons,
    Level,
}

impl Facet {
    /// All facets, in the order their controls are laid out.
    pub const ALL: [Facet; 5] = [
        Facet::Class,
        Facet::Type,
        Facet::Name,
        Facet::Addons,
        Facet::Level,
    ];

    pub fn kind(&self) -> FacetKind {
        match self {
            Facet::Class | Facet::Type | Facet::Name => FacetKind::Scalar,
            Facet::Addons | Facet::Level => FacetKind::MultiValued,
        }
    }

    /// The catalog document field backing this facet. Also used as the
    /// control id suffix (`filter-classe`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            Facet::Class => "classe",
            Facet::Type => "tipo",
            Facet::Name => "nome",
            Facet::Addons => "adicionais",
            Facet::Level => "nivel",
        }
    }

    /// Position of this facet in [`Facet::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Facet::Class => 0,
            Facet::Type => 1,
            Facet::Name => 2,
            Facet::Addons => 3,
            Facet::Level => 4,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facet::Class => "class",
            Facet::Type => "type",
            Facet::Name => "name",
            Facet::Addons => "addons",
            Facet::Level => "level",
        };
        write!(f, "{}", name)
    }
}

/// Distinct values a facet takes over some item collection.
///
/// Iteration order is unspecified; ordering is a dropdown concern
/// (see [`crate::OptionOrder`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetValues {
    values: HashSet<String>,
}

impl FacetValues {
    /// Collect the distinct values of `facet` across `items`.
    ///
    /// Runs in time linear in the number of items plus the sizes of their
    /// multi-valued lists.
    pub fn extract<'a, I>(items: I, facet: Facet) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut values = HashSet::new();
        for item in items {
            for value in item.facet_values(facet) {
                if !values.contains(value) {
                    values.insert(value.clone());
                }
            }
        }
        Self { values }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FacetValues {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for FacetValues {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
