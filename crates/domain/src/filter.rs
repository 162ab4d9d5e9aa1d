//! Filter engine and cascading policy
//!
//! Filtering is pure and order-preserving, and always runs over the complete
//! collection so relaxing a facet can re-admit items it excluded before.

use std::fmt;
use std::str::FromStr;

use crate::entities::Item;
use crate::error::DomainError;
use crate::value_objects::{Facet, FacetValues, Selection};

/// Items matching every active constraint in `selection`, in input order.
pub fn apply_filters<'a>(items: &'a [Item], selection: &Selection) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| {
            selection
                .iter()
                .all(|(facet, value)| item.matches(facet, value))
        })
        .collect()
}

/// Which collection feeds a facet's own dropdown after a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CascadePolicy {
    /// Each dropdown offers the values of items matching every *other*
    /// facet's selection. A facet never narrows its own options.
    #[default]
    ExcludeSelf,
    /// Every dropdown offers the values of the fully filtered result.
    NarrowAll,
}

impl CascadePolicy {
    /// Values `facet`'s dropdown should offer under `selection`.
    pub fn facet_options(&self, items: &[Item], selection: &Selection, facet: Facet) -> FacetValues {
        match self {
            CascadePolicy::ExcludeSelf => {
                FacetValues::extract(apply_filters(items, &selection.without(facet)), facet)
            }
            CascadePolicy::NarrowAll => {
                FacetValues::extract(apply_filters(items, selection), facet)
            }
        }
    }
}

impl fmt::Display for CascadePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CascadePolicy::ExcludeSelf => write!(f, "exclude-self"),
            CascadePolicy::NarrowAll => write!(f, "narrow-all"),
        }
    }
}

impl FromStr for CascadePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclude-self" | "exclude_self" => Ok(Self::ExcludeSelf),
            "narrow-all" | "narrow_all" => Ok(Self::NarrowAll),
            other => Err(DomainError::validation(format!(
                "Unknown cascade policy: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Item> {
        vec![
            Item::new("Espada", "Guerreiro", "Arma", 100.0)
                .with_addons(["Fogo"])
                .with_level(["+1", "+2"]),
            Item::new("Escudo", "Guerreiro", "Armadura", 80.0).with_level(["+2"]),
            Item::new("Cajado", "Mago", "Arma", 120.0)
                .with_addons(["Gelo", "Fogo"])
                .with_level(["+3"]),
            Item::new("Manto", "Mago", "Armadura", 60.0),
        ]
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn empty_selection_returns_everything_in_order() {
        let items = catalog();
        let result = apply_filters(&items, &Selection::new());
        assert_eq!(names(&result), vec!["Espada", "Escudo", "Cajado", "Manto"]);
    }

    #[test]
    fn every_result_satisfies_every_constraint() {
        let items = catalog();
        let selection = Selection::new()
            .with(Facet::Type, "Arma")
            .with(Facet::Addons, "Fogo");

        let result = apply_filters(&items, &selection);

        assert_eq!(names(&result), vec!["Espada", "Cajado"]);
        for item in &items {
            let included = result.iter().any(|r| r.name == item.name);
            let satisfies = selection.iter().all(|(f, v)| item.matches(f, v));
            assert_eq!(included, satisfies, "{}", item.name);
        }
    }

    #[test]
    fn multi_valued_selection_uses_membership() {
        let items = catalog();
        let result = apply_filters(&items, &Selection::new().with(Facet::Level, "+2"));
        assert_eq!(names(&result), vec!["Espada", "Escudo"]);
    }

    #[test]
    fn contradictory_selection_yields_nothing() {
        let items = catalog();
        let selection = Selection::new()
            .with(Facet::Class, "Mago")
            .with(Facet::Name, "Espada");
        assert!(apply_filters(&items, &selection).is_empty());
    }

    #[test]
    fn relaxing_a_facet_readmits_items() {
        let items = catalog();
        let narrow = Selection::new()
            .with(Facet::Class, "Guerreiro")
            .with(Facet::Type, "Arma");
        assert_eq!(apply_filters(&items, &narrow).len(), 1);

        let relaxed = narrow.without(Facet::Type);
        assert_eq!(apply_filters(&items, &relaxed).len(), 2);
    }

    #[test]
    fn facet_values_of_a_result_come_from_the_result() {
        let items = catalog();
        let selection = Selection::new().with(Facet::Class, "Mago");
        let result = apply_filters(&items, &selection);

        for facet in Facet::ALL {
            let values = FacetValues::extract(result.iter().copied(), facet);
            for value in values.iter() {
                assert!(result.iter().any(|item| item.matches(facet, value)));
            }
        }
    }

    #[test]
    fn exclude_self_keeps_own_alternatives() {
        let items = catalog();
        let selection = Selection::new().with(Facet::Class, "Mago");

        let classes = CascadePolicy::ExcludeSelf.facet_options(&items, &selection, Facet::Class);
        let types = CascadePolicy::ExcludeSelf.facet_options(&items, &selection, Facet::Type);

        assert!(classes.contains("Guerreiro"));
        assert!(classes.contains("Mago"));
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn exclude_self_narrows_other_facets() {
        let items = catalog();
        let selection = Selection::new().with(Facet::Class, "Mago");

        let addons = CascadePolicy::ExcludeSelf.facet_options(&items, &selection, Facet::Addons);
        let levels = CascadePolicy::ExcludeSelf.facet_options(&items, &selection, Facet::Level);

        assert_eq!(addons.len(), 2);
        assert!(addons.contains("Gelo"));
        assert_eq!(levels.len(), 1);
        assert!(levels.contains("+3"));
    }

    #[test]
    fn narrow_all_constrains_the_facet_itself() {
        let items = catalog();
        let selection = Selection::new().with(Facet::Class, "Mago");

        let classes = CascadePolicy::NarrowAll.facet_options(&items, &selection, Facet::Class);

        assert_eq!(classes.len(), 1);
        assert!(classes.contains("Mago"));
    }

    #[test]
    fn policy_round_trips_through_strings() {
        for policy in [CascadePolicy::ExcludeSelf, CascadePolicy::NarrowAll] {
            assert_eq!(policy.to_string().parse::<CascadePolicy>().unwrap(), policy);
        }
        assert!("sideways".parse::<CascadePolicy>().is_err());
    }
}
