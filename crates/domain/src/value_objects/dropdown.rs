//! Selection-preserving dropdown model
//!
//! A dropdown always offers the "no filter" entry first, followed by the
//! facet's values in the facet's [`OptionOrder`]. Repopulating keeps the
//! current choice when it is still offered and falls back to "no filter"
//! otherwise.

use crate::value_objects::{Facet, FacetValues, OptionOrder};

/// One dropdown control, decoupled from any UI toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    facet: Facet,
    order: OptionOrder,
    options: Vec<String>,
    selected: Option<String>,
}

impl Dropdown {
    /// An empty dropdown showing only "no filter"
    pub fn new(facet: Facet, order: OptionOrder) -> Self {
        Self {
            facet,
            order,
            options: Vec::new(),
            selected: None,
        }
    }

    pub fn facet(&self) -> Facet {
        self.facet
    }

    /// Rewrite the option list from `values` and restore the previous choice.
    ///
    /// Returns `true` if the previous choice survived (or there was none).
    pub fn populate(&mut self, values: &FacetValues) -> bool {
        let mut options: Vec<String> = values.iter().map(str::to_string).collect();
        self.order.sort(&mut options);
        self.options = options;

        let previous = self.selected.take();
        self.restore(previous)
    }

    /// Pick `value` if it is offered; anything else reverts to "no filter".
    ///
    /// Returns `true` if the requested value is now selected.
    pub fn select(&mut self, value: Option<&str>) -> bool {
        self.restore(value.map(str::to_string))
    }

    fn restore(&mut self, value: Option<String>) -> bool {
        match value {
            Some(value) if self.options.contains(&value) => {
                self.selected = Some(value);
                true
            }
            Some(_) => {
                self.selected = None;
                false
            }
            None => {
                self.selected = None;
                true
            }
        }
    }

    /// Values offered besides "no filter", in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Every entry as shown, "no filter" (`None`) first
    pub fn entries(&self) -> impl Iterator<Item = Option<&str>> {
        std::iter::once(None).chain(self.options.iter().map(|o| Some(o.as_str())))
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> FacetValues {
        items.iter().copied().collect()
    }

    #[test]
    fn no_filter_entry_comes_first() {
        let mut dropdown = Dropdown::new(Facet::Level, OptionOrder::PLUS_NUMERIC);
        dropdown.populate(&values(&["+10", "+2", "Alpha", "beta"]));

        let entries: Vec<Option<&str>> = dropdown.entries().collect();
        assert_eq!(
            entries,
            vec![None, Some("+2"), Some("+10"), Some("Alpha"), Some("beta")]
        );
    }

    #[test]
    fn selection_survives_when_still_offered() {
        let mut dropdown = Dropdown::new(Facet::Class, OptionOrder::Lexicographic);
        dropdown.populate(&values(&["Guerreiro", "Mago"]));
        assert!(dropdown.select(Some("Mago")));

        let kept = dropdown.populate(&values(&["Mago", "Ladino"]));

        assert!(kept);
        assert_eq!(dropdown.selected(), Some("Mago"));
    }

    #[test]
    fn selection_reverts_when_no_longer_offered() {
        let mut dropdown = Dropdown::new(Facet::Class, OptionOrder::Lexicographic);
        dropdown.populate(&values(&["Guerreiro", "Mago"]));
        dropdown.select(Some("Mago"));

        let kept = dropdown.populate(&values(&["Guerreiro"]));

        assert!(!kept);
        assert_eq!(dropdown.selected(), None);
    }

    #[test]
    fn first_population_restores_nothing() {
        let mut dropdown = Dropdown::new(Facet::Type, OptionOrder::Lexicographic);
        assert!(dropdown.populate(&values(&["Arma"])));
        assert_eq!(dropdown.selected(), None);
        assert_eq!(dropdown.options(), &["Arma".to_string()]);
    }

    #[test]
    fn selecting_an_unknown_value_reverts_to_no_filter() {
        let mut dropdown = Dropdown::new(Facet::Type, OptionOrder::Lexicographic);
        dropdown.populate(&values(&["Arma"]));
        dropdown.select(Some("Arma"));

        assert!(!dropdown.select(Some("Escudo")));
        assert_eq!(dropdown.selected(), None);
    }

    #[test]
    fn empty_value_set_leaves_only_no_filter() {
        let mut dropdown = Dropdown::new(Facet::Addons, OptionOrder::Lexicographic);
        dropdown.populate(&values(&["Fogo"]));
        dropdown.select(Some("Fogo"));

        dropdown.populate(&FacetValues::default());

        assert_eq!(dropdown.entries().count(), 1);
        assert_eq!(dropdown.selected(), None);
    }
}
