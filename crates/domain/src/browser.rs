//! CatalogBrowser - the session object driving the filter/display loop
//!
//! Owns the loaded catalog, the current selection and one dropdown per facet.
//! Every selection change re-filters from the full catalog, repopulates all
//! dropdowns according to the [`CascadePolicy`], and records which items are
//! visible.

use crate::common::none_if_empty;
use crate::entities::{Catalog, Item};
use crate::filter::CascadePolicy;
use crate::value_objects::{Dropdown, Facet, OptionOrder, Selection};
use crate::views::CatalogView;

/// Per-facet dropdown ordering plus the cascading policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub policy: CascadePolicy,
    orders: [OptionOrder; 5],
}

impl BrowserConfig {
    pub fn new(policy: CascadePolicy) -> Self {
        Self {
            policy,
            orders: [OptionOrder::PLUS_NUMERIC; 5],
        }
    }

    /// Override the option ordering for one facet
    pub fn with_order(mut self, facet: Facet, order: OptionOrder) -> Self {
        self.orders[facet.index()] = order;
        self
    }

    pub fn order(&self, facet: Facet) -> OptionOrder {
        self.orders[facet.index()]
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::new(CascadePolicy::default())
    }
}

/// Filter/display state for one loaded catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogBrowser {
    catalog: Catalog,
    policy: CascadePolicy,
    selection: Selection,
    dropdowns: Vec<Dropdown>,
    /// Indices into the catalog of the items matching the last pass
    visible: Vec<usize>,
}

impl CatalogBrowser {
    /// Populate every dropdown from the full catalog and show everything.
    pub fn new(catalog: Catalog, config: &BrowserConfig) -> Self {
        let dropdowns = Facet::ALL
            .iter()
            .map(|facet| Dropdown::new(*facet, config.order(*facet)))
            .collect();

        let mut browser = Self {
            catalog,
            policy: config.policy,
            selection: Selection::new(),
            dropdowns,
            visible: Vec::new(),
        };
        browser.refresh();
        browser
    }

    /// Apply a user change to one dropdown. `None` or `""` means "no filter".
    ///
    /// A value the dropdown does not currently offer reverts that dropdown to
    /// "no filter", as a real control would. Returns the facets whose
    /// selection was dropped during this pass.
    pub fn select(&mut self, facet: Facet, value: Option<String>) -> Vec<Facet> {
        let mut reverted = Vec::new();
        let requested = value.as_deref().and_then(none_if_empty);
        if !self.dropdowns[facet.index()].select(requested) {
            reverted.push(facet);
        }
        self.selection.set(
            facet,
            self.dropdowns[facet.index()].selected().map(str::to_string),
        );
        reverted.extend(self.refresh());
        reverted
    }

    /// Drop every constraint
    pub fn reset(&mut self) {
        for dropdown in &mut self.dropdowns {
            dropdown.select(None);
        }
        self.selection = Selection::new();
        self.refresh();
    }

    /// Re-filter from the full catalog, then repopulate every dropdown.
    fn refresh(&mut self) -> Vec<Facet> {
        let items = self.catalog.items();
        let selection = &self.selection;

        self.visible = items
            .iter()
            .enumerate()
            .filter(|(_, item)| selection.iter().all(|(f, v)| item.matches(f, v)))
            .map(|(index, _)| index)
            .collect();

        let mut reverted = Vec::new();
        for dropdown in &mut self.dropdowns {
            let facet = dropdown.facet();
            let values = self.policy.facet_options(items, selection, facet);
            if !dropdown.populate(&values) {
                reverted.push(facet);
            }
        }

        // The selection follows what the dropdowns show after repopulation
        for facet in &reverted {
            self.selection.clear(*facet);
        }
        reverted
    }

    pub fn policy(&self) -> CascadePolicy {
        self.policy
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn dropdowns(&self) -> &[Dropdown] {
        &self.dropdowns
    }

    pub fn dropdown(&self, facet: Facet) -> &Dropdown {
        &self.dropdowns[facet.index()]
    }

    /// Items matched by the last filter pass, in catalog order
    pub fn visible_items(&self) -> Vec<&Item> {
        let items = self.catalog.items();
        self.visible.iter().filter_map(|i| items.get(*i)).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::render(self.visible_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warriors_and_mages() -> Catalog {
        Catalog::new(vec![
            Item::new("A", "Warrior", "Melee", 10.0),
            Item::new("B", "Warrior", "Ranged", 20.0),
            Item::new("C", "Mage", "Ranged", 30.0),
        ])
    }

    fn visible_names(browser: &CatalogBrowser) -> Vec<&str> {
        browser
            .visible_items()
            .into_iter()
            .map(|item| item.name.as_str())
            .collect()
    }

    fn options(browser: &CatalogBrowser, facet: Facet) -> Vec<&str> {
        browser
            .dropdown(facet)
            .options()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn starts_unfiltered_with_full_dropdowns() {
        let browser = CatalogBrowser::new(warriors_and_mages(), &BrowserConfig::default());

        assert_eq!(visible_names(&browser), vec!["A", "B", "C"]);
        assert_eq!(options(&browser, Facet::Class), vec!["Mage", "Warrior"]);
        assert_eq!(options(&browser, Facet::Type), vec!["Melee", "Ranged"]);
        assert!(browser.selection().is_empty());
    }

    #[test]
    fn cascading_scenario_with_exclude_self() {
        let mut browser = CatalogBrowser::new(warriors_and_mages(), &BrowserConfig::default());

        let reverted = browser.select(Facet::Class, Some("Warrior".to_string()));
        assert!(reverted.is_empty());
        assert_eq!(visible_names(&browser), vec!["A", "B"]);
        assert_eq!(options(&browser, Facet::Type), vec!["Melee", "Ranged"]);
        assert_eq!(options(&browser, Facet::Name), vec!["A", "B"]);

        browser.select(Facet::Type, Some("Ranged".to_string()));
        assert_eq!(visible_names(&browser), vec!["B"]);
        // class options come from type=Ranged alone
        assert_eq!(options(&browser, Facet::Class), vec!["Mage", "Warrior"]);
        assert_eq!(browser.dropdown(Facet::Class).selected(), Some("Warrior"));
        assert_eq!(browser.dropdown(Facet::Type).selected(), Some("Ranged"));
    }

    #[test]
    fn cascading_scenario_with_narrow_all() {
        let config = BrowserConfig::new(CascadePolicy::NarrowAll);
        let mut browser = CatalogBrowser::new(warriors_and_mages(), &config);

        browser.select(Facet::Class, Some("Warrior".to_string()));
        browser.select(Facet::Type, Some("Ranged".to_string()));

        assert_eq!(visible_names(&browser), vec!["B"]);
        assert_eq!(options(&browser, Facet::Class), vec!["Warrior"]);
        assert_eq!(options(&browser, Facet::Type), vec!["Ranged"]);
    }

    #[test]
    fn clearing_a_filter_readmits_items() {
        let mut browser = CatalogBrowser::new(warriors_and_mages(), &BrowserConfig::default());
        browser.select(Facet::Class, Some("Mage".to_string()));
        assert_eq!(visible_names(&browser), vec!["C"]);

        browser.select(Facet::Class, Some(String::new()));

        assert_eq!(visible_names(&browser), vec!["A", "B", "C"]);
        assert_eq!(browser.dropdown(Facet::Class).selected(), None);
    }

    #[test]
    fn unknown_value_reverts_and_is_reported() {
        let mut browser = CatalogBrowser::new(warriors_and_mages(), &BrowserConfig::default());

        let reverted = browser.select(Facet::Class, Some("Rogue".to_string()));

        assert_eq!(reverted, vec![Facet::Class]);
        assert!(browser.selection().is_empty());
        assert_eq!(browser.visible_count(), 3);
    }

    #[test]
    fn narrow_all_reverts_values_outside_the_result() {
        let catalog = Catalog::new(vec![
            Item::new("A", "Warrior", "Melee", 10.0).with_level(["+1"]),
            Item::new("B", "Mage", "Ranged", 10.0).with_level(["+2"]),
        ]);
        let mut browser =
            CatalogBrowser::new(catalog, &BrowserConfig::new(CascadePolicy::NarrowAll));
        browser.select(Facet::Class, Some("Warrior".to_string()));

        // "+2" is no longer offered under narrow-all, so the level control reverts
        let reverted = browser.select(Facet::Level, Some("+2".to_string()));

        assert_eq!(reverted, vec![Facet::Level]);
        assert_eq!(visible_names(&browser), vec!["A"]);
        assert_eq!(browser.selection().get(Facet::Class), Some("Warrior"));
    }

    #[test]
    fn reset_restores_the_full_listing() {
        let mut browser = CatalogBrowser::new(warriors_and_mages(), &BrowserConfig::default());
        browser.select(Facet::Type, Some("Melee".to_string()));

        browser.reset();

        assert_eq!(browser.visible_count(), 3);
        assert!(browser.dropdowns().iter().all(|d| d.selected().is_none()));
    }

    #[test]
    fn per_facet_order_is_applied() {
        let catalog = Catalog::new(vec![
            Item::new("x", "c", "t", 1.0).with_level(["+10", "+9"]),
        ]);
        let config = BrowserConfig::default().with_order(Facet::Level, OptionOrder::Lexicographic);

        let browser = CatalogBrowser::new(catalog.clone(), &config);
        assert_eq!(options(&browser, Facet::Level), vec!["+10", "+9"]);

        let browser = CatalogBrowser::new(catalog, &BrowserConfig::default());
        assert_eq!(options(&browser, Facet::Level), vec!["+9", "+10"]);
    }

    #[test]
    fn empty_catalog_renders_placeholder() {
        let browser = CatalogBrowser::new(Catalog::default(), &BrowserConfig::default());
        assert_eq!(browser.view(), CatalogView::Empty);
        assert!(browser.dropdowns().iter().all(|d| d.options().is_empty()));
    }
}
