//! Card descriptions - what the list shows, as plain data
//!
//! A UI adapter turns a [`CatalogView`] into real nodes through the
//! [`CatalogRenderer`] capability, so everything up to that point is testable
//! without a toolkit.

use std::collections::HashMap;

use crate::common::format_price;
use crate::entities::Item;

/// Separator between multi-valued entries on a card
pub const LIST_SEPARATOR: &str = ", ";

/// Description of one item card
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub name: String,
    pub price: String,
    pub class: String,
    pub item_type: String,
    /// Joined add-ons, `None` when the item has none
    pub addons: Option<String>,
    /// Joined levels, `None` when the item has none
    pub level: Option<String>,
    pub price_history: Vec<f64>,
}

impl ItemCard {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: format_price(item.average_price),
            class: item.class.clone(),
            item_type: item.item_type.clone(),
            addons: join_non_empty(&item.addons),
            level: join_non_empty(&item.level),
            price_history: item.price_history.clone(),
        }
    }

    /// Whether hovering the name should open a price chart
    pub fn has_chart(&self) -> bool {
        self.price_history.len() >= 2
    }
}

fn join_non_empty(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(LIST_SEPARATOR))
    }
}

/// The list area for one filter pass
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    /// Nothing matched; show the placeholder only
    Empty,
    Cards(Vec<ItemCard>),
}

impl CatalogView {
    pub fn render<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let cards: Vec<ItemCard> = items.into_iter().map(ItemCard::from_item).collect();
        if cards.is_empty() {
            CatalogView::Empty
        } else {
            CatalogView::Cards(cards)
        }
    }

    pub fn cards(&self) -> &[ItemCard] {
        match self {
            CatalogView::Empty => &[],
            CatalogView::Cards(cards) => cards,
        }
    }

    /// Translate into UI nodes: one placeholder, or one node per card.
    ///
    /// Each card gets a key unique within the view: its name, suffixed with
    /// `#n` for the n-th repeat of a name.
    pub fn render_with<R: CatalogRenderer>(&self, renderer: &R) -> Vec<R::Node> {
        match self {
            CatalogView::Empty => vec![renderer.placeholder()],
            CatalogView::Cards(cards) => {
                let mut seen: HashMap<&str, usize> = HashMap::new();
                cards
                    .iter()
                    .map(|card| {
                        let repeats = seen.entry(card.name.as_str()).or_default();
                        let key = match *repeats {
                            0 => card.name.clone(),
                            n => format!("{}#{}", card.name, n),
                        };
                        *repeats += 1;
                        renderer.card(&key, card)
                    })
                    .collect()
            }
        }
    }
}

/// Capability that turns card descriptions into toolkit nodes
pub trait CatalogRenderer {
    type Node;

    /// The single "no items match" node
    fn placeholder(&self) -> Self::Node;

    /// One card; `key` is unique within the view
    fn card(&self, key: &str, card: &ItemCard) -> Self::Node;
}
