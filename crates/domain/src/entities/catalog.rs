//! Catalog - the full, immutable item collection for a session

use std::sync::Arc;

use crate::entities::Item;
use crate::error::DomainError;

/// The complete item collection as loaded.
///
/// Cloning is cheap (shared slice). Every filter pass starts from here,
/// never from a previously filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Decode a catalog document (a JSON array of items).
    ///
    /// Items are returned exactly as written: no normalization, no
    /// defaulting beyond an absent price history.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_documents() {
        let json = r#"[
            {"nome":"Espada","classe":"Guerreiro","tipo":"Arma","precoMedio":100,"adicionais":[],"nivel":["+1"]},
            {"nome":"Cajado","classe":"Mago","tipo":"Arma","precoMedio":90.5,"adicionais":["Gelo"],"nivel":[],"historicoPreco":[80,90]}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].name, "Espada");
        assert_eq!(catalog.items()[1].price_history, vec![80.0, 90.0]);
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = Catalog::from_json(r#"{"nome":"Espada"}"#).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Catalog::from_json("[{").is_err());
    }

    #[test]
    fn empty_array_is_a_valid_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn clones_share_items() {
        let catalog = Catalog::new(vec![Item::new("Espada", "Guerreiro", "Arma", 1.0)]);
        let copy = catalog.clone();
        assert!(std::ptr::eq(catalog.items(), copy.items()));
    }
}
