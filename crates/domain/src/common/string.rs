//! String conversion utilities.

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// Dropdowns report "no filter" as the empty option value, so this is the
/// bridge between raw control values and [`crate::Selection`].
///
/// # Examples
///
/// ```
/// use lootlens_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty("Guerreiro"), Some("Guerreiro"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" ")); // Whitespace is not empty
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Owned version of [`none_if_empty`].
///
/// # Examples
///
/// ```
/// use lootlens_domain::common::some_if_not_empty;
///
/// assert_eq!(some_if_not_empty("+7".to_string()), Some("+7".to_string()));
/// assert_eq!(some_if_not_empty(String::new()), None);
/// ```
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Formats a price the way the catalog shows it: shortest round-trip form,
/// without a trailing `.0` for whole values.
///
/// ```
/// use lootlens_domain::common::format_price;
///
/// assert_eq!(format_price(150.0), "R$ 150");
/// assert_eq!(format_price(12.5), "R$ 12.5");
/// ```
pub fn format_price(value: f64) -> String {
    format!("R$ {}", value)
}
