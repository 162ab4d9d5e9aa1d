//! Option ordering strategies for dropdowns
//!
//! Each facet names the strategy its dropdown sorts by. Orderings are built
//! from sort keys so every strategy is a total order, which `slice::sort_by`
//! relies on.
//!
//! Text compares the way a locale collator does for Portuguese labels: base
//! letters first, then accents (`a` before `á`), then case (`a` before `A`).

use std::str::FromStr;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::DomainError;

/// How a dropdown orders its options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionOrder {
    /// Accent- and case-insensitive comparison, ties broken by accents,
    /// then case, then the raw string
    #[default]
    Lexicographic,
    /// Values made of `marker` followed by an integer (`+10`, `+2 raro`)
    /// compare numerically among themselves and sit where the marker itself
    /// sorts; anything else compares lexicographically.
    MarkerNumeric { marker: char },
}

impl OptionOrder {
    /// The `+N` level convention used by the catalog
    pub const PLUS_NUMERIC: Self = Self::MarkerNumeric { marker: '+' };

    /// Sort `values` in place by this strategy.
    pub fn sort(&self, values: &mut [String]) {
        values.sort_by_cached_key(|value| self.key(value));
    }

    fn key(&self, value: &str) -> SortKey {
        match self {
            OptionOrder::Lexicographic => SortKey::lexicographic(value),
            OptionOrder::MarkerNumeric { marker } => match marker_number(value, *marker) {
                Some(number) => SortKey {
                    base: marker.to_lowercase().collect(),
                    number: Some(number),
                    ..SortKey::lexicographic(value)
                },
                None => SortKey::lexicographic(value),
            },
        }
    }
}

impl FromStr for OptionOrder {
    type Err = DomainError;

    /// Accepts `lexicographic` or `marker:<char>` (e.g. `marker:+`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("lexicographic") {
            return Ok(Self::Lexicographic);
        }
        if let Some(rest) = trimmed.strip_prefix("marker:") {
            let mut chars = rest.chars();
            if let (Some(marker), None) = (chars.next(), chars.next()) {
                return Ok(Self::MarkerNumeric { marker });
            }
        }
        Err(DomainError::validation(format!(
            "Unknown option order: {}",
            s
        )))
    }
}

/// Field order is comparison priority
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    /// Lowercase text with diacritics removed
    base: String,
    number: Option<i64>,
    /// Lowercase decomposed text, diacritics kept
    accented: String,
    /// Uppercase flag per base character; lowercase sorts first
    case: Vec<bool>,
    raw: String,
}

impl SortKey {
    fn lexicographic(value: &str) -> Self {
        let accented: String = value.nfd().flat_map(char::to_lowercase).collect();
        let base = accented
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .collect();
        let case = value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect();
        Self {
            base,
            number: None,
            accented,
            case,
            raw: value.to_string(),
        }
    }
}

/// Integer following `marker`, read from the leading digits (with an optional
/// minus sign) the way `parseInt` would. `None` if there are no digits.
fn marker_number(value: &str, marker: char) -> Option<i64> {
    let suffix = value.strip_prefix(marker)?;
    let (negative, digits) = match suffix.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, suffix),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let number: i64 = digits[..end].parse().ok()?;
    Some(if negative { -number } else { number })
}
