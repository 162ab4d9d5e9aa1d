//! Runtime configuration read from the environment
//!
//! | Variable                 | Default                           |
//! |--------------------------|-----------------------------------|
//! | `LOOTLENS_CATALOG_URL`   | `dados.json`                      |
//! | `LOOTLENS_REPORT_URL`    | `https://formspree.io/f/mdklrayw` |
//! | `LOOTLENS_CASCADE`       | `exclude-self`                    |
//! | `LOOTLENS_ORDER_<FACET>` | `marker:+`                        |
//!
//! `<FACET>` is one of `CLASS`, `TYPE`, `NAME`, `ADDONS`, `LEVEL`; values are
//! `lexicographic` or `marker:<char>`.
//!
//! In the browser there is no process environment, so the defaults apply.

use lootlens_domain::{BrowserConfig, CascadePolicy, Facet, OptionOrder};

pub const DEFAULT_CATALOG_LOCATION: &str = "dados.json";
pub const DEFAULT_REPORT_ENDPOINT: &str = "https://formspree.io/f/mdklrayw";

pub const CATALOG_URL_VAR: &str = "LOOTLENS_CATALOG_URL";
pub const REPORT_URL_VAR: &str = "LOOTLENS_REPORT_URL";
pub const CASCADE_VAR: &str = "LOOTLENS_CASCADE";
pub const ORDER_VAR_PREFIX: &str = "LOOTLENS_ORDER_";

/// Ordering variable for one facet, e.g. `LOOTLENS_ORDER_ADDONS`
pub fn order_var(facet: Facet) -> String {
    format!("{}{}", ORDER_VAR_PREFIX, facet.to_string().to_ascii_uppercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// URL or path of the catalog document
    pub catalog_location: String,
    /// Form endpoint receiving problem reports
    pub report_endpoint: String,
    pub cascade: CascadePolicy,
    /// Facets whose dropdown ordering was overridden
    pub orders: Vec<(Facet, OptionOrder)>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            catalog_location: DEFAULT_CATALOG_LOCATION.to_string(),
            report_endpoint: DEFAULT_REPORT_ENDPOINT.to_string(),
            cascade: CascadePolicy::default(),
            orders: Vec::new(),
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset and
    /// an unknown cascade policy falls back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let cascade = match get(CASCADE_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "Ignoring invalid {}", CASCADE_VAR);
                defaults.cascade
            }),
            None => defaults.cascade,
        };

        let orders = Facet::ALL
            .iter()
            .filter_map(|facet| {
                let var = order_var(*facet);
                let raw = get(var.as_str())?;
                match raw.parse::<OptionOrder>() {
                    Ok(order) => Some((*facet, order)),
                    Err(e) => {
                        tracing::warn!(value = %raw, error = %e, "Ignoring invalid {}", var);
                        None
                    }
                }
            })
            .collect();

        Self {
            catalog_location: get(CATALOG_URL_VAR).unwrap_or(defaults.catalog_location),
            report_endpoint: get(REPORT_URL_VAR).unwrap_or(defaults.report_endpoint),
            cascade,
            orders,
        }
    }

    pub fn browser_config(&self) -> BrowserConfig {
        self.orders
            .iter()
            .fold(BrowserConfig::new(self.cascade), |config, (facet, order)| {
                config.with_order(*facet, *order)
            })
    }
}
