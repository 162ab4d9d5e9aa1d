pub mod http;

#[cfg(not(target_arch = "wasm32"))]
pub mod file_source;

pub mod testing;

use std::path::PathBuf;
use std::sync::Arc;

use crate::ports::outbound::{CatalogSourcePort, ReportSinkPort};

pub use http::{FormReportSink, HttpCatalogSource};

/// Where a configured catalog location points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    /// Fetched over HTTP. On the web target relative paths land here too.
    Remote(String),
    /// Read from disk
    Local(PathBuf),
}

impl CatalogLocation {
    /// Classify a configured location.
    ///
    /// `http`/`https` URLs are remote and `file://` URLs are local. Anything
    /// else is a path on desktop and a page-relative URL in the browser.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        match url::Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                Self::Remote(location.to_string())
            }
            #[cfg(any(unix, windows))]
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Self::Local(path),
                Err(()) => Self::Local(PathBuf::from(url.path())),
            },
            _ if cfg!(target_arch = "wasm32") => Self::Remote(location.to_string()),
            _ => Self::Local(PathBuf::from(location)),
        }
    }
}

/// Build the catalog source adapter for a configured location
pub fn create_catalog_source(location: &str) -> Arc<dyn CatalogSourcePort> {
    match CatalogLocation::parse(location) {
        CatalogLocation::Remote(url) => Arc::new(HttpCatalogSource::new(url)),
        #[cfg(not(target_arch = "wasm32"))]
        CatalogLocation::Local(path) => Arc::new(file_source::FileCatalogSource::new(path)),
        #[cfg(target_arch = "wasm32")]
        CatalogLocation::Local(path) => {
            Arc::new(HttpCatalogSource::new(path.display().to_string()))
        }
    }
}

/// Build the report sink adapter for a form endpoint
pub fn create_report_sink(endpoint: &str) -> Arc<dyn ReportSinkPort> {
    Arc::new(FormReportSink::new(endpoint.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_are_remote() {
        assert_eq!(
            CatalogLocation::parse("https://example.com/dados.json"),
            CatalogLocation::Remote("https://example.com/dados.json".into())
        );
    }

    #[test]
    fn bare_names_are_local_paths() {
        assert_eq!(
            CatalogLocation::parse("dados.json"),
            CatalogLocation::Local(PathBuf::from("dados.json"))
        );
        assert_eq!(
            CatalogLocation::parse("data/dados.json"),
            CatalogLocation::Local(PathBuf::from("data/dados.json"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_urls_become_paths() {
        assert_eq!(
            CatalogLocation::parse("file:///srv/loot/dados.json"),
            CatalogLocation::Local(PathBuf::from("/srv/loot/dados.json"))
        );
    }

    #[test]
    fn factory_reports_the_location() {
        let source = create_catalog_source("https://example.com/dados.json");
        assert_eq!(source.location(), "https://example.com/dados.json");
    }
}
