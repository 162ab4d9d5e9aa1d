//! Browser HTTP adapters backed by gloo-net (fetch API)

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::ports::outbound::{
    CatalogSourcePort, LoadError, ProblemReport, ReportError, ReportSinkPort,
};

/// Catalog fetched with a GET. Relative URLs resolve against the page.
#[derive(Clone)]
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl CatalogSourcePort for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<String, LoadError> {
        let response = Request::get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(LoadError::Status {
                status: response.status(),
                location: self.url.clone(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Problem reports posted as a url-encoded form
#[derive(Clone)]
pub struct FormReportSink {
    endpoint: String,
}

impl FormReportSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl ReportSinkPort for FormReportSink {
    async fn submit(&self, report: &ProblemReport) -> Result<(), ReportError> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(report.form_fields())
            .finish();

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| ReportError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ReportError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ReportError::Rejected(response.status()));
        }
        Ok(())
    }
}
