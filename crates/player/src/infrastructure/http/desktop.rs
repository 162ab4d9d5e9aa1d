//! Native HTTP adapters backed by reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};

use crate::ports::outbound::{
    CatalogSourcePort, LoadError, ProblemReport, ReportError, ReportSinkPort,
};

const REQUEST_TIMEOUT_SECS: u64 = 30;

fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Catalog fetched with a GET against an absolute URL
#[derive(Clone)]
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSourcePort for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<String, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
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
    client: Client,
    endpoint: String,
}

impl FormReportSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ReportSinkPort for FormReportSink {
    async fn submit(&self, report: &ProblemReport) -> Result<(), ReportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(&report.form_fields())
            .send()
            .await
            .map_err(|e| ReportError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}
