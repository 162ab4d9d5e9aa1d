//! Report Service - validates and forwards problem reports

use std::sync::Arc;

use crate::ports::outbound::{ProblemReport, ReportError, ReportSinkPort};

pub struct ReportService {
    sink: Arc<dyn ReportSinkPort>,
}

impl ReportService {
    pub fn new(sink: Arc<dyn ReportSinkPort>) -> Self {
        Self { sink }
    }

    /// Send a report about `item`. Blank messages never reach the sink.
    pub async fn submit(&self, item: &str, message: &str) -> Result<(), ReportError> {
        let report = ProblemReport::new(item, message)?;

        self.sink.submit(&report).await.inspect_err(|e| {
            tracing::warn!(item = %report.item(), error = %e, "Problem report not delivered");
        })?;

        tracing::info!(item = %report.item(), "Problem report sent");
        Ok(())
    }
}
