//! Problem report state
//!
//! Report submissions belong to the app, not to the card that started them:
//! changing a filter can unmount a card while its report is in flight, and
//! the report must still be delivered and its outcome kept for when the card
//! comes back.

use std::collections::HashMap;
use std::sync::Arc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::application::services::ReportService;
use crate::ports::outbound::ReportError;

#[derive(Clone, Debug, PartialEq)]
pub enum ReportStatus {
    Idle,
    Sending,
    Sent,
    Failed(ReportError),
}

/// Latest report outcome per item name
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportLedger {
    statuses: HashMap<String, ReportStatus>,
}

impl ReportLedger {
    pub fn status(&self, item: &str) -> ReportStatus {
        self.statuses
            .get(item)
            .cloned()
            .unwrap_or(ReportStatus::Idle)
    }

    pub fn is_sending(&self, item: &str) -> bool {
        self.status(item) == ReportStatus::Sending
    }

    pub fn begin(&mut self, item: &str) {
        self.statuses.insert(item.to_string(), ReportStatus::Sending);
    }

    pub fn finish(&mut self, item: &str, outcome: Result<(), ReportError>) {
        let status = match outcome {
            Ok(()) => ReportStatus::Sent,
            Err(e) => ReportStatus::Failed(e),
        };
        self.statuses.insert(item.to_string(), status);
    }
}

#[derive(Clone, Copy)]
pub struct ReportState {
    pub ledger: Signal<ReportLedger>,
}

impl ReportState {
    pub fn new() -> Self {
        Self {
            ledger: Signal::new(ReportLedger::default()),
        }
    }

    pub fn status(&self, item: &str) -> ReportStatus {
        self.ledger.read().status(item)
    }

    /// Send a report on a task that outlives the submitting component.
    /// A second submit for the same item while one is in flight is ignored.
    pub fn submit(&mut self, reports: Arc<ReportService>, item: String, message: String) {
        if self.ledger.read().is_sending(&item) {
            tracing::debug!(%item, "Report already in flight");
            return;
        }
        self.ledger.write().begin(&item);

        let mut ledger = self.ledger;
        spawn_forever(async move {
            let outcome = reports.submit(&item, &message).await;
            ledger.write().finish(&item, outcome);
        });
    }
}

impl Default for ReportState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_item_is_idle() {
        assert_eq!(ReportLedger::default().status("Espada"), ReportStatus::Idle);
    }

    #[test]
    fn outcome_is_kept_per_item() {
        let mut ledger = ReportLedger::default();
        ledger.begin("Espada");
        ledger.begin("Cajado");

        ledger.finish("Espada", Ok(()));

        assert_eq!(ledger.status("Espada"), ReportStatus::Sent);
        assert!(ledger.is_sending("Cajado"));
    }

    #[test]
    fn failure_is_recorded() {
        let mut ledger = ReportLedger::default();
        ledger.begin("Elmo");

        ledger.finish("Elmo", Err(ReportError::Rejected(422)));

        assert_eq!(
            ledger.status("Elmo"),
            ReportStatus::Failed(ReportError::Rejected(422))
        );
        assert!(!ledger.is_sending("Elmo"));
    }

    #[test]
    fn resubmitting_replaces_the_previous_outcome() {
        let mut ledger = ReportLedger::default();
        ledger.begin("Elmo");
        ledger.finish("Elmo", Err(ReportError::Transport("timeout".to_string())));

        ledger.begin("Elmo");

        assert_eq!(ledger.status("Elmo"), ReportStatus::Sending);
    }
}
