//! Per-card problem report form

use dioxus::prelude::*;

use crate::ports::outbound::{ReportError, ITEM_FIELD, MESSAGE_FIELD};
use crate::ui::presentation::messages::{
    REPORT_BUTTON, REPORT_EMPTY, REPORT_FAILED, REPORT_PLACEHOLDER, REPORT_SENDING, REPORT_SENT,
};
use crate::ui::presentation::services::use_report_service;
use crate::ui::presentation::state::{ReportState, ReportStatus};

#[component]
pub fn ReportForm(item: String) -> Element {
    let reports = use_report_service();
    let mut state = use_context::<ReportState>();
    let mut message = use_signal(String::new);
    let status = state.status(&item);
    let sending = status == ReportStatus::Sending;
    let item_name = item.clone();

    rsx! {
        form {
            class: "report-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                let text = message.read().clone();
                if !text.trim().is_empty() {
                    message.set(String::new());
                }
                state.submit(reports.clone(), item_name.clone(), text);
            },

            input { r#type: "hidden", name: ITEM_FIELD, value: "{item}" }
            textarea {
                name: MESSAGE_FIELD,
                placeholder: REPORT_PLACEHOLDER,
                required: true,
                value: "{message}",
                oninput: move |e| message.set(e.value()),
            }
            button {
                r#type: "submit",
                class: "report-button",
                disabled: sending,
                "{REPORT_BUTTON}"
            }

            match status {
                ReportStatus::Idle => rsx! {},
                ReportStatus::Sending => rsx! { p { class: "report-status", "{REPORT_SENDING}" } },
                ReportStatus::Sent => rsx! { p { class: "report-status sent", "{REPORT_SENT}" } },
                ReportStatus::Failed(ReportError::EmptyMessage) => rsx! {
                    p { class: "report-status failed", "{REPORT_EMPTY}" }
                },
                ReportStatus::Failed(_) => rsx! { p { class: "report-status failed", "{REPORT_FAILED}" } },
            }
        }
    }
}
