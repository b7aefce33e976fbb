//! Alert cards with a per-severity count header.

#[cfg(test)]
#[path = "alert_list_test.rs"]
mod alert_list_test;

use leptos::prelude::*;

use crate::net::types::{Alert, Severity};
use crate::state::dashboard::SeverityCounts;

#[component]
pub fn AlertList(alerts: Vec<Alert>, counts: SeverityCounts) -> impl IntoView {
    let chips = [
        (Severity::Critical, counts.critical),
        (Severity::High, counts.high),
        (Severity::Medium, counts.medium),
        (Severity::Low, counts.low),
    ];

    view! {
        <div class="alert-list">
            <div class="alert-list__counts">
                {chips
                    .into_iter()
                    .map(|(severity, count)| {
                        view! {
                            <span class=severity_chip_class(severity)>
                                {format!("{count} {}", severity.as_str())}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {if alerts.is_empty() {
                view! { <p class="alert-list__empty">"No active alerts"</p> }.into_any()
            } else {
                alerts
                    .into_iter()
                    .map(|alert| {
                        view! {
                            <div class=severity_card_class(alert.severity)>
                                <div class="alert-card__header">
                                    <span class="alert-card__severity">{alert.severity.as_str()}</span>
                                    <span class="alert-card__type">{alert_type_label(&alert.alert_type)}</span>
                                </div>
                                <p class="alert-card__message">{alert.message}</p>
                                <p class="alert-card__action">{alert.action_required}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

fn severity_card_class(severity: Severity) -> String {
    format!("alert-card alert-card--{}", severity.as_str())
}

fn severity_chip_class(severity: Severity) -> String {
    format!("alert-list__chip alert-list__chip--{}", severity.as_str())
}

/// `LOW_BUILD_CAPACITY` -> `Low build capacity`.
fn alert_type_label(alert_type: &str) -> String {
    let words = alert_type.trim().to_lowercase().replace('_', " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
