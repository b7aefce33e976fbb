//! Degraded-mode warning shown while backend agents are not initialized.

use leptos::prelude::*;

use crate::state::health::HealthState;

/// Persistent banner; renders nothing unless the backend reported
/// `agents_initialized: false`.
#[component]
pub fn HealthBanner(health: ReadSignal<HealthState>) -> impl IntoView {
    view! {
        <Show when=move || health.with(HealthState::banner_visible)>
            <div class="health-banner" role="alert">
                "Hugo is still starting up: some agents are not initialized yet, so answers and dashboard data may be incomplete."
            </div>
        </Show>
    }
}
