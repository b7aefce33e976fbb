//! Headline figure card for the dashboard.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String, #[prop(optional)] warn: bool) -> impl IntoView {
    view! {
        <div class="stat-card" class:stat-card--warn=warn>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
