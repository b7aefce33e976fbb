//! Top-level page: health banner, view switcher, and the active view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Checks backend health once when mounted and keeps the result in state it
//! owns, handing it to the banner as a prop. The chat and dashboard views are
//! mutually exclusive; their data lives in app-level context so switching
//! views does not lose it.

use leptos::prelude::*;

use crate::components::health_banner::HealthBanner;
use crate::components::nav_bar::NavBar;
use crate::pages::chat::ChatPage;
use crate::pages::dashboard::DashboardPage;
use crate::state::health::HealthState;
use crate::state::ui::ActiveView;

/// Shell page composing banner, navigation, and the selected view.
#[component]
pub fn ShellPage() -> impl IntoView {
    let health = RwSignal::new(HealthState::default());
    let active = RwSignal::new(ActiveView::default());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_health().await;
            health.set(HealthState::from_result(result));
        });
    }

    view! {
        <div class="shell">
            <HealthBanner health=health.read_only()/>
            <NavBar active=active/>
            <main class="shell__main">
                {move || match active.get() {
                    ActiveView::Chat => view! { <ChatPage/> }.into_any(),
                    ActiveView::Dashboard => view! { <DashboardPage/> }.into_any(),
                }}
            </main>
        </div>
    }
}
