//! Dashboard view: alert, inventory, stockout, and supplier summaries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The first time this view mounts it fires the four dashboard requests
//! concurrently and commits them with one `DashboardState::apply`. Later
//! mounts reuse the committed snapshot; there is no polling and no manual
//! refresh.

use leptos::prelude::*;

use crate::components::alert_list::AlertList;
use crate::components::risk_table::RiskTable;
use crate::components::stat_card::StatCard;
use crate::components::supplier_table::SupplierTable;
use crate::state::dashboard::DashboardState;
use crate::util::format::{format_count, format_currency};

/// Dashboard page bound to the app-level `DashboardState` context.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    Effect::new(move || {
        let should_fetch = dashboard.try_update(DashboardState::begin_refresh).unwrap_or(false);
        if !should_fetch {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let fetch = crate::net::api::fetch_dashboard().await;
                let outcome = dashboard.try_update(|d| d.apply(fetch));
                if let Some(crate::state::dashboard::RefreshOutcome::Partial { failed }) = outcome {
                    log::warn!("dashboard committed with {} failed section(s)", failed.len());
                }
            });
        }
    });

    let loading = Memo::new(move |_| dashboard.with(|d| d.loading));

    view! {
        <section class="dashboard-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="dashboard-page__loading">"Loading dashboard..."</p> }
            >
                <div class="dashboard-page__stats">
                    {move || {
                        let (total_alerts, summary) = dashboard.with(|d| (d.alert_counts.total, d.inventory_summary.clone()));
                        view! {
                            <StatCard label="Active alerts" value=format_count(Some(total_alerts))/>
                            <StatCard
                                label="Low stock items"
                                value=format_count(Some(summary.low_stock_count))
                                warn={summary.low_stock_count > 0}
                            />
                            <StatCard label="Total stock value" value=format_currency(summary.total_stock_value)/>
                            {summary
                                .total_materials
                                .map(|n| view! { <StatCard label="Materials tracked" value=format_count(Some(n))/> })}
                            {summary
                                .out_of_stock_count
                                .map(|n| view! { <StatCard label="Out of stock" value=format_count(Some(n)) warn={n > 0}/> })}
                        }
                    }}
                </div>

                <div class="dashboard-page__grid">
                    <div class="dashboard-page__panel">
                        <h2>"Alerts"</h2>
                        {move || {
                            let (alerts, counts) = dashboard.with(|d| (d.alerts.clone(), d.alert_counts));
                            view! { <AlertList alerts=alerts counts=counts/> }
                        }}
                    </div>
                    <div class="dashboard-page__panel">
                        <h2>"Stockout risks"</h2>
                        {move || view! { <RiskTable risks=dashboard.with(|d| d.stockout_risks.clone())/> }}
                    </div>
                    <div class="dashboard-page__panel">
                        <h2>"Supplier performance"</h2>
                        {move || view! { <SupplierTable suppliers=dashboard.with(|d| d.suppliers.clone())/> }}
                    </div>
                </div>
            </Show>
        </section>
    }
}
