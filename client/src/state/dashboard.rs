//! Dashboard snapshot: alerts, inventory totals, stockout risks, suppliers.
//!
//! DESIGN
//! ======
//! The page fetches all four sections in one concurrent cycle and commits the
//! settled results with a single [`DashboardState::apply`] call, so the view
//! never shows data from two different cycles.
//!
//! TRADE-OFFS
//! ==========
//! A failed section keeps whatever it held before (empty on first load) and
//! the page shows no error for it. `apply` still reports the failed sections
//! through [`RefreshOutcome::Partial`] so callers can log them.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::{ApiError, DashboardFetch};
use crate::net::types::{Alert, AlertsResponse, InventorySummary, RiskRow, Severity, SupplierRow};

/// One of the four independently fetched dashboard sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardSection {
    Alerts,
    InventorySummary,
    StockoutRisks,
    Suppliers,
}

impl DashboardSection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Alerts => "alerts",
            Self::InventorySummary => "inventory summary",
            Self::StockoutRisks => "stockout risks",
            Self::Suppliers => "supplier performance",
        }
    }
}

/// Result of committing one refresh cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// All four sections were replaced.
    Complete,
    /// These sections failed and kept their previous values.
    Partial { failed: Vec<DashboardSection> },
}

/// Alert counts per severity for the dashboard header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub total: u64,
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl SeverityCounts {
    /// Prefer the backend's own tallies; fall back to counting the list.
    pub fn from_response(resp: &AlertsResponse) -> Self {
        let count = |severity: Severity| {
            resp.by_severity
                .as_ref()
                .and_then(|m| m.get(severity.as_str()).copied())
                .unwrap_or_else(|| resp.alerts.iter().filter(|a| a.severity == severity).count() as u64)
        };
        Self {
            total: resp.total_alerts.unwrap_or(resp.alerts.len() as u64),
            critical: count(Severity::Critical),
            high: count(Severity::High),
            medium: count(Severity::Medium),
            low: count(Severity::Low),
        }
    }
}

/// Most recently committed dashboard data plus its loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub alerts: Vec<Alert>,
    pub alert_counts: SeverityCounts,
    pub inventory_summary: InventorySummary,
    pub stockout_risks: Vec<RiskRow>,
    pub suppliers: Vec<SupplierRow>,
    /// True until the first refresh cycle settles.
    pub loading: bool,
    /// Set once a refresh has been started; guards against refetching when
    /// the dashboard view is shown again.
    pub requested: bool,
    pub last_outcome: Option<RefreshOutcome>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            alerts: Vec::new(),
            alert_counts: SeverityCounts::default(),
            inventory_summary: InventorySummary::default(),
            stockout_risks: Vec::new(),
            suppliers: Vec::new(),
            loading: true,
            requested: false,
            last_outcome: None,
        }
    }
}

impl DashboardState {
    /// Claim the one refresh this dashboard performs. Returns `true` exactly
    /// once; later calls return `false`.
    pub fn begin_refresh(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    /// Commit a settled fetch cycle. Successful sections replace their
    /// fields, failed ones are logged and left as they were, and `loading`
    /// is cleared regardless.
    pub fn apply(&mut self, fetch: DashboardFetch) -> RefreshOutcome {
        let mut failed = Vec::new();

        match fetch.alerts {
            Ok(resp) => {
                self.alert_counts = SeverityCounts::from_response(&resp);
                self.alerts = resp.alerts;
            }
            Err(e) => record_failure(&mut failed, DashboardSection::Alerts, &e),
        }
        match fetch.inventory_summary {
            Ok(summary) => self.inventory_summary = summary,
            Err(e) => record_failure(&mut failed, DashboardSection::InventorySummary, &e),
        }
        match fetch.stockout_risks {
            Ok(resp) => self.stockout_risks = resp.risks,
            Err(e) => record_failure(&mut failed, DashboardSection::StockoutRisks, &e),
        }
        match fetch.suppliers {
            Ok(resp) => self.suppliers = resp.suppliers,
            Err(e) => record_failure(&mut failed, DashboardSection::Suppliers, &e),
        }

        self.loading = false;
        let outcome = if failed.is_empty() {
            RefreshOutcome::Complete
        } else {
            RefreshOutcome::Partial { failed }
        };
        self.last_outcome = Some(outcome.clone());
        outcome
    }
}

fn record_failure(failed: &mut Vec<DashboardSection>, section: DashboardSection, err: &ApiError) {
    log::warn!("dashboard {} fetch failed: {err}", section.label());
    failed.push(section);
}
