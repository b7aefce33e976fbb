//! Wire-format DTOs for the procurement backend endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly (including the CSV-derived
//! `Supplier_Name` style columns) so payloads decode without a mapping layer.
//! Only the fields the UI reads are required; everything else is optional or
//! passed through opaquely.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend readiness payload from `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Whether every backend agent and service finished initializing.
    pub agents_initialized: bool,
    /// Remaining fields (`status`, `service`, ...) kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Reply from `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant answer, usually markdown.
    pub answer: String,
    /// Structured data the agent used to build the answer, if any.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Alert severity as emitted by the backend's reactive agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// Lower-case key used for display and CSS modifiers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }
}

/// A single operational alert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub severity: Severity,
    /// Machine-readable category, e.g. `LOW_STOCK` or `OVERDUE_ORDER`.
    pub alert_type: String,
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action_required: String,
}

/// Payload from `GET /api/alerts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertsResponse {
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub total_alerts: Option<u64>,
    /// Per-severity counts keyed by lower-case severity name.
    #[serde(default)]
    pub by_severity: Option<BTreeMap<String, u64>>,
}

/// Payload from `GET /api/inventory-summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub low_stock_count: u64,
    pub total_stock_value: f64,
    #[serde(default)]
    pub total_materials: Option<u64>,
    #[serde(default)]
    pub out_of_stock_count: Option<u64>,
}

/// One material forecast to run out within the backend's horizon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskRow {
    pub description: String,
    /// Days of stock left; the backend rounds to one decimal.
    pub days_until_stockout: f64,
    /// Upper-case urgency label such as `CRITICAL`, `HIGH` or `MEDIUM`.
    pub urgency: String,
}

impl RiskRow {
    /// Status key derived from the urgency label (`"CRITICAL"` -> `"critical"`).
    pub fn status_key(&self) -> String {
        self.urgency.trim().to_lowercase()
    }
}

/// Payload from `GET /api/stockout-risks`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StockoutRisksResponse {
    #[serde(default)]
    pub risks: Vec<RiskRow>,
}

/// Supplier performance row. Columns come straight from the backend's CSV
/// merge, so any of them may be null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplierRow {
    #[serde(rename = "Supplier_Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Delivered share of orders, 0-100.
    #[serde(rename = "On_Time_Rate", default)]
    pub on_time_rate: Option<f64>,
    #[serde(rename = "Lead_Time_Days", default)]
    pub lead_time_days: Option<f64>,
}

/// Payload from `GET /api/supplier-performance`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierPerformanceResponse {
    #[serde(default)]
    pub suppliers: Vec<SupplierRow>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
