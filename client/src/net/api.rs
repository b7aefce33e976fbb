//! REST API helpers for communicating with the procurement backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call resolves to
//! [`ApiError::Unavailable`] since these endpoints are only reached from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies all come back
//! as an [`ApiError`]. Nothing is retried; callers pick the UI fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AlertsResponse, ChatRequest, ChatResponse, HealthStatus, InventorySummary, StockoutRisksResponse,
    SupplierPerformanceResponse,
};

pub const HEALTH_ENDPOINT: &str = "/api/health";
pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const ALERTS_ENDPOINT: &str = "/api/alerts";
pub const INVENTORY_SUMMARY_ENDPOINT: &str = "/api/inventory-summary";
pub const STOCKOUT_RISKS_ENDPOINT: &str = "/api/stockout-risks";
pub const SUPPLIER_PERFORMANCE_ENDPOINT: &str = "/api/supplier-performance";

/// Failure of a single backend round trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Settled results of the four dashboard requests, one per section.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardFetch {
    pub alerts: Result<AlertsResponse, ApiError>,
    pub inventory_summary: Result<InventorySummary, ApiError>,
    pub stockout_risks: Result<StockoutRisksResponse, ApiError>,
    pub suppliers: Result<SupplierPerformanceResponse, ApiError>,
}

/// Fetch backend readiness from `/api/health`.
///
/// # Errors
///
/// Returns an [`ApiError`] on a transport failure, a non-OK status, or an
/// undecodable body.
pub async fn fetch_health() -> Result<HealthStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(HEALTH_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Ask the assistant a question via `POST /api/chat`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request cannot be sent, the backend answers
/// with a non-OK status, or the reply does not decode.
pub async fn post_chat(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch current alerts from `/api/alerts`.
///
/// # Errors
///
/// Returns an [`ApiError`] on a transport failure, a non-OK status, or an
/// undecodable body.
pub async fn fetch_alerts() -> Result<AlertsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ALERTS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch inventory totals from `/api/inventory-summary`.
///
/// # Errors
///
/// Returns an [`ApiError`] on a transport failure, a non-OK status, or an
/// undecodable body.
pub async fn fetch_inventory_summary() -> Result<InventorySummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(INVENTORY_SUMMARY_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the stockout forecast from `/api/stockout-risks`.
///
/// # Errors
///
/// Returns an [`ApiError`] on a transport failure, a non-OK status, or an
/// undecodable body.
pub async fn fetch_stockout_risks() -> Result<StockoutRisksResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(STOCKOUT_RISKS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch supplier scores from `/api/supplier-performance`.
///
/// # Errors
///
/// Returns an [`ApiError`] on a transport failure, a non-OK status, or an
/// undecodable body.
pub async fn fetch_supplier_performance() -> Result<SupplierPerformanceResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(SUPPLIER_PERFORMANCE_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Issue the four dashboard requests concurrently and wait for all of them
/// to settle. Individual failures do not short-circuit the others.
pub async fn fetch_dashboard() -> DashboardFetch {
    let (alerts, inventory_summary, stockout_risks, suppliers) = futures::join!(
        fetch_alerts(),
        fetch_inventory_summary(),
        fetch_stockout_risks(),
        fetch_supplier_performance()
    );
    DashboardFetch { alerts, inventory_summary, stockout_risks, suppliers }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
