use super::*;

#[test]
fn endpoints_match_backend_routes() {
    assert_eq!(HEALTH_ENDPOINT, "/api/health");
    assert_eq!(CHAT_ENDPOINT, "/api/chat");
    assert_eq!(ALERTS_ENDPOINT, "/api/alerts");
    assert_eq!(INVENTORY_SUMMARY_ENDPOINT, "/api/inventory-summary");
    assert_eq!(STOCKOUT_RISKS_ENDPOINT, "/api/stockout-risks");
    assert_eq!(SUPPLIER_PERFORMANCE_ENDPOINT, "/api/supplier-performance");
}

#[test]
fn api_error_messages_include_detail() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed: 503");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Decode("missing field `answer`".to_owned()).to_string(), "unexpected response: missing field `answer`");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let request = ChatRequest { question: "hello".to_owned() };
    assert_eq!(futures::executor::block_on(fetch_health()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(post_chat(&request)), Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_dashboard_settles_every_section() {
    let fetch = futures::executor::block_on(fetch_dashboard());
    assert_eq!(fetch.alerts, Err(ApiError::Unavailable));
    assert_eq!(fetch.inventory_summary, Err(ApiError::Unavailable));
    assert_eq!(fetch.stockout_risks, Err(ApiError::Unavailable));
    assert_eq!(fetch.suppliers, Err(ApiError::Unavailable));
}
