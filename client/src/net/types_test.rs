use super::*;

// =============================================================
// HealthStatus
// =============================================================

#[test]
fn health_status_keeps_unknown_fields() {
    let json = r#"{"status":"healthy","service":"Hugo API","agents_initialized":false}"#;
    let health: HealthStatus = serde_json::from_str(json).unwrap();
    assert!(!health.agents_initialized);
    assert_eq!(health.extra.get("service").and_then(|v| v.as_str()), Some("Hugo API"));
    assert_eq!(health.extra.get("status").and_then(|v| v.as_str()), Some("healthy"));
}

#[test]
fn health_status_without_flag_is_rejected() {
    let json = r#"{"status":"healthy"}"#;
    assert!(serde_json::from_str::<HealthStatus>(json).is_err());
}

// =============================================================
// Chat
// =============================================================

#[test]
fn chat_request_serializes_question_field() {
    let req = ChatRequest { question: "What is low?".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "question": "What is low?" }));
}

#[test]
fn chat_response_null_data_is_none() {
    let json = r#"{"answer":"12 units","data":null,"alerts":null}"#;
    let resp: ChatResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.answer, "12 units");
    assert!(resp.data.is_none());
}

#[test]
fn chat_response_keeps_structured_data() {
    let json = r#"{"answer":"12 units","data":{"qty":12}}"#;
    let resp: ChatResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.data, Some(serde_json::json!({ "qty": 12 })));
}

// =============================================================
// Alerts
// =============================================================

#[test]
fn severity_parses_known_labels() {
    let parsed: Vec<Severity> = serde_json::from_str(r#"["critical","high","medium","low"]"#).unwrap();
    assert_eq!(parsed, vec![Severity::Critical, Severity::High, Severity::Medium, Severity::Low]);
}

#[test]
fn severity_unrecognized_label_maps_to_unknown() {
    let parsed: Severity = serde_json::from_str(r#""catastrophic""#).unwrap();
    assert_eq!(parsed, Severity::Unknown);
    assert_eq!(parsed.as_str(), "unknown");
}

#[test]
fn alerts_response_ignores_extra_alert_fields() {
    let json = r#"{
        "total_alerts": 1,
        "by_severity": {"critical": 1, "high": 0, "medium": 0, "low": 0},
        "by_type": {"LOW_STOCK": 1},
        "alerts": [{
            "alert_type": "LOW_STOCK",
            "severity": "critical",
            "message": "Critical: Battery pack is at 0 units",
            "material_id": "M-100",
            "action_required": "Reorder immediately. Lot size: 50",
            "created_at": "2025-01-01T00:00:00"
        }]
    }"#;
    let resp: AlertsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.total_alerts, Some(1));
    assert_eq!(resp.alerts.len(), 1);
    assert_eq!(resp.alerts[0].severity, Severity::Critical);
    assert_eq!(resp.alerts[0].action_required, "Reorder immediately. Lot size: 50");
    assert_eq!(resp.by_severity.unwrap().get("critical"), Some(&1));
}

#[test]
fn alert_null_action_defaults_to_empty() {
    let json = r#"{"alert_type":"OVERDUE_ORDER","severity":"high","message":"late","action_required":null}"#;
    let alert: Alert = serde_json::from_str(json).unwrap();
    assert_eq!(alert.action_required, "");
}

// =============================================================
// Inventory summary
// =============================================================

#[test]
fn inventory_summary_accepts_integer_stock_value() {
    let json = r#"{"total_materials":40,"total_stock_value":0,"low_stock_count":3,"out_of_stock_count":1,"categories":[]}"#;
    let summary: InventorySummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.low_stock_count, 3);
    assert!(summary.total_stock_value.abs() < f64::EPSILON);
    assert_eq!(summary.total_materials, Some(40));
    assert_eq!(summary.out_of_stock_count, Some(1));
}

#[test]
fn inventory_summary_error_payload_is_rejected() {
    let json = r#"{"error":"Stock levels data not available"}"#;
    assert!(serde_json::from_str::<InventorySummary>(json).is_err());
}

// =============================================================
// Stockout risks
// =============================================================

#[test]
fn risk_row_status_key_is_lowercased_urgency() {
    let json = r#"{"material_id":"M-7","description":"Brake cable","days_until_stockout":3.5,"current_stock":4,"health_status":"LOW","urgency":"CRITICAL"}"#;
    let row: RiskRow = serde_json::from_str(json).unwrap();
    assert_eq!(row.status_key(), "critical");
    assert!((row.days_until_stockout - 3.5).abs() < f64::EPSILON);
}

#[test]
fn stockout_risks_missing_list_is_empty() {
    let resp: StockoutRisksResponse = serde_json::from_str(r#"{"count":0}"#).unwrap();
    assert!(resp.risks.is_empty());
}

// =============================================================
// Suppliers
// =============================================================

#[test]
fn supplier_row_reads_csv_column_names() {
    let json = r#"{"Supplier_ID":"S1","Supplier_Name":"Acme Motors","On_Time_Rate":92.5,"Lead_Time_Days":14,"Total_Orders":8}"#;
    let row: SupplierRow = serde_json::from_str(json).unwrap();
    assert_eq!(row.name, "Acme Motors");
    assert_eq!(row.on_time_rate, Some(92.5));
    assert_eq!(row.lead_time_days, Some(14.0));
}

#[test]
fn supplier_row_tolerates_nulls_from_left_join() {
    let json = r#"{"Supplier_ID":"S9","Supplier_Name":null,"On_Time_Rate":null}"#;
    let row: SupplierRow = serde_json::from_str(json).unwrap();
    assert_eq!(row.name, "");
    assert!(row.on_time_rate.is_none());
    assert!(row.lead_time_days.is_none());
}
