use super::*;

#[test]
fn urgency_class_uses_lowercased_label() {
    let row = RiskRow { description: "Motor".to_owned(), days_until_stockout: 9.0, urgency: "HIGH".to_owned() };
    assert_eq!(urgency_class(&row), "status-badge status-badge--high");
}
