use super::*;

#[test]
fn currency_groups_thousands_and_rounds() {
    assert_eq!(format_currency(1_234_567.49), "$1,234,567");
    assert_eq!(format_currency(999.5), "$1,000");
    assert_eq!(format_currency(0.0), "$0");
}

#[test]
fn currency_negative_keeps_sign() {
    assert_eq!(format_currency(-2500.0), "-$2,500");
}

#[test]
fn currency_non_finite_is_missing() {
    assert_eq!(format_currency(f64::NAN), MISSING);
    assert_eq!(format_currency(f64::INFINITY), MISSING);
}

#[test]
fn count_formats_or_falls_back() {
    assert_eq!(format_count(Some(40)), "40");
    assert_eq!(format_count(Some(12_000)), "12,000");
    assert_eq!(format_count(None), MISSING);
}

#[test]
fn percent_uses_one_decimal() {
    assert_eq!(format_percent(Some(92.456)), "92.5%");
    assert_eq!(format_percent(Some(100.0)), "100.0%");
    assert_eq!(format_percent(None), MISSING);
    assert_eq!(format_percent(Some(f64::NAN)), MISSING);
}

#[test]
fn days_drop_whole_fraction() {
    assert_eq!(format_days(Some(14.0)), "14 days");
    assert_eq!(format_days(Some(1.0)), "1 day");
    assert_eq!(format_days(Some(3.5)), "3.5 days");
    assert_eq!(format_days(None), MISSING);
}

#[test]
fn attached_data_is_pretty_printed() {
    let data = serde_json::json!({ "qty": 12 });
    assert_eq!(format_attached_data(&data), "{\n  \"qty\": 12\n}");
}
