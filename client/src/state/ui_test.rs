use super::*;

#[test]
fn default_view_is_chat() {
    assert_eq!(ActiveView::default(), ActiveView::Chat);
}

#[test]
fn all_views_have_distinct_labels() {
    let labels: Vec<_> = ActiveView::ALL.iter().map(|v| v.label()).collect();
    assert_eq!(labels, vec!["Chat", "Dashboard"]);
}
