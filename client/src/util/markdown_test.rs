use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown_html("**12 units**\n\n- frame\n- battery");
    assert!(html.contains("<strong>12 units</strong>"));
    assert!(html.contains("<li>frame</li>"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| Part | Qty |\n|---|---|\n| Motor | 4 |");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>Motor</td>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
}
