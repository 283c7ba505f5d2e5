use super::*;

#[test]
fn page_embeds_all_three_regions() {
    let html = render_page("BRIGADES", "SUBMISSIONS", "COMBINED", "");
    let brigades_at = html.find(r#"id="brigades-container""#).unwrap();
    let submissions_at = html.find(r#"id="submitions-container""#).unwrap();
    let combined_at = html.find(r#"id="all-container""#).unwrap();
    assert!(brigades_at < submissions_at && submissions_at < combined_at);
    assert!(html.contains("BRIGADES"));
    assert!(html.contains("SUBMISSIONS"));
    assert!(html.contains("COMBINED"));
}

#[test]
fn page_echoes_the_active_query() {
    let html = render_page("", "", "", "Al");
    assert!(html.contains(r#"Active filter: "Al""#));
}

#[test]
fn write_page_puts_the_document_on_disk() {
    let path = std::env::temp_dir().join("brigade-console-page-test.html");
    let html = render_page("", "", "", "");
    write_page(&path, &html).unwrap();
    let read_back = std::fs::read_to_string(&path).unwrap();
    assert_eq!(read_back, html);
    let _ = std::fs::remove_file(&path);
}
