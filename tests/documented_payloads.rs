//! End-to-end rendering of the payloads the documentation advertises.

use serde_json::json;

use pkgsearch_console::docs;
use pkgsearch_console::highlight::{
    CodeBlock, HighlightOptions, JsonHighlighter, StyledLine, TokenKind, canonical_json, to_plain,
};

fn texts(lines: &[StyledLine]) -> Vec<String> {
    lines.iter().map(StyledLine::text).collect()
}

#[test]
fn ping_response_renders_three_lines() {
    let highlighter = JsonHighlighter::new(HighlightOptions::default());
    let lines = highlighter.render(&json!({"message": "pong"}));
    assert_eq!(texts(&lines), vec!["{", "    \"message\": \"pong\"", "}"]);
}

#[test]
fn search_response_renders_nested_results() {
    let value = json!({"results": [{"PackageIdentifier": "Microsoft.VisualStudioCode"}]});
    let lines = JsonHighlighter::new(HighlightOptions::default()).render(&value);
    let rendered = to_plain(&lines);
    assert!(rendered.contains("    \"results\": ["));
    assert!(rendered.contains("        {"));
    assert!(
        rendered.contains("            \"PackageIdentifier\": \"Microsoft.VisualStudioCode\"")
    );

    let key = lines
        .iter()
        .flat_map(|l| &l.segments)
        .find(|s| s.text == "\"PackageIdentifier\"")
        .unwrap();
    assert_eq!(key.kind, TokenKind::Key);
}

#[test]
fn documented_curl_example_highlights_verbs_and_flags() {
    let endpoint = docs::find("search").unwrap();
    let lines = CodeBlock::new(&docs::curl_example(&endpoint), "bash").render();

    let all: Vec<_> = lines.iter().flat_map(|l| &l.segments).collect();
    assert!(all.iter().any(|s| s.text == "GET" && s.kind == TokenKind::Keyword));
    assert!(all.iter().any(|s| s.text == "-X" && s.kind == TokenKind::Flag));
    assert!(all.iter().any(|s| s.text == "-H" && s.kind == TokenKind::Flag));
}

#[test]
fn status_report_payload_round_trips_through_copy_text() {
    // The shape the status command renders and copies.
    let value = json!({
        "success": true,
        "outcome": "success",
        "status": 200,
        "data": {"message": "pong"},
        "responseTime": 87,
        "timestamp": "2025-01-01T00:00:00+00:00"
    });
    for compact in [true, false] {
        let copied = canonical_json(&value, compact);
        let parsed: serde_json::Value = serde_json::from_str(&copied).unwrap();
        assert_eq!(parsed, value);
    }
}

#[test]
fn docs_page_renders_every_endpoint_path() {
    let rendered = to_plain(&docs::render_all());
    for endpoint in docs::catalog() {
        assert!(rendered.contains(endpoint.path), "missing {}", endpoint.path);
    }
}
