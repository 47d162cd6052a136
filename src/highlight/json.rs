//! JSON highlighter: renders a `serde_json::Value` as tagged lines.
//!
//! Walks the value tree and produces one [`StyledLine`] per structural line:
//!
//! - objects render as `{`, one `"key": value` entry per line indented one
//!   level deeper, then `}`; arrays the same with `[` and `]`
//! - every entry except the last in a container carries a trailing comma
//! - scalars are tagged by kind (string, number, boolean, null); keys and
//!   punctuation get their own kinds
//! - empty containers render inline as `{}` or `[]`
//! - a scalar at the top level renders as a single line of canonical text
//!
//! Rendering is a pure function of the value and [`HighlightOptions`]; the
//! input is never mutated and traversal follows key/array order. Recursion
//! carries no depth limit and handles payloads tens of levels deep.

use serde_json::Value;

use super::types::{HighlightOptions, StyledLine, StyledSegment, TokenKind};

/// Renders JSON values with kind-tagged syntax highlighting.
#[derive(Debug, Clone, Default)]
pub struct JsonHighlighter {
    opts: HighlightOptions,
}

impl JsonHighlighter {
    /// Create a new highlighter with the given options.
    pub fn new(opts: HighlightOptions) -> Self {
        Self { opts }
    }

    /// Render a value into tagged lines.
    pub fn render(&self, value: &Value) -> Vec<StyledLine> {
        let depth = self.opts.nesting_level;
        let mut lines = Vec::new();
        match value {
            Value::Object(_) | Value::Array(_) => {
                self.render_value(value, depth, self.lead(depth), false, &mut lines);
            }
            scalar => {
                // Top-level scalar: a single line of canonical JSON text,
                // tagged by the scalar's kind.
                let mut segments = self.lead(depth);
                segments.push(StyledSegment::new(
                    canonical_json(scalar, self.opts.compact),
                    scalar_kind(scalar),
                ));
                lines.push(StyledLine::new(segments));
            }
        }
        lines
    }

    /// Render one value. `lead` holds the segments that open the value's
    /// first line (indentation, and for object entries the key and colon);
    /// `trailing_comma` controls the separator after the value's last line.
    fn render_value(
        &self,
        value: &Value,
        depth: usize,
        lead: Vec<StyledSegment>,
        trailing_comma: bool,
        lines: &mut Vec<StyledLine>,
    ) {
        match value {
            Value::Object(map) => {
                if map.is_empty() {
                    lines.push(close_inline(lead, "{}", trailing_comma));
                    return;
                }
                lines.push(open_container(lead, "{"));
                let count = map.len();
                for (i, (key, entry)) in map.iter().enumerate() {
                    let mut entry_lead = self.lead(depth + 1);
                    entry_lead.push(key_segment(key));
                    entry_lead.push(punct_segment(self.opts.colon()));
                    self.render_value(entry, depth + 1, entry_lead, i + 1 < count, lines);
                }
                lines.push(self.close_line(depth, "}", trailing_comma));
            }
            Value::Array(items) => {
                if items.is_empty() {
                    lines.push(close_inline(lead, "[]", trailing_comma));
                    return;
                }
                lines.push(open_container(lead, "["));
                let count = items.len();
                for (i, item) in items.iter().enumerate() {
                    let item_lead = self.lead(depth + 1);
                    self.render_value(item, depth + 1, item_lead, i + 1 < count, lines);
                }
                lines.push(self.close_line(depth, "]", trailing_comma));
            }
            scalar => {
                let mut segments = lead;
                segments.push(style_scalar(scalar));
                if trailing_comma {
                    segments.push(punct_segment(","));
                }
                lines.push(StyledLine::new(segments));
            }
        }
    }

    /// Indentation segments for a line at the given depth.
    fn lead(&self, depth: usize) -> Vec<StyledSegment> {
        if depth == 0 {
            return Vec::new();
        }
        vec![StyledSegment::new(
            self.opts.indent_unit().repeat(depth),
            TokenKind::Text,
        )]
    }

    /// Closing bracket on its own line at the given depth.
    fn close_line(&self, depth: usize, bracket: &str, trailing_comma: bool) -> StyledLine {
        let mut segments = self.lead(depth);
        segments.push(punct_segment(bracket));
        if trailing_comma {
            segments.push(punct_segment(","));
        }
        StyledLine::new(segments)
    }
}

// ---------------------------------------------------------------------------
// Segment helpers
// ---------------------------------------------------------------------------

/// Token kind for a scalar value.
fn scalar_kind(value: &Value) -> TokenKind {
    match value {
        Value::String(_) => TokenKind::Str,
        Value::Number(_) => TokenKind::Num,
        Value::Bool(_) => TokenKind::Bool,
        Value::Null => TokenKind::Null,
        // Containers are handled by render_value.
        _ => TokenKind::Text,
    }
}

/// Style a scalar JSON value by kind.
fn style_scalar(value: &Value) -> StyledSegment {
    let text = match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    };
    StyledSegment::new(text, scalar_kind(value))
}

fn key_segment(key: &str) -> StyledSegment {
    StyledSegment::new(format!("\"{key}\""), TokenKind::Key)
}

fn punct_segment(text: &str) -> StyledSegment {
    StyledSegment::new(text, TokenKind::Punct)
}

fn open_container(mut lead: Vec<StyledSegment>, bracket: &str) -> StyledLine {
    lead.push(punct_segment(bracket));
    StyledLine::new(lead)
}

fn close_inline(mut lead: Vec<StyledSegment>, brackets: &str, trailing_comma: bool) -> StyledLine {
    lead.push(punct_segment(brackets));
    if trailing_comma {
        lead.push(punct_segment(","));
    }
    StyledLine::new(lead)
}

// ---------------------------------------------------------------------------
// Canonical serialization
// ---------------------------------------------------------------------------

/// Deterministic serialized form of a value: 2-space indentation in compact
/// mode, 4-space otherwise. This is what the copy action places on the
/// clipboard; it is a serialization of the original value, not of the
/// rendered markup.
pub fn canonical_json(value: &Value, compact: bool) -> String {
    use serde::Serialize;
    use serde_json::ser::{PrettyFormatter, Serializer};

    let indent: &[u8] = if compact { b"  " } else { b"    " };
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent);
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .expect("serializing a serde_json::Value to a Vec cannot fail");
    String::from_utf8(out).expect("serde_json output is valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> Vec<StyledLine> {
        JsonHighlighter::new(HighlightOptions::default()).render(value)
    }

    fn all_text(lines: &[StyledLine]) -> String {
        lines
            .iter()
            .map(StyledLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn count_commas(lines: &[StyledLine]) -> usize {
        lines
            .iter()
            .flat_map(|l| &l.segments)
            .filter(|s| s.kind == TokenKind::Punct && s.text == ",")
            .count()
    }

    // -- Top-level bracket choice follows the value's kind --

    #[test]
    fn test_object_renders_braces() {
        let lines = render(&json!({"a": 1}));
        assert_eq!(lines.first().unwrap().text(), "{");
        assert_eq!(lines.last().unwrap().text(), "}");
    }

    #[test]
    fn test_array_renders_brackets() {
        let lines = render(&json!([1, 2]));
        assert_eq!(lines.first().unwrap().text(), "[");
        assert_eq!(lines.last().unwrap().text(), "]");
    }

    #[test]
    fn test_top_level_scalars() {
        assert_eq!(all_text(&render(&json!("hi"))), "\"hi\"");
        assert_eq!(all_text(&render(&json!(3.5))), "3.5");
        assert_eq!(all_text(&render(&json!(true))), "true");
        assert_eq!(all_text(&render(&json!(null))), "null");
    }

    // -- Empty containers --

    #[test]
    fn test_empty_object_and_array_inline() {
        assert_eq!(all_text(&render(&json!({}))), "{}");
        assert_eq!(all_text(&render(&json!([]))), "[]");
    }

    #[test]
    fn test_empty_container_as_entry_value() {
        let lines = render(&json!({"a": {}, "b": []}));
        let text = all_text(&lines);
        assert!(text.contains("\"a\": {},"));
        assert!(text.contains("\"b\": []"));
    }

    // -- Comma placement --

    #[test]
    fn test_comma_count_is_entries_minus_one() {
        let lines = render(&json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(count_commas(&lines), 2);
        // The last entry's line must not end with a comma.
        assert_eq!(lines[3].text(), "    \"c\": 3");
    }

    #[test]
    fn test_array_comma_rule() {
        let lines = render(&json!(["x", "y"]));
        assert_eq!(lines[1].text(), "    \"x\",");
        assert_eq!(lines[2].text(), "    \"y\"");
    }

    #[test]
    fn test_nested_container_carries_parent_comma() {
        let lines = render(&json!({"inner": {"x": 1}, "after": 2}));
        // The nested object's closing brace carries the separating comma.
        assert_eq!(lines[3].text(), "    },");
    }

    // -- Layout end to end --

    #[test]
    fn test_pong_payload_default_layout() {
        let lines = render(&json!({"message": "pong"}));
        let texts: Vec<String> = lines.iter().map(StyledLine::text).collect();
        assert_eq!(texts, vec!["{", "    \"message\": \"pong\"", "}"]);
    }

    #[test]
    fn test_pong_payload_compact_layout() {
        let lines = JsonHighlighter::new(HighlightOptions::compact())
            .render(&json!({"message": "pong"}));
        let texts: Vec<String> = lines.iter().map(StyledLine::text).collect();
        assert_eq!(texts, vec!["{", "  \"message\":\"pong\"", "}"]);
    }

    #[test]
    fn test_results_payload_nesting() {
        let value = json!({"results": [{"PackageIdentifier": "Microsoft.VisualStudioCode"}]});
        let lines = render(&value);
        let texts: Vec<String> = lines.iter().map(StyledLine::text).collect();
        assert_eq!(
            texts,
            vec![
                "{",
                "    \"results\": [",
                "        {",
                "            \"PackageIdentifier\": \"Microsoft.VisualStudioCode\"",
                "        }",
                "    ]",
                "}",
            ]
        );
        // The nested key is tagged as a key, its value as a string.
        let entry = &lines[3].segments;
        assert!(
            entry
                .iter()
                .any(|s| s.kind == TokenKind::Key && s.text == "\"PackageIdentifier\"")
        );
        assert!(entry.iter().any(|s| s.kind == TokenKind::Str));
    }

    // -- Kind tagging --

    #[test]
    fn test_scalar_kinds() {
        let lines = render(&json!({"s": "v", "n": 7, "b": false, "z": null}));
        let kinds: Vec<TokenKind> = lines
            .iter()
            .flat_map(|l| &l.segments)
            .filter(|s| {
                matches!(
                    s.kind,
                    TokenKind::Str | TokenKind::Num | TokenKind::Bool | TokenKind::Null
                )
            })
            .map(|s| s.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Str, TokenKind::Num, TokenKind::Bool, TokenKind::Null]
        );
    }

    // -- Starting depth --

    #[test]
    fn test_nesting_level_offsets_indentation() {
        let hl = JsonHighlighter::new(HighlightOptions {
            compact: false,
            nesting_level: 2,
        });
        let lines = hl.render(&json!({"a": 1}));
        assert_eq!(lines[0].text(), "        {");
        assert_eq!(lines[1].text(), "            \"a\": 1");
        assert_eq!(lines[2].text(), "        }");
    }

    // -- Deep recursion --

    #[test]
    fn test_deeply_nested_value() {
        let mut value = json!({"leaf": true});
        for _ in 0..60 {
            value = json!({"next": value});
        }
        let lines = render(&value);
        // 60 wrappers + the innermost object: one open and one close line
        // each, plus the leaf entry.
        assert_eq!(lines.len(), 61 * 2 + 1);
        assert!(all_text(&lines).contains("\"leaf\": true"));
    }

    // -- Canonical serialization --

    #[test]
    fn test_canonical_round_trip_both_widths() {
        let value = json!({
            "message": "pong",
            "nested": {"results": [1, 2.5, true, null, "x"]},
            "empty": {}
        });
        for compact in [true, false] {
            let text = canonical_json(&value, compact);
            let parsed: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, value);
        }
    }

    #[test]
    fn test_canonical_indent_width() {
        let value = json!({"a": 1});
        assert!(canonical_json(&value, true).contains("\n  \"a\""));
        assert!(canonical_json(&value, false).contains("\n    \"a\""));
    }

    #[test]
    fn test_render_does_not_mutate_input() {
        let value = json!({"b": 1, "a": 2});
        let before = value.clone();
        let _ = render(&value);
        assert_eq!(value, before);
        // Key order is preserved, not sorted.
        let lines = render(&value);
        assert_eq!(lines[1].text(), "    \"b\": 1,");
    }
}
