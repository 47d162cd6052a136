//! Inline highlighting for short values embedded in prose.
//!
//! Renders a single scalar or short value as one compact line, string-styled
//! the way the documentation page quotes snippets. No copy affordance and no
//! expansion; for anything structural use the full JSON highlighter.

use serde_json::Value;

use super::types::{StyledLine, StyledSegment, TokenKind};

/// Render a value as compact inline markup.
///
/// Strings render quoted; everything else renders as its compact JSON text.
pub fn inline_value(value: &Value) -> StyledLine {
    let text = match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    };
    StyledLine::new(vec![StyledSegment::new(text, TokenKind::Str)])
}

/// Render a plain string snippet inline (quoted, string-styled).
pub fn inline_str(text: &str) -> StyledLine {
    inline_value(&Value::String(text.to_string()))
}
