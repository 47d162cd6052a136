//! Core data types for the highlighting framework.

/// Kind of token a styled segment represents.
///
/// The renderer tags every segment with the kind of the source token; a
/// display target (the ANSI writer, a test) decides what each kind looks
/// like. `Text` is the undifferentiated fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An object key, including its quotes.
    Key,
    /// A string value, including its quotes.
    Str,
    /// A numeric value.
    Num,
    /// A boolean value (also `true`/`false`/`null` keywords in code blocks).
    Bool,
    /// The `null` literal in JSON documents.
    Null,
    /// Structural punctuation: brackets, braces, colons, commas.
    Punct,
    /// A protocol keyword in code blocks (`curl`, `GET`, `POST`, ...).
    Keyword,
    /// A flag-like token in code blocks (`-X`, `-H`, ...).
    Flag,
    /// Anything else: plain text, whitespace, indentation.
    Text,
}

/// A segment of tagged text within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    /// The text content.
    pub text: String,
    /// The token kind controlling how this segment is displayed.
    pub kind: TokenKind,
}

impl StyledSegment {
    /// Create a new segment.
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A single line of tagged output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    /// The segments making up this line, in display order.
    pub segments: Vec<StyledSegment>,
}

impl StyledLine {
    /// Create a new line from segments.
    pub fn new(segments: Vec<StyledSegment>) -> Self {
        Self { segments }
    }

    /// Create a plain untagged line from text.
    pub fn plain(text: &str) -> Self {
        Self {
            segments: vec![StyledSegment::new(text, TokenKind::Text)],
        }
    }

    /// The line's text with all tagging stripped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Options controlling the JSON highlighter's layout.
#[derive(Debug, Clone, Copy)]
pub struct HighlightOptions {
    /// Compact mode: 2-space indentation and no space after colons.
    /// Default mode uses 4-space indentation and a space after colons.
    pub compact: bool,
    /// Starting nesting depth; indentation begins this many levels deep.
    pub nesting_level: usize,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            compact: false,
            nesting_level: 0,
        }
    }
}

impl HighlightOptions {
    /// Compact rendering at depth zero.
    pub fn compact() -> Self {
        Self {
            compact: true,
            nesting_level: 0,
        }
    }

    pub(crate) fn indent_unit(&self) -> &'static str {
        if self.compact { "  " } else { "    " }
    }

    pub(crate) fn colon(&self) -> &'static str {
        if self.compact { ":" } else { ": " }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let line = StyledLine::plain("hello");
        assert_eq!(line.segments.len(), 1);
        assert_eq!(line.segments[0].kind, TokenKind::Text);
        assert_eq!(line.text(), "hello");
    }

    #[test]
    fn test_line_text_concatenates_segments() {
        let line = StyledLine::new(vec![
            StyledSegment::new("\"key\"", TokenKind::Key),
            StyledSegment::new(": ", TokenKind::Punct),
            StyledSegment::new("42", TokenKind::Num),
        ]);
        assert_eq!(line.text(), "\"key\": 42");
    }

    #[test]
    fn test_options_indent_and_colon() {
        let defaults = HighlightOptions::default();
        assert_eq!(defaults.indent_unit(), "    ");
        assert_eq!(defaults.colon(), ": ");

        let compact = HighlightOptions::compact();
        assert_eq!(compact.indent_unit(), "  ");
        assert_eq!(compact.colon(), ":");
    }
}
