//! Code block rendering with a line-based token highlighter.
//!
//! A code block either contains JSON - in which case it delegates to the
//! JSON highlighter in compact mode - or arbitrary command/protocol text,
//! which is tokenized line by line. The tokenizer recognizes string
//! literals, integer literals, `true`/`false`/`null`, a fixed set of
//! protocol keywords (HTTP verbs and `curl`), and flag-like tokens starting
//! with a dash; everything else stays untagged.
//!
//! The flag heuristic is intentionally rough: any token matching `-[A-Za-z]`
//! is tagged as a flag, so dash-prefixed words classify as flags too. This
//! mirrors the documented behavior rather than attempting full shell
//! lexing.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::clipboard::ClipboardCopy;
use super::json::JsonHighlighter;
use super::types::{HighlightOptions, StyledLine, StyledSegment, TokenKind};

// ---------------------------------------------------------------------------
// Token regexes
// ---------------------------------------------------------------------------

fn re_string() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^["'].*["']$"#).expect("regex pattern is valid and should always compile")
    })
}

fn re_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d+$").expect("regex pattern is valid and should always compile")
    })
}

fn re_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(true|false|null)$").expect("regex pattern is valid and should always compile")
    })
}

fn re_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(curl|GET|POST|PUT|DELETE|HTTP)$")
            .expect("regex pattern is valid and should always compile")
    })
}

fn re_flag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-[A-Za-z]").expect("regex pattern is valid and should always compile")
    })
}

fn re_delimiter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\s+|[{}\[\]().,;:]").expect("regex pattern is valid and should always compile")
    })
}

// ---------------------------------------------------------------------------
// CodeBlock
// ---------------------------------------------------------------------------

/// A block of source text to highlight, with an optional title bar.
#[derive(Debug, Clone)]
pub struct CodeBlock<'a> {
    /// The raw source text. Copying a code block copies this verbatim.
    pub source: &'a str,
    /// Language label; `"json"` selects the JSON highlighter when the
    /// source parses.
    pub language: &'a str,
    /// Optional title shown in a bar above the content.
    pub title: Option<&'a str>,
}

impl<'a> CodeBlock<'a> {
    /// Create a code block without a title bar.
    pub fn new(source: &'a str, language: &'a str) -> Self {
        Self {
            source,
            language,
            title: None,
        }
    }

    /// Attach a title bar.
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Render the block into tagged lines.
    pub fn render(&self) -> Vec<StyledLine> {
        let mut lines = Vec::new();

        if let Some(title) = self.title {
            lines.push(StyledLine::new(vec![
                StyledSegment::new(title, TokenKind::Text),
                StyledSegment::new("  ", TokenKind::Text),
                StyledSegment::new(self.language.to_uppercase(), TokenKind::Punct),
            ]));
        }

        if self.language == "json"
            && let Ok(value) = serde_json::from_str::<Value>(self.source)
        {
            let highlighter = JsonHighlighter::new(HighlightOptions::compact());
            lines.extend(highlighter.render(&value));
            return lines;
        }

        for raw in self.source.lines() {
            lines.push(tokenize_line(raw));
        }
        lines
    }

    /// Copy the raw source text verbatim, never a re-serialization.
    pub fn copy(&self, clipboard: &mut ClipboardCopy) {
        clipboard.copy_text(self.source);
    }
}

/// Tokenize one line of non-JSON source into tagged segments.
pub fn tokenize_line(line: &str) -> StyledLine {
    let segments = split_keeping_delimiters(line)
        .into_iter()
        .map(|token| StyledSegment::new(token, classify(token)))
        .collect();
    StyledLine::new(segments)
}

/// Classify a single token. Order matters: the first matching class wins.
fn classify(token: &str) -> TokenKind {
    if re_string().is_match(token) {
        TokenKind::Str
    } else if re_number().is_match(token) {
        TokenKind::Num
    } else if re_literal().is_match(token) {
        TokenKind::Bool
    } else if re_keyword().is_match(token) {
        TokenKind::Keyword
    } else if re_flag().is_match(token) {
        TokenKind::Flag
    } else {
        TokenKind::Text
    }
}

/// Split a line on whitespace runs and structural punctuation, keeping the
/// delimiters as tokens of their own.
fn split_keeping_delimiters(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in re_delimiter().find_iter(line) {
        if m.start() > last {
            tokens.push(&line[last..m.start()]);
        }
        tokens.push(m.as_str());
        last = m.end();
    }
    if last < line.len() {
        tokens.push(&line[last..]);
    }
    tokens
}
