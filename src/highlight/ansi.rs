//! ANSI terminal output for tagged lines.
//!
//! [`Theme`] maps each [`TokenKind`] to an RGB color; [`to_ansi`] emits
//! truecolor SGR sequences. Pure string transforms, no I/O.

use super::types::{StyledLine, TokenKind};

/// Color palette keyed by token kind, as `[r, g, b]`.
#[derive(Debug, Clone)]
pub struct Theme {
    pub key: [u8; 3],
    pub string: [u8; 3],
    pub number: [u8; 3],
    pub boolean: [u8; 3],
    pub null: [u8; 3],
    pub keyword: [u8; 3],
    pub flag: [u8; 3],
    pub punctuation: [u8; 3],
}

impl Default for Theme {
    /// Dark-terminal palette: cyan keys, emerald strings, blue numbers,
    /// purple booleans, grey nulls, orange protocol keywords.
    fn default() -> Self {
        Self {
            key: [34, 211, 238],
            string: [52, 211, 153],
            number: [96, 165, 250],
            boolean: [192, 132, 252],
            null: [156, 163, 175],
            keyword: [251, 146, 60],
            flag: [103, 232, 249],
            punctuation: [113, 113, 122],
        }
    }
}

impl Theme {
    /// Color for a token kind; `None` means the terminal default.
    pub fn color(&self, kind: TokenKind) -> Option<[u8; 3]> {
        match kind {
            TokenKind::Key => Some(self.key),
            TokenKind::Str => Some(self.string),
            TokenKind::Num => Some(self.number),
            TokenKind::Bool => Some(self.boolean),
            TokenKind::Null => Some(self.null),
            TokenKind::Keyword => Some(self.keyword),
            TokenKind::Flag => Some(self.flag),
            TokenKind::Punct => Some(self.punctuation),
            TokenKind::Text => None,
        }
    }
}

/// Render tagged lines as ANSI truecolor text, one `\n`-terminated line per
/// input line. Keywords render bold in addition to their color.
pub fn to_ansi(lines: &[StyledLine], theme: &Theme) -> String {
    let mut out = String::new();
    for line in lines {
        for segment in &line.segments {
            match theme.color(segment.kind) {
                Some([r, g, b]) => {
                    let bold = if segment.kind == TokenKind::Keyword { ";1" } else { "" };
                    out.push_str(&format!("\x1b[38;2;{r};{g};{b}{bold}m{}\x1b[0m", segment.text));
                }
                None => out.push_str(&segment.text),
            }
        }
        out.push('\n');
    }
    out
}

/// Render tagged lines as plain text (for pipes and tests).
pub fn to_plain(lines: &[StyledLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.text());
        out.push('\n');
    }
    out
}
