//! JSON and code highlighting framework.
//!
//! Converts JSON-serializable values and code snippets into kind-tagged
//! lines that a display target styles however it likes. Rendering is a pure
//! transform; the only side effect in this module tree is the clipboard
//! write behind the copy affordance.
//!
//! # Module Structure
//!
//! - [`types`] - shared data types: `TokenKind`, `StyledSegment`,
//!   `StyledLine`, `HighlightOptions`.
//! - [`json`] - the recursive JSON highlighter and canonical serialization.
//! - [`inline`] - compact single-line markup for values embedded in prose.
//! - [`code`] - code blocks: JSON passthrough or the line-based tokenizer.
//! - [`clipboard`] - copy actions and the transient "copied" acknowledgment.
//! - [`ansi`] - theme and ANSI truecolor output.

pub mod ansi;
pub mod clipboard;
pub mod code;
pub mod inline;
pub mod json;
pub mod types;

pub use ansi::{Theme, to_ansi, to_plain};
pub use clipboard::{ClipboardCopy, CopyAcknowledgment};
pub use code::CodeBlock;
pub use inline::{inline_str, inline_value};
pub use json::{JsonHighlighter, canonical_json};
pub use types::{HighlightOptions, StyledLine, StyledSegment, TokenKind};
