//! Clipboard copy support with a transient acknowledgment window.
//!
//! The copy action serializes the *original* value (never the rendered
//! markup) and writes it to the system clipboard. A successful copy arms a
//! 2-second acknowledgment window during which callers can show a "copied"
//! indicator; after the window the indicator reads as inactive again. A
//! failed copy is logged and swallowed - the acknowledgment simply never
//! activates, and nothing is raised to the caller.

use std::time::{Duration, Instant};

use serde_json::Value;

use super::json::canonical_json;

/// How long a successful copy reads as acknowledged.
const ACK_WINDOW: Duration = Duration::from_secs(2);

/// Transient "copied" indicator state.
///
/// Wall-clock state checked on demand: armed by a successful copy, inactive
/// once the window has elapsed. Each clipboard handle owns its own
/// acknowledgment; renders share nothing.
#[derive(Debug, Clone)]
pub struct CopyAcknowledgment {
    copied_at: Option<Instant>,
    window: Duration,
}

impl Default for CopyAcknowledgment {
    fn default() -> Self {
        Self::with_window(ACK_WINDOW)
    }
}

impl CopyAcknowledgment {
    /// Acknowledgment with a custom window. Tests use this to observe the
    /// expired state without sleeping.
    pub fn with_window(window: Duration) -> Self {
        Self {
            copied_at: None,
            window,
        }
    }

    fn mark(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// Whether the indicator is currently showing.
    pub fn is_active(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < self.window)
    }
}

/// Clipboard handle pairing the write action with its acknowledgment.
#[derive(Debug, Default)]
pub struct ClipboardCopy {
    ack: CopyAcknowledgment,
}

impl ClipboardCopy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle with a custom acknowledgment window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            ack: CopyAcknowledgment::with_window(window),
        }
    }

    /// Copy the canonical JSON text of a value (2-space indent when compact,
    /// 4-space otherwise).
    pub fn copy_json(&mut self, value: &Value, compact: bool) {
        self.copy_text(&canonical_json(value, compact));
    }

    /// Copy raw text verbatim (used by code blocks).
    ///
    /// Never returns an error: a failed write is logged and the
    /// acknowledgment stays inactive.
    pub fn copy_text(&mut self, text: &str) {
        match write_clipboard(text) {
            Ok(()) => self.ack.mark(),
            Err(e) => log::warn!("failed to copy to clipboard: {e}"),
        }
    }

    /// Whether the "copied" indicator should currently be shown.
    pub fn acknowledged(&self) -> bool {
        self.ack.is_active()
    }
}

fn write_clipboard(text: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_inactive_until_marked() {
        let ack = CopyAcknowledgment::default();
        assert!(!ack.is_active());
    }

    #[test]
    fn test_ack_active_immediately_after_mark() {
        let mut ack = CopyAcknowledgment::default();
        ack.mark();
        assert!(ack.is_active());
    }

    #[test]
    fn test_ack_expires_after_window() {
        // A zero-length window is already expired at the instant of marking.
        let mut ack = CopyAcknowledgment::with_window(Duration::ZERO);
        ack.mark();
        assert!(!ack.is_active());
    }

    #[test]
    fn test_fresh_handle_not_acknowledged() {
        // A handle that never copied (or whose copy failed and was only
        // logged) must not show the indicator.
        let clipboard = ClipboardCopy::new();
        assert!(!clipboard.acknowledged());
    }
}
