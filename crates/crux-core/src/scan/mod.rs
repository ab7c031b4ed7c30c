//! Scan session state machine
//!
//! Bridges a continuous camera-frame decode process to a single code
//! submission. The machine has exactly one terminal transition:
//!
//! ```text
//! Starting -> Scanning -> Decoded | Failed | Cancelled
//! ```
//!
//! The first successful decode wins and emits exactly one normalized token;
//! every later decode, failure, or cancellation of the same session is a
//! no-op.

use crate::value_objects::CodeToken;

/// Scan session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Session created, capture device not yet running
    Starting,
    /// Capture running, waiting for a decodable frame
    Scanning,
    /// A code was decoded; the session is finished
    Decoded(CodeToken),
    /// Capture could not run (no camera, permission denied) or broke down
    Failed(String),
    /// Caller dismissed the session before a decode
    Cancelled,
}

impl ScanState {
    /// Terminal states admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Decoded(_) | Self::Failed(_) | Self::Cancelled)
    }
}

/// A single scanning session
#[derive(Debug)]
pub struct ScanSession {
    state: ScanState,
}

impl ScanSession {
    /// Create a session in `Starting`
    pub fn new() -> Self {
        Self {
            state: ScanState::Starting,
        }
    }

    /// Current state
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Transition `Starting -> Scanning` once the capture device is running.
    ///
    /// Returns false if the session already left `Starting`.
    pub fn begin(&mut self) -> bool {
        if self.state == ScanState::Starting {
            self.state = ScanState::Scanning;
            true
        } else {
            false
        }
    }

    /// Feed a decoded frame text into the session.
    ///
    /// Returns the normalized token on the first successful decode while
    /// scanning; `None` in every other case. Whitespace-only decodes are
    /// ignored and the session keeps scanning.
    pub fn on_decode(&mut self, raw: &str) -> Option<CodeToken> {
        if self.state != ScanState::Scanning {
            return None;
        }
        match CodeToken::parse(raw) {
            Ok(token) => {
                self.state = ScanState::Decoded(token.clone());
                Some(token)
            }
            Err(_) => None,
        }
    }

    /// Report a capture failure.
    ///
    /// Returns false if the session already reached a terminal state; a
    /// failure arriving after a decode does not demote the result.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = ScanState::Failed(message.into());
        true
    }

    /// Cancel the session (caller navigated away).
    ///
    /// Idempotent; returns false if the session was already terminal.
    pub fn cancel(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = ScanState::Cancelled;
        true
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}
