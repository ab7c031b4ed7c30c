//! QR scan driver
//!
//! Drives the scan-session state machine against an asynchronous frame
//! source (the capture device). The driver owns the session for its whole
//! life, emits at most one decoded token, and always releases the device
//! on the way out, whatever ended the scan.

use async_trait::async_trait;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crux_core::{CodeToken, ScanSession};

/// An event produced by the capture device
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// A frame decoded to text (possibly garbage)
    Decode(String),
    /// The device reported a capture failure
    Error(String),
}

/// Source of scan events, typically a camera pipeline.
///
/// `release` is invoked exactly once by the driver when the scan ends,
/// on every path: decode, failure, stream end, and cancellation.
#[async_trait]
pub trait FrameSource: Send + 'static {
    /// Next event from the device; `None` when the stream ended
    async fn next_event(&mut self) -> Option<ScanEvent>;

    /// Release the capture device
    async fn release(&mut self);
}

/// How a scan ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// First successfully normalized token
    Decoded(CodeToken),
    /// Capture failed or the stream ended without a decode
    Failed(String),
    /// The caller stopped the scan
    Cancelled,
}

/// Handle to a running scan
pub struct ScanHandle {
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<ScanOutcome>,
}

impl ScanHandle {
    /// Stop the scan. Idempotent; calling after the scan already ended
    /// has no effect.
    pub fn stop(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    /// Wait for the scan to finish and return its outcome
    pub async fn join(mut self) -> ScanOutcome {
        match (&mut self.task).await {
            Ok(outcome) => outcome,
            Err(e) => ScanOutcome::Failed(format!("scan task failed: {e}")),
        }
    }
}

/// Start a scan against a frame source.
///
/// Dropping the returned handle without calling [`ScanHandle::join`]
/// cancels the scan.
#[instrument(skip(source))]
pub fn start_scan<S: FrameSource>(source: S) -> ScanHandle {
    let (tx, rx) = oneshot::channel();
    let task = tokio::spawn(run_scan(source, rx));
    ScanHandle {
        cancel: Some(tx),
        task,
    }
}

async fn run_scan<S: FrameSource>(mut source: S, mut cancel: oneshot::Receiver<()>) -> ScanOutcome {
    let mut session = ScanSession::new();
    session.begin();

    let outcome = loop {
        tokio::select! {
            // Resolves on stop() and when the handle is dropped
            _ = &mut cancel => {
                session.cancel();
                break ScanOutcome::Cancelled;
            }
            event = source.next_event() => match event {
                Some(ScanEvent::Decode(raw)) => {
                    if let Some(token) = session.on_decode(&raw) {
                        break ScanOutcome::Decoded(token);
                    }
                    // Unreadable frame; the session keeps scanning
                    debug!("Discarded undecodable frame");
                }
                Some(ScanEvent::Error(message)) => {
                    session.fail(message.clone());
                    break ScanOutcome::Failed(message);
                }
                None => {
                    let message = "capture stream ended".to_string();
                    session.fail(message.clone());
                    break ScanOutcome::Failed(message);
                }
            }
        }
    };

    source.release().await;
    outcome
}
