use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::infrastructure::error::{CoreError, Result};
use crate::services::heuristics;

/// The three assistant operations exposed in the shell's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantAction {
    ImproveWriting,
    Summarize,
    CheckGrammar,
}

impl AssistantAction {
    /// Parse the wire name used at the shell boundary.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "improve_writing" => Ok(Self::ImproveWriting),
            "summarize" => Ok(Self::Summarize),
            "check_grammar" => Ok(Self::CheckGrammar),
            other => Err(CoreError::InvalidInput(format!(
                "unknown assistant action: {other}"
            ))),
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::ImproveWriting => "improve_writing",
            Self::Summarize => "summarize",
            Self::CheckGrammar => "check_grammar",
        }
    }

    /// Get the display name for menu entries
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ImproveWriting => "Improve Writing",
            Self::Summarize => "Summarize",
            Self::CheckGrammar => "Check Grammar",
        }
    }

    /// Run the heuristic synchronously on the calling thread.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::ImproveWriting => heuristics::improve_writing(text),
            Self::Summarize => heuristics::summarize(text),
            Self::CheckGrammar => heuristics::check_grammar(text),
        }
    }
}

/// Exactly one of these comes back per dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantOutcome {
    Response(String),
    Failed(String),
}

/// Single-slot dispatcher for assistant requests.
///
/// At most one request is in flight at a time; the shell disables the
/// assistant menu while waiting, and `dispatch` enforces the same rule.
/// Each request runs on its own background thread with a private copy of
/// the input, so no locking is involved anywhere. There is no cancellation:
/// a dispatched request always produces exactly one outcome.
pub struct AssistantController {
    pending: Option<Receiver<String>>,
    latency: Option<Duration>,
}

impl AssistantController {
    pub fn new() -> Self {
        Self {
            pending: None,
            latency: None,
        }
    }

    /// A controller that sleeps for `latency` before computing each result,
    /// to mimic a remote assistant. Has no effect on the result itself.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            pending: None,
            latency: Some(latency),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Hand a request to the background worker. Fails with
    /// `CoreError::AssistantBusy` while an earlier request is pending.
    pub fn dispatch(&mut self, action: AssistantAction, text: String) -> Result<()> {
        if self.pending.is_some() {
            return Err(CoreError::AssistantBusy);
        }

        debug!(
            "dispatching assistant action {} ({} bytes)",
            action.wire_name(),
            text.len()
        );

        let (sender, receiver) = mpsc::channel();
        let latency = self.latency;
        thread::spawn(move || {
            if let Some(delay) = latency {
                thread::sleep(delay);
            }
            let report = action.apply(&text);
            // The shell may have dropped the controller meanwhile; then
            // there is simply nobody left to tell.
            let _ = sender.send(report);
        });

        self.pending = Some(receiver);
        Ok(())
    }

    /// Non-blocking poll for the outcome of the pending request.
    ///
    /// Returns `None` while the worker is still running (or nothing was
    /// dispatched). Once an outcome is returned the slot is free again.
    pub fn try_recv(&mut self) -> Option<AssistantOutcome> {
        let receiver = self.pending.as_ref()?;
        match receiver.try_recv() {
            Ok(report) => {
                self.pending = None;
                debug!("assistant action completed ({} bytes)", report.len());
                Some(AssistantOutcome::Response(report))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                warn!("assistant worker exited without a result");
                Some(AssistantOutcome::Failed(
                    "assistant worker exited without a result".to_string(),
                ))
            }
        }
    }
}

impl Default for AssistantController {
    fn default() -> Self {
        Self::new()
    }
}
