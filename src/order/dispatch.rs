//! Message dispatch and the external collaborator seams.
//!
//! The messaging channel and the notification surface are external
//! collaborators: the core only produces a correctly escaped payload,
//! invokes the channel once per successful submission, and signals the
//! outcome kind. It never observes the channel's result.

use serde::{Deserialize, Serialize};

/// Build the outbound WhatsApp link for a message.
///
/// The payload is percent-escaped; the number goes in verbatim.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Outcome kind signalled to the notification surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// Operation succeeded.
    Success,
    /// Validation failure; recoverable.
    Error,
}

/// A transient user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    /// Create a success notice.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Create a validation-failure notice.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The external notification surface. Owns no rendering here; the core
/// only signals outcome kind and a short description.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Notifier that logs notices through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => {
                tracing::info!(title = %notice.title, description = %notice.description, "notice");
            }
            NoticeKind::Error => {
                tracing::warn!(title = %notice.title, description = %notice.description, "notice");
            }
        }
    }
}

/// The external messaging channel: accepts one URL and opens an
/// outbound context. Fire-and-forget; the core does not await, retry,
/// or observe its outcome.
pub trait ChannelOpener {
    fn open(&mut self, url: &str);
}

/// State of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SubmissionState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Message being composed.
    Composing,
    /// Message handed to the channel. Terminal for this attempt.
    Dispatched,
    /// Composition refused (empty cart). Terminal for this attempt.
    Rejected,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Composing => "composing",
            SubmissionState::Dispatched => "dispatched",
            SubmissionState::Rejected => "rejected",
        }
    }

    /// Whether this attempt has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Dispatched | SubmissionState::Rejected)
    }
}

/// One submission attempt.
///
/// Each attempt runs `Idle -> Composing -> Dispatched | Rejected` and
/// then stays put. The cart's own lifecycle is independent: it persists
/// across submissions and is never cleared by a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    /// Start a fresh attempt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Move from Idle to Composing. Returns false if the attempt has
    /// already started.
    pub fn begin(&mut self) -> bool {
        if self.state != SubmissionState::Idle {
            return false;
        }
        self.state = SubmissionState::Composing;
        true
    }

    /// Resolve a composing attempt as dispatched.
    pub fn mark_dispatched(&mut self) -> bool {
        if self.state != SubmissionState::Composing {
            return false;
        }
        self.state = SubmissionState::Dispatched;
        true
    }

    /// Resolve a composing attempt as rejected.
    pub fn mark_rejected(&mut self) -> bool {
        if self.state != SubmissionState::Composing {
            return false;
        }
        self.state = SubmissionState::Rejected;
        true
    }
}
