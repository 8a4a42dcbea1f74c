//! Order composition and dispatch.
//!
//! Renders cart contents (or a single ad-hoc inquiry) into a
//! human-readable order message and hands it to the external messaging
//! channel.

mod dispatch;
mod message;

pub use dispatch::{
    whatsapp_url, ChannelOpener, Notice, NoticeKind, Notifier, Submission, SubmissionState,
    TracingNotifier,
};
pub use message::{OrderLine, OrderMessage};
