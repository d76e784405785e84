//! Filter messages by sender and media presence.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections. Filtering happens
//! strictly after parsing; the parser itself never drops or reorders
//! messages.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from specific user |
//! | Media | [`with_media_only`](FilterConfig::with_media_only) | Messages carrying an attachment |
//! | Kind | [`with_media_kind`](FilterConfig::with_media_kind) | Attachments of one kind |
//!
//! # Examples
//!
//! ## Filter by Sender
//!
//! ```
//! use chatview::core::filter::{FilterConfig, apply_filters};
//! use chatview::Message;
//!
//! let messages = vec![
//!     Message::new("Alice", "1.1.2024 09:00", "Hello"),
//!     Message::new("Bob", "1.1.2024 09:01", "Hi there"),
//!     Message::new("Alice", "1.1.2024 09:02", "How are you?"),
//! ];
//!
//! // Case-insensitive sender matching
//! let config = FilterConfig::new().with_sender("alice");
//! let filtered = apply_filters(messages, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! ## Filter to Voice Notes
//!
//! ```
//! use chatview::core::filter::{FilterConfig, apply_filters};
//! use chatview::{MediaKind, Message};
//!
//! let messages = vec![
//!     Message::new("Alice", "1.1.2024 09:00", "text only"),
//!     Message::new("Bob", "1.1.2024 09:01", "voice.opus (קובץ מצורף)")
//!         .with_media("voice.opus", Some(MediaKind::Audio)),
//! ];
//!
//! let config = FilterConfig::new().with_media_kind(MediaKind::Audio);
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic
//! - An unclassified attachment passes `with_media_only` but no kind filter

use crate::Message;
use crate::message::MediaKind;

/// Configuration for filtering messages by sender and media.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatview::core::filter::FilterConfig;
/// use chatview::MediaKind;
///
/// // Filter by sender only
/// let by_sender = FilterConfig::new().with_sender("Alice");
///
/// // Images from Alice
/// let combined = FilterConfig::new()
///     .with_sender("Alice")
///     .with_media_kind(MediaKind::Image);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,

    /// Include only messages carrying an attachment reference.
    pub media_only: bool,

    /// Include only messages whose attachment has this classification.
    pub kind: Option<MediaKind>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender filter.
    ///
    /// Only messages from this sender will be included.
    /// Matching is case-insensitive for ASCII characters.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Keeps only messages that carry an attachment reference.
    #[must_use]
    pub fn with_media_only(mut self) -> Self {
        self.media_only = true;
        self
    }

    /// Keeps only messages whose attachment is classified as `kind`.
    ///
    /// Implies media presence: messages without an attachment, or with an
    /// unclassified one, are excluded.
    #[must_use]
    pub fn with_media_kind(mut self, kind: MediaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Returns `true` if any filter criteria are set.
    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.media_only || self.kind.is_some()
    }
}

/// Applies all active filters to a message collection.
///
/// Relative order of surviving messages is preserved.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| matches_filters(msg, config))
        .collect()
}

fn matches_filters(msg: &Message, config: &FilterConfig) -> bool {
    if let Some(ref from) = config.from {
        if !msg.sender.eq_ignore_ascii_case(from) {
            return false;
        }
    }

    if config.media_only && msg.media.is_none() {
        return false;
    }

    if let Some(kind) = config.kind {
        if msg.media_kind != Some(kind) {
            return false;
        }
    }

    true
}
