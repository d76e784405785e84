//! Message and media types.
//!
//! This module provides [`Message`], the structured representation of one
//! entry in a chat export, and [`MediaKind`], the coarse classification of
//! an attached file.
//!
//! # Overview
//!
//! A message consists of:
//! - **Always present**: `sender`, `timestamp`, `text`
//! - **Optional**: `media` (attachment filename), `media_kind`
//!
//! The timestamp is kept as the export's own locale-formatted string
//! (e.g. `"25.5.2025 19:57"`). Message order is the order of the source
//! file, so nothing in this crate ever interprets the timestamp value.
//!
//! # Examples
//!
//! ```
//! use chatview::{MediaKind, Message};
//!
//! let msg = Message::new("Alice", "1.1.2024 09:00", "Hi there");
//! assert_eq!(msg.sender(), "Alice");
//! assert!(!msg.has_media());
//!
//! let photo = Message::new("Bob", "2.1.2024 10:15", "photo.jpg (קובץ מצורף)")
//!     .with_media("photo.jpg", Some(MediaKind::Image));
//! assert_eq!(photo.media(), Some("photo.jpg"));
//! ```
//!
//! ## Serialization
//!
//! Absent media fields are omitted from JSON entirely:
//!
//! ```
//! use chatview::Message;
//!
//! let msg = Message::new("Alice", "1.1.2024 09:00", "Hi");
//! let json = serde_json::to_string(&msg)?;
//! assert!(!json.contains("media"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File extensions classified as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// File extensions classified as audio.
pub const AUDIO_EXTENSIONS: &[&str] = &["opus", "ogg", "mp3", "wav", "m4a"];

/// Coarse classification of an attached media file.
///
/// Derived from the attachment's file extension. An attachment whose
/// extension is in neither table is still recorded on the message, but
/// carries no kind.
///
/// # Example
///
/// ```
/// use chatview::MediaKind;
///
/// assert_eq!(MediaKind::from_extension("JPG"), Some(MediaKind::Image));
/// assert_eq!(MediaKind::from_extension("opus"), Some(MediaKind::Audio));
/// assert_eq!(MediaKind::from_extension("pdf"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image (`jpg`, `jpeg`, `png`, `gif`, `bmp`)
    Image,

    /// Voice note or audio clip (`opus`, `ogg`, `mp3`, `wav`, `m4a`)
    Audio,
}

impl MediaKind {
    /// Classifies a file extension (without dot), ASCII case-insensitively.
    ///
    /// Returns `None` for extensions outside both recognized sets.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let lower = ext.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&lower.as_str()) {
            Some(MediaKind::Image)
        } else if AUDIO_EXTENSIONS.contains(&lower.as_str()) {
            Some(MediaKind::Audio)
        } else {
            None
        }
    }

    /// Returns the extensions recognized for this kind.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_EXTENSIONS,
            MediaKind::Audio => AUDIO_EXTENSIONS,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Audio => write!(f, "audio"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "audio" => Ok(MediaKind::Audio),
            _ => Err(format!("Unknown media kind: '{}'. Expected image or audio", s)),
        }
    }
}

/// One reconstructed message from a chat export.
///
/// Produced by [`ChatParser`](crate::parser::ChatParser) in source-file
/// order. Frontends render `sender`, `timestamp` and `text` directly and
/// dispatch on [`media_kind`](Message::media_kind) to an image or audio
/// collaborator when an attachment is present.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name, verbatim from the export |
/// | `timestamp` | `String` | Locale-formatted `"<date> <time>"` string |
/// | `text` | `String` | Body; multiline bodies are joined with `\n` |
/// | `media` | `Option<String>` | Attachment filename, original case |
/// | `media_kind` | `Option<MediaKind>` | Set iff the extension is recognized |
///
/// # Serialization
///
/// Implements `Serialize`/`Deserialize`; `media` and `media_kind` are
/// omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author, verbatim from the source line.
    ///
    /// May contain arbitrary Unicode, including right-to-left scripts.
    pub sender: String,

    /// Locale-formatted timestamp, date and time joined with one space
    /// (e.g. `"25.5.2025 19:57"`).
    ///
    /// Never parsed into a numeric epoch; ordering is positional.
    pub timestamp: String,

    /// Message body. May span multiple source lines, joined with `\n`
    /// in the order they appeared.
    pub text: String,

    /// Attachment filename (original case, including extension), present
    /// only when the body contains the attachment-announcement marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media: Option<String>,

    /// Classification of the attachment, present iff `media` is present
    /// and its extension maps to a known kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media_kind: Option<MediaKind>,
}

impl Message {
    /// Creates a message with no attachment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatview::Message;
    ///
    /// let msg = Message::new("Alice", "1.1.2024 09:00", "Hello!");
    /// assert_eq!(msg.text(), "Hello!");
    /// assert!(msg.media().is_none());
    /// ```
    pub fn new(
        sender: impl Into<String>,
        timestamp: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            timestamp: timestamp.into(),
            text: text.into(),
            media: None,
            media_kind: None,
        }
    }

    /// Builder method to attach a media reference.
    ///
    /// `kind` may be `None` when the filename's extension is unrecognized.
    #[must_use]
    pub fn with_media(mut self, media: impl Into<String>, kind: Option<MediaKind>) -> Self {
        self.media = Some(media.into());
        self.media_kind = kind;
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the locale-formatted timestamp string.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the attachment filename, if any.
    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }

    /// Returns the attachment classification, if any.
    pub fn media_kind(&self) -> Option<MediaKind> {
        self.media_kind
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if this message carries an attachment reference.
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }

    /// Returns `true` if this message's text is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Resolves the attachment filename against the directory containing
    /// the export file.
    ///
    /// This is the only path-level contract between the parser's output and
    /// media collaborators: a resolved path and nothing else. The file is
    /// never opened or validated here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::path::Path;
    /// use chatview::{MediaKind, Message};
    ///
    /// let msg = Message::new("Bob", "2.1.2024 10:15", "photo.jpg (קובץ מצורף)")
    ///     .with_media("photo.jpg", Some(MediaKind::Image));
    ///
    /// let path = msg.media_path(Path::new("/exports/chat")).unwrap();
    /// assert_eq!(path, Path::new("/exports/chat/photo.jpg"));
    /// ```
    pub fn media_path(&self, export_dir: &Path) -> Option<PathBuf> {
        self.media.as_deref().map(|name| export_dir.join(name))
    }
}
