//! # Chatview
//!
//! A Rust library for reconstructing structured transcripts from WhatsApp
//! plain-text chat exports, with attached media classified by kind.
//!
//! ## Overview
//!
//! A WhatsApp export is a line-oriented text file: each message starts with
//! a locale-formatted header (`25.5.2025, 19:57 - Sender: body`), free-form
//! bodies may continue over any number of following lines, and attachments
//! are announced inline as `photo.jpg (קובץ מצורף)`. Chatview turns such a
//! file into an ordered sequence of [`Message`] records — sender, timestamp,
//! body text, and an optional media reference classified as image or audio —
//! without ever losing or misattributing a line.
//!
//! Viewer frontends consume that sequence directly: render `sender`,
//! `timestamp` and `text`, resolve [`Message::media_path`] against the
//! export directory, and hand the path to an image or audio collaborator
//! based on [`MediaKind`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatview::parser::ChatParser;
//! use chatview::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = ChatParser::new();
//!     let messages = parser.parse("whatsapp_chat.txt".as_ref())?;
//!
//!     for msg in &messages {
//!         println!("[{}] {}: {}", msg.timestamp, msg.sender, msg.text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Writing a Transcript
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatview::Result<()> {
//! use chatview::core::output::{OutputConfig, write_json};
//! use chatview::parser::ChatParser;
//!
//! let messages = ChatParser::new().parse("whatsapp_chat.txt".as_ref())?;
//! let config = OutputConfig::new().with_timestamps().with_media();
//! write_json(&messages, "transcript.json", &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — The export parser
//!   - [`ChatParser`](parser::ChatParser) — line grammar, attachment detection
//!   - [`ATTACHMENT_MARKER`](parser::ATTACHMENT_MARKER) — the announcement phrase
//! - [`message`] — Data model
//!   - [`Message`], [`MediaKind`]
//! - [`config`] — [`ParserConfig`](config::ParserConfig)
//! - [`core`] — Consumer-side processing
//!   - [`core::filter`] — [`FilterConfig`](core::filter::FilterConfig), [`apply_filters`](core::filter::apply_filters)
//!   - [`core::output`] — [`write_csv`](core::output::write_csv), [`write_json`](core::output::write_json), [`write_jsonl`](core::output::write_jsonl)
//! - [`format`] — [`OutputFormat`](format::OutputFormat), [`write_to_format`](format::write_to_format)
//! - [`cli`] — CLI types (requires `cli` feature)
//! - [`error`] — Unified error types ([`ChatviewError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use error::{ChatviewError, Result};
pub use message::{MediaKind, Message};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatview::prelude::*;
/// ```
pub mod prelude {
    // Core message types
    pub use crate::{MediaKind, Message};

    // Error types
    pub use crate::error::{ChatviewError, Result};

    // Parser
    pub use crate::config::ParserConfig;
    pub use crate::parser::{ATTACHMENT_MARKER, ChatParser};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Output (file writers and string converters)
    pub use crate::core::output::OutputConfig;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::{OutputFormat, write_to_format};
}
