//! Parser configuration.
//!
//! This module provides [`ParserConfig`], a clean configuration struct for
//! library usage, without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatview::config::ParserConfig;
//! use chatview::parser::ChatParser;
//!
//! let config = ParserConfig::new().with_detect_attachments(false);
//! let parser = ChatParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for chat export parsing.
///
/// # Example
///
/// ```rust
/// use chatview::config::ParserConfig;
///
/// let config = ParserConfig::new().with_detect_attachments(false);
/// assert!(!config.detect_attachments);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Scan message bodies for attachment announcements (default: true).
    ///
    /// When disabled, every message is produced with empty `media` and
    /// `media_kind` fields; the line grammar is unaffected.
    pub detect_attachments: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            detect_attachments: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables attachment detection.
    #[must_use]
    pub fn with_detect_attachments(mut self, enabled: bool) -> Self {
        self.detect_attachments = enabled;
        self
    }
}
