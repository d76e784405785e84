//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one JSON per line) - requires `json-output` feature
//!
//! All writers take the same [`OutputConfig`], which controls whether the
//! timestamp and the media columns appear; sender and text always do.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatview::Result<()> {
//! use chatview::core::output::{OutputConfig, write_csv, write_json, write_jsonl};
//! use chatview::Message;
//!
//! let messages = vec![
//!     Message::new("Alice", "1.1.2024 09:00", "Hello!"),
//!     Message::new("Bob", "1.1.2024 09:01", "Hi there!"),
//! ];
//!
//! let config = OutputConfig::new().with_timestamps().with_media();
//!
//! // Write to files
//! write_csv(&messages, "output.csv", &config)?;
//! write_json(&messages, "output.json", &config)?;
//! write_jsonl(&messages, "output.jsonl", &config)?;
//!
//! // Or get as strings
//! let json_string = chatview::core::output::to_json(&messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Configuration for output format.
/// Controls which optional fields are included in the output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include the locale-formatted timestamp in output
    pub include_timestamps: bool,
    /// Include the media filename and kind in output
    pub include_media: bool,
}

impl OutputConfig {
    /// Creates a configuration with all optional fields disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Includes the timestamp column/field.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    /// Includes the media filename and kind columns/fields.
    #[must_use]
    pub fn with_media(mut self) -> Self {
        self.include_media = true;
        self
    }
}
