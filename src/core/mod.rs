//! Core processing logic for chatview.
//!
//! This module contains:
//! - [`filter`] - Message filtering by sender and media
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatview::core::{
//!     FilterConfig, Message, OutputConfig, apply_filters, write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod output;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use output::OutputConfig;

// Re-export Message from the crate root
pub use crate::Message;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
