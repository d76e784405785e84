//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//! - [`MediaKindArg`] - Media kind filter values
//!
//! The CLI-facing enums convert into their library-level counterparts, so
//! nothing outside this module depends on clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::message::MediaKind;

/// Reconstruct a WhatsApp TXT chat export into a structured transcript
/// with classified media attachments.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatview")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatview chat.txt
    chatview chat.txt -o transcript.json
    chatview chat.txt --format jsonl --timestamps --media-columns
    chatview chat.txt --from Alice
    chatview chat.txt --media-only --kind audio")]
pub struct Args {
    /// Path to the exported chat file
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = "transcript.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Include timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include media filename and kind in output
    #[arg(short = 'm', long)]
    pub media_columns: bool,

    /// Keep only messages from a specific sender
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Keep only messages carrying an attachment
    #[arg(long)]
    pub media_only: bool,

    /// Keep only attachments of this kind
    #[arg(long, value_enum, value_name = "KIND")]
    pub kind: Option<MediaKindArg>,

    /// Disable attachment detection entirely
    #[arg(long)]
    pub no_attachments: bool,
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use chatview::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// println!("Extension: {}", format.extension()); // "jsonl"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Media kind values accepted by `--kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKindArg {
    /// Image attachments (jpg, jpeg, png, gif, bmp)
    Image,

    /// Audio attachments (opus, ogg, mp3, wav, m4a)
    Audio,
}

impl From<MediaKindArg> for MediaKind {
    fn from(arg: MediaKindArg) -> MediaKind {
        match arg {
            MediaKindArg::Image => MediaKind::Image,
            MediaKindArg::Audio => MediaKind::Audio,
        }
    }
}
