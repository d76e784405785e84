//! JSON Lines (JSONL) output writer.
//!
//! JSONL keeps one message per line, which suits streaming consumers and
//! line-oriented tooling.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::Message;
use crate::core::output::OutputConfig;
use crate::error::ChatviewError;

/// Minimal message structure for JSONL output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
struct JsonlMessage {
    sender: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_kind: Option<String>,
}

impl JsonlMessage {
    fn from_message(msg: &Message, config: &OutputConfig) -> Self {
        Self {
            sender: msg.sender.clone(),
            text: msg.text.clone(),
            timestamp: config
                .include_timestamps
                .then(|| msg.timestamp.clone()),
            media: if config.include_media {
                msg.media.clone()
            } else {
                None
            },
            media_kind: if config.include_media {
                msg.media_kind.map(|kind| kind.to_string())
            } else {
                None
            },
        }
    }
}

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"sender":"Alice","text":"Hello"}
/// {"sender":"Bob","text":"Hi"}
/// ```
pub fn write_jsonl(
    messages: &[Message],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        let jsonl_msg = JsonlMessage::from_message(msg, config);
        let line = serde_json::to_string(&jsonl_msg)?;
        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
///
/// Same format as [`write_jsonl`], but returns a `String` instead of
/// writing to a file.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String, ChatviewError> {
    let mut output = String::new();

    for msg in messages {
        let jsonl_msg = JsonlMessage::from_message(msg, config);
        output.push_str(&serde_json::to_string(&jsonl_msg)?);
        output.push('\n');
    }

    Ok(output)
}
