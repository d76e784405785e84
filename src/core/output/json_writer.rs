//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::Message;
use crate::core::output::OutputConfig;
use crate::error::ChatviewError;

/// Minimal message structure for JSON output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
struct JsonMessage {
    sender: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_kind: Option<String>,
}

impl JsonMessage {
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

/// Writes messages to JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"sender": "Alice", "text": "Hello"},
///   {"sender": "Bob", "text": "Hi"}
/// ]
/// ```
pub fn write_json(
    messages: &[Message],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to JSON string as an array.
///
/// Same format as [`write_json`], but returns a `String` instead of writing
/// to a file.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String, ChatviewError> {
    let json_messages: Vec<JsonMessage> = messages
        .iter()
        .map(|m| JsonMessage::from_message(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_messages)?)
}
