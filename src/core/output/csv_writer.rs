//! CSV output writer.

use std::fs::File;
use std::io;

use crate::Message;
use crate::core::output::OutputConfig;
use crate::error::ChatviewError;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on `OutputConfig`
///   - Basic: `Sender`, `Text`
///   - With timestamps: `Timestamp`, `Sender`, `Text`
///   - With media: `Sender`, `Text`, `Media`, `MediaKind`
/// - Encoding: UTF-8
pub fn write_csv(
    messages: &[Message],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    write_records(&mut writer, messages, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], but returns a `String` instead of writing
/// to a file.
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String, ChatviewError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    write_records(&mut writer, messages, config)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatviewError::Io(io::Error::other(e.to_string())))?;
    // The writer only ever receives UTF-8 strings
    String::from_utf8(bytes).map_err(|e| ChatviewError::Io(io::Error::other(e)))
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    messages: &[Message],
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Sender");
    header.push("Text");

    if config.include_media {
        header.push("Media");
        header.push("MediaKind");
    }

    header
}

/// Build one CSV record based on output configuration.
fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_timestamps {
        record.push(msg.timestamp.clone());
    }

    record.push(msg.sender.clone());
    record.push(msg.text.clone());

    if config.include_media {
        record.push(msg.media.clone().unwrap_or_default());
        record.push(
            msg.media_kind
                .map(|kind| kind.to_string())
                .unwrap_or_default(),
        );
    }

    record
}
