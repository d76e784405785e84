//! # chatview CLI
//!
//! Command-line interface for the chatview library.

use std::collections::HashSet;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatview::cli::Args;
use chatview::config::ParserConfig;
use chatview::core::{FilterConfig, OutputConfig, apply_filters};
use chatview::format::{OutputFormat, write_to_format};
use chatview::message::MediaKind;
use chatview::parser::ChatParser;
use chatview::{ChatviewError, Message};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatviewError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Determine output extension based on format
    let output_path = adjust_output_extension(&args.output, args.format);

    // Print header
    println!("💬 chatview v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);
    if args.no_attachments {
        println!("📎 Media:   detection disabled");
    }

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_sender(from.clone());
        println!("👤 From:    {}", from);
    }

    if args.media_only {
        filter_config = filter_config.with_media_only();
        println!("📎 Filter:  messages with attachments");
    }

    if let Some(kind) = args.kind {
        let kind: MediaKind = kind.into();
        filter_config = filter_config.with_media_kind(kind);
        println!("📎 Kind:    {}", kind);
    }

    println!();

    // Step 1: Parse
    println!("⏳ Parsing export...");
    let parser = ChatParser::with_config(
        ParserConfig::new().with_detect_attachments(!args.no_attachments),
    );
    let parse_start = Instant::now();
    let messages = parser.parse(Path::new(&args.input))?;
    let parse_time = parse_start.elapsed();
    let original_count = messages.len();
    println!(
        "   Found {} messages ({:.2}s)",
        original_count,
        parse_time.as_secs_f64()
    );

    if original_count == 0 {
        println!("   (no messages found in this export)");
    }

    // Step 2: Filter
    let final_messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filter_start = Instant::now();
        let filtered = apply_filters(messages, &filter_config);
        let filter_time = filter_start.elapsed();
        println!(
            "   {} messages after filtering ({:.2}s)",
            filtered.len(),
            filter_time.as_secs_f64()
        );
        filtered
    } else {
        messages
    };

    // Step 3: Build output configuration
    let mut output_config = OutputConfig::new();
    if args.timestamps {
        output_config = output_config.with_timestamps();
    }
    if args.media_columns {
        output_config = output_config.with_media();
    }

    // Step 4: Write output in selected format
    let lib_format: OutputFormat = args.format.into();
    println!("💾 Writing {}...", lib_format);
    let write_start = Instant::now();
    write_to_format(&final_messages, &output_path, lib_format, &output_config)?;
    let write_time = write_start.elapsed();
    println!("   Written in {:.2}s", write_time.as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    print_summary(&final_messages, original_count);

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    if total_time.as_secs_f64() > 0.0 {
        let msgs_per_sec = original_count as f64 / total_time.as_secs_f64();
        println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);
    }

    Ok(())
}

/// Prints message and attachment statistics.
fn print_summary(messages: &[Message], original_count: usize) {
    let senders: HashSet<&str> = messages.iter().map(Message::sender).collect();
    let images = messages
        .iter()
        .filter(|m| m.media_kind == Some(MediaKind::Image))
        .count();
    let audio = messages
        .iter()
        .filter(|m| m.media_kind == Some(MediaKind::Audio))
        .count();
    let unclassified = messages
        .iter()
        .filter(|m| m.media.is_some() && m.media_kind.is_none())
        .count();

    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {} messages", original_count);
    println!("   Written:   {} messages", messages.len());
    println!("   Senders:   {}", senders.len());
    println!("   Images:    {}", images);
    println!("   Audio:     {}", audio);
    if unclassified > 0 {
        println!("   Other attachments: {}", unclassified);
    }
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: chatview::cli::OutputFormat) -> String {
    if output != "transcript.csv" {
        return output.to_string();
    }

    format!("transcript.{}", format.extension())
}
