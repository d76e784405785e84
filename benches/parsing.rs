//! Benchmarks for chatview parsing and processing operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatview::config::ParserConfig;
use chatview::core::{FilterConfig, apply_filters};
use chatview::parser::ChatParser;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let day = i % 28 + 1;
        let hour = i % 24;
        let minute = i % 60;
        match i % 10 {
            // Attachment announcements
            3 => lines.push(format!(
                "{}.1.2024, {}:{:02} - {}: IMG-{:08}.jpg (קובץ מצורף)",
                day, hour, minute, sender, i
            )),
            7 => lines.push(format!(
                "{}.1.2024, {}:{:02} - {}: PTT-{:08}.opus (קובץ מצורף)",
                day, hour, minute, sender, i
            )),
            // Multiline message
            5 => {
                lines.push(format!(
                    "{}.1.2024, {}:{:02} - {}: first line of message {}",
                    day, hour, minute, sender, i
                ));
                lines.push(format!("continuation of message {}", i));
            }
            _ => lines.push(format!(
                "{}.1.2024, {}:{:02} - {}: message number {}",
                day, hour, minute, sender, i
            )),
        }
    }
    lines.join("\n")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for count in [100, 1_000, 10_000] {
        let content = generate_export(count);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("messages", count), &content, |b, input| {
            let parser = ChatParser::new();
            b.iter(|| parser.parse_str(black_box(input)));
        });
    }

    group.finish();
}

fn bench_attachment_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("attachments");
    let content = generate_export(5_000);

    group.bench_function("detection_on", |b| {
        let parser = ChatParser::new();
        b.iter(|| parser.parse_str(black_box(&content)));
    });

    group.bench_function("detection_off", |b| {
        let parser =
            ChatParser::with_config(ParserConfig::new().with_detect_attachments(false));
        b.iter(|| parser.parse_str(black_box(&content)));
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let messages = ChatParser::new().parse_str(&generate_export(5_000));

    group.bench_function("by_sender", |b| {
        let config = FilterConfig::new().with_sender("Alice");
        b.iter(|| apply_filters(black_box(messages.clone()), &config));
    });

    group.bench_function("media_only", |b| {
        let config = FilterConfig::new().with_media_only();
        b.iter(|| apply_filters(black_box(messages.clone()), &config));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_attachment_detection, bench_filter);
criterion_main!(benches);
