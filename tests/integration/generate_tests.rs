//! Integration tests for listing generation
//!
//! These tests run the full pipeline (HTML parse, heading selection,
//! comment rendering, template assembly, sinks) against a saved page.

use enum_scribe::config::{load_config, Config};
use enum_scribe::output::{deliver, FileSink, OutputSink, WriterSink};
use enum_scribe::{generate, parse_document, ScribeError};
use std::io::Write;

const RESCODE_PAGE: &str = include_str!("../fixtures/rescode.html");

fn generate_default(html: &str) -> enum_scribe::GeneratedListing {
    let document = parse_document(html);
    generate(&document, &Config::default()).expect("generation should succeed")
}

#[test]
fn test_entries_follow_document_order() {
    let listing = generate_default(RESCODE_PAGE);

    let entries: Vec<(&str, u32)> = listing
        .entries
        .iter()
        .map(|e| (e.name.as_str(), e.code))
        .collect();
    assert_eq!(
        entries,
        vec![("OK", 0), ("ERROR", 1), ("BUSY", 5), ("INTERNAL", 2)]
    );
}

#[test]
fn test_entry_lines_aligned() {
    let listing = generate_default(RESCODE_PAGE);

    assert!(listing
        .code
        .contains(&format!("  ERROR = {}1,\n", " ".repeat(17))));
    assert!(listing
        .code
        .contains(&format!("  OK = {}0,\n", " ".repeat(20))));
    assert!(listing
        .code
        .contains(&format!("  INTERNAL = {}2,\n", " ".repeat(14))));
}

#[test]
fn test_generic_error_comment() {
    let listing = generate_default(RESCODE_PAGE);
    let error = &listing.entries[1];

    assert_eq!(
        error.doc.as_deref(),
        Some("  /**\n   * Generic error.\n   **/\n")
    );
}

#[test]
fn test_busy_comment_has_paragraphs_and_list() {
    let listing = generate_default(RESCODE_PAGE);
    let doc = listing.entries[2].doc.as_deref().expect("BUSY is documented");

    assert!(doc.starts_with("  /**\n   * The SQLITE_BUSY result code"));
    assert!(doc.ends_with("   **/\n"));
    assert!(doc.contains("\r\n   * "));
    assert!(doc.contains("\n\n   * For example, if process A"));
    assert!(doc.contains("   *  1. Process B attempts to start a new write transaction.\n"));
    assert!(doc.contains("   *  2. Process B receives SQLITE_BUSY.\n"));
    assert!(!doc.contains("ignored"));
}

#[test]
fn test_undocumented_entry_has_no_block() {
    let listing = generate_default(RESCODE_PAGE);
    assert!(listing.entries[3].doc.is_none());
    assert!(!listing.code.contains("belongs to no code"));
}

#[test]
fn test_template_wraps_entries() {
    let listing = generate_default(RESCODE_PAGE);

    assert!(listing.code.starts_with(
        "#pragma once\n\nnamespace sqlitepp\n{\n\nenum class ResultCode\n{\n"
    ));
    assert!(listing.code.ends_with("2,\n};\n}\n"));
}

#[test]
fn test_page_without_codes() {
    let listing = generate_default("<html><body><h3>Nothing</h3><p>here</p></body></html>");

    assert!(listing.is_empty());
    assert_eq!(
        listing.code,
        "#pragma once\n\nnamespace sqlitepp\n{\n\nenum class ResultCode\n{\n};\n}\n"
    );
}

#[test]
fn test_malformed_heading_aborts() {
    let html = "<h3>(1) SQLITE_ERROR</h3><p>ok</p><h3>(7) lowercase_name</h3>";
    let result = generate(&parse_document(html), &Config::default());

    match result {
        Err(ScribeError::HeadingMismatch { text }) => assert_eq!(text, "(7) lowercase_name"),
        other => panic!("expected HeadingMismatch, got {:?}", other),
    }
}

#[test]
fn test_configured_generation() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file
        .write_all(
            br#"
[selector]
heading-tag = "h4"
code-prefix = "APP_"

[template]
namespace = "app"
enum-name = "Status"

[format]
value-column = 12
wrap-line-ending = "\n"
"#,
        )
        .unwrap();
    config_file.flush().unwrap();

    let config = load_config(config_file.path()).unwrap();
    let html = "<h4>(3) APP_DENIED</h4><p>Access denied.</p><h3>(1) SQLITE_ERROR</h3>";
    let listing = generate(&parse_document(html), &config).unwrap();

    assert_eq!(listing.entries.len(), 1);
    assert_eq!(
        listing.code,
        "#pragma once\n\nnamespace app\n{\n\nenum class Status\n{\n\
         \x20 /**\n   * Access denied.\n   **/\n\
         \x20 DENIED =    3,\n};\n}\n"
    );
}

#[test]
fn test_sinks_receive_same_listing() {
    let listing = generate_default(RESCODE_PAGE);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ResultCode.h");

    let mut sinks: Vec<Box<dyn OutputSink>> = vec![Box::new(FileSink::new(&path))];
    deliver(&listing, &mut sinks).unwrap();

    let mut writer = WriterSink::new(Vec::new());
    writer.write_listing(&listing).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, listing.code);
    assert_eq!(writer.into_inner(), listing.code.into_bytes());
}
