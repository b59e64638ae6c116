//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use std::path::Path;

use markerutils_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_source_unavailable() {
    let err = Error::source_unavailable(
        Path::new("dynmap/markers.yml"),
        "No such file or directory",
    );
    assert!(matches!(err.kind, ErrorKind::SourceUnavailable { .. }));
    assert!(err.is_source_error());
    let msg = format!("{err}");
    assert!(msg.contains("dynmap/markers.yml"));
    assert!(msg.contains("No such file"));
}

#[test]
fn error_source_malformed() {
    let err = Error::source_malformed(Path::new("markers.yml"), "missing field `sets`");
    assert!(matches!(err.kind, ErrorKind::SourceMalformed { .. }));
    assert!(err.is_source_error());
    assert!(format!("{err}").contains("missing field `sets`"));
}

#[test]
fn error_marker_not_found() {
    let err = Error::marker_not_found("My Marker");
    assert!(!err.is_source_error());
    assert_eq!(format!("{err}"), "no marker found by ID 'My Marker'");
}

#[test]
fn error_unknown_world() {
    let err = Error::unknown_world("world_nether");
    assert!(matches!(err.kind, ErrorKind::UnknownWorld(ref w) if w == "world_nether"));
    assert!(format!("{err}").contains("world_nether"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_renders_position() {
    let context = ErrorContext::new()
        .with_source("markers.yml")
        .with_position(3, 7);
    assert_eq!(format!("{context}"), "at markers.yml:3:7");
}

#[test]
fn context_without_position() {
    let context = ErrorContext::new().with_source("markers.yml");
    assert_eq!(format!("{context}"), "at markers.yml");
}

#[test]
fn context_attaches_to_error() {
    let err = Error::source_malformed(Path::new("markers.yml"), "bad")
        .with_context(ErrorContext::new().with_source("markers.yml").with_position(1, 1));
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.line, Some(1));
    assert_eq!(context.column, Some(1));
}
