//! Integration tests for Layer 1: Store
//!
//! Tests for parsing the marker document, staleness-driven reloads, and
//! snapshot publication under concurrent readers.

mod snapshot;

use std::fs;
use std::path::Path;

use filetime::FileTime;

/// Writes `text` to `path` and pins its modification time to `mtime` seconds.
pub fn write_source(path: &Path, text: &str, mtime: i64) {
    fs::write(path, text).unwrap();
    filetime::set_file_mtime(path, FileTime::from_unix_time(mtime, 0)).unwrap();
}

/// A document with one set holding one marker per `(id, label)` pair.
pub fn document(markers: &[(&str, &str)]) -> String {
    let mut text = String::from("sets:\n  markers:\n    markers:\n");
    for (id, label) in markers {
        text.push_str(&format!(
            "      \"{id}\": {{ label: \"{label}\", world: world, x: 1, y: 2, z: 3 }}\n"
        ));
    }
    text
}
