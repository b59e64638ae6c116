//! Parsing of the marker document.
//!
//! The document is written by the mapping tool, never by us. Only the shape
//! below is checked; every other key (icons, markup, areas, lines, circles)
//! is ignored.
//!
//! ```text
//! sets:
//!   <set-id>:
//!     markers:
//!       <marker-id>:
//!         label: <string>
//!         world: <string>
//!         x: <float>
//!         y: <float>
//!         z: <float>
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use markerutils_foundation::{Error, ErrorContext, Marker, MarkerIndex, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SourceDocument {
    // A bare `sets:` reads as null; keep it apart from an empty mapping.
    sets: Option<IndexMap<String, SourceSet>>,
}

#[derive(Debug, Deserialize)]
struct SourceSet {
    #[serde(default)]
    markers: IndexMap<String, SourceMarker>,
}

#[derive(Debug, Deserialize)]
struct SourceMarker {
    label: String,
    world: String,
    x: f64,
    y: f64,
    z: f64,
}

/// Parses a marker document into a flat index.
///
/// Set grouping is discarded. Sets and markers are visited in document
/// order, so an id repeated in a later set replaces the earlier marker.
///
/// # Errors
///
/// Returns a `SourceMalformed` error if the document is not valid YAML or
/// does not have the expected shape. A null `sets` is malformed; only an
/// explicit empty mapping yields an empty index. Parser errors carry the
/// position of the offending node when one is reported.
pub fn parse_markers(text: &str, path: &Path) -> Result<MarkerIndex> {
    let document: SourceDocument = serde_yaml::from_str(text).map_err(|err| {
        let mut context = ErrorContext::new().with_source(path);
        if let Some(location) = err.location() {
            context = context.with_position(location.line(), location.column());
        }
        Error::source_malformed(path, err.to_string()).with_context(context)
    })?;

    let Some(sets) = document.sets else {
        return Err(Error::source_malformed(path, "`sets` is missing or null")
            .with_context(ErrorContext::new().with_source(path)));
    };

    Ok(sets
        .into_values()
        .flat_map(|set| set.markers)
        .map(|(id, marker)| {
            Marker::new(id, marker.label, marker.world, marker.x, marker.y, marker.z)
        })
        .collect())
}

/// Reads and parses the marker document at `path`.
///
/// # Errors
///
/// Returns a `SourceUnavailable` error if the file cannot be read, or a
/// `SourceMalformed` error if its contents have the wrong shape.
pub fn read_markers(path: &Path) -> Result<MarkerIndex> {
    let text = fs::read_to_string(path).map_err(|err| Error::source_unavailable(path, err))?;
    parse_markers(&text, path)
}
