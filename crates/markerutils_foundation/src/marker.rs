//! Marker records and world locations.

use std::fmt;

/// A position inside a named world.
///
/// The world name is resolved by the host at teleport time; a location
/// whose world no longer exists is still a valid value.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// Name of the world the coordinates belong to.
    pub world: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.world,
            Coordinate(self.x),
            Coordinate(self.y),
            Coordinate(self.z)
        )
    }
}

/// A named point of interest read from the marker source.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Unique key, stable across reloads.
    pub id: String,
    /// Human-readable display name (not unique).
    pub label: String,
    /// Name of the world the marker belongs to.
    pub world: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Marker {
    /// Creates a new marker.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        world: impl Into<String>,
        x: f64,
        y: f64,
        z: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// Returns the teleport destination for this marker.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::new(self.world.clone(), self.x, self.y, self.z)
    }

    /// Renders the completion candidate `<label> (<id>)`.
    ///
    /// Feeding the candidate back as command arguments resolves to this
    /// marker, because the trailing `(<id>)` is what exact lookup reads.
    #[must_use]
    pub fn display_candidate(&self) -> String {
        format!("{} ({})", self.label, self.id)
    }

    /// Renders the one-line description shown by the `info` action.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "id:{} label:{}, world:{}, x:{}, y:{}, z:{}",
            self.id,
            self.label,
            self.world,
            Coordinate(self.x),
            Coordinate(self.y),
            Coordinate(self.z)
        )
    }
}

/// Formats a finite coordinate so its mantissa always has a decimal point.
///
/// Plain forms print as `100.0`; exponent forms print as `-1.0e-7`.
struct Coordinate(f64);

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:?}", self.0);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                write!(f, "{mantissa}.0e{exponent}")
            }
            _ => f.write_str(&text),
        }
    }
}
