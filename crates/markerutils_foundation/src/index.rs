//! Persistent marker index with structural sharing.
//!
//! A thin wrapper around `im::HashMap` keyed by marker id. Cloning is O(1),
//! so a published index can be handed to any number of readers without
//! copying. Indexes are built whole from an iterator and never modified.

use std::fmt;

use crate::marker::Marker;

/// Mapping from marker id to [`Marker`].
///
/// Insertion order is irrelevant. When built from an iterator, a later
/// marker with the same id replaces an earlier one.
#[derive(Clone, Default)]
pub struct MarkerIndex(im::HashMap<String, Marker>);

impl MarkerIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    /// Returns the number of markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the index holds no markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a marker by its exact id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.0.get(id)
    }

    /// Returns true if a marker with the id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Returns an iterator over the markers.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.0.values()
    }

    /// Returns an iterator over the ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Debug for MarkerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl PartialEq for MarkerIndex {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl FromIterator<Marker> for MarkerIndex {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|marker| (marker.id.clone(), marker))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a MarkerIndex {
    type Item = &'a Marker;
    type IntoIter = im::hashmap::Values<'a, String, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}
