//! Markerutils - marker cache and query resolution
//!
//! This crate re-exports all layers of the markerutils system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: markerutils_runtime    Command surface, completion, host traits, console
//! Layer 2: markerutils_query      Query reconstruction, exact and fuzzy resolution
//! Layer 1: markerutils_store      Source parsing, staleness checks, snapshots
//! Layer 0: markerutils_foundation Core types (Marker, MarkerIndex, Error)
//! ```

pub use markerutils_foundation as foundation;
pub use markerutils_query as query;
pub use markerutils_runtime as runtime;
pub use markerutils_store as store;
