//! Marker source loading, staleness detection, and snapshot publication.
//!
//! This crate provides:
//! - [`StoreConfig`] - Where the marker source lives
//! - [`source`] - Parsing of the externally owned marker document
//! - [`MarkerStore`] - Lazily refreshed, atomically published marker snapshots
//! - [`Snapshot`] - An immutable view of one successful load

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod source;
pub mod store;

pub use config::StoreConfig;
pub use store::{MarkerStore, Refresh, Snapshot};
