//! Core types, marker index, and errors for markerutils.
//!
//! This crate provides:
//! - [`Marker`] - A named, world-located point of interest
//! - [`Location`] - A teleport destination within a named world
//! - [`MarkerIndex`] - Persistent id → marker mapping with O(1) clone
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod index;
pub mod marker;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use index::MarkerIndex;
pub use marker::{Location, Marker};
