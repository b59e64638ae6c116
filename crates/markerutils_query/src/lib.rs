//! Query reconstruction, exact resolution, and fuzzy completion.
//!
//! This crate turns the argument tokens of a marker command into either one
//! marker (exact-id path) or a ranked list of label matches (completion path).
//!
//! # Architecture
//!
//! ```text
//! ["tp", "(My", "Marker)"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ACTION WORD     │  → Tp, tail ["(My", "Marker)"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RECONSTRUCTION  │  → "My Marker"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EXACT LOOKUP    │  → Marker { id: "My Marker", .. } (or NOT FOUND)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`action`] - The action words a command can start with
//! - [`query`] - Reconstruction of split, parenthesized ids
//! - [`resolver`] - Exact lookup and label completion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod query;
pub mod resolver;

pub use action::{ActionWord, UnknownAction};
pub use query::MarkerQuery;
pub use resolver::{QueryResolver, Resolution};
