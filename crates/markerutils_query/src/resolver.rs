//! Exact resolution and label completion.
//!
//! Two independent request shapes run against a marker snapshot:
//! - exact resolution, which backs the action commands and only ever
//!   matches a marker id verbatim
//! - label completion, which backs interactive suggestions and matches any
//!   label containing the typed text

use markerutils_foundation::{Error, Marker, MarkerIndex, Result};
use tracing::debug;

use crate::query::MarkerQuery;

/// Result of exact resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<'a> {
    /// The query names exactly this marker.
    Unique(&'a Marker),
    /// No marker has the query as its id.
    NotFound {
        /// The lookup key that missed.
        query: MarkerQuery,
    },
}

impl<'a> Resolution<'a> {
    /// Returns the resolved marker, if any.
    #[must_use]
    pub fn marker(&self) -> Option<&'a Marker> {
        match self {
            Self::Unique(marker) => Some(*marker),
            Self::NotFound { .. } => None,
        }
    }

    /// Converts the resolution into a result.
    ///
    /// # Errors
    ///
    /// Returns a `MarkerNotFound` error naming the lookup key on a miss.
    pub fn into_result(self) -> Result<&'a Marker> {
        match self {
            Self::Unique(marker) => Ok(marker),
            Self::NotFound { query } => Err(Error::marker_not_found(query.as_str())),
        }
    }
}

/// Resolves queries against a marker index.
pub struct QueryResolver;

impl QueryResolver {
    /// Looks the query up as an exact id. Never falls back to label matching.
    #[must_use]
    pub fn resolve<'a>(query: &MarkerQuery, index: &'a MarkerIndex) -> Resolution<'a> {
        match index.get(query.as_str()) {
            Some(marker) => {
                debug!(id = %marker.id, "resolved marker");
                Resolution::Unique(marker)
            }
            None => {
                debug!(query = %query, "no marker for query");
                Resolution::NotFound {
                    query: query.clone(),
                }
            }
        }
    }

    /// Reconstructs the query from argument tokens and resolves it.
    ///
    /// Returns `None` if there are no tokens.
    #[must_use]
    pub fn resolve_tokens<'a, S: AsRef<str>>(
        tokens: &[S],
        index: &'a MarkerIndex,
    ) -> Option<Resolution<'a>> {
        MarkerQuery::from_tokens(tokens).map(|query| Self::resolve(&query, index))
    }

    /// Returns `<label> (<id>)` for every marker whose label contains
    /// `fragment`, ignoring case, sorted case-insensitively.
    ///
    /// Containment is a literal substring test on the whole label.
    #[must_use]
    pub fn complete(fragment: &str, index: &MarkerIndex) -> Vec<String> {
        let needle = fragment.to_lowercase();
        let mut candidates: Vec<String> = index
            .iter()
            .filter(|marker| marker.label.to_lowercase().contains(&needle))
            .map(Marker::display_candidate)
            .collect();
        // Equal under case folding: fall back to the raw text so repeated
        // completions list candidates in the same order.
        candidates.sort_by_cached_key(|candidate| (candidate.to_lowercase(), candidate.clone()));
        candidates
    }

    /// Completes the fragment formed by joining `tokens` with single spaces.
    #[must_use]
    pub fn complete_tokens<S: AsRef<str>>(tokens: &[S], index: &MarkerIndex) -> Vec<String> {
        let fragment = tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::complete(&fragment, index)
    }
}
