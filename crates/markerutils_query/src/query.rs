//! Reconstruction of marker ids from split argument tokens.
//!
//! The host dispatcher splits command arguments on spaces, so an id like
//! `My Marker`, typed or completed as `(My Marker)`, arrives as the tokens
//! `["(My", "Marker)"]`. Completion candidates have the form
//! `<label> (<id>)`, so the trailing parenthesized phrase is the id.
//!
//! The rule is kept literal: an id with unbalanced parentheses, or a
//! space-separated id typed without parentheses, does not round-trip.

use std::fmt;

/// The exact-id lookup key reconstructed from argument tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MarkerQuery(String);

impl MarkerQuery {
    /// Reconstructs the lookup key from the tokens after the action word.
    ///
    /// Starts from the last token. If it ends with `)`, preceding tokens are
    /// prepended one at a time, joined by a single space, until the query
    /// starts with `(` or no tokens remain. A query wrapped in `(`...`)` is
    /// then unwrapped.
    ///
    /// Returns `None` if there are no tokens.
    #[must_use]
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let (last, preceding) = tokens.split_last()?;
        let mut query = last.as_ref().to_string();

        if query.ends_with(')') {
            for token in preceding.iter().rev() {
                if query.starts_with('(') {
                    break;
                }
                query = format!("{} {query}", token.as_ref());
            }
        }

        if let Some(inner) = query
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        {
            query = inner.to_string();
        }

        Some(Self(query))
    }

    /// Creates a query for an exact id, with no reconstruction applied.
    #[must_use]
    pub fn exact(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the lookup key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
