//! Error types for the markerutils system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for markerutils operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a source unavailable error (missing or unreadable file).
    #[must_use]
    pub fn source_unavailable(path: &Path, reason: impl fmt::Display) -> Self {
        Self::new(ErrorKind::SourceUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        })
    }

    /// Creates a source malformed error (unexpected shape or field types).
    #[must_use]
    pub fn source_malformed(path: &Path, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SourceMalformed {
            path: path.to_path_buf(),
            message: message.into(),
        })
    }

    /// Creates a marker not found error.
    #[must_use]
    pub fn marker_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::MarkerNotFound(id.into()))
    }

    /// Creates an unknown world error.
    #[must_use]
    pub fn unknown_world(world: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownWorld(world.into()))
    }

    /// Returns true if this error leaves the previous snapshot authoritative.
    ///
    /// Source failures never clear loaded markers.
    #[must_use]
    pub fn is_source_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::SourceUnavailable { .. } | ErrorKind::SourceMalformed { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The marker source file is missing or could not be read.
    #[error("marker source unavailable: {}: {reason}", path.display())]
    SourceUnavailable {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The marker source file does not have the expected shape.
    #[error("marker source malformed: {}: {message}", path.display())]
    SourceMalformed {
        /// Path of the source file.
        path: PathBuf,
        /// Description of the shape violation.
        message: String,
    },

    /// No marker is registered under the given id.
    #[error("no marker found by ID '{0}'")]
    MarkerNotFound(String),

    /// A marker refers to a world the host does not know.
    #[error("could not find world '{0}'")]
    UnknownWorld(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the error refers to.
    pub source: Option<PathBuf>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
    /// Column number in source (1-indexed).
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {}", source.display())?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the markerutils error.
pub type Result<T> = std::result::Result<T, Error>;
