//! Error types for report parsing.

use thiserror::Error;

/// Errors that can occur while recovering a table from report text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The report has no usable header line.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A data line has fewer whitespace-delimited fields than the header has columns.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCountMismatch {
        /// 1-based line number in the source text.
        line: usize,
        /// Column count defined by the header.
        expected: usize,
        /// Tokens actually present on the line.
        found: usize,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
