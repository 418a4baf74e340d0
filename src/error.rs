//! Error types for format expression parsing.
//!
//! This module provides a unified error type [`FormatError`] covering every
//! way a call to [`FormatParser::parse`](crate::FormatParser::parse) can fail,
//! and the narrower [`DecodeError`] raised while decoding argument text.

use thiserror::Error;

/// Result type alias using [`FormatError`].
pub type Result<T> = std::result::Result<T, FormatError>;

/// Broad classification of a [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed expression text
    Syntax,
    /// Well-formed expression naming something the registry does not offer
    UnknownCapability,
    /// The parser was used before a registry was loaded
    Usage,
}

/// Unified error type for all format parsing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    // ============ Syntax Errors ============
    /// Malformed expression around a given column
    #[error("Syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },

    /// The argument list of a method call could not be decoded
    #[error("Invalid arguments in '{expression}': {source}")]
    InvalidArguments {
        expression: String,
        #[source]
        source: DecodeError,
    },

    // ============ Capability Errors ============
    /// No such property in the loaded registry
    #[error("Unknown property '{name}'")]
    UnknownProperty { name: String },

    /// No such method, or the method does not take this many arguments
    #[error("Unknown method '{name}' accepting {arg_count} argument(s)")]
    UnknownMethod { name: String, arg_count: usize },

    // ============ Usage Errors ============
    /// `parse` called before `load`
    #[error("No capability registry loaded (call load() before parse())")]
    NotLoaded,
}

impl FormatError {
    /// Create a syntax error
    pub fn syntax(column: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            column,
            message: message.into(),
        }
    }

    /// Create an unknown property error
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty { name: name.into() }
    }

    /// Create an unknown method error
    pub fn unknown_method(name: impl Into<String>, arg_count: usize) -> Self {
        Self::UnknownMethod {
            name: name.into(),
            arg_count,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } | Self::InvalidArguments { .. } => ErrorKind::Syntax,
            Self::UnknownProperty { .. } | Self::UnknownMethod { .. } => {
                ErrorKind::UnknownCapability
            }
            Self::NotLoaded => ErrorKind::Usage,
        }
    }
}

/// Error raised while splitting or decoding raw argument text.
///
/// Columns are 1-indexed and relative to the argument text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A string literal was opened and never closed
    #[error("unterminated {quote} quote starting at column {column}")]
    UnterminatedQuote { quote: char, column: usize },

    /// A list was opened and never closed
    #[error("unmatched '[' at column {column}")]
    UnmatchedBracket { column: usize },

    /// A list was closed without being opened
    #[error("unexpected ']' at column {column}")]
    UnexpectedCloseBracket { column: usize },
}
