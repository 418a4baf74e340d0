//! # Faker Format
//!
//! Parser and validator for the small "format expressions" used to reference
//! the capabilities of a fake-data generator.
//!
//! An expression is either a bare property name or a method invocation with a
//! literal argument list:
//!
//! ```text
//! name
//! numberBetween(0, 10)
//! randomElements(['a', 'b', 'c'], 1, false)
//! ```
//!
//! ## Architecture
//!
//! - [`format`] - Expression lexer, argument decoder and the [`FormatParser`]
//! - [`registry`] - The [`CapabilityRegistry`] seam and the table-backed [`StaticRegistry`]
//! - [`error`] - Error types shared by the whole crate
//!
//! ## Usage
//!
//! ```
//! use faker_format::{FormatParser, Literal, MethodArity, StaticRegistry};
//!
//! let registry = StaticRegistry::new()
//!     .property("name")
//!     .method("numberBetween", MethodArity::range(0, 2));
//!
//! let mut parser = FormatParser::new();
//! parser.load(registry);
//!
//! let format = parser.parse("numberBetween(0,10)").unwrap();
//! assert_eq!(format.name(), "numberBetween");
//! assert_eq!(format.arguments(), &[Literal::Integer(0), Literal::Integer(10)]);
//! ```
//!
//! Validation is delegated entirely to the bound registry: the parser knows no
//! property or method names of its own.

pub mod error;
pub mod format;
pub mod registry;

// Re-export main types for convenience
pub use error::{DecodeError, ErrorKind, FormatError, Result};
pub use format::{Format, FormatParser, Literal};
pub use registry::{CapabilityRegistry, MethodArity, StaticRegistry};

/// Opens an argument list after a method name
pub const CALL_OPEN: char = '(';

/// Closes an argument list
pub const CALL_CLOSE: char = ')';

/// Separates arguments in a call and elements in a list
pub const ARGUMENT_SEPARATOR: char = ',';

/// Opens a list literal
pub const LIST_OPEN: char = '[';

/// Closes a list literal
pub const LIST_CLOSE: char = ']';

/// Characters that may delimit a string literal
pub const QUOTES: [char; 2] = ['\'', '"'];
