//! Parser resolving format expressions against a capability registry.

use log::{debug, trace};

use super::arguments::decode_arguments;
use super::ast::Format;
use super::lexer::Lexer;
use crate::error::{FormatError, Result};
use crate::registry::CapabilityRegistry;

/// Parser for format expressions.
///
/// A parser starts empty, is bound to a registry with [`load`](Self::load) and
/// can then [`parse`](Self::parse) any number of expressions. Parsing takes
/// `&self`, so a loaded parser can be shared across threads whenever its
/// registry can.
#[derive(Debug, Clone)]
pub struct FormatParser<R> {
    registry: Option<R>,
}

impl<R> Default for FormatParser<R> {
    fn default() -> Self {
        Self { registry: None }
    }
}

impl<R: CapabilityRegistry> FormatParser<R> {
    /// Create a parser with no registry loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser already bound to `registry`.
    pub fn with_registry(registry: R) -> Self {
        let mut parser = Self::new();
        parser.load(registry);
        parser
    }

    /// Bind the registry used to validate names, replacing any earlier one.
    pub fn load(&mut self, registry: R) {
        if self.registry.is_some() {
            debug!("replacing loaded capability registry");
        } else {
            debug!("capability registry loaded");
        }
        self.registry = Some(registry);
    }

    /// Whether a registry has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.registry.is_some()
    }

    /// The currently bound registry.
    pub fn registry(&self) -> Option<&R> {
        self.registry.as_ref()
    }

    /// Parse and validate a format expression.
    ///
    /// Fails with a syntax error for malformed text, an unknown property or
    /// method error when the bound registry rejects the name or argument
    /// count, and [`FormatError::NotLoaded`] before [`load`](Self::load).
    pub fn parse(&self, expression: &str) -> Result<Format> {
        let result = self.resolve(expression);
        match &result {
            Ok(format) if format.is_property() => {
                trace!("parsed '{}' as property", expression)
            }
            Ok(format) => trace!(
                "parsed '{}' as method with {} argument(s)",
                expression,
                format.arguments().len()
            ),
            Err(err) => debug!("rejected format '{}': {}", expression, err),
        }
        result
    }

    fn resolve(&self, expression: &str) -> Result<Format> {
        let registry = self.registry.as_ref().ok_or(FormatError::NotLoaded)?;
        let raw = Lexer::new(expression).split()?;

        match raw.arguments {
            None => {
                if !registry.has_property(raw.name) {
                    return Err(FormatError::unknown_property(raw.name));
                }
                Ok(Format::property(raw.name))
            }
            Some(text) => {
                let arguments =
                    decode_arguments(text).map_err(|source| FormatError::InvalidArguments {
                        expression: expression.to_string(),
                        source,
                    })?;
                if !registry.has_method(raw.name, arguments.len()) {
                    return Err(FormatError::unknown_method(raw.name, arguments.len()));
                }
                Ok(Format::method(raw.name, arguments))
            }
        }
    }
}
