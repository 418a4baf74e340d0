//! Value types produced by a successful parse.

use std::fmt;

/// One decoded argument value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Literal {
    /// Quoted string, or a bare token no other rule recognised
    String(String),
    /// Optionally signed run of digits
    Integer(i64),
    /// Optionally signed `digits.digits`
    Float(f64),
    /// `true` or `false`
    Boolean(bool),
    /// `[...]`, elements may themselves be lists
    List(Vec<Literal>),
}

impl Literal {
    /// Borrow the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer value, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Literal]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<Literal>> for Literal {
    fn from(value: Vec<Literal>) -> Self {
        Self::List(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) if s.contains('\'') => write!(f, "\"{}\"", s),
            Self::String(s) => write!(f, "'{}'", s),
            Self::Integer(i) => write!(f, "{}", i),
            // Keep the decimal point so the text decodes back to a float
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Self::Float(x) => write!(f, "{}", x),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Literal]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// A validated format expression.
///
/// Only [`FormatParser`](super::FormatParser) creates these. A property always
/// has an empty argument list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFormat"))]
pub struct Format {
    name: String,
    is_property: bool,
    arguments: Vec<Literal>,
}

impl Format {
    pub(crate) fn property(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_property: true,
            arguments: Vec::new(),
        }
    }

    pub(crate) fn method(name: impl Into<String>, arguments: Vec<Literal>) -> Self {
        Self {
            name: name.into(),
            is_property: false,
            arguments,
        }
    }

    /// The property or method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this references a property rather than a method.
    pub fn is_property(&self) -> bool {
        self.is_property
    }

    /// Decoded arguments, in call order.
    pub fn arguments(&self) -> &[Literal] {
        &self.arguments
    }

    /// Take ownership of the decoded arguments.
    pub fn into_arguments(self) -> Vec<Literal> {
        self.arguments
    }
}

/// Unchecked shape of a serialized [`Format`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFormat {
    name: String,
    is_property: bool,
    #[serde(default)]
    arguments: Vec<Literal>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFormat> for Format {
    type Error = String;

    fn try_from(raw: RawFormat) -> std::result::Result<Self, Self::Error> {
        match super::Lexer::new(&raw.name).split() {
            Ok(split) if split.arguments.is_none() => {}
            _ => return Err(format!("invalid format name '{}'", raw.name)),
        }
        if raw.is_property && !raw.arguments.is_empty() {
            return Err(format!(
                "property '{}' cannot carry {} argument(s)",
                raw.name,
                raw.arguments.len()
            ));
        }
        Ok(Self {
            name: raw.name,
            is_property: raw.is_property,
            arguments: raw.arguments,
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_property {
            return write!(f, "{}", self.name);
        }
        write!(f, "{}(", self.name)?;
        match self.arguments.as_slice() {
            [Literal::String(s)] if s.is_empty() => {}
            args => write_joined(f, args)?,
        }
        write!(f, ")")
    }
}
