//! Table-backed capability registry.

use std::collections::{HashMap, HashSet};

use super::CapabilityRegistry;

/// Number of positional arguments a method accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodArity {
    /// Required arguments
    pub min: usize,
    /// Maximum arguments, `None` for variadic methods
    pub max: Option<usize>,
}

impl MethodArity {
    /// Exactly `count` arguments.
    pub fn exact(count: usize) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    /// Between `min` and `max` arguments, inclusive.
    pub fn range(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max.max(min)),
        }
    }

    /// At least `min` arguments.
    pub fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Check a decoded argument count against this arity.
    ///
    /// A method taking no arguments also accepts exactly one, since `name()`
    /// decodes to a single empty string.
    pub fn accepts(&self, arg_count: usize) -> bool {
        if self.max == Some(0) {
            return arg_count <= 1;
        }
        arg_count >= self.min && self.max.map_or(true, |max| arg_count <= max)
    }
}

/// Registry backed by a fixed table of property names and method signatures.
///
/// Tables can be layered with [`extend`](Self::extend), e.g. a locale table
/// over a base table.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    properties: HashSet<String>,
    methods: HashMap<String, MethodArity>,
}

impl StaticRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property.
    pub fn property(mut self, name: impl Into<String>) -> Self {
        self.properties.insert(name.into());
        self
    }

    /// Add several properties.
    pub fn properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a method, replacing any earlier signature with the same name.
    pub fn method(mut self, name: impl Into<String>, arity: MethodArity) -> Self {
        self.methods.insert(name.into(), arity);
        self
    }

    /// Layer `other` on top of this registry. Methods in `other` win.
    pub fn extend(mut self, other: StaticRegistry) -> Self {
        self.properties.extend(other.properties);
        self.methods.extend(other.methods);
        self
    }

    /// Signature of a method, if known.
    pub fn arity(&self, name: &str) -> Option<MethodArity> {
        self.methods.get(name).copied()
    }

    /// Number of known properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Number of known methods.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

impl CapabilityRegistry for StaticRegistry {
    fn has_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }

    fn has_method(&self, name: &str, arg_count: usize) -> bool {
        self.methods
            .get(name)
            .is_some_and(|arity| arity.accepts(arg_count))
    }
}
