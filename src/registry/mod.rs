//! Capability registries answering "does this property or method exist?".
//!
//! The parser never knows which names are valid. It asks a
//! [`CapabilityRegistry`], which may be backed by a static table
//! ([`StaticRegistry`]), by introspection of a live generator, or by anything
//! else able to answer the two queries.

mod table;

pub use table::{MethodArity, StaticRegistry};

use std::rc::Rc;
use std::sync::Arc;

/// Read-only oracle over the properties and methods of a data generator.
pub trait CapabilityRegistry {
    /// Whether `name` is a known property.
    fn has_property(&self, name: &str) -> bool;

    /// Whether `name` is a known method accepting `arg_count` positional
    /// arguments.
    ///
    /// A call written `name()` reaches this with `arg_count == 1` (a single
    /// empty string). Implementations decide whether that counts as a call
    /// without arguments.
    fn has_method(&self, name: &str, arg_count: usize) -> bool;
}

impl<T: CapabilityRegistry + ?Sized> CapabilityRegistry for &T {
    fn has_property(&self, name: &str) -> bool {
        (**self).has_property(name)
    }

    fn has_method(&self, name: &str, arg_count: usize) -> bool {
        (**self).has_method(name, arg_count)
    }
}

impl<T: CapabilityRegistry + ?Sized> CapabilityRegistry for Box<T> {
    fn has_property(&self, name: &str) -> bool {
        (**self).has_property(name)
    }

    fn has_method(&self, name: &str, arg_count: usize) -> bool {
        (**self).has_method(name, arg_count)
    }
}

impl<T: CapabilityRegistry + ?Sized> CapabilityRegistry for Rc<T> {
    fn has_property(&self, name: &str) -> bool {
        (**self).has_property(name)
    }

    fn has_method(&self, name: &str, arg_count: usize) -> bool {
        (**self).has_method(name, arg_count)
    }
}

impl<T: CapabilityRegistry + ?Sized> CapabilityRegistry for Arc<T> {
    fn has_property(&self, name: &str) -> bool {
        (**self).has_property(name)
    }

    fn has_method(&self, name: &str, arg_count: usize) -> bool {
        (**self).has_method(name, arg_count)
    }
}
