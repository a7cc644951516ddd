//! Attribute routing.
//!
//! Field-shaped syntax nodes appear in three places: struct/exception bodies,
//! method parameter lists and throws clauses. The loader hands every parsed
//! field to whichever [`AttributeAcceptor`] is active; each implementation
//! decides which ordered list receives it.

use crate::attribute::{Attribute, TypeRef};
use crate::declaration::{Exception, Struct};
use crate::method::Method;

/// Something that currently receives [`Attribute`] entries.
pub trait AttributeAcceptor {
    fn append_attribute(&mut self, attribute: Attribute);
}

impl AttributeAcceptor for Struct {
    fn append_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }
}

impl AttributeAcceptor for Exception {
    fn append_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }
}

/// Methods accept their parameters.
impl AttributeAcceptor for Method {
    fn append_attribute(&mut self, attribute: Attribute) {
        self.parameters.push(attribute);
    }
}

/// View over a method's exception list.
///
/// Borrows the method's own `exceptions` vector, so every append lands in
/// the method; only the attribute's type is kept.
#[derive(Debug)]
pub struct ThrowsRedirect<'a> {
    exceptions: &'a mut Vec<TypeRef>,
}

impl<'a> ThrowsRedirect<'a> {
    #[must_use]
    pub fn new(method: &'a mut Method) -> Self {
        Self {
            exceptions: &mut method.exceptions,
        }
    }
}

impl AttributeAcceptor for ThrowsRedirect<'_> {
    fn append_attribute(&mut self, attribute: Attribute) {
        self.exceptions.push(attribute.type_ref);
    }
}
