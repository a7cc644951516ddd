//! Which declaration is open and which entity receives fields.
//!
//! Context is a stack of typed frames rather than two overwritable slots,
//! so a grammar shape the loader does not model (a declaration inside a
//! declaration, a function outside a service) is reported instead of
//! silently replacing state. Frames refer to entities by index into the
//! document being built.

use thrifty_model::DeclarationKind;

use crate::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Declaration {
        index: usize,
        kind: DeclarationKind,
    },
    Method {
        service: usize,
        method: usize,
    },
    Throws {
        service: usize,
        method: usize,
    },
}

/// The entity that currently receives field entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptorSlot {
    /// A struct or exception body.
    Declaration(usize),
    /// A method's parameter list.
    Parameters { service: usize, method: usize },
    /// A method's exception list.
    Throws { service: usize, method: usize },
}

#[derive(Debug, Default)]
pub struct ContextTracker {
    frames: Vec<Frame>,
}

impl ContextTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Open a top-level declaration. Declarations never nest.
    ///
    /// # Errors
    /// `NestedDeclaration` if any context is already open.
    pub fn enter_declaration(
        &mut self,
        kind: DeclarationKind,
        index: usize,
        name: &str,
    ) -> Result<(), LoadError> {
        if let Some((_, open)) = self.current_declaration() {
            return Err(LoadError::NestedDeclaration {
                kind,
                name: name.to_string(),
                open,
            });
        }
        self.frames.push(Frame::Declaration { index, kind });
        Ok(())
    }

    /// Close the open declaration of `kind`.
    ///
    /// # Errors
    /// `UnbalancedExit` if the innermost frame is not that declaration.
    pub fn exit_declaration(&mut self, kind: DeclarationKind) -> Result<(), LoadError> {
        match self.frames.last() {
            Some(Frame::Declaration { kind: open, .. }) if *open == kind => {
                self.frames.pop();
                Ok(())
            }
            _ => Err(LoadError::UnbalancedExit {
                node: kind.to_string(),
            }),
        }
    }

    /// The open declaration, from the outermost frame.
    #[must_use]
    pub fn current_declaration(&self) -> Option<(usize, DeclarationKind)> {
        match self.frames.first()? {
            Frame::Declaration { index, kind } => Some((*index, *kind)),
            Frame::Method { service, .. } | Frame::Throws { service, .. } => {
                Some((*service, DeclarationKind::Service))
            }
        }
    }

    /// Index of the enum whose body is being walked.
    #[must_use]
    pub fn open_enum(&self) -> Option<usize> {
        match self.frames.last()? {
            Frame::Declaration {
                index,
                kind: DeclarationKind::Enum,
            } => Some(*index),
            _ => None,
        }
    }

    /// Index of the service whose body is being walked, outside any method.
    #[must_use]
    pub fn open_service(&self) -> Option<usize> {
        match self.frames.last()? {
            Frame::Declaration {
                index,
                kind: DeclarationKind::Service,
            } => Some(*index),
            _ => None,
        }
    }

    /// Make `method` of the open service the acceptor.
    ///
    /// # Errors
    /// `FunctionOutsideService` if no service body is innermost.
    pub fn enter_method(&mut self, method: usize, name: &str) -> Result<(), LoadError> {
        let service = self
            .open_service()
            .ok_or_else(|| LoadError::FunctionOutsideService {
                name: name.to_string(),
            })?;
        self.frames.push(Frame::Method { service, method });
        Ok(())
    }

    /// Redirect the acceptor from the method's parameters to its exception
    /// list. The redirect lasts until the method exits.
    ///
    /// # Errors
    /// `ThrowsOutsideFunction` if no method is innermost.
    pub fn enter_throws(&mut self) -> Result<(), LoadError> {
        let Some(frame) = self.frames.last_mut() else {
            return Err(LoadError::ThrowsOutsideFunction);
        };
        let Frame::Method { service, method } = *frame else {
            return Err(LoadError::ThrowsOutsideFunction);
        };
        *frame = Frame::Throws { service, method };
        Ok(())
    }

    /// Leave the method, whether or not its throws clause was entered.
    /// The enclosing service stays open but accepts no fields.
    ///
    /// # Errors
    /// `UnbalancedExit` if no method is innermost.
    pub fn exit_method(&mut self) -> Result<(), LoadError> {
        match self.frames.last() {
            Some(Frame::Method { .. } | Frame::Throws { .. }) => {
                self.frames.pop();
                Ok(())
            }
            _ => Err(LoadError::UnbalancedExit {
                node: "function".to_string(),
            }),
        }
    }

    #[must_use]
    pub fn acceptor(&self) -> Option<AcceptorSlot> {
        match *self.frames.last()? {
            Frame::Declaration {
                index,
                kind: DeclarationKind::Struct | DeclarationKind::Exception,
            } => Some(AcceptorSlot::Declaration(index)),
            Frame::Declaration { .. } => None,
            Frame::Method { service, method } => {
                Some(AcceptorSlot::Parameters { service, method })
            }
            Frame::Throws { service, method } => Some(AcceptorSlot::Throws { service, method }),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
