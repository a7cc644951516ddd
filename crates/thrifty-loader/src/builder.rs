//! Tree-to-model builder.
//!
//! [`ModelBuilder`] listens to a single walk over one file's syntax tree and
//! appends model entities as their nodes are entered:
//!
//! - declarations are created, take the pending comment and are appended
//!   to the document on enter; their context closes on exit
//! - `enum_value` appends to the open enum
//! - `field` builds an [`Attribute`] and hands it to the active acceptor
//!   (struct/exception body, function parameters, or throws list)
//! - `function` requires an open service and becomes the acceptor
//! - `throws_list` redirects the acceptor to the function's exceptions
//! - `comment_multiline` replaces the pending comment; single-line
//!   comments are ignored
//! - closing a declaration or function drops a comment nothing took

use thrifty_model::{
    Attribute, AttributeAcceptor, Declaration, DeclarationKind, Document, Enum, Exception,
    Method, Service, Struct, ThrowsRedirect,
};

use crate::comment::{CommentCarrier, normalize_comment};
use crate::context::{AcceptorSlot, ContextTracker};
use crate::error::LoadError;
use crate::options::LoadOptions;
use crate::syntax::{NodeKind, SyntaxNode, fields};
use crate::walker::{TreeListener, walk};

/// Signature of a comment normalizer.
pub type Normalizer = fn(&str) -> String;

/// Single-use builder for one file's [`Document`].
#[derive(Debug)]
pub struct ModelBuilder<F = Normalizer> {
    name: String,
    declarations: Vec<Declaration>,
    context: ContextTracker,
    comments: CommentCarrier<F>,
    options: LoadOptions,
    documents_seen: usize,
}

impl ModelBuilder {
    /// Builder using [`normalize_comment`] for comment text.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_normalizer(name, normalize_comment)
    }
}

impl<F> ModelBuilder<F>
where
    F: Fn(&str) -> String,
{
    pub fn with_normalizer(name: impl Into<String>, normalize: F) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
            context: ContextTracker::new(),
            comments: CommentCarrier::new(normalize),
            options: LoadOptions::default(),
            documents_seen: 0,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Walk `root` and return the finished document.
    ///
    /// # Errors
    /// Any [`LoadError`] raised during the walk; no partial document is
    /// returned.
    pub fn build<N: SyntaxNode>(mut self, root: &N) -> Result<Document, LoadError> {
        walk(root, &mut self)?;
        self.finish()
    }

    /// Consume the builder once its walk has completed.
    ///
    /// # Errors
    /// `DocumentCount` unless exactly one `document` node was visited,
    /// `UnbalancedExit` if a context is still open.
    pub fn finish(self) -> Result<Document, LoadError> {
        if self.documents_seen != 1 {
            return Err(LoadError::DocumentCount(self.documents_seen));
        }
        if !self.context.is_empty() {
            return Err(LoadError::UnbalancedExit {
                node: NodeKind::Document.as_str().to_string(),
            });
        }
        if self.comments.is_pending() {
            tracing::trace!("trailing comment attached to nothing");
        }
        tracing::debug!(
            document = %self.name,
            declarations = self.declarations.len(),
            "document loaded"
        );
        Ok(Document::with_declarations(self.name, self.declarations))
    }

    fn enter_document(&mut self) -> Result<(), LoadError> {
        self.documents_seen += 1;
        if self.documents_seen > 1 {
            return Err(LoadError::DocumentCount(self.documents_seen));
        }
        Ok(())
    }

    fn enter_declaration<N: SyntaxNode>(
        &mut self,
        node: &N,
        node_kind: NodeKind,
        kind: DeclarationKind,
    ) -> Result<(), LoadError> {
        let name = required_field(node, node_kind, fields::IDENTIFIER)?;
        self.context
            .enter_declaration(kind, self.declarations.len(), &name)?;
        let comment = self.comments.take();
        tracing::debug!(%kind, %name, "opened declaration");

        let declaration: Declaration = match kind {
            DeclarationKind::Enum => Enum {
                comment,
                ..Enum::new(name)
            }
            .into(),
            DeclarationKind::Struct => Struct {
                comment,
                ..Struct::new(name)
            }
            .into(),
            DeclarationKind::Exception => Exception {
                comment,
                ..Exception::new(name)
            }
            .into(),
            DeclarationKind::Service => Service {
                comment,
                ..Service::new(name)
            }
            .into(),
        };
        self.declarations.push(declaration);
        Ok(())
    }

    fn enter_enum_value<N: SyntaxNode>(&mut self, node: &N) -> Result<(), LoadError> {
        let value = required_field(node, NodeKind::EnumValue, fields::IDENTIFIER)?;
        let Some(index) = self.context.open_enum() else {
            return Err(LoadError::EnumValueOutsideEnum { value });
        };
        self.declarations
            .get_mut(index)
            .and_then(Declaration::as_enum_mut)
            .ok_or(LoadError::StaleContext)?
            .push_value(value);
        Ok(())
    }

    /// Fields outside any acceptor (for instance directly inside an enum
    /// or service body) are skipped unless `strict_fields` is set. The
    /// pending comment is consumed either way. A skipped field's type is
    /// never read.
    fn enter_field<N: SyntaxNode>(&mut self, node: &N) -> Result<(), LoadError> {
        let comment = self.comments.take();
        let Some(slot) = self.context.acceptor() else {
            if self.options.strict_fields {
                let name = required_field(node, NodeKind::Field, fields::IDENTIFIER)?;
                return Err(LoadError::OrphanField { name });
            }
            tracing::debug!(
                field = node.field_text(fields::IDENTIFIER).as_deref().unwrap_or(""),
                "skipping field with no active acceptor"
            );
            return Ok(());
        };

        let name = required_field(node, NodeKind::Field, fields::IDENTIFIER)?;
        let type_ref = required_field(node, NodeKind::Field, fields::FIELD_TYPE)?;
        self.append_attribute(slot, Attribute::new(name, type_ref).with_comment(comment))
    }

    fn enter_function<N: SyntaxNode>(&mut self, node: &N) -> Result<(), LoadError> {
        let name = required_field(node, NodeKind::Function, fields::IDENTIFIER)?;
        let Some(service_index) = self.context.open_service() else {
            return Err(LoadError::FunctionOutsideService { name });
        };
        let return_type = required_field(node, NodeKind::Function, fields::FUNCTION_TYPE)?;
        let comment = self.comments.take();

        let service = self
            .declarations
            .get_mut(service_index)
            .and_then(Declaration::as_service_mut)
            .ok_or(LoadError::StaleContext)?;
        tracing::debug!(service = %service.name, function = %name, "opened function");
        service
            .methods
            .push(Method::new(name.as_str(), return_type).with_comment(comment));
        let method_index = service.methods.len() - 1;

        self.context.enter_method(method_index, &name)
    }

    fn append_attribute(
        &mut self,
        slot: AcceptorSlot,
        attribute: Attribute,
    ) -> Result<(), LoadError> {
        match slot {
            AcceptorSlot::Declaration(index) => self
                .declarations
                .get_mut(index)
                .and_then(|declaration| declaration.acceptor_mut())
                .ok_or(LoadError::StaleContext)?
                .append_attribute(attribute),
            AcceptorSlot::Parameters { service, method } => {
                self.method_mut(service, method)?.append_attribute(attribute);
            }
            AcceptorSlot::Throws { service, method } => {
                ThrowsRedirect::new(self.method_mut(service, method)?).append_attribute(attribute);
            }
        }
        Ok(())
    }

    fn method_mut(&mut self, service: usize, method: usize) -> Result<&mut Method, LoadError> {
        self.declarations
            .get_mut(service)
            .and_then(Declaration::as_service_mut)
            .and_then(|service| service.methods.get_mut(method))
            .ok_or(LoadError::StaleContext)
    }
}

impl<N, F> TreeListener<N> for ModelBuilder<F>
where
    N: SyntaxNode,
    F: Fn(&str) -> String,
{
    type Error = LoadError;

    fn enter(&mut self, node: &N) -> Result<(), LoadError> {
        let kind = NodeKind::from_kind(node.kind());
        tracing::trace!(node = node.kind(), "enter");

        if let Some(declaration) = kind.declaration_kind() {
            return self.enter_declaration(node, kind, declaration);
        }
        match kind {
            NodeKind::Document => self.enter_document(),
            NodeKind::EnumValue => self.enter_enum_value(node),
            NodeKind::Field => self.enter_field(node),
            NodeKind::Function => self.enter_function(node),
            NodeKind::ThrowsList => self.context.enter_throws(),
            NodeKind::CommentMultiline => {
                self.comments.set(&node.text());
                Ok(())
            }
            NodeKind::CommentSingleline
            | NodeKind::Other
            | NodeKind::EnumDeclaration
            | NodeKind::StructDeclaration
            | NodeKind::ExceptionDeclaration
            | NodeKind::ServiceDeclaration => Ok(()),
        }
    }

    fn exit(&mut self, node: &N) -> Result<(), LoadError> {
        let kind = NodeKind::from_kind(node.kind());
        tracing::trace!(node = node.kind(), "exit");

        if let Some(declaration) = kind.declaration_kind() {
            self.comments.clear();
            return self.context.exit_declaration(declaration);
        }
        match kind {
            NodeKind::Function => {
                self.comments.clear();
                self.context.exit_method()
            }
            _ => Ok(()),
        }
    }
}

/// Trimmed, non-empty text of a named child.
fn required_field<N: SyntaxNode>(
    node: &N,
    kind: NodeKind,
    field: &'static str,
) -> Result<String, LoadError> {
    node.field_text(field)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(LoadError::MissingField {
            node: kind.as_str(),
            field,
        })
}
