//! Input contract: the syntax tree an external IDL parser hands the loader.

use std::borrow::Cow;

use thrifty_model::DeclarationKind;

/// Named child slots read by the loader.
pub mod fields {
    pub const IDENTIFIER: &str = "identifier";
    pub const FIELD_TYPE: &str = "field_type";
    pub const FUNCTION_TYPE: &str = "function_type";
}

/// A node of an already-parsed IDL syntax tree.
///
/// Children must be yielded in source order; the loader relies on it for
/// every ordering guarantee of the produced model.
pub trait SyntaxNode {
    /// Grammar rule name, e.g. `struct_declaration`.
    fn kind(&self) -> &str;

    /// Raw source text of the node. Only comment nodes are read this way.
    fn text(&self) -> Cow<'_, str>;

    /// Text of a named child such as [`fields::IDENTIFIER`].
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>>;

    fn children(&self) -> impl Iterator<Item = &Self>;
}

/// Node kinds the loader reacts to.
///
/// Every other rule name maps to [`NodeKind::Other`]; the walk descends
/// through such wrapper nodes without handling them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    EnumDeclaration,
    EnumValue,
    StructDeclaration,
    ExceptionDeclaration,
    ServiceDeclaration,
    Field,
    Function,
    ThrowsList,
    CommentMultiline,
    CommentSingleline,
    Other,
}

impl NodeKind {
    #[must_use]
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "document" => Self::Document,
            "enum_declaration" => Self::EnumDeclaration,
            "enum_value" => Self::EnumValue,
            "struct_declaration" => Self::StructDeclaration,
            "exception_declaration" => Self::ExceptionDeclaration,
            "service_declaration" => Self::ServiceDeclaration,
            "field" => Self::Field,
            "function" => Self::Function,
            "throws_list" => Self::ThrowsList,
            "comment_multiline" => Self::CommentMultiline,
            "comment_singleline" => Self::CommentSingleline,
            _ => Self::Other,
        }
    }

    /// Rule name for this kind; `Other` has none of its own.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::EnumDeclaration => "enum_declaration",
            Self::EnumValue => "enum_value",
            Self::StructDeclaration => "struct_declaration",
            Self::ExceptionDeclaration => "exception_declaration",
            Self::ServiceDeclaration => "service_declaration",
            Self::Field => "field",
            Self::Function => "function",
            Self::ThrowsList => "throws_list",
            Self::CommentMultiline => "comment_multiline",
            Self::CommentSingleline => "comment_singleline",
            Self::Other => "other",
        }
    }

    /// The declaration a node of this kind opens, if any.
    #[must_use]
    pub const fn declaration_kind(self) -> Option<DeclarationKind> {
        match self {
            Self::EnumDeclaration => Some(DeclarationKind::Enum),
            Self::StructDeclaration => Some(DeclarationKind::Struct),
            Self::ExceptionDeclaration => Some(DeclarationKind::Exception),
            Self::ServiceDeclaration => Some(DeclarationKind::Service),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(NodeKind::Document)]
    #[case(NodeKind::EnumDeclaration)]
    #[case(NodeKind::EnumValue)]
    #[case(NodeKind::StructDeclaration)]
    #[case(NodeKind::ExceptionDeclaration)]
    #[case(NodeKind::ServiceDeclaration)]
    #[case(NodeKind::Field)]
    #[case(NodeKind::Function)]
    #[case(NodeKind::ThrowsList)]
    #[case(NodeKind::CommentMultiline)]
    #[case(NodeKind::CommentSingleline)]
    fn known_kinds_map_back_to_their_rule_name(#[case] kind: NodeKind) {
        assert_eq!(NodeKind::from_kind(kind.as_str()), kind);
    }

    #[rstest]
    #[case("definition")]
    #[case("header")]
    #[case("field_list")]
    #[case("")]
    fn unknown_rules_are_other(#[case] rule: &str) {
        assert_eq!(NodeKind::from_kind(rule), NodeKind::Other);
    }
}
