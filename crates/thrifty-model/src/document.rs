use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::declaration::Declaration;

/// The model of one IDL source file.
///
/// Declarations are kept in source order. The only mutation is appending
/// a whole declaration; existing declarations cannot be edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    name: String,
    #[serde(default)]
    declarations: Vec<Declaration>,
}

impl Document {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    /// Document holding `declarations` in the given order.
    #[must_use]
    pub fn with_declarations(name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            declarations,
        }
    }

    /// Source file identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a declaration and return its index.
    pub fn push(&mut self, declaration: impl Into<Declaration>) -> usize {
        self.declarations.push(declaration.into());
        self.declarations.len() - 1
    }

    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    /// First declaration with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{Enum, Service, Struct};

    #[test]
    fn push_preserves_order_and_returns_index() {
        let mut doc = Document::new("shapes.thrift");
        assert!(doc.is_empty());
        assert_eq!(doc.push(Struct::new("Point")), 0);
        assert_eq!(doc.push(Enum::new("Color")), 1);
        assert_eq!(doc.push(Service::new("Draw")), 2);

        let names: Vec<_> = doc.iter().map(Declaration::name).collect();
        assert_eq!(names, ["Point", "Color", "Draw"]);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.name(), "shapes.thrift");
    }

    #[test]
    fn get_finds_first_by_name() {
        let mut doc = Document::new("a.thrift");
        doc.push(Struct::new("Point"));
        assert!(doc.get("Point").is_some());
        assert!(doc.get("Missing").is_none());
    }

    #[test]
    fn with_declarations_keeps_given_order() {
        let mut color = Enum::new("Color");
        color.push_value("RED");
        let doc = Document::with_declarations(
            "a.thrift",
            vec![color.into(), Struct::new("Point").into()],
        );
        let names: Vec<_> = doc.iter().map(Declaration::name).collect();
        assert_eq!(names, ["Color", "Point"]);
        assert_eq!(doc.declarations()[0].as_enum().unwrap().values, ["RED"]);
    }
}
