use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// IDL type syntax exactly as written, e.g. `i32`, `list<string>`, `Point`.
///
/// No resolution is performed; two references are equal only if their
/// text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TypeRef {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// A named, typed field of a struct/exception, or a method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Attribute {
    pub name: String,
    pub type_ref: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.type_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_displays_as_name_colon_type() {
        let attr = Attribute::new("x", "i32");
        assert_eq!(attr.to_string(), "x:i32");
    }

    #[test]
    fn type_ref_serializes_as_plain_string() {
        let json = serde_json::to_string(&TypeRef::new("map<string, i64>")).unwrap();
        assert_eq!(json, r#""map<string, i64>""#);
    }

    #[test]
    fn absent_comment_is_omitted_from_json() {
        let json = serde_json::to_value(Attribute::new("id", "i64")).unwrap();
        assert!(json.get("comment").is_none());
    }
}
