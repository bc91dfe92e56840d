//! Syntax snapshots
//!
//! Declared types and default-value expressions are carried as source text
//! plus a shallow kind. The kind is only deep enough to classify a value as
//! simple or complex; expressions are never evaluated.

use crate::types::LiteralValue;
use serde::{Deserialize, Serialize};

/// Declared type syntax kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeSyntaxKind {
    /// Bare type name (`myType`, `string`)
    Reference(String),
    /// Trailing optional marker (`myType?`)
    Nullable(Box<TypeSyntax>),
    /// Union syntax (`'a' | 'b'`)
    Union(Vec<TypeSyntax>),
    /// Single literal (`'dev'`, `3`)
    Literal(LiteralValue),
    /// Object, array, namespaced access or anything else
    Other,
}

/// A declared type as written in the template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSyntax {
    /// Source text of the type expression
    pub text: String,
    /// Syntactic shape
    pub kind: TypeSyntaxKind,
}

impl TypeSyntax {
    /// Create a type syntax node
    pub fn new(text: impl Into<String>, kind: TypeSyntaxKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Bare type name
    pub fn reference(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), TypeSyntaxKind::Reference(name))
    }

    /// Wrap in a trailing optional marker
    pub fn nullable(inner: TypeSyntax) -> Self {
        Self::new(
            format!("{}?", inner.text),
            TypeSyntaxKind::Nullable(Box::new(inner)),
        )
    }

    /// Single literal
    pub fn literal(value: LiteralValue) -> Self {
        Self::new(value.to_text(), TypeSyntaxKind::Literal(value))
    }

    /// Union of members, rendered with ` | ` delimiters
    pub fn union(members: Vec<TypeSyntax>) -> Self {
        let text = members
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        Self::new(text, TypeSyntaxKind::Union(members))
    }

    /// Anything else, kept as text only
    pub fn other(text: impl Into<String>) -> Self {
        Self::new(text, TypeSyntaxKind::Other)
    }

    /// The referenced type name, looking through one optional marker.
    ///
    /// `myType` and `myType?` both yield `myType`; any other shape yields `None`.
    pub fn referenced_name(&self) -> Option<&str> {
        match &self.kind {
            TypeSyntaxKind::Reference(name) => Some(name.as_str()),
            TypeSyntaxKind::Nullable(inner) => match &inner.kind {
                TypeSyntaxKind::Reference(name) => Some(name.as_str()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Expression kinds relevant to documentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ExprKind {
    /// true / false
    Boolean(bool),
    /// Integer literal
    Integer(i64),
    /// String literal. `value` is the unquoted content.
    String {
        value: String,
        #[serde(default)]
        interpolated: bool,
    },
    /// null
    Null,
    /// Object literal
    Object(Vec<ObjectProperty>),
    /// Array literal
    Array(Vec<ExprSyntax>),
    /// Member access (`resourceGroup().location`)
    PropertyAccess,
    /// Function call (`uniqueString(...)`)
    FunctionCall,
    /// Plain identifier
    VariableAccess,
    /// Anything else
    Other,
}

/// Property of an object literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectProperty {
    pub key: String,
    pub value: ExprSyntax,
}

/// An expression as written in the template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExprSyntax {
    /// Source text of the expression
    pub text: String,
    /// Syntactic shape
    pub kind: ExprKind,
}

impl ExprSyntax {
    /// Create an expression node
    pub fn new(text: impl Into<String>, kind: ExprKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Boolean literal
    pub fn boolean(value: bool) -> Self {
        Self::new(value.to_string(), ExprKind::Boolean(value))
    }

    /// Integer literal
    pub fn integer(value: i64) -> Self {
        Self::new(value.to_string(), ExprKind::Integer(value))
    }

    /// Plain string literal
    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(
            format!("'{}'", value),
            ExprKind::String {
                value,
                interpolated: false,
            },
        )
    }

    /// String literal with embedded `${...}` expressions
    pub fn interpolated(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(
            format!("'{}'", value),
            ExprKind::String {
                value,
                interpolated: true,
            },
        )
    }

    /// Object literal; text is rendered one property per line
    pub fn object(properties: Vec<(&str, ExprSyntax)>) -> Self {
        if properties.is_empty() {
            return Self::new("{}", ExprKind::Object(vec![]));
        }
        let mut text = String::from("{\n");
        for (key, value) in &properties {
            text.push_str(&format!("  {}: {}\n", key, value.text));
        }
        text.push('}');
        let properties = properties
            .into_iter()
            .map(|(key, value)| ObjectProperty {
                key: key.to_string(),
                value,
            })
            .collect();
        Self::new(text, ExprKind::Object(properties))
    }

    /// Array literal; text is rendered one item per line
    pub fn array(items: Vec<ExprSyntax>) -> Self {
        if items.is_empty() {
            return Self::new("[]", ExprKind::Array(vec![]));
        }
        let mut text = String::from("[\n");
        for item in &items {
            text.push_str(&format!("  {}\n", item.text));
        }
        text.push(']');
        Self::new(text, ExprKind::Array(items))
    }

    /// Member access expression
    pub fn property_access(text: impl Into<String>) -> Self {
        Self::new(text, ExprKind::PropertyAccess)
    }

    /// Function call expression
    pub fn function_call(text: impl Into<String>) -> Self {
        Self::new(text, ExprKind::FunctionCall)
    }

    /// Integer value, if this is an integer literal
    pub fn as_integer(&self) -> Option<i64> {
        match self.kind {
            ExprKind::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Unquoted value, if this is a non-interpolated string literal
    pub fn as_plain_string(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::String {
                value,
                interpolated: false,
            } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Property value by key, if this is an object literal
    pub fn property(&self, key: &str) -> Option<&ExprSyntax> {
        match &self.kind {
            ExprKind::Object(properties) => properties
                .iter()
                .find(|p| p.key == key)
                .map(|p| &p.value),
            _ => None,
        }
    }

    /// Whether this is a boolean, integer or string literal
    pub fn is_scalar_literal(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Boolean(_) | ExprKind::Integer(_) | ExprKind::String { .. }
        )
    }
}
