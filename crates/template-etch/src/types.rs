//! Resolved type system
//!
//! This module provides `ResolvedType`, the read-only view of a type as the
//! template type-checker resolved it. Types arrive already resolved; nothing
//! here performs inference, it only describes shapes and renders their names.

use crate::model::ObjectMember;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal type values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiteralValue {
    /// String literal (e.g., 'dev')
    String(String),
    /// Integer literal (e.g., 42)
    Int(i64),
    /// Boolean literal (true/false)
    Bool(bool),
}

impl LiteralValue {
    /// Render the literal the way it appears in template source
    pub fn to_text(&self) -> String {
        match self {
            LiteralValue::String(s) => format!("'{}'", s),
            LiteralValue::Int(n) => n.to_string(),
            LiteralValue::Bool(b) => b.to_string(),
        }
    }

    /// Render the literal without its quote characters
    pub fn to_value_text(&self) -> String {
        match self {
            LiteralValue::String(s) => s.clone(),
            other => other.to_text(),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Resolved type kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypeKind {
    /// string, optionally length constrained
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<i64>,
    },

    /// int, optionally value constrained
    Int {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<i64>,
    },

    /// bool
    Bool,

    /// any
    Any,

    /// Object type. `None` properties is the untyped `object` keyword.
    Object {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        properties: Option<Vec<ObjectMember>>,
    },

    /// Array type. `None` item is the untyped `array` keyword.
    Array {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item: Option<Box<ResolvedType>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<i64>,
    },

    /// Literal type ('a', 1, true)
    Literal(LiteralValue),

    /// Union type (A | B | C)
    Union(Vec<ResolvedType>),

    /// null, the member a trailing `?` adds to a union
    Null,

    /// Reference to another named type. `target` is absent when the
    /// type-checker could not resolve it.
    Reference {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<Box<ResolvedType>>,
    },

    /// Any shape this crate does not model, carrying the checker's own name
    Other(String),
}

impl Default for TypeKind {
    fn default() -> Self {
        TypeKind::Other("unknown".to_string())
    }
}

/// A type as resolved by the template type-checker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedType {
    /// The underlying type shape
    pub kind: TypeKind,

    /// Whether the type carries the secure validation flag
    #[serde(default)]
    pub secure: bool,
}

impl ResolvedType {
    /// Create a new type from a kind
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            secure: false,
        }
    }

    /// Unconstrained string
    pub fn string() -> Self {
        Self::new(TypeKind::String {
            min_length: None,
            max_length: None,
        })
    }

    /// Unconstrained int
    pub fn int() -> Self {
        Self::new(TypeKind::Int {
            min_value: None,
            max_value: None,
        })
    }

    /// bool
    pub fn bool() -> Self {
        Self::new(TypeKind::Bool)
    }

    /// Untyped `object`
    pub fn object() -> Self {
        Self::new(TypeKind::Object { properties: None })
    }

    /// Object with declared members
    pub fn object_with(properties: Vec<ObjectMember>) -> Self {
        Self::new(TypeKind::Object {
            properties: Some(properties),
        })
    }

    /// Untyped `array`
    pub fn array() -> Self {
        Self::new(TypeKind::Array {
            item: None,
            min_length: None,
            max_length: None,
        })
    }

    /// Typed array (T[])
    pub fn array_of(item: ResolvedType) -> Self {
        Self::new(TypeKind::Array {
            item: Some(Box::new(item)),
            min_length: None,
            max_length: None,
        })
    }

    /// Literal type
    pub fn literal(value: LiteralValue) -> Self {
        Self::new(TypeKind::Literal(value))
    }

    /// String literal type
    pub fn string_literal(value: impl Into<String>) -> Self {
        Self::literal(LiteralValue::String(value.into()))
    }

    /// Union type
    pub fn union(members: Vec<ResolvedType>) -> Self {
        Self::new(TypeKind::Union(members))
    }

    /// null
    pub fn null() -> Self {
        Self::new(TypeKind::Null)
    }

    /// Resolved reference to a named type
    pub fn reference(name: impl Into<String>, target: ResolvedType) -> Self {
        Self::new(TypeKind::Reference {
            name: name.into(),
            target: Some(Box::new(target)),
        })
    }

    /// Reference the checker could not resolve
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Reference {
            name: name.into(),
            target: None,
        })
    }

    /// Make this type nullable (T | null)
    pub fn as_nullable(mut self) -> Self {
        if self.is_nullable() {
            return self;
        }
        if let TypeKind::Union(members) = &mut self.kind {
            members.push(ResolvedType::null());
            return self;
        }
        ResolvedType::union(vec![self, ResolvedType::null()])
    }

    /// Mark as secure
    pub fn as_secure(mut self) -> Self {
        self.secure = true;
        self
    }

    /// Set string or array length bounds. No-op for other kinds.
    pub fn with_length(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        match &mut self.kind {
            TypeKind::String {
                min_length,
                max_length,
            }
            | TypeKind::Array {
                min_length,
                max_length,
                ..
            } => {
                *min_length = min;
                *max_length = max;
            }
            _ => {}
        }
        self
    }

    /// Set int value bounds. No-op for other kinds.
    pub fn with_value_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        if let TypeKind::Int {
            min_value,
            max_value,
        } = &mut self.kind
        {
            *min_value = min;
            *max_value = max;
        }
        self
    }

    /// Whether this is the null type
    pub fn is_null(&self) -> bool {
        matches!(self.kind, TypeKind::Null)
    }

    /// Whether this is a literal type
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TypeKind::Literal(_))
    }

    /// Whether this is a union containing a null member
    pub fn is_nullable(&self) -> bool {
        match &self.kind {
            TypeKind::Union(members) => members.iter().any(ResolvedType::is_null),
            _ => false,
        }
    }

    /// Object members, following resolved references.
    ///
    /// Returns `None` for anything that is not an object shape.
    pub fn object_members(&self) -> Option<&[ObjectMember]> {
        match &self.kind {
            TypeKind::Object {
                properties: Some(properties),
            } => Some(properties.as_slice()),
            TypeKind::Object { properties: None } => Some(&[][..]),
            TypeKind::Reference {
                target: Some(target),
                ..
            } => target.object_members(),
            _ => None,
        }
    }

    /// Render the type name the way the type-checker displays it
    pub fn to_text(&self) -> String {
        match &self.kind {
            TypeKind::String { .. } => "string".to_string(),
            TypeKind::Int { .. } => "int".to_string(),
            TypeKind::Bool => "bool".to_string(),
            TypeKind::Any => "any".to_string(),
            TypeKind::Object { properties: None } => "object".to_string(),
            TypeKind::Object {
                properties: Some(properties),
            } => {
                if properties.is_empty() {
                    return "{}".to_string();
                }
                let members: Vec<String> = properties
                    .iter()
                    .map(|m| format!("{}: {}", m.name, m.ty.to_text()))
                    .collect();
                format!("{{ {} }}", members.join(", "))
            }
            TypeKind::Array { item: None, .. } => "array".to_string(),
            TypeKind::Array {
                item: Some(item), ..
            } => {
                let inner = item.to_text();
                if matches!(item.kind, TypeKind::Union(_)) {
                    format!("({})[]", inner)
                } else {
                    format!("{}[]", inner)
                }
            }
            TypeKind::Literal(lit) => lit.to_text(),
            TypeKind::Union(members) => members
                .iter()
                .map(|m| m.to_text())
                .collect::<Vec<_>>()
                .join(" | "),
            TypeKind::Null => "null".to_string(),
            TypeKind::Reference { name, .. } => name.clone(),
            TypeKind::Other(text) => text.clone(),
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_to_text() {
        assert_eq!(ResolvedType::string().to_text(), "string");
        assert_eq!(ResolvedType::int().to_text(), "int");
        assert_eq!(ResolvedType::bool().to_text(), "bool");
        assert_eq!(ResolvedType::object().to_text(), "object");
        assert_eq!(ResolvedType::array().to_text(), "array");
    }

    #[test]
    fn test_resolved_type_to_text() {
        // Typed array
        assert_eq!(
            ResolvedType::array_of(ResolvedType::string()).to_text(),
            "string[]"
        );

        // Union of literals keeps declared order
        let union = ResolvedType::union(vec![
            ResolvedType::string_literal("one"),
            ResolvedType::string_literal("two"),
            ResolvedType::literal(LiteralValue::Int(3)),
        ]);
        assert_eq!(union.to_text(), "'one' | 'two' | 3");

        // Array of a union needs parentheses
        assert_eq!(ResolvedType::array_of(union).to_text(), "('one' | 'two' | 3)[]");

        // Nullable
        assert_eq!(
            ResolvedType::string().as_nullable().to_text(),
            "string | null"
        );

        // References render their name whether resolved or not
        assert_eq!(
            ResolvedType::reference("myType", ResolvedType::object()).to_text(),
            "myType"
        );
        assert_eq!(ResolvedType::unresolved("missing").to_text(), "missing");
    }

    #[test]
    fn test_object_to_text() {
        let object = ResolvedType::object_with(vec![
            ObjectMember::new("name", ResolvedType::string()),
            ObjectMember::new("count", ResolvedType::int()),
        ]);
        assert_eq!(object.to_text(), "{ name: string, count: int }");
        assert_eq!(ResolvedType::object_with(vec![]).to_text(), "{}");
    }

    #[test]
    fn test_nullable_is_idempotent() {
        let ty = ResolvedType::string().as_nullable().as_nullable();
        assert!(ty.is_nullable());
        assert_eq!(ty.to_text(), "string | null");
    }

    #[test]
    fn test_object_members_follow_references() {
        let target = ResolvedType::object_with(vec![ObjectMember::new(
            "id",
            ResolvedType::string(),
        )]);
        let reference = ResolvedType::reference("myType", target);
        assert_eq!(reference.object_members().map(|m| m.len()), Some(1));

        assert!(ResolvedType::unresolved("gone").object_members().is_none());
        assert!(ResolvedType::string().object_members().is_none());
    }

    #[test]
    fn test_constraint_builders_ignore_other_kinds() {
        let ty = ResolvedType::bool().with_length(Some(1), Some(2));
        assert_eq!(ty.kind, TypeKind::Bool);

        let ty = ResolvedType::int().with_value_range(Some(1), None);
        assert_eq!(
            ty.kind,
            TypeKind::Int {
                min_value: Some(1),
                max_value: None
            }
        );
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{ "kind": { "string": { "minLength": 3, "maxLength": 24 } }, "secure": true }"#;
        let ty: ResolvedType = serde_json::from_str(json).unwrap();
        assert!(ty.secure);
        assert_eq!(
            ty.kind,
            TypeKind::String {
                min_length: Some(3),
                max_length: Some(24)
            }
        );

        let json = r#"{ "kind": "bool" }"#;
        let ty: ResolvedType = serde_json::from_str(json).unwrap();
        assert_eq!(ty.kind, TypeKind::Bool);
        assert!(!ty.secure);
    }
}
