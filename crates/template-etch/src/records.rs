//! Documentation records
//!
//! Flat, render-ready snapshots produced by the extractors. Records are built
//! fresh on every run and never mutated afterwards; they serialize to JSON for
//! `--format json` output.

use serde::Serialize;

/// Validation constraints read from a type and its decorators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
    pub secure: bool,
}

impl Constraints {
    /// Whether either length bound is set
    pub fn has_length(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some()
    }
}

/// A single member of an object-shaped type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub name: String,

    /// Primitive name, rendered literal union, or referenced type name
    #[serde(rename = "type")]
    pub type_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// False when the declared type is nullable
    pub is_required: bool,

    /// Literal members of a literal union, quotes stripped, declared order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,

    pub is_complex_allowed_set: bool,

    /// The type names another declared type
    pub is_user_defined_type: bool,

    #[serde(flatten)]
    pub constraints: Constraints,
}

impl PropertyRecord {
    /// Create a required property with no metadata
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            description: None,
            is_required: true,
            allowed_values: None,
            is_complex_allowed_set: false,
            is_user_defined_type: false,
            constraints: Constraints::default(),
        }
    }
}

/// A declared input parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRecord {
    pub name: String,

    #[serde(rename = "type")]
    pub type_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// True iff no default value is present
    pub is_required: bool,

    /// Raw source text of the default expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    pub is_complex_default: bool,
    pub is_interpolated: bool,
    pub is_user_defined_type: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,

    pub is_complex_allowed_set: bool,

    #[serde(flatten)]
    pub constraints: Constraints,
}

/// Shape of a documented type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeShape {
    /// Object type with documented members
    Object { properties: Vec<PropertyRecord> },
    /// Union of literals (`'dev' | 'prd'`)
    LiteralUnion { rendered: String },
    /// Single literal (`'dev'`)
    ScalarLiteral { rendered: String },
}

/// Where a type record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeOrigin {
    Local,
    Imported,
    Wildcard,
}

/// A declared or imported type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRecord {
    pub name: String,

    /// Human description, empty when absent
    pub description: String,

    pub shape: TypeShape,
    pub origin: TypeOrigin,
}

impl TypeRecord {
    /// Object-shaped record
    pub fn object(
        name: impl Into<String>,
        description: impl Into<String>,
        properties: Vec<PropertyRecord>,
        origin: TypeOrigin,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            shape: TypeShape::Object { properties },
            origin,
        }
    }

    /// Whether the type is a literal or literal union with nothing to tabulate
    pub fn is_primitive_literal(&self) -> bool {
        matches!(
            self.shape,
            TypeShape::LiteralUnion { .. } | TypeShape::ScalarLiteral { .. }
        )
    }

    /// Documented members; empty for literal shapes
    pub fn properties(&self) -> &[PropertyRecord] {
        match &self.shape {
            TypeShape::Object { properties } => properties,
            TypeShape::LiteralUnion { .. } | TypeShape::ScalarLiteral { .. } => &[],
        }
    }

    /// The text a reader sees as the type's description.
    ///
    /// Literal shapes are described by their own rendered value set.
    pub fn display_description(&self) -> &str {
        match &self.shape {
            TypeShape::LiteralUnion { rendered } | TypeShape::ScalarLiteral { rendered } => {
                rendered
            }
            TypeShape::Object { .. } => &self.description,
        }
    }
}

/// All records extracted from one template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDoc {
    pub parameters: Vec<ParameterRecord>,

    /// Locally declared types
    pub user_types: Vec<TypeRecord>,

    /// Named imports followed by wildcard imports
    pub imported_types: Vec<TypeRecord>,
}

impl TemplateDoc {
    /// Local types followed by imported types
    pub fn all_types(&self) -> impl Iterator<Item = &TypeRecord> {
        self.user_types.iter().chain(self.imported_types.iter())
    }

    /// Find a type record by name, local declarations first
    pub fn find_type(&self, name: &str) -> Option<&TypeRecord> {
        self.all_types().find(|t| t.name == name)
    }

    /// Whether nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.user_types.is_empty() && self.imported_types.is_empty()
    }
}
