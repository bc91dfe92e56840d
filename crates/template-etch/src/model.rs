//! Semantic model snapshot
//!
//! The read-only input of the documentation pipeline: the declarations of one
//! template after the external type-checker resolved them. The snapshot is
//! deserializable so a front-end can hand it over as JSON.

use crate::decorators::{DecoratorDef, HasDecorators};
use crate::syntax::{ExprSyntax, TypeSyntax};
use crate::types::ResolvedType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Member of an object type or namespace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMember {
    /// Member name
    pub name: String,

    /// Resolved member type; nullable when declared with a trailing `?`
    #[serde(rename = "type")]
    pub ty: ResolvedType,

    /// Member description
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Decorators applied to the member
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<DecoratorDef>,
}

impl ObjectMember {
    /// Create a new member
    pub fn new(name: impl Into<String>, ty: ResolvedType) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            decorators: vec![],
        }
    }

    /// Set documentation
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a decorator
    pub fn with_decorator(mut self, decorator: DecoratorDef) -> Self {
        self.decorators.push(decorator);
        self
    }
}

impl HasDecorators for ObjectMember {
    fn decorators(&self) -> &[DecoratorDef] {
        &self.decorators
    }
}

/// Declared input parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSymbol {
    /// Parameter name
    pub name: String,

    /// Type as resolved by the checker
    pub resolved_type: ResolvedType,

    /// Type as declared in source
    pub declared_type: TypeSyntax,

    /// Decorators applied to the parameter
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<DecoratorDef>,

    /// Default value expression
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<ExprSyntax>,
}

impl ParameterSymbol {
    /// Create a parameter whose declared syntax is the resolved type's name
    pub fn new(name: impl Into<String>, resolved_type: ResolvedType) -> Self {
        let declared_type = TypeSyntax::other(resolved_type.to_text());
        Self {
            name: name.into(),
            resolved_type,
            declared_type,
            decorators: vec![],
            default_value: None,
        }
    }

    /// Set the declared type syntax
    pub fn with_declared_type(mut self, declared_type: TypeSyntax) -> Self {
        self.declared_type = declared_type;
        self
    }

    /// Add a decorator
    pub fn with_decorator(mut self, decorator: DecoratorDef) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Set default value
    pub fn with_default(mut self, default_value: ExprSyntax) -> Self {
        self.default_value = Some(default_value);
        self
    }
}

impl HasDecorators for ParameterSymbol {
    fn decorators(&self) -> &[DecoratorDef] {
        &self.decorators
    }
}

/// Locally declared type alias
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasSymbol {
    /// Alias name
    pub name: String,

    /// The aliased type, unwrapped
    pub resolved_type: ResolvedType,

    /// Right-hand side as declared in source
    pub value: TypeSyntax,

    /// Decorators applied to the declaration
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<DecoratorDef>,
}

impl TypeAliasSymbol {
    /// Create a new type alias
    pub fn new(name: impl Into<String>, resolved_type: ResolvedType, value: TypeSyntax) -> Self {
        Self {
            name: name.into(),
            resolved_type,
            value,
            decorators: vec![],
        }
    }

    /// Add a decorator
    pub fn with_decorator(mut self, decorator: DecoratorDef) -> Self {
        self.decorators.push(decorator);
        self
    }
}

impl HasDecorators for TypeAliasSymbol {
    fn decorators(&self) -> &[DecoratorDef] {
        &self.decorators
    }
}

/// Type imported by name from another file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedTypeSymbol {
    /// Local name of the import
    pub name: String,

    /// Description from the export's metadata
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Exported type; absent when the source file was not resolved
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub export_type: Option<ResolvedType>,
}

impl ImportedTypeSymbol {
    /// Create a resolved import
    pub fn new(name: impl Into<String>, export_type: ResolvedType) -> Self {
        Self {
            name: name.into(),
            description: None,
            export_type: Some(export_type),
        }
    }

    /// Create an import whose source file could not be resolved
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            export_type: None,
        }
    }

    /// Set the export description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One export of a namespace reached through a wildcard import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceExport {
    /// Resolved export type
    #[serde(rename = "type")]
    pub ty: ResolvedType,

    /// Export description
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl NamespaceExport {
    /// Create an undocumented export
    pub fn new(ty: ResolvedType) -> Self {
        Self {
            ty,
            description: None,
        }
    }

    /// Set documentation
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// View the export as a member named `name`
    pub fn to_member(&self, name: &str) -> ObjectMember {
        ObjectMember {
            name: name.to_string(),
            ty: self.ty.clone(),
            description: self.description.clone(),
            decorators: vec![],
        }
    }
}

/// Wildcard namespace import (`import * as ns from '...'`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WildcardImportSymbol {
    /// Namespace alias
    pub name: String,

    /// Decorators applied to the import statement
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<DecoratorDef>,

    /// Exported members by name; absent when the source file was not resolved
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub members: Option<IndexMap<String, NamespaceExport>>,
}

impl WildcardImportSymbol {
    /// Create a resolved wildcard import
    pub fn new(name: impl Into<String>, members: IndexMap<String, NamespaceExport>) -> Self {
        Self {
            name: name.into(),
            decorators: vec![],
            members: Some(members),
        }
    }

    /// Create a wildcard import whose source file could not be resolved
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decorators: vec![],
            members: None,
        }
    }

    /// Add a decorator
    pub fn with_decorator(mut self, decorator: DecoratorDef) -> Self {
        self.decorators.push(decorator);
        self
    }
}

impl HasDecorators for WildcardImportSymbol {
    fn decorators(&self) -> &[DecoratorDef] {
        &self.decorators
    }
}

/// Resolved semantic model of a single template
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticModel {
    /// Declared parameters
    #[serde(default)]
    pub parameters: Vec<ParameterSymbol>,

    /// Locally declared type aliases
    #[serde(default)]
    pub type_declarations: Vec<TypeAliasSymbol>,

    /// Types imported by name
    #[serde(default)]
    pub imported_types: Vec<ImportedTypeSymbol>,

    /// Wildcard namespace imports
    #[serde(default)]
    pub wildcard_imports: Vec<WildcardImportSymbol>,
}

impl SemanticModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a model snapshot from JSON
    pub fn from_json(json: &str) -> crate::EtchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `name` is a local type declaration or a named import
    pub fn is_user_defined_type(&self, name: &str) -> bool {
        self.type_declarations.iter().any(|t| t.name == name)
            || self.imported_types.iter().any(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TypeSyntaxKind;

    #[test]
    fn test_parameter_defaults_declared_type() {
        let param = ParameterSymbol::new("location", ResolvedType::string());
        assert_eq!(param.declared_type.text, "string");
        assert_eq!(param.declared_type.kind, TypeSyntaxKind::Other);
        assert!(param.default_value.is_none());
    }

    #[test]
    fn test_is_user_defined_type() {
        let mut model = SemanticModel::new();
        model.type_declarations.push(TypeAliasSymbol::new(
            "local",
            ResolvedType::object(),
            TypeSyntax::other("{}"),
        ));
        model
            .imported_types
            .push(ImportedTypeSymbol::unresolved("imported"));
        model
            .wildcard_imports
            .push(WildcardImportSymbol::unresolved("ns"));

        assert!(model.is_user_defined_type("local"));
        assert!(model.is_user_defined_type("imported"));
        assert!(!model.is_user_defined_type("ns"));
        assert!(!model.is_user_defined_type("string"));
    }

    #[test]
    fn test_model_from_json() {
        let json = r#"{
            "parameters": [{
                "name": "resourceGroupName",
                "resolvedType": { "kind": { "string": { "minLength": 3 } } },
                "declaredType": { "text": "string", "kind": { "reference": "string" } },
                "decorators": [{ "name": "maxLength", "args": [{ "text": "24", "kind": { "integer": 24 } }] }]
            }],
            "importedTypes": [{ "name": "shared" }]
        }"#;
        let model = SemanticModel::from_json(json).unwrap();
        assert_eq!(model.parameters.len(), 1);
        assert_eq!(model.parameters[0].int_decorator("maxLength"), Some(24));
        assert!(model.imported_types[0].export_type.is_none());
        assert!(model.type_declarations.is_empty());
    }
}
