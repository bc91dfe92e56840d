//! Decorator definitions
//!
//! Decorators are metadata annotations attached to parameters, types and
//! imports, such as `@description('...')`, `@secure()` or `@minLength(3)`.
//! They are best-effort: an argument of the wrong literal kind reads as
//! absent rather than failing.

use crate::syntax::ExprSyntax;
use serde::{Deserialize, Serialize};

/// Decorator definition
///
/// Represents a template decorator like:
/// - `@secure()`
/// - `@minLength(3)`
/// - `@sys.description('Name of the resource group')`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Default)]
pub struct DecoratorDef {
    /// Decorator name (without @), possibly namespace qualified
    pub name: String,

    /// Decorator arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<ExprSyntax>,
}

impl DecoratorDef {
    /// Create a new decorator
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: vec![],
        }
    }

    /// Add an argument
    pub fn with_arg(mut self, arg: ExprSyntax) -> Self {
        self.args.push(arg);
        self
    }

    /// Check if this is a specific decorator by name.
    ///
    /// Matches `name` bare or behind a namespace (`sys.name`).
    pub fn is(&self, name: &str) -> bool {
        self.name == name
            || self
                .name
                .rsplit_once('.')
                .is_some_and(|(_, last)| last == name)
    }

    /// First argument
    pub fn first_arg(&self) -> Option<&ExprSyntax> {
        self.args.first()
    }

    /// Generate template decorator syntax
    pub fn to_text(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(|a| a.text.as_str()).collect();
        format!("@{}({})", self.name, args.join(", "))
    }
}

/// Well-known decorator names
pub mod known {
    pub const DESCRIPTION: &str = "description";
    pub const METADATA: &str = "metadata";
    pub const SECURE: &str = "secure";
    pub const MIN_LENGTH: &str = "minLength";
    pub const MAX_LENGTH: &str = "maxLength";
    pub const MIN_VALUE: &str = "minValue";
    pub const MAX_VALUE: &str = "maxValue";
}

/// Helper trait for reading decorator metadata
pub trait HasDecorators {
    /// Get all decorators
    fn decorators(&self) -> &[DecoratorDef];

    /// Check if a specific decorator is present
    fn has_decorator(&self, name: &str) -> bool {
        self.decorators().iter().any(|d| d.is(name))
    }

    /// Get a specific decorator by name
    fn get_decorator(&self, name: &str) -> Option<&DecoratorDef> {
        self.decorators().iter().find(|d| d.is(name))
    }

    /// Integer argument of a decorator, if present and an integer literal
    fn int_decorator(&self, name: &str) -> Option<i64> {
        self.get_decorator(name)?.first_arg()?.as_integer()
    }

    /// Human description from `@description('...')`, falling back to
    /// `@metadata({ description: '...' })`
    fn description(&self) -> Option<String> {
        let from_description = self
            .get_decorator(known::DESCRIPTION)
            .and_then(|d| d.first_arg())
            .and_then(|a| a.as_plain_string());
        let from_metadata = || {
            self.get_decorator(known::METADATA)
                .and_then(|d| d.first_arg())
                .and_then(|a| a.property(known::DESCRIPTION))
                .and_then(|a| a.as_plain_string())
        };
        from_description.or_else(from_metadata).map(String::from)
    }

    /// Check if the secure decorator is present
    fn is_secure(&self) -> bool {
        self.has_decorator(known::SECURE)
    }
}

impl HasDecorators for [DecoratorDef] {
    fn decorators(&self) -> &[DecoratorDef] {
        self
    }
}

impl HasDecorators for Vec<DecoratorDef> {
    fn decorators(&self) -> &[DecoratorDef] {
        self
    }
}
