//! Default value analysis
//!
//! Shallow classification of default-value expressions. A default is
//! "complex" when it needs more room than a table cell, and "interpolated"
//! when its text must not be re-quoted in generated examples.

use crate::syntax::{ExprKind, ExprSyntax};
use serde::{Deserialize, Serialize};

/// Allowed-value sets with more members than this are complex
pub const SIMPLE_ALLOWED_SET_LIMIT: usize = 2;

/// Array defaults with more items than this are complex
pub const SIMPLE_ARRAY_LIMIT: usize = 2;

/// Result of analyzing a default value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultValueAnalysis {
    /// Whether the value is nested or large
    pub is_complex: bool,

    /// Whether the value is an interpolated string or a member access
    pub is_interpolated: bool,
}

impl DefaultValueAnalysis {
    /// Analyze a default value expression
    pub fn from_expr(expr: &ExprSyntax) -> Self {
        Self {
            is_complex: is_complex_default(expr),
            is_interpolated: is_interpolated(expr),
        }
    }
}

/// Classify a default value as complex.
///
/// Total over every expression kind; unknown shapes are not complex.
pub fn is_complex_default(expr: &ExprSyntax) -> bool {
    match &expr.kind {
        ExprKind::Object(properties) => !properties.is_empty(),
        ExprKind::Array(items) => is_complex_array(items),
        ExprKind::Boolean(_)
        | ExprKind::Integer(_)
        | ExprKind::String { .. }
        | ExprKind::Null
        | ExprKind::PropertyAccess
        | ExprKind::FunctionCall
        | ExprKind::VariableAccess
        | ExprKind::Other => false,
    }
}

/// An array is complex past the item limit, or when any item is not a
/// boolean, integer or string literal.
fn is_complex_array(items: &[ExprSyntax]) -> bool {
    if items.is_empty() {
        return false;
    }
    if items.len() > SIMPLE_ARRAY_LIMIT {
        return true;
    }
    items.iter().any(|item| !item.is_scalar_literal())
}

/// Whether a default value must be emitted verbatim rather than re-quoted
pub fn is_interpolated(expr: &ExprSyntax) -> bool {
    matches!(
        expr.kind,
        ExprKind::String {
            interpolated: true,
            ..
        } | ExprKind::PropertyAccess
    )
}

/// Whether an allowed-value set is large enough to be listed separately
pub fn is_complex_allowed_set(count: usize) -> bool {
    count > SIMPLE_ALLOWED_SET_LIMIT
}
