//! Type declaration extraction
//!
//! Object-shaped declarations document their members; literal unions and
//! single literals are documented by their own source text.

use super::property::normalize_members;
use crate::decorators::HasDecorators;
use crate::diagnostics::{codes, Diagnostic, DiagnosticsCollector};
use crate::model::{SemanticModel, TypeAliasSymbol};
use crate::records::{TypeOrigin, TypeRecord, TypeShape};
use crate::syntax::TypeSyntaxKind;
use tracing::debug;

/// Extract all local type declarations, sorted by name
pub fn extract_user_types(
    model: &SemanticModel,
    diagnostics: &mut DiagnosticsCollector,
) -> Vec<TypeRecord> {
    let records: Vec<TypeRecord> = model
        .type_declarations
        .iter()
        .map(|decl| extract_type_declaration(decl, diagnostics))
        .collect();
    let records = super::sort_unique("type", records, |r| r.name.as_str(), diagnostics);
    debug!(count = records.len(), "parser.user_types");
    records
}

/// Build the record for one type alias
pub fn extract_type_declaration(
    decl: &TypeAliasSymbol,
    diagnostics: &mut DiagnosticsCollector,
) -> TypeRecord {
    let description = decl.description().unwrap_or_default();

    let shape = match &decl.value.kind {
        TypeSyntaxKind::Union(_) => TypeShape::LiteralUnion {
            rendered: decl.value.text.clone(),
        },
        TypeSyntaxKind::Literal(_) => TypeShape::ScalarLiteral {
            rendered: decl.value.text.clone(),
        },
        TypeSyntaxKind::Reference(_) | TypeSyntaxKind::Nullable(_) | TypeSyntaxKind::Other => {
            match decl.resolved_type.object_members() {
                Some(members) => TypeShape::Object {
                    properties: normalize_members(&decl.name, members, diagnostics),
                },
                None => {
                    diagnostics.add(
                        Diagnostic::info(format!(
                            "`{}` is not an object type, no properties documented",
                            decl.resolved_type
                        ))
                        .for_symbol(decl.name.clone())
                        .with_code(codes::UNSUPPORTED_SHAPE),
                    );
                    TypeShape::Object { properties: vec![] }
                }
            }
        }
    };

    TypeRecord {
        name: decl.name.clone(),
        description,
        shape,
        origin: TypeOrigin::Local,
    }
}
