//! Import extraction
//!
//! Named imports produce one record per imported type. Wildcard imports
//! produce one record per namespace alias, with the namespace's exports as
//! its properties. An import whose source file was not resolved still yields
//! a record, just without properties.

use super::property::normalize_members;
use crate::decorators::HasDecorators;
use crate::diagnostics::{codes, Diagnostic, DiagnosticsCollector};
use crate::model::{ImportedTypeSymbol, ObjectMember, SemanticModel, WildcardImportSymbol};
use crate::records::{TypeOrigin, TypeRecord};
use tracing::{debug, warn};

/// Extract types imported by name, sorted by name
pub fn extract_imported_types(
    model: &SemanticModel,
    diagnostics: &mut DiagnosticsCollector,
) -> Vec<TypeRecord> {
    let records: Vec<TypeRecord> = model
        .imported_types
        .iter()
        .map(|import| extract_imported_type(import, diagnostics))
        .collect();
    let records = super::sort_unique("import", records, |r| r.name.as_str(), diagnostics);
    debug!(count = records.len(), "parser.imported_types");
    records
}

/// Build the record for one named import
pub fn extract_imported_type(
    import: &ImportedTypeSymbol,
    diagnostics: &mut DiagnosticsCollector,
) -> TypeRecord {
    let description = import.description.clone().unwrap_or_default();

    let properties = match &import.export_type {
        None => {
            unresolved(&import.name, diagnostics);
            vec![]
        }
        Some(export) => match export.object_members() {
            Some(members) => normalize_members(&import.name, members, diagnostics),
            None => {
                diagnostics.add(
                    Diagnostic::info(format!(
                        "imported `{}` is not an object type, no properties documented",
                        export
                    ))
                    .for_symbol(import.name.clone())
                    .with_code(codes::UNSUPPORTED_SHAPE),
                );
                vec![]
            }
        },
    };

    TypeRecord::object(&import.name, description, properties, TypeOrigin::Imported)
}

/// Extract wildcard namespace imports, sorted by alias
pub fn extract_wildcard_imports(
    model: &SemanticModel,
    diagnostics: &mut DiagnosticsCollector,
) -> Vec<TypeRecord> {
    let records: Vec<TypeRecord> = model
        .wildcard_imports
        .iter()
        .map(|import| extract_wildcard_import(import, diagnostics))
        .collect();
    let records = super::sort_unique("import", records, |r| r.name.as_str(), diagnostics);
    debug!(count = records.len(), "parser.wildcard_imports");
    records
}

/// Build the record for one namespace alias
pub fn extract_wildcard_import(
    import: &WildcardImportSymbol,
    diagnostics: &mut DiagnosticsCollector,
) -> TypeRecord {
    let description = import.description().unwrap_or_default();

    let properties = match &import.members {
        None => {
            unresolved(&import.name, diagnostics);
            vec![]
        }
        Some(exports) => {
            let members: Vec<ObjectMember> = exports
                .iter()
                .map(|(name, export)| export.to_member(name))
                .collect();
            normalize_members(&import.name, &members, diagnostics)
        }
    };

    TypeRecord::object(&import.name, description, properties, TypeOrigin::Wildcard)
}

fn unresolved(name: &str, diagnostics: &mut DiagnosticsCollector) {
    warn!(import = %name, "parser.unresolved_import");
    diagnostics.add(
        Diagnostic::warning("imported file not resolved, properties omitted")
            .for_symbol(name)
            .with_code(codes::UNRESOLVED_IMPORT),
    );
}
