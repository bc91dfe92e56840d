//! Template extraction
//!
//! Walks a `SemanticModel` and produces the `TemplateDoc` record collections:
//! - parameters (`parameters`)
//! - locally declared types (`user_types`)
//! - named and wildcard imports (`imports`)
//!
//! All of them go through the property normalizer in `property`. Every
//! collection is sorted by ordinal name order before it is returned.

pub mod imports;
pub mod parameters;
pub mod property;
pub mod user_types;

use crate::diagnostics::{codes, Diagnostic, DiagnosticsCollector};
use crate::model::SemanticModel;
use crate::records::TemplateDoc;
use tracing::{debug, warn};

pub use imports::{extract_imported_types, extract_wildcard_imports};
pub use parameters::extract_parameters;
pub use property::{normalize, normalize_member, normalize_members};
pub use user_types::extract_user_types;

/// Extract every documentation record from a model snapshot
pub fn parse_template(model: &SemanticModel, diagnostics: &mut DiagnosticsCollector) -> TemplateDoc {
    let parameters = extract_parameters(model, diagnostics);
    let user_types = extract_user_types(model, diagnostics);

    let mut imported_types = extract_imported_types(model, diagnostics);
    imported_types.extend(extract_wildcard_imports(model, diagnostics));

    debug!(
        parameters = parameters.len(),
        user_types = user_types.len(),
        imported_types = imported_types.len(),
        "parser.template"
    );

    TemplateDoc {
        parameters,
        user_types,
        imported_types,
    }
}

/// Stable ordinal sort by name, keeping the first of each duplicate name.
///
/// Dropped duplicates are reported as `{scope}.{name}`.
pub(crate) fn sort_unique<T>(
    scope: &str,
    mut items: Vec<T>,
    name: impl Fn(&T) -> &str,
    diagnostics: &mut DiagnosticsCollector,
) -> Vec<T> {
    items.sort_by(|a, b| name(a).cmp(name(b)));

    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if unique.last().is_some_and(|last| name(last) == name(&item)) {
            let symbol = format!("{}.{}", scope, name(&item));
            warn!(symbol = %symbol, "parser.duplicate_name");
            diagnostics.add(
                Diagnostic::warning("duplicate name, later declaration ignored")
                    .for_symbol(symbol)
                    .with_code(codes::DUPLICATE_NAME),
            );
            continue;
        }
        unique.push(item);
    }
    unique
}
