//! Property normalization
//!
//! Turns one resolved type plus its decorators into a flat `PropertyRecord`.
//! Every extractor funnels through here so parameters, type members and
//! imported members document constraints the same way.

use crate::decorators::{known, DecoratorDef, HasDecorators};
use crate::diagnostics::{codes, Diagnostic, DiagnosticsCollector};
use crate::model::ObjectMember;
use crate::records::PropertyRecord;
use crate::types::{ResolvedType, TypeKind};
use tracing::{debug, warn};

/// Which decorator bounds the underlying type accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConstraintTarget {
    /// string and array
    Length,
    /// int
    Value,
    None,
}

/// Normalize a named type and its decorators into a property record
pub fn normalize(
    name: &str,
    ty: &ResolvedType,
    decorators: &[DecoratorDef],
    diagnostics: &mut DiagnosticsCollector,
) -> PropertyRecord {
    let mut record = PropertyRecord::new(name, String::new());
    let target = apply_type(&mut record, ty, diagnostics);
    apply_decorators(&mut record, decorators, target);
    record
}

/// Normalize an object member, falling back to its own description
pub fn normalize_member(
    member: &ObjectMember,
    diagnostics: &mut DiagnosticsCollector,
) -> PropertyRecord {
    let mut record = normalize(&member.name, &member.ty, &member.decorators, diagnostics);
    if record.description.is_none() {
        record.description = member.description.clone();
    }
    record
}

/// Normalize every member of an object type, sorted by name
pub fn normalize_members(
    owner: &str,
    members: &[ObjectMember],
    diagnostics: &mut DiagnosticsCollector,
) -> Vec<PropertyRecord> {
    let records: Vec<PropertyRecord> = members
        .iter()
        .map(|member| normalize_member(member, diagnostics))
        .collect();
    super::sort_unique(owner, records, |r| r.name.as_str(), diagnostics)
}

/// Fill `type_text`, allowed values and type-level constraints.
///
/// Returns which decorator bounds still apply to the unwrapped type.
fn apply_type(
    record: &mut PropertyRecord,
    ty: &ResolvedType,
    diagnostics: &mut DiagnosticsCollector,
) -> ConstraintTarget {
    record.constraints.secure |= ty.secure;

    match &ty.kind {
        TypeKind::Union(members) => apply_union(record, members, diagnostics),
        TypeKind::String {
            min_length,
            max_length,
        } => {
            record.type_text = ty.to_text();
            record.constraints.min_length = *min_length;
            record.constraints.max_length = *max_length;
            ConstraintTarget::Length
        }
        TypeKind::Array {
            min_length,
            max_length,
            ..
        } => {
            record.type_text = ty.to_text();
            record.constraints.min_length = *min_length;
            record.constraints.max_length = *max_length;
            ConstraintTarget::Length
        }
        TypeKind::Int {
            min_value,
            max_value,
        } => {
            record.type_text = ty.to_text();
            record.constraints.min_value = *min_value;
            record.constraints.max_value = *max_value;
            ConstraintTarget::Value
        }
        TypeKind::Reference { name, target } => {
            record.type_text = name.clone();
            record.is_user_defined_type = true;
            match target {
                Some(target) => apply_reference_target(record, target),
                None => {
                    warn!(property = %record.name, reference = %name, "normalize.unresolved_reference");
                    diagnostics.add(
                        Diagnostic::warning(format!("type `{}` could not be resolved", name))
                            .for_symbol(record.name.clone())
                            .with_code(codes::UNRESOLVED_REFERENCE),
                    );
                    ConstraintTarget::None
                }
            }
        }
        TypeKind::Other(text) => {
            debug!(property = %record.name, shape = %text, "normalize.unsupported_shape");
            diagnostics.add(
                Diagnostic::info(format!("type `{}` documented by name only", text))
                    .for_symbol(record.name.clone())
                    .with_code(codes::UNSUPPORTED_SHAPE),
            );
            record.type_text = text.clone();
            ConstraintTarget::None
        }
        TypeKind::Bool
        | TypeKind::Any
        | TypeKind::Object { .. }
        | TypeKind::Literal(_)
        | TypeKind::Null => {
            record.type_text = ty.to_text();
            ConstraintTarget::None
        }
    }
}

/// Carry the bounds and secure flag of an aliased primitive.
///
/// The record keeps the alias name as its type text. The alias itself is
/// reported where it is declared, so diagnostics from the target are dropped.
fn apply_reference_target(record: &mut PropertyRecord, target: &ResolvedType) -> ConstraintTarget {
    let mut scratch = PropertyRecord::new(record.name.as_str(), String::new());
    let constraint_target = apply_type(&mut scratch, target, &mut DiagnosticsCollector::new());
    let secure = record.constraints.secure || scratch.constraints.secure;
    record.constraints = scratch.constraints;
    record.constraints.secure = secure;
    constraint_target
}

fn apply_union(
    record: &mut PropertyRecord,
    members: &[ResolvedType],
    diagnostics: &mut DiagnosticsCollector,
) -> ConstraintTarget {
    let non_null: Vec<&ResolvedType> = members.iter().filter(|m| !m.is_null()).collect();
    if non_null.len() < members.len() {
        record.is_required = false;
    }

    match non_null.as_slice() {
        [] => {
            record.type_text = "null".to_string();
            ConstraintTarget::None
        }
        [single] => apply_type(record, single, diagnostics),
        many if many.iter().all(|m| m.is_literal()) => {
            let allowed: Vec<String> = many
                .iter()
                .filter_map(|m| match &m.kind {
                    TypeKind::Literal(value) => Some(value.to_value_text()),
                    _ => None,
                })
                .collect();
            record.type_text = join_members(many);
            record.is_complex_allowed_set = crate::analysis::is_complex_allowed_set(allowed.len());
            record.allowed_values = Some(allowed);
            record.constraints.secure |= many.iter().any(|m| m.secure);
            ConstraintTarget::None
        }
        many => {
            record.type_text = join_members(many);
            ConstraintTarget::None
        }
    }
}

fn join_members(members: &[&ResolvedType]) -> String {
    members
        .iter()
        .map(|m| m.to_text())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Decorators override type-level bounds when their argument is an integer
/// literal; anything else leaves the bound as it was.
fn apply_decorators(
    record: &mut PropertyRecord,
    decorators: &[DecoratorDef],
    target: ConstraintTarget,
) {
    record.description = decorators.description();
    record.constraints.secure |= decorators.is_secure();

    let constraints = &mut record.constraints;
    match target {
        ConstraintTarget::Length => {
            if let Some(min) = decorators.int_decorator(known::MIN_LENGTH) {
                constraints.min_length = Some(min);
            }
            if let Some(max) = decorators.int_decorator(known::MAX_LENGTH) {
                constraints.max_length = Some(max);
            }
        }
        ConstraintTarget::Value => {
            if let Some(min) = decorators.int_decorator(known::MIN_VALUE) {
                constraints.min_value = Some(min);
            }
            if let Some(max) = decorators.int_decorator(known::MAX_VALUE) {
                constraints.max_value = Some(max);
            }
        }
        ConstraintTarget::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ExprSyntax;
    use crate::types::LiteralValue;
    use pretty_assertions::assert_eq;

    fn run(ty: &ResolvedType, decorators: &[DecoratorDef]) -> PropertyRecord {
        normalize("prop", ty, decorators, &mut DiagnosticsCollector::new())
    }

    fn literal_union(values: &[&str]) -> ResolvedType {
        ResolvedType::union(values.iter().map(|v| ResolvedType::string_literal(*v)).collect())
    }

    #[test]
    fn test_plain_scalar() {
        let record = run(&ResolvedType::bool(), &[]);
        assert_eq!(record.type_text, "bool");
        assert!(record.is_required);
        assert!(record.allowed_values.is_none());
        assert!(!record.is_user_defined_type);
    }

    #[test]
    fn test_literal_union_keeps_declared_order() {
        let record = run(&literal_union(&["one", "two", "three"]), &[]);
        assert_eq!(record.type_text, "'one' | 'two' | 'three'");
        assert_eq!(
            record.allowed_values,
            Some(vec!["one".to_string(), "two".to_string(), "three".to_string()])
        );
        assert!(record.is_complex_allowed_set);
        assert!(record.is_required);
    }

    #[test]
    fn test_small_literal_union_is_simple() {
        let ty = ResolvedType::union(vec![
            ResolvedType::string_literal("a"),
            ResolvedType::literal(LiteralValue::Int(2)),
        ]);
        let record = run(&ty, &[]);
        assert_eq!(record.type_text, "'a' | 2");
        assert_eq!(record.allowed_values, Some(vec!["a".into(), "2".into()]));
        assert!(!record.is_complex_allowed_set);
    }

    #[test]
    fn test_nullable_unwraps_and_recurses() {
        let ty = ResolvedType::string().with_length(Some(1), Some(5)).as_nullable();
        let record = run(&ty, &[]);
        assert_eq!(record.type_text, "string");
        assert!(!record.is_required);
        assert_eq!(record.constraints.min_length, Some(1));
        assert_eq!(record.constraints.max_length, Some(5));
    }

    #[test]
    fn test_nullable_literal_union() {
        let ty = literal_union(&["a", "b", "c"]).as_nullable();
        let record = run(&ty, &[]);
        assert!(!record.is_required);
        assert_eq!(record.type_text, "'a' | 'b' | 'c'");
        assert_eq!(record.allowed_values.map(|v| v.len()), Some(3));
    }

    #[test]
    fn test_mixed_union_is_verbatim() {
        let ty = ResolvedType::union(vec![
            ResolvedType::string(),
            ResolvedType::int(),
            ResolvedType::null(),
        ]);
        let record = run(&ty, &[]);
        assert_eq!(record.type_text, "string | int");
        assert!(record.allowed_values.is_none());
        assert!(!record.is_required);
    }

    #[test]
    fn test_decorators_override_type_bounds() {
        let ty = ResolvedType::string().with_length(Some(1), Some(90));
        let decorators = vec![
            DecoratorDef::new("minLength").with_arg(ExprSyntax::integer(3)),
            DecoratorDef::new("maxLength").with_arg(ExprSyntax::string("24")),
            DecoratorDef::new("description").with_arg(ExprSyntax::string("Name")),
        ];
        let record = run(&ty, &decorators);
        assert_eq!(record.constraints.min_length, Some(3));
        // malformed argument leaves the type's own bound in place
        assert_eq!(record.constraints.max_length, Some(90));
        assert_eq!(record.description.as_deref(), Some("Name"));
    }

    #[test]
    fn test_value_bounds_only_apply_to_ints() {
        let decorators = vec![
            DecoratorDef::new("minValue").with_arg(ExprSyntax::integer(1)),
            DecoratorDef::new("maxValue").with_arg(ExprSyntax::integer(10)),
        ];
        let record = run(&ResolvedType::int(), &decorators);
        assert_eq!(record.constraints.min_value, Some(1));
        assert_eq!(record.constraints.max_value, Some(10));

        let record = run(&ResolvedType::string(), &decorators);
        assert_eq!(record.constraints.min_value, None);
    }

    #[test]
    fn test_secure_from_type_or_decorator() {
        assert!(run(&ResolvedType::string().as_secure(), &[]).constraints.secure);
        assert!(run(&ResolvedType::string(), &[DecoratorDef::new("secure")]).constraints.secure);
        assert!(!run(&ResolvedType::string(), &[]).constraints.secure);
    }

    #[test]
    fn test_unresolved_reference_is_recorded_by_name() {
        let mut diagnostics = DiagnosticsCollector::new();
        let decorators = vec![DecoratorDef::new("minLength").with_arg(ExprSyntax::integer(3))];
        let record = normalize(
            "settings",
            &ResolvedType::unresolved("missingType"),
            &decorators,
            &mut diagnostics,
        );
        assert_eq!(record.type_text, "missingType");
        assert!(record.is_user_defined_type);
        assert_eq!(record.constraints.min_length, None);
        assert!(diagnostics.has_code_for(codes::UNRESOLVED_REFERENCE, "settings"));
    }

    #[test]
    fn test_resolved_reference_keeps_target_constraints() {
        let member = ObjectMember::new(
            "name",
            ResolvedType::reference(
                "shortName",
                ResolvedType::string().with_length(Some(3), Some(10)).as_secure(),
            ),
        );
        let mut diagnostics = DiagnosticsCollector::new();
        let record = normalize_member(&member, &mut diagnostics);
        assert_eq!(record.type_text, "shortName");
        assert!(record.is_user_defined_type);
        assert_eq!(record.constraints.min_length, Some(3));
        assert_eq!(record.constraints.max_length, Some(10));
        assert!(record.constraints.secure);
        assert!(diagnostics.diagnostics().is_empty());

        let decorators = vec![DecoratorDef::new("maxValue").with_arg(ExprSyntax::integer(5))];
        let ty = ResolvedType::reference("count", ResolvedType::int().with_value_range(Some(1), Some(9)));
        let record = run(&ty, &decorators);
        assert_eq!(record.constraints.min_value, Some(1));
        assert_eq!(record.constraints.max_value, Some(5));
    }

    #[test]
    fn test_unknown_shape_falls_back_to_text() {
        let mut diagnostics = DiagnosticsCollector::new();
        let ty = ResolvedType::new(TypeKind::Other("resource<'x'>".into()));
        let record = normalize("r", &ty, &[], &mut diagnostics);
        assert_eq!(record.type_text, "resource<'x'>");
        assert!(diagnostics.has_code_for(codes::UNSUPPORTED_SHAPE, "r"));
    }

    #[test]
    fn test_member_description_fallback() {
        let member = ObjectMember::new("id", ResolvedType::string()).with_description("Identifier");
        let record = normalize_member(&member, &mut DiagnosticsCollector::new());
        assert_eq!(record.description.as_deref(), Some("Identifier"));

        let member = member.with_decorator(
            DecoratorDef::new("description").with_arg(ExprSyntax::string("Override")),
        );
        let record = normalize_member(&member, &mut DiagnosticsCollector::new());
        assert_eq!(record.description.as_deref(), Some("Override"));
    }

    #[test]
    fn test_members_sorted_and_unique() {
        let members = vec![
            ObjectMember::new("b", ResolvedType::string()),
            ObjectMember::new("B", ResolvedType::int()),
            ObjectMember::new("a", ResolvedType::bool()),
            ObjectMember::new("b", ResolvedType::int()),
        ];
        let mut diagnostics = DiagnosticsCollector::new();
        let records = normalize_members("owner", &members, &mut diagnostics);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "a", "b"]);
        // first declaration wins
        assert_eq!(records[2].type_text, "string");
        assert!(diagnostics.has_code_for(codes::DUPLICATE_NAME, "owner.b"));
    }
}
