//! Parameter extraction

use super::property::normalize;
use crate::analysis::DefaultValueAnalysis;
use crate::diagnostics::DiagnosticsCollector;
use crate::model::{ParameterSymbol, SemanticModel};
use crate::records::ParameterRecord;
use tracing::debug;

/// Extract all declared parameters, sorted by name
pub fn extract_parameters(
    model: &SemanticModel,
    diagnostics: &mut DiagnosticsCollector,
) -> Vec<ParameterRecord> {
    let records: Vec<ParameterRecord> = model
        .parameters
        .iter()
        .map(|param| extract_parameter(param, model, diagnostics))
        .collect();
    let records = super::sort_unique("param", records, |r| r.name.as_str(), diagnostics);
    debug!(count = records.len(), "parser.parameters");
    records
}

/// Build the record for one parameter.
///
/// Required-ness depends only on the default value; nullability of the
/// declared type does not make a parameter optional.
pub fn extract_parameter(
    param: &ParameterSymbol,
    model: &SemanticModel,
    diagnostics: &mut DiagnosticsCollector,
) -> ParameterRecord {
    let property = normalize(
        &param.name,
        &param.resolved_type,
        &param.decorators,
        diagnostics,
    );

    let analysis = param
        .default_value
        .as_ref()
        .map(DefaultValueAnalysis::from_expr)
        .unwrap_or_default();

    let mut record = ParameterRecord {
        name: property.name,
        type_text: property.type_text,
        description: property.description,
        is_required: param.default_value.is_none(),
        default_value: param.default_value.as_ref().map(|d| d.text.clone()),
        is_complex_default: analysis.is_complex,
        is_interpolated: analysis.is_interpolated,
        is_user_defined_type: false,
        allowed_values: property.allowed_values,
        is_complex_allowed_set: property.is_complex_allowed_set,
        constraints: property.constraints,
    };

    if let Some(type_name) = param
        .declared_type
        .referenced_name()
        .filter(|name| model.is_user_defined_type(name))
    {
        record.type_text = type_name.to_string();
        record.is_user_defined_type = true;
        record.allowed_values = None;
        record.is_complex_allowed_set = false;
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImportedTypeSymbol, TypeAliasSymbol};
    use crate::syntax::{ExprSyntax, TypeSyntax};
    use crate::test::MockParameter;
    use crate::types::ResolvedType;
    use pretty_assertions::assert_eq;

    fn extract(model: &SemanticModel) -> Vec<ParameterRecord> {
        extract_parameters(model, &mut DiagnosticsCollector::new())
    }

    fn model_with(params: Vec<ParameterSymbol>) -> SemanticModel {
        SemanticModel {
            parameters: params,
            ..Default::default()
        }
    }

    #[test]
    fn test_required_follows_default_value() {
        let model = model_with(vec![
            MockParameter::string("required").build(),
            MockParameter::string("optional")
                .default(ExprSyntax::string("x"))
                .build(),
            // nullable without default is still required
            ParameterSymbol::new("nullable", ResolvedType::string().as_nullable()),
        ]);
        for record in extract(&model) {
            assert_eq!(
                record.is_required,
                record.default_value.is_none(),
                "{}",
                record.name
            );
        }
    }

    #[test]
    fn test_sorted_by_name() {
        let model = model_with(vec![
            MockParameter::string("zeta").build(),
            MockParameter::string("Alpha").build(),
            MockParameter::string("alpha").build(),
        ]);
        let names: Vec<_> = extract(&model).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "alpha", "zeta"]);
    }

    #[test]
    fn test_length_constrained_string() {
        let model = model_with(vec![MockParameter::string("resourceGroupName")
            .min_length(3)
            .max_length(24)
            .build()]);
        let record = &extract(&model)[0];
        assert_eq!(record.type_text, "string");
        assert!(record.is_required);
        assert_eq!(record.constraints.min_length, Some(3));
        assert_eq!(record.constraints.max_length, Some(24));
    }

    #[test]
    fn test_default_value_classification() {
        let model = model_with(vec![
            MockParameter::new("tags", ResolvedType::object())
                .default(ExprSyntax::object(vec![("env", ExprSyntax::string("dev"))]))
                .build(),
            MockParameter::string("location")
                .default(ExprSyntax::property_access("resourceGroup().location"))
                .build(),
        ]);
        let records = extract(&model);
        let location = &records[0];
        assert_eq!(location.default_value.as_deref(), Some("resourceGroup().location"));
        assert!(location.is_interpolated);
        assert!(!location.is_complex_default);

        let tags = &records[1];
        assert!(tags.is_complex_default);
        assert!(!tags.is_interpolated);
        assert_eq!(tags.default_value.as_deref(), Some("{\n  env: 'dev'\n}"));
    }

    #[test]
    fn test_user_defined_type_clears_allowed_values() {
        let target = ResolvedType::union(vec![
            ResolvedType::string_literal("a"),
            ResolvedType::string_literal("b"),
            ResolvedType::string_literal("c"),
        ]);
        let mut model = model_with(vec![
            ParameterSymbol::new("direct", target.clone())
                .with_declared_type(TypeSyntax::reference("choice")),
            ParameterSymbol::new("optional", target.clone().as_nullable())
                .with_declared_type(TypeSyntax::nullable(TypeSyntax::reference("choice"))),
            ParameterSymbol::new("shared", ResolvedType::object())
                .with_declared_type(TypeSyntax::reference("sharedType")),
            ParameterSymbol::new("inline", target.clone())
                .with_declared_type(TypeSyntax::other("'a' | 'b' | 'c'")),
        ]);
        model.type_declarations.push(TypeAliasSymbol::new(
            "choice",
            target,
            TypeSyntax::other("'a' | 'b' | 'c'"),
        ));
        model
            .imported_types
            .push(ImportedTypeSymbol::unresolved("sharedType"));

        let records = extract(&model);
        let by_name = |n: &str| records.iter().find(|r| r.name == n).unwrap();

        let direct = by_name("direct");
        assert!(direct.is_user_defined_type);
        assert_eq!(direct.type_text, "choice");
        assert!(direct.allowed_values.is_none());
        assert!(!direct.is_complex_allowed_set);

        let optional = by_name("optional");
        assert!(optional.is_user_defined_type);
        assert_eq!(optional.type_text, "choice");
        assert!(optional.is_required);

        assert!(by_name("shared").is_user_defined_type);

        let inline = by_name("inline");
        assert!(!inline.is_user_defined_type);
        assert_eq!(inline.allowed_values.as_ref().map(Vec::len), Some(3));
        assert!(inline.is_complex_allowed_set);
    }

    #[test]
    fn test_reference_to_unknown_name_is_not_user_defined() {
        let model = model_with(vec![ParameterSymbol::new("p", ResolvedType::string())
            .with_declared_type(TypeSyntax::reference("string"))]);
        let record = &extract(&model)[0];
        assert!(!record.is_user_defined_type);
        assert_eq!(record.type_text, "string");
    }
}
