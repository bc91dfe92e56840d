//! Usage example generation
//!
//! Builds a module invocation that consumes the documented template, with
//! one `params` entry per parameter. Values come from defaults where they
//! exist and fall back to the parameter name.

use crate::records::{ParameterRecord, TemplateDoc};
use serde::{Deserialize, Serialize};

/// Where the documented template is published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleConfig {
    /// Symbolic name of the module in the example
    pub module_name: String,
    /// Registry alias
    pub module_alias: String,
    /// Reference scheme (`br`, `ts`)
    #[serde(default = "default_module_type")]
    pub module_type: String,
    /// Path of the module inside the registry
    pub path: String,
    /// Published version
    pub version: String,
}

fn default_module_type() -> String {
    "br".to_string()
}

impl ExampleConfig {
    /// Create a config with the default `br` reference scheme
    pub fn new(
        module_name: impl Into<String>,
        module_alias: impl Into<String>,
        path: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            module_alias: module_alias.into(),
            module_type: default_module_type(),
            path: path.into(),
            version: version.into(),
        }
    }

    /// Set the reference scheme
    pub fn with_module_type(mut self, module_type: impl Into<String>) -> Self {
        self.module_type = module_type.into();
        self
    }

    /// Module reference, e.g. `br/public:network/vnet:1.0.0`
    pub fn reference(&self) -> String {
        format!(
            "{}/{}:{}:{}",
            self.module_type, self.module_alias, self.path, self.version
        )
    }
}

/// Render the module invocation for a template
pub fn generate_example(config: &ExampleConfig, doc: &TemplateDoc) -> String {
    let mut params = String::new();

    for param in &doc.parameters {
        let object_type = doc
            .find_type(&param.type_text)
            .filter(|ty| param.is_user_defined_type && !ty.is_primitive_literal());

        match object_type {
            Some(ty) => {
                params.push_str(&format!("    {}: {{\n", param.name));
                for prop in ty.properties() {
                    params.push_str(&format!("      {}: {}\n", prop.name, prop.name));
                }
                params.push_str("    }\n");
            }
            None => {
                let value = indent_continuation(&example_value(param), "    ");
                params.push_str(&format!("    {}: {}\n", param.name, value));
            }
        }
    }

    let params = if params.is_empty() {
        "{}".to_string()
    } else {
        format!("{{\n{}  }}", params)
    };

    format!(
        "module {name} '{reference}' = {{\n  name: '{name}'\n  params: {params}\n}}",
        name = config.module_name,
        reference = config.reference(),
        params = params,
    )
}

/// Value written for one parameter
fn example_value(param: &ParameterRecord) -> String {
    let Some(default) = &param.default_value else {
        return if param.type_text == "string" {
            format!("'{}'", param.name)
        } else {
            param.name.clone()
        };
    };

    if param.is_user_defined_type {
        return param.type_text.clone();
    }
    if param.type_text != "string" {
        return default.clone();
    }
    let quoted = default.len() >= 2 && default.starts_with('\'') && default.ends_with('\'');
    if quoted || param.is_interpolated {
        return default.clone();
    }
    format!("'{}'", default)
}

/// Indent every line after the first, for values spanning several lines
fn indent_continuation(value: &str, indent: &str) -> String {
    let mut lines = value.lines();
    let mut out = lines.next().unwrap_or_default().to_string();
    for line in lines {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(indent);
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{PropertyRecord, TypeOrigin, TypeRecord, TypeShape};
    use crate::test::mock_parameter_record;
    use pretty_assertions::assert_eq;

    fn config() -> ExampleConfig {
        ExampleConfig::new("vnet", "public", "network/vnet", "1.0.0")
    }

    #[test]
    fn test_reference() {
        assert_eq!(config().reference(), "br/public:network/vnet:1.0.0");
        assert_eq!(
            config().with_module_type("ts").reference(),
            "ts/public:network/vnet:1.0.0"
        );
    }

    #[test]
    fn test_no_parameters() {
        let example = generate_example(&config(), &TemplateDoc::default());
        assert_eq!(
            example,
            "module vnet 'br/public:network/vnet:1.0.0' = {\n  name: 'vnet'\n  params: {}\n}"
        );
    }

    #[test]
    fn test_example_values() {
        let required_string = mock_parameter_record("name", "string");
        let required_int = mock_parameter_record("count", "int");

        let mut plain_default = mock_parameter_record("sku", "string");
        plain_default.default_value = Some("Standard".into());

        let mut quoted_default = mock_parameter_record("tier", "string");
        quoted_default.default_value = Some("'Premium'".into());

        let mut interpolated = mock_parameter_record("prefix", "string");
        interpolated.default_value = Some("resourceGroup().name".into());
        interpolated.is_interpolated = true;

        let mut int_default = mock_parameter_record("size", "int");
        int_default.default_value = Some("3".into());

        assert_eq!(example_value(&required_string), "'name'");
        assert_eq!(example_value(&required_int), "count");
        assert_eq!(example_value(&plain_default), "'Standard'");
        assert_eq!(example_value(&quoted_default), "'Premium'");
        assert_eq!(example_value(&interpolated), "resourceGroup().name");
        assert_eq!(example_value(&int_default), "3");
    }

    #[test]
    fn test_user_defined_type_expands_properties() {
        let mut settings = mock_parameter_record("settings", "settingsType");
        settings.is_user_defined_type = true;

        let mut tags = mock_parameter_record("tags", "object");
        tags.default_value = Some("{\n  env: 'dev'\n}".into());
        tags.is_complex_default = true;

        let mut stage = mock_parameter_record("stage", "stageType");
        stage.is_user_defined_type = true;

        let doc = TemplateDoc {
            parameters: vec![settings, stage, tags],
            user_types: vec![
                TypeRecord::object(
                    "settingsType",
                    "",
                    vec![
                        PropertyRecord::new("id", "string"),
                        PropertyRecord::new("size", "int"),
                    ],
                    TypeOrigin::Local,
                ),
                TypeRecord {
                    name: "stageType".into(),
                    description: String::new(),
                    shape: TypeShape::LiteralUnion {
                        rendered: "'dev' | 'prd'".into(),
                    },
                    origin: TypeOrigin::Local,
                },
            ],
            imported_types: vec![],
        };

        insta::assert_snapshot!(generate_example(&config(), &doc), @r"
        module vnet 'br/public:network/vnet:1.0.0' = {
          name: 'vnet'
          params: {
            settings: {
              id: id
              size: size
            }
            stage: stage
            tags: {
              env: 'dev'
            }
          }
        }
        ");
    }
}
