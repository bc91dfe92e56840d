//! Markdown rendering for template documentation
//!
//! Turns extracted records into block elements. Nothing here touches the
//! semantic model; the renderer only reads `TemplateDoc` records.

use super::elements::Block;
use crate::records::{Constraints, ParameterRecord, TemplateDoc, TypeRecord};

/// Separator between clauses inside a single table cell
pub const CELL_BREAK: &str = "<br><br>";

/// Placeholder for a missing length bound
const MISSING_BOUND: &str = "X";

/// Language tag for fenced template code
pub const CODE_LANG: &str = "bicep";

const PARAMETER_COLUMNS: [&str; 5] = ["Parameter", "Description", "Type", "Required", "Default"];
const PROPERTY_COLUMNS: [&str; 4] = ["Property", "Description", "Type", "Required"];

/// Markdown renderer for template documentation
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    /// Whether to emit the parameters section
    pub include_parameters: bool,
    /// Whether to emit the user defined types section
    pub include_user_defined_types: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            include_parameters: true,
            include_user_defined_types: true,
        }
    }
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit parameters
    pub fn with_parameters(mut self, include: bool) -> Self {
        self.include_parameters = include;
        self
    }

    /// Set whether to emit user defined types
    pub fn with_user_defined_types(mut self, include: bool) -> Self {
        self.include_user_defined_types = include;
        self
    }

    /// Render every enabled section of a template
    pub fn render(&self, doc: &TemplateDoc) -> Vec<Block> {
        let mut blocks = Vec::new();
        if self.include_parameters {
            blocks.extend(self.render_parameters(&doc.parameters));
        }
        if self.include_user_defined_types {
            blocks.extend(self.render_user_types(doc.all_types()));
        }
        blocks
    }

    /// Render the parameters section.
    ///
    /// Complex defaults do not fit a cell; each gets its own header and code
    /// block after the table.
    pub fn render_parameters(&self, parameters: &[ParameterRecord]) -> Vec<Block> {
        if parameters.is_empty() {
            return vec![];
        }

        let rows = parameters
            .iter()
            .map(|param| {
                vec![
                    code_span(&param.name),
                    escape_cell(param.description.as_deref().unwrap_or_default()),
                    parameter_type_cell(param),
                    bool_cell(param.is_required),
                    default_cell(param),
                ]
            })
            .collect();

        let mut blocks = vec![
            Block::header(2, "Parameters"),
            Block::table(&PARAMETER_COLUMNS, rows),
        ];

        for param in parameters.iter().filter(|p| p.is_complex_default) {
            if let Some(default) = &param.default_value {
                blocks.push(Block::header(3, param.name.clone()));
                blocks.push(Block::code(CODE_LANG, default.clone()));
            }
        }

        blocks
    }

    /// Render the user defined types section.
    ///
    /// Emits nothing, not even the section header, for an empty collection.
    pub fn render_user_types<'a>(
        &self,
        types: impl IntoIterator<Item = &'a TypeRecord>,
    ) -> Vec<Block> {
        let mut types = types.into_iter().peekable();
        if types.peek().is_none() {
            return vec![];
        }

        let mut blocks = vec![Block::header(2, "User Defined Types")];
        for ty in types {
            blocks.extend(render_user_type(ty));
        }
        blocks
    }
}

/// Blocks for a single type: header, optional quote, member table
pub fn render_user_type(ty: &TypeRecord) -> Vec<Block> {
    let mut blocks = vec![Block::header(3, ty.name.clone())];

    if ty.is_primitive_literal() {
        return blocks;
    }

    if !ty.description.is_empty() {
        blocks.push(Block::quote(ty.description.clone()));
    }

    let rows = ty
        .properties()
        .iter()
        .map(|prop| {
            vec![
                code_span(&prop.name),
                escape_cell(prop.description.as_deref().unwrap_or_default()),
                type_cell(&prop.type_text, &prop.constraints),
                bool_cell(prop.is_required),
            ]
        })
        .collect();
    blocks.push(Block::table(&PROPERTY_COLUMNS, rows));

    blocks
}

/// Render the Type column for a record.
///
/// Clauses are the escaped type text, then ` (secure)`, a character limit
/// and an accepted value range, separated by `CELL_BREAK`.
pub fn type_cell(type_text: &str, constraints: &Constraints) -> String {
    let mut cell = escape_cell(type_text);

    if constraints.secure {
        cell.push_str(" (secure)");
    }

    let mut clauses = vec![cell];
    if let Some(limit) = length_clause(constraints) {
        clauses.push(limit);
    }
    if let Some(range) = value_clause(constraints) {
        clauses.push(range);
    }
    clauses.join(CELL_BREAK)
}

fn parameter_type_cell(param: &ParameterRecord) -> String {
    match &param.allowed_values {
        Some(values) if param.is_complex_allowed_set => {
            let mut cell = String::from("Allowed values:");
            for value in values {
                cell.push_str("<br>");
                cell.push_str(&escape_cell(&code_span(value)));
            }
            if param.constraints.secure {
                cell.push_str(" (secure)");
            }
            cell
        }
        _ => type_cell(&param.type_text, &param.constraints),
    }
}

fn length_clause(constraints: &Constraints) -> Option<String> {
    if !constraints.has_length() {
        return None;
    }
    let bound = |b: Option<i64>| b.map_or_else(|| MISSING_BOUND.to_string(), |v| v.to_string());
    Some(format!(
        "Character limit: {}-{}",
        bound(constraints.min_length),
        bound(constraints.max_length)
    ))
}

fn value_clause(constraints: &Constraints) -> Option<String> {
    let range = match (constraints.min_value, constraints.max_value) {
        (Some(min), Some(max)) => format!("from {} to {}.", min, max),
        (Some(min), None) => format!("from {}.", min),
        (None, Some(max)) => format!("to {}.", max),
        (None, None) => return None,
    };
    Some(format!("Accepted values: {}", range))
}

fn default_cell(param: &ParameterRecord) -> String {
    match &param.default_value {
        None => String::new(),
        Some(_) if param.is_complex_default => "See below".to_string(),
        Some(text) => escape_cell(&code_span(text)),
    }
}

fn bool_cell(value: bool) -> String {
    let text = if value { "True" } else { "False" };
    text.to_string()
}

/// Wrap text in an inline code span
pub fn code_span(text: &str) -> String {
    format!("`{}`", text)
}

/// Escape text for use inside a table cell.
///
/// Table rows split on `|` before inline parsing, code spans included.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
