//! Etcher - Main documentation generation orchestrator
//!
//! This module provides the Etcher struct which coordinates one
//! documentation run: extraction from the semantic model, rendering to
//! block elements and emission to Markdown text.

use super::elements::{Block, MarkdownDocument};
use super::example::{generate_example, ExampleConfig};
use super::markdown::{MarkdownRenderer, CODE_LANG};
use crate::diagnostics::{DiagnosticsCollector, EtchError, EtchResult};
use crate::model::SemanticModel;
use crate::parser::parse_template;
use crate::records::TemplateDoc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Configuration for the Etcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtchConfig {
    /// Title for documentation
    pub title: Option<String>,
    /// Description paragraph under the title
    pub description: Option<String>,
    /// Whether to emit the User Defined Types section
    pub include_user_defined_types: bool,
    /// Whether to emit the Parameters section
    pub include_parameters: bool,
    /// Whether to emit the Usage section when `example` is set
    pub include_usage: bool,
    /// Publishing details for the usage example
    pub example: Option<ExampleConfig>,
}

impl Default for EtchConfig {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            include_user_defined_types: true,
            include_parameters: true,
            include_usage: true,
            example: None,
        }
    }
}

impl EtchConfig {
    /// Create a default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> EtchResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> EtchResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EtchError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set whether to emit user defined types
    pub fn with_user_defined_types(mut self, include: bool) -> Self {
        self.include_user_defined_types = include;
        self
    }

    /// Set the usage example
    pub fn with_example(mut self, example: ExampleConfig) -> Self {
        self.example = Some(example);
        self
    }

    /// Renderer configured from this config
    pub fn renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::new()
            .with_parameters(self.include_parameters)
            .with_user_defined_types(self.include_user_defined_types)
    }
}

/// Result of one documentation run
#[derive(Debug, Clone)]
pub struct EtchOutput {
    /// Extracted records
    pub doc: TemplateDoc,
    /// Rendered blocks, in document order
    pub blocks: Vec<Block>,
    /// Emitted Markdown text
    pub markdown: String,
    /// Non-fatal recoveries made during extraction
    pub diagnostics: DiagnosticsCollector,
}

/// The main documentation generator
///
/// Etcher coordinates the documentation pipeline:
/// 1. Extract records from the semantic model
/// 2. Render title, usage, parameters and types to blocks
/// 3. Emit Markdown
pub struct Etcher<'a> {
    /// Configuration
    config: EtchConfig,
    /// Model snapshot to document
    model: Option<&'a SemanticModel>,
}

impl<'a> Etcher<'a> {
    /// Create a new Etcher with the given configuration
    pub fn new(config: EtchConfig) -> Self {
        Self {
            config,
            model: None,
        }
    }

    /// Set the model to document
    pub fn with_model(mut self, model: &'a SemanticModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &EtchConfig {
        &self.config
    }

    /// Run the documentation pipeline.
    ///
    /// Fails only when no model was supplied.
    pub fn run(&self) -> EtchResult<EtchOutput> {
        let model = self.model.ok_or(EtchError::MissingModel)?;

        let mut diagnostics = DiagnosticsCollector::new();
        let doc = parse_template(model, &mut diagnostics);
        let blocks = self.render(&doc);
        let markdown = MarkdownDocument::from_blocks(blocks.clone()).to_markdown();

        info!(
            parameters = doc.parameters.len(),
            types = doc.user_types.len() + doc.imported_types.len(),
            warnings = diagnostics.warning_count(),
            "etch.run"
        );

        Ok(EtchOutput {
            doc,
            blocks,
            markdown,
            diagnostics,
        })
    }

    /// Render every configured section of an extracted template
    pub fn render(&self, doc: &TemplateDoc) -> Vec<Block> {
        let mut blocks = Vec::new();

        if let Some(title) = &self.config.title {
            blocks.push(Block::header(1, title.clone()));
        }
        if let Some(description) = &self.config.description {
            blocks.push(Block::paragraph(description.clone()));
        }

        if self.config.include_usage {
            if let Some(example) = &self.config.example {
                blocks.push(Block::header(2, "Usage"));
                blocks.push(Block::code(CODE_LANG, generate_example(example, doc)));
            }
        }

        blocks.extend(self.config.renderer().render(doc));
        debug!(blocks = blocks.len(), "etch.render");
        blocks
    }
}
