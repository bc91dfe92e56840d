//! template-etch: Documentation generator for infrastructure templates
//!
//! This crate generates documentation from a template's resolved semantic
//! model by:
//! - Normalizing resolved types and decorators into flat property records
//! - Extracting parameters, local type declarations and imported types
//! - Classifying default values and literal unions as simple or complex
//! - Rendering the records as Markdown block elements
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │   SemanticModel     │  (JSON snapshot from the type-checker)
//! └──────────┬──────────┘
//!            │ parser::parse_template
//!            ▼
//! ┌─────────────────────┐
//! │    TemplateDoc      │  parameters, user types, imports
//! └──────────┬──────────┘
//!            │ MarkdownRenderer
//!            ▼
//! ┌─────────────────────┐
//! │     Vec<Block>      │  headers, quotes, tables, code
//! └──────────┬──────────┘
//!            │ MarkdownDocument
//!            ▼
//!        Markdown
//! ```
//!
//! # Usage
//!
//! ```
//! use template_etch::{EtchConfig, Etcher, SemanticModel};
//!
//! let model = SemanticModel::from_json(r#"{ "parameters": [] }"#).unwrap();
//! let output = Etcher::new(EtchConfig::new()).with_model(&model).run().unwrap();
//! assert!(output.markdown.is_empty());
//! ```

// Input model
pub mod decorators;
pub mod model;
pub mod syntax;
pub mod types;

// Extraction
pub mod analysis;
pub mod parser;
pub mod records;

// Rendering and support
pub mod diagnostics;
pub mod docgen;

// Re-exports for convenience
pub use analysis::DefaultValueAnalysis;
pub use decorators::{DecoratorDef, HasDecorators};
pub use diagnostics::{Diagnostic, DiagnosticSeverity, DiagnosticsCollector, EtchError, EtchResult};
pub use model::{
    ImportedTypeSymbol, NamespaceExport, ObjectMember, ParameterSymbol, SemanticModel,
    TypeAliasSymbol, WildcardImportSymbol,
};
pub use records::{
    Constraints, ParameterRecord, PropertyRecord, TemplateDoc, TypeOrigin, TypeRecord, TypeShape,
};
pub use syntax::{ExprKind, ExprSyntax, TypeSyntax, TypeSyntaxKind};
pub use types::{LiteralValue, ResolvedType, TypeKind};

// Documentation generation
pub use docgen::{
    Block, EtchConfig, EtchOutput, Etcher, ExampleConfig, MarkdownDocument, MarkdownRenderer,
};
pub use parser::parse_template;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
