//! Error types and diagnostics
//!
//! Extraction itself never fails: unresolved references, malformed decorator
//! arguments and unresolved imports degrade to partial records and are
//! reported here as diagnostics. `EtchError` is reserved for conditions the
//! caller has to handle, such as a missing model or unreadable input.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for template-etch operations
pub type EtchResult<T> = Result<T, EtchError>;

/// Main error type for template-etch
#[derive(Debug, Error)]
pub enum EtchError {
    /// No semantic model was supplied to the pipeline
    #[error("No semantic model supplied")]
    MissingModel,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

impl From<toml::de::Error> for EtchError {
    fn from(err: toml::de::Error) -> Self {
        EtchError::Config(err.to_string())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Warning - documentation is partial
    Warning,
    /// Info - informational message
    Info,
}

impl DiagnosticSeverity {
    /// Get display string
    pub fn display(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
        }
    }

    /// Get ANSI color code
    pub fn color(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Warning => "\x1b[33m", // Yellow
            DiagnosticSeverity::Info => "\x1b[34m",    // Blue
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Message
    pub message: String,
    /// Declaration the diagnostic is about
    pub symbol: Option<String>,
    /// Diagnostic code (for categorization)
    pub code: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            symbol: None,
            code: None,
        }
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message)
    }

    /// Create an info diagnostic
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Info, message)
    }

    /// Set the declaration name
    pub fn for_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = String::new();

        if let Some(ref symbol) = self.symbol {
            result.push_str(symbol);
            result.push_str(": ");
        }

        result.push_str(self.severity.display());

        if let Some(ref code) = self.code {
            result.push('[');
            result.push_str(code);
            result.push(']');
        }

        result.push_str(": ");
        result.push_str(&self.message);

        result
    }

    /// Format with ANSI colors
    pub fn format_colored(&self) -> String {
        let mut result = String::new();
        let reset = "\x1b[0m";

        if let Some(ref symbol) = self.symbol {
            result.push_str("\x1b[2m");
            result.push_str(symbol);
            result.push_str(reset);
            result.push_str(": ");
        }

        result.push_str(self.severity.color());
        result.push_str(self.severity.display());
        result.push_str(reset);

        if let Some(ref code) = self.code {
            result.push_str("\x1b[2m[");
            result.push_str(code);
            result.push_str("]\x1b[0m");
        }

        result.push_str(": ");
        result.push_str(&self.message);

        result
    }
}

/// Diagnostic codes for the non-fatal recoveries
pub mod codes {
    /// Imported file not resolved; record emitted without properties
    pub const UNRESOLVED_IMPORT: &str = "E001";
    /// Referenced type not resolved; recorded by name only
    pub const UNRESOLVED_REFERENCE: &str = "E002";
    /// Duplicate declaration name; later occurrence dropped
    pub const DUPLICATE_NAME: &str = "E003";
    /// Type shape not modelled; recorded by its own text
    pub const UNSUPPORTED_SHAPE: &str = "E004";
}

/// Collector for diagnostics during doc generation
#[derive(Debug, Default, Clone)]
pub struct DiagnosticsCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get warning count
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
            .count()
    }

    /// Check whether a diagnostic with `code` was recorded for `symbol`
    pub fn has_code_for(&self, code: &str, symbol: &str) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.code.as_deref() == Some(code) && d.symbol.as_deref() == Some(symbol))
    }

    /// Print all diagnostics to stderr
    pub fn print(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic.format_colored());
        }
    }

    /// Print summary
    pub fn print_summary(&self) {
        let warnings = self.warning_count();

        if warnings > 0 {
            eprintln!("\n{} warning(s)", warnings);
        }
    }
}
