//! Documentation generation command for the etch CLI
//!
//! This module provides the `etch docs` command, which reads a semantic
//! model snapshot and writes its documentation as Markdown or JSON.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use template_etch::{EtchConfig, Etcher, SemanticModel};
use tracing::info;

/// Run the docs command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let cmd = DocsCommand::parse(args)?;

    let model = load_model(&cmd.model)?;
    let config = load_config(&cmd)?;

    let output = Etcher::new(config).with_model(&model).run()?;
    output.diagnostics.print();
    output.diagnostics.print_summary();

    let rendered = match cmd.format {
        OutputFormat::Markdown => output.markdown,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&output.doc)
                .context("Failed to serialize documentation records")?;
            json.push('\n');
            json
        }
    };

    match &cmd.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(output = %path.display(), "docs.written");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Output format for generated documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Markdown,
    Json,
}

/// Documentation command configuration
#[derive(Debug)]
struct DocsCommand {
    /// Semantic model snapshot (JSON)
    model: PathBuf,
    /// Optional TOML configuration
    config: Option<PathBuf>,
    /// Output file; stdout when absent
    output: Option<PathBuf>,
    format: OutputFormat,
    /// Title override
    title: Option<String>,
}

impl DocsCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut model = None;
        let mut config = None;
        let mut output = None;
        let mut format = OutputFormat::Markdown;
        let mut title = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        config = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        bail!("--config requires a value");
                    }
                }
                "--output" | "-o" => {
                    if i + 1 < args.len() {
                        output = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        bail!("--output requires a value");
                    }
                }
                "--format" | "-f" => {
                    if i + 1 < args.len() {
                        format = match args[i + 1].as_str() {
                            "markdown" | "md" => OutputFormat::Markdown,
                            "json" => OutputFormat::Json,
                            other => bail!("Unknown format: {} (expected markdown or json)", other),
                        };
                        i += 2;
                    } else {
                        bail!("--format requires a value (markdown or json)");
                    }
                }
                "--title" | "-t" => {
                    if i + 1 < args.len() {
                        title = Some(args[i + 1].clone());
                        i += 2;
                    } else {
                        bail!("--title requires a value");
                    }
                }
                arg if !arg.starts_with('-') => {
                    if model.is_some() {
                        bail!("Only one model file can be documented at a time");
                    }
                    model = Some(PathBuf::from(arg));
                    i += 1;
                }
                _ => {
                    bail!("Unknown flag: {}", args[i]);
                }
            }
        }

        let Some(model) = model else {
            bail!(
                "No model file given\n\n\
                Usage:\n  \
                etch docs <model.json> [--config <file>] [--output <file>] [--format <markdown|json>]"
            );
        };

        Ok(DocsCommand {
            model,
            config,
            output,
            format,
            title,
        })
    }
}

fn load_model(path: &Path) -> Result<SemanticModel> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model at {}", path.display()))?;
    SemanticModel::from_json(&content)
        .with_context(|| format!("Failed to parse model at {}", path.display()))
}

fn load_config(cmd: &DocsCommand) -> Result<EtchConfig> {
    let mut config = match &cmd.config {
        Some(path) => EtchConfig::load(path)
            .with_context(|| format!("Failed to load config at {}", path.display()))?,
        None => EtchConfig::default(),
    };
    if let Some(title) = &cmd.title {
        config.title = Some(title.clone());
    }
    Ok(config)
}
