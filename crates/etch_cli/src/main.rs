use anyhow::{anyhow, Result};
use std::env;

mod docs;

fn usage() {
    eprintln!("etch <docs|version> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  docs <model.json>                    Generate documentation for a template");
    eprintln!("  version                              Print the version");
    eprintln!();
    eprintln!("Docs options:");
    eprintln!("  --config, -c <file>                  TOML configuration");
    eprintln!("  --output, -o <file>                  Write to a file instead of stdout");
    eprintln!("  --format, -f <markdown|json>         Output format (default: markdown)");
    eprintln!("  --title, -t <text>                   Document title, overrides the config");
    eprintln!();
    eprintln!("Set ETCH_LOG (e.g. ETCH_LOG=debug) to control log output.");
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("ETCH_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        usage();
        return Ok(());
    }

    init_tracing();

    let cmd = args.remove(0);

    match cmd.as_str() {
        "docs" => docs::run(&args)?,
        "version" | "--version" | "-V" => {
            println!("etch {} ({} {})", env!("CARGO_PKG_VERSION"), template_etch::NAME, template_etch::VERSION);
        }
        "help" | "--help" | "-h" => usage(),
        other => {
            usage();
            return Err(anyhow!("Unknown command: {}", other));
        }
    }

    Ok(())
}
