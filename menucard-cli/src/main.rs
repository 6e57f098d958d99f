//! Menucard - browse a restaurant menu from the terminal
//!
//! Loads the catalog once, hands every query to the core engine and
//! renders the result. All logs go to stderr; stdout is for the menu.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use menucard_core::config::CatalogSource;
use menucard_core::MenuCatalog;

mod menu_cli;

use menu_cli::MenuCommand;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "menucard",
    about = "Browse a restaurant menu by category, search text and dietary tags",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: MenuCommand,

    /// Catalog file (YAML or JSON); discovered automatically when omitted
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Emit structured JSON logs with engine tracing enabled
    #[clap(long, global = true)]
    trace: bool,

    /// Disable coloured dietary badges (NO_COLOR is also honoured)
    #[clap(long, global = true)]
    no_color: bool,
}

/// Initialize tracing with CLI flags
///
/// Configures logging based on --log-level and --trace. When --trace is
/// set, output switches to JSON and the core crate logs at trace level.
fn initialize_tracing(log_level: &LogLevel, trace: bool) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    if trace {
        if let Ok(parsed) = "menucard_core=trace".parse() {
            filter = filter.add_directive(parsed);
        }

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .init();

        tracing::info!("Menucard query tracing enabled");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.trace);

    let source = CatalogSource::discover(cli.catalog)?;
    debug!(path = %source.path.display(), kind = %source.kind, "Resolved catalog source");

    let menu = MenuCatalog::load(&source.path)
        .with_context(|| format!("Failed to load catalog {}", source.path.display()))?;

    if cli.no_color {
        colored::control::set_override(false);
    }
    cli.command.execute(&menu, &source)
}
