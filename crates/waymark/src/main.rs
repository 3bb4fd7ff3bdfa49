//! Waymark CLI - documentation-site navigation registry.
//!
//! Provides commands for:
//! - `check`: Validate navigation trees, redirects and page references
//! - `nav`: Print a mount's navigation tree or resolved sidebar
//! - `resolve`: Look up a redirect target
//! - `snippet`: Print the analytics snippet
//! - `serve`: Start the HTTP server

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, CommonArgs, NavArgs, ResolveArgs, ServeArgs, SnippetArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Waymark - documentation-site navigation registry.
#[derive(Parser)]
#[command(name = "waymark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate navigation, redirects and page references.
    Check(CheckArgs),
    /// Print a navigation tree.
    Nav(NavArgs),
    /// Print the redirect target of a path.
    Resolve(ResolveArgs),
    /// Print the analytics snippet.
    Snippet(SnippetArgs),
    /// Start the HTTP server.
    Serve(ServeArgs),
}

impl Commands {
    fn common(&self) -> &CommonArgs {
        match self {
            Self::Check(args) => &args.common,
            Self::Nav(args) => &args.common,
            Self::Resolve(args) => &args.common,
            Self::Snippet(args) => &args.common,
            Self::Serve(args) => &args.common,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.common().verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Snippet(args) => args.execute(),
        Commands::Serve(args) => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(args.execute(VERSION)),
            Err(e) => Err(CliError::Io(e)),
        },
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
