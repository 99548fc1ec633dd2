//! CLI interface using clap
//!
//! Provides the command-line interface for notesmith

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};

/// Notesmith - maintenance toolkit for a static, file-based notes app
#[derive(Parser, Debug)]
#[command(name = "notesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the notes app root (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    pub path: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive block subtitles from path breadcrumbs across all note files
    FixSubtitles,

    /// Regenerate the HTML index page listing all note files
    Index,

    /// Serve the app root over local HTTP
    Serve(ServeArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides the configured port)
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Do not open the browser on startup
    #[arg(long)]
    pub no_open: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["notesmith", "fix-subtitles"]);
        assert!(matches!(cli.command, Commands::FixSubtitles));
        assert_eq!(cli.path, ".");
    }

    #[test]
    fn test_serve_command() {
        let cli = Cli::parse_from(["notesmith", "serve", "--port", "9000", "--no-open"]);
        if let Commands::Serve(args) = cli.command {
            assert_eq!(args.port, Some(9000));
            assert!(args.no_open);
        } else {
            panic!("expected serve command");
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["notesmith", "-o", "json", "fix-subtitles"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
