//! Notesmith - maintenance toolkit for a static, file-based notes app
//!
//! Three utilities over a directory of JSON note documents: a batch
//! subtitle normalizer, an index-page generator, and a local static file
//! server.

use anyhow::Result;
use notesmith::cli::{fix_subtitles, generate_index, serve, Cli, Commands};
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Get the app root path
    let app_root = Path::new(&cli.path);

    // Execute command
    match cli.command {
        Commands::FixSubtitles => {
            fix_subtitles(app_root, cli.format)?;
        }

        Commands::Index => {
            generate_index(app_root)?;
        }

        Commands::Serve(args) => {
            serve(app_root, args.port, args.no_open)?;
        }
    }

    Ok(())
}
