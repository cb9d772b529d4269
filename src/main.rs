//! Minimap CLI entry point

use clap::{Parser, Subcommand};
use minimap_render::ImageFormat;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "minimap")]
#[command(about = "Render path-actor travel graphs into minimap images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file with style and traversal settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a path-actor file into an image
    Render {
        /// Path to the PathActors JSON file
        input: PathBuf,

        /// Directory to write the image into (created if missing)
        #[arg(short, long, default_value = "minimaps")]
        output: PathBuf,

        /// Output format: png or svg
        #[arg(short, long, default_value = "png")]
        format: ImageFormat,

        /// Color nodes by their own hidden flag and show unreached warp arrivals
        #[arg(long)]
        debug: bool,
    },
    /// Print graph statistics without rendering
    Inspect {
        /// Path to the PathActors JSON file
        input: PathBuf,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "minimap={log_level},minimap_core={log_level},minimap_render={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { input, output, format, debug } => {
            commands::render(&input, &output, format, debug, config)
        }
        Commands::Inspect { input } => commands::inspect(&input, config),
        Commands::Version => {
            println!("Minimap v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
