//! Hexgrid command-line host.
//!
//! Commands:
//! - render: Draw one frame of a recorded game to an SVG file
//! - locate: Resolve page coordinates to the cell beneath them

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "hexgrid")]
#[command(about = "Render hexagonal game boards and resolve pointer positions")]
struct Cli {
    /// Render configuration (JSON); defaults apply to missing fields
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one frame of a recorded game to SVG
    Render {
        /// Recorded game payload (JSON)
        #[arg(long)]
        game: String,
        /// Frame to draw; clamped to the last frame
        #[arg(long, default_value = "0")]
        frame: usize,
        #[arg(long)]
        output: String,
    },
    /// Resolve page coordinates to a cell
    Locate {
        /// Recorded game payload (JSON)
        #[arg(long)]
        game: String,
        #[arg(long, allow_hyphen_values = true)]
        page_x: f64,
        #[arg(long, allow_hyphen_values = true)]
        page_y: f64,
        /// Page position of the drawing surface
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset_x: f64,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset_y: f64,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            game,
            frame,
            output,
        } => commands::render(&config, &game, frame, &output),
        Commands::Locate {
            game,
            page_x,
            page_y,
            offset_x,
            offset_y,
        } => commands::locate(&config, &game, page_x, page_y, offset_x, offset_y),
    }
}
