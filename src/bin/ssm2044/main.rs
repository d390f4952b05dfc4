//! ssm2044 - play or render the SSM2044 filter
//!
//! Run with: cargo run -- play --cutoff 800 --resonance 2.0

mod app;
mod patch;
mod render;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use patch::PatchArgs;

#[derive(Parser)]
#[command(name = "ssm2044")]
#[command(about = "SSM2044 four-pole low-pass filter demo", long_about = None)]
struct Cli {
    /// Log debug output (to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a sawtooth through the filter with a live terminal UI
    Play {
        #[command(flatten)]
        patch: PatchArgs,
    },

    /// Render the patch offline into a 32-bit float WAV file
    Render {
        #[command(flatten)]
        patch: PatchArgs,

        /// Output file
        #[arg(short, long, default_value = "ssm2044.wav")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(short, long, default_value = "4.0")]
        duration: f64,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value = "44100")]
        sample_rate: u32,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.command {
        Commands::Play { patch } => app::run(&patch),
        Commands::Render {
            patch,
            output,
            duration,
            sample_rate,
        } => render::run(&patch, &output, duration, sample_rate),
    }
}
