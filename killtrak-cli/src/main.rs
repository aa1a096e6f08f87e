//! KillTrak CLI - Command-line interface
//!
//! Runs the kill tracker against the live screen and offers a few helper
//! commands for inspecting stats, editing settings and checking OCR regions.

mod commands;
mod error;
mod runner;
mod ui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use killtrak::resolution::Resolution;

use commands::config::ConfigCommands;
use error::CliError;

#[derive(Parser)]
#[command(name = "killtrak")]
#[command(version = killtrak::VERSION)]
#[command(about = "Track kills and kill streaks from on-screen counters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Track kills until Ctrl+C (default)
    Run(RunArgs),

    /// View or modify configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show persisted totals and resolution
    Stats {
        /// Stats file to use instead of storage.data_file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Forget the saved resolution so the next run asks again
        #[arg(long)]
        reset_resolution: bool,
    },

    /// Capture both counter regions once and show what OCR makes of them
    Capture {
        /// Resolution to capture at instead of the saved one
        #[arg(long)]
        resolution: Option<Resolution>,

        /// Stats file to read the saved resolution from
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

#[derive(clap::Args, Default)]
struct RunArgs {
    /// Stats file to use instead of storage.data_file
    #[arg(long)]
    data: Option<PathBuf>,

    /// Screen resolution (1728x1080 or 1920x1080), skips the prompt
    #[arg(long)]
    resolution: Option<Resolution>,

    /// Print one status line per tick instead of the dashboard
    #[arg(long)]
    headless: bool,

    /// Save every captured region as PNG to ocr.debug_dir
    #[arg(long)]
    debug_captures: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run::run(commands::run::RunOptions {
            data: args.data,
            resolution: args.resolution,
            headless: args.headless,
            debug_captures: args.debug_captures,
        }),
        Commands::Config { command } => commands::config::run(command),
        Commands::Stats {
            data,
            reset_resolution,
        } => commands::stats::run(data, reset_resolution),
        Commands::Capture { resolution, data } => commands::capture::run(resolution, data),
    };

    if let Err(e) = result {
        e.exit();
    }
}

impl CliError {
    /// Print the error and exit with status 1.
    fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        process::exit(1);
    }
}
