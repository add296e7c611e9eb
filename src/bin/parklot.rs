//! ParkLot command-line interface
//!
//! Drives the parking lot command language from a file or an interactive
//! shell:
//!
//! ```bash
//! # Run a command file
//! parklot run commands.txt
//!
//! # Interactive shell (also the default when no subcommand is given)
//! parklot shell
//! ```

use clap::{Args, Parser, Subcommand};
use parklot::input::{run_batch, run_shell};
use parklot::CommandDispatcher;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// ParkLot - Fixed-capacity parking lot automation
#[derive(Parser, Debug)]
#[command(name = "parklot")]
#[command(version = parklot::VERSION)]
#[command(about = "ParkLot - Fixed-capacity parking lot automation", long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to the interactive shell)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log directory path (file logging is enabled when set)
    #[arg(long, global = true, env = "PARKLOT_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute every command in a file, in order
    Run(RunArgs),

    /// Start the interactive shell
    Shell,

    /// Show version
    Version,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Command file, one command per line
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli)?;

    let mut dispatcher = CommandDispatcher::new();

    match cli.command {
        Some(Commands::Run(args)) => run_batch(&mut dispatcher, &args.file),
        Some(Commands::Shell) | None => run_shell(&mut dispatcher),
        Some(Commands::Version) => {
            println!("ParkLot {}", parklot::VERSION);
            Ok(())
        }
    }
}

/// Setup logging with optional rolling files and console output
///
/// Console logs go to stderr so stdout carries only command results.
fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    let log_level = cli
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::WARN);

    let filter = EnvFilter::from_default_env().add_directive(log_level.into());

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color);

    match &cli.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "parklot.log");

            tracing_subscriber::registry()
                .with(console_layer)
                .with(fmt::layer().with_writer(file_appender).with_ansi(false))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(console_layer)
                .with(filter)
                .init();
        }
    }

    Ok(())
}
