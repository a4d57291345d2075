use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::Path;

use calculator::cli::args::{resolve_format, OperandArgs};
use calculator::cli::commands;
use calculator::cli::Operation;
use calculator::Config;

#[derive(Parser)]
#[command(name = "calculator")]
#[command(about = "Floating point calculator with typed division errors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (text or json)
    #[arg(short, long, global = true)]
    format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample computations (default)
    Demo,
    /// Add two numbers
    Add(OperandArgs),
    /// Subtract the second number from the first
    Subtract(OperandArgs),
    /// Multiply two numbers
    Multiply(OperandArgs),
    /// Divide the first number by the second
    Divide(OperandArgs),
}

impl Commands {
    fn operation(&self) -> Option<(Operation, OperandArgs)> {
        match self {
            Commands::Demo => None,
            Commands::Add(args) => Some((Operation::Add, *args)),
            Commands::Subtract(args) => Some((Operation::Subtract, *args)),
            Commands::Multiply(args) => Some((Operation::Multiply, *args)),
            Commands::Divide(args) => Some((Operation::Divide, *args)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    info!("Starting calculator");

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(Some(Path::new(path)))?,
        None => Config::load()?,
    };
    let format = resolve_format(cli.format.as_deref(), &config)?;
    debug!("Output format: {format}");

    match cli.command.as_ref().and_then(Commands::operation) {
        Some((operation, OperandArgs { a, b })) => {
            commands::calculate(operation, a, b, format)?;
        }
        None => {
            commands::demo(config.demo.a, config.demo.b, format)?;
        }
    }

    Ok(())
}

// Helper functions that can be tested separately from main
pub fn setup_logging(verbose: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(get_log_level(verbose)),
    )
    .format_timestamp(None)
    .format_target(false)
    .format_module_path(false)
    .init();
}

pub fn get_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
