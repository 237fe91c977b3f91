//! Toy Robot - command line simulator
//!
//! Reads one command per line and writes `REPORT` output and error messages.
//!
//! # Usage
//!
//! ```bash
//! # Interactive: stdin to stdout
//! toy-robot
//!
//! # Read commands from a file, write output to stdout
//! toy-robot commands.txt
//!
//! # Read from one file, write to another (truncated first)
//! toy-robot commands.txt report.txt
//!
//! # Bigger table, verbose logging on stderr
//! RUST_LOG=toy_robot=debug toy-robot --table-size 8 commands.txt
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use toy_robot::{RobotConfig, RobotInterpreter};

/// Toy Robot - drive a robot around a square table
#[derive(Parser, Debug)]
#[command(name = "toy-robot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command file to read (defaults to stdin)
    input: Option<PathBuf>,

    /// File to write output to (defaults to stdout)
    output: Option<PathBuf>,

    /// Side length of the square table
    #[arg(short = 't', long, env = "TOY_ROBOT_TABLE_SIZE", value_name = "N")]
    table_size: Option<i32>,

    /// Configuration file path (TOML)
    #[arg(short = 'c', long, env = "TOY_ROBOT_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "TOY_ROBOT_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

/// Initialize logging on stderr so stdout only carries robot output
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("toy_robot={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

/// Resolve configuration: flag > config file > default
fn load_config(args: &Args) -> Result<RobotConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Error reading config: {}", path.display()))?;
            RobotConfig::from_toml_str(&text)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => RobotConfig::default(),
    };

    if let Some(size) = args.table_size {
        config.table_size = size;
    }
    config.validate()?;
    Ok(config)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Error opening input: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    })
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Error opening output: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = load_config(&args)?;
    let input = open_input(args.input.as_deref())?;
    let mut output = open_output(args.output.as_deref())?;

    let mut interpreter = RobotInterpreter::new(config);
    info!(
        table_size = interpreter.config().table_size,
        "interpreter ready"
    );
    let processed = interpreter
        .run(input, &mut output)
        .context("Error processing commands")?;
    output.flush()?;

    debug!(processed, final_state = %interpreter.state(), "done");
    Ok(())
}
