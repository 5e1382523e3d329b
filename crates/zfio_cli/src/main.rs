//! zf CLI
//!
//! Command-line tools over zfio streams.
//!
//! # Commands
//!
//! - `cat` - Decode files (plain, gzip or bzip2) to standard output
//! - `convert` - Re-encode a file into the format named by the output path
//! - `info` - Show how a path and mode resolve to a backend

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Read and write plain, gzip and bzip2 files transparently.
#[derive(Parser)]
#[command(name = "zf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode files to standard output
    Cat {
        /// Input files; `-` reads standard input
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Input format when the path has no suffix (gz, bz2)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Re-encode a file
    Convert {
        /// Input file
        input: String,

        /// Output file; its suffix selects the output format
        output: String,

        /// Input format when the input path has no suffix
        #[arg(long)]
        input_format: Option<String>,

        /// Output format when the output path has no suffix
        #[arg(short, long)]
        format: Option<String>,

        /// Compression level (0-9)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=9))]
        level: Option<u32>,
    },

    /// Show the backend a path and mode resolve to
    Info {
        /// Path to resolve
        path: String,

        /// Open mode, optionally with a format suffix (e.g. "w.gz")
        #[arg(short, long, default_value = "r")]
        mode: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging. Stdout may carry file data, so logs go to stderr.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Cat { inputs, format } => {
            commands::cat::run(&inputs, format.as_deref())?;
        }
        Commands::Convert {
            input,
            output,
            input_format,
            format,
            level,
        } => {
            commands::convert::run(
                &input,
                &output,
                input_format.as_deref(),
                format.as_deref(),
                level,
            )?;
        }
        Commands::Info { path, mode, format } => {
            commands::info::run(&path, &mode, &format)?;
        }
        Commands::Version => {
            println!("zf CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("zfio v{}", zfio::VERSION);
        }
    }

    Ok(())
}
