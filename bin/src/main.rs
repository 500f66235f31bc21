//! foldcast CLI - GPU inference/training wall-clock projection.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "foldcast")]
#[command(about = "Project GPU inference and training wall-clock time", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress caveat notes)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Project inference wall-clock time over a sequence-length histogram
    Inference {
        /// Histogram identifier (e.g., mgnify)
        #[arg(long, default_value = "mgnify")]
        histogram: String,

        /// Measured anchor curve identifier (e.g., af2-a100)
        #[arg(long, default_value = "af2-a100")]
        curve: String,

        /// Target accelerator identifier
        #[arg(short, long, default_value = "h200")]
        target: String,

        /// Reference accelerator. Defaults to the curve's own accelerator
        #[arg(short, long)]
        reference: Option<String>,

        /// Number of parallel workers (GPUs), ideal scaling assumed
        #[arg(short, long, default_value = "128")]
        workers: u32,

        /// Output file path (omit for table output only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Project training time for a multi-stage schedule (cubic step model)
    Training {
        /// Training schedule identifier
        #[arg(long, default_value = "megafold-256xh200")]
        schedule: String,

        /// Override the base sequence length
        #[arg(long)]
        base_seq: Option<u32>,

        /// Override the base step time in seconds
        #[arg(long)]
        base_step_seconds: Option<f64>,

        /// Output file path (omit for table output only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Estimate per-sequence time at a single length
    Estimate {
        /// Sequence length in residues
        length: u32,

        /// Measured anchor curve identifier
        #[arg(long, default_value = "af2-a100")]
        curve: String,

        /// Target accelerator identifier
        #[arg(short, long, default_value = "h200")]
        target: String,

        /// Reference accelerator. Defaults to the curve's own accelerator
        #[arg(short, long)]
        reference: Option<String>,
    },

    /// List embedded datasets
    List {
        /// Filter by kind (accelerators, curves, histograms, schedules)
        #[arg(short, long)]
        kind: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Inference {
            histogram,
            curve,
            target,
            reference,
            workers,
            output,
            format,
        } => commands::inference::inference(
            &histogram,
            &curve,
            &target,
            reference.as_deref(),
            workers,
            output,
            format,
            cli.quiet,
        ),
        Commands::Training {
            schedule,
            base_seq,
            base_step_seconds,
            output,
            format,
        } => commands::training::training(&schedule, base_seq, base_step_seconds, output, format),
        Commands::Estimate {
            length,
            curve,
            target,
            reference,
        } => commands::estimate::estimate(length, &curve, &target, reference.as_deref(), cli.quiet),
        Commands::List { kind } => commands::list::list_datasets(kind.as_deref()),
    }
}
