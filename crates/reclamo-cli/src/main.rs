mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::{AnalyzeOpts, FilterOpts, InputOpts};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "reclamo",
    version,
    about = "Complaint and claims analysis for tabular customer datasets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a dataset (CSV, XLS or XLSX) and print metrics
    Analyze {
        #[command(flatten)]
        input: InputOpts,

        #[command(flatten)]
        analyze: AnalyzeOpts,

        #[command(flatten)]
        filter: FilterOpts,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Analyze a dataset and write the normalized records as CSV
    Export {
        #[command(flatten)]
        input: InputOpts,

        #[command(flatten)]
        analyze: AnalyzeOpts,

        #[command(flatten)]
        filter: FilterOpts,

        /// Destination CSV file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: PathBuf,

        /// Also write a plain-text summary report
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },
    /// Show how dataset headers resolve to the canonical columns
    Columns {
        #[command(flatten)]
        input: InputOpts,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Generate a synthetic demo dataset as CSV
    Sample {
        /// Number of data rows
        #[arg(long, default_value_t = 50)]
        rows: usize,

        /// Seed for reproducible output
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Write to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Manage and inspect keyword rules
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List builtin rule presets
    List,
    /// Print a builtin preset as JSON
    Show {
        /// Preset name (e.g., "es")
        preset: String,
    },
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            analyze,
            filter,
            output,
        } => commands::analyze::run(&input, &analyze, &filter, &output),
        Commands::Export {
            input,
            analyze,
            filter,
            out,
            report,
        } => commands::export::run(&input, &analyze, &filter, &out, report.as_deref()),
        Commands::Columns { input, output } => commands::columns::run(&input, &output),
        Commands::Sample { rows, seed, out } => commands::sample::run(rows, seed, out.as_deref()),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Show { preset } => commands::rules::show(&preset),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
