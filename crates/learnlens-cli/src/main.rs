//! learnlens CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "learnlens", version, about = "Learning performance insight engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a performance snapshot
    Analyze {
        /// Path to a snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,

        /// Thresholds TOML file (defaults apply when omitted)
        #[arg(long)]
        thresholds: Option<PathBuf>,

        /// Directory to write report files into
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: table, json, markdown, all
        #[arg(long, default_value = "table")]
        format: String,

        /// Learner name recorded in the report
        #[arg(long)]
        learner: Option<String>,
    },

    /// Compare two insight reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Change threshold in percentage points
        #[arg(long, default_value = "2")]
        threshold: u32,

        /// Exit code 1 if regressions found
        #[arg(long)]
        fail_on_regression: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate snapshot JSON files
    Validate {
        /// Path to a snapshot file or directory
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Create starter thresholds config and example snapshot
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("learnlens=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            snapshot,
            thresholds,
            output,
            format,
            learner,
        } => commands::analyze::execute(snapshot, thresholds, output, format, learner),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_regression,
            format,
        } => commands::compare::execute(baseline, current, threshold, fail_on_regression, format),
        Commands::Validate { snapshot } => commands::validate::execute(snapshot),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
