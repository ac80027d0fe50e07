//! arrowkit command line.
//!
//! Prints labelled examples of the utilities and evaluates single
//! operations.
//!
//! # Quick Start
//!
//! ```bash
//! # Every demo section
//! arrowkit demo
//!
//! # One section, no colors
//! arrowkit --no-color demo --section advanced
//!
//! # Single operations
//! arrowkit divide 8 2
//! arrowkit chain 1 2 3 4 5 --above 2 --factor 2 --seed 0
//! arrowkit pipeline 5 double increment double
//! ```

mod commands;
mod style;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use arrowkit_config::{ArrowkitConfig, ConfigLoader, Section};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::eval::Step;

/// arrowkit - pure higher-order function utilities.
#[derive(Parser)]
#[command(name = "arrowkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory searched for arrowkit.toml and arrowkit.local.toml.
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Print labelled examples.
    Demo {
        /// Section to run (repeatable). Defaults to the configured sections.
        #[arg(short, long = "section")]
        sections: Vec<Section>,
    },

    /// Divide two numbers.
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Remove duplicate values, keeping first-seen order.
    Unique {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Count occurrences of each word.
    Freq { words: Vec<String> },

    /// Keep values above a threshold, multiply them, and sum the result.
    Chain {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Keep values strictly greater than this.
        #[arg(long, default_value = "2", allow_negative_numbers = true)]
        above: i64,

        /// Multiplier applied to kept values.
        #[arg(long, default_value = "2", allow_negative_numbers = true)]
        factor: i64,

        /// Initial accumulator. Without it, an empty selection is an error.
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<i64>,
    },

    /// Apply transform steps to a starting value.
    Pipeline {
        #[arg(allow_negative_numbers = true)]
        value: i64,

        #[arg(value_enum)]
        steps: Vec<Step>,
    },

    /// Print the effective configuration.
    Config,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            style::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(dir) = &cli.project_dir {
        loader = loader.with_project_dir(dir);
    }
    let config = loader.load()?;

    init_logging(&config);
    style::set_no_color(cli.no_color || !config.output.color);

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Demo { sections } => {
            let sections = if sections.is_empty() {
                config.demo.sections.clone()
            } else {
                sections
            };
            commands::demo::run(&config, &sections)
        }
        Commands::Divide { a, b } => commands::eval::divide_cmd(a, b),
        Commands::Unique { values } => commands::eval::unique_cmd(&values),
        Commands::Freq { words } => commands::eval::freq_cmd(&words),
        Commands::Chain {
            values,
            above,
            factor,
            seed,
        } => commands::eval::chain_cmd(&values, above, factor, seed),
        Commands::Pipeline { value, steps } => commands::eval::pipeline_cmd(value, &steps),
        Commands::Config => commands::config::show(&config),
    }
}

/// `RUST_LOG` wins over the configured filter.
fn init_logging(config: &ArrowkitConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
