mod commands;
mod input;
mod logging;
mod output;
mod render;
mod settings;
mod store;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process;

use commands::report::ReportArgs;
use commands::simulate::SimulateArgs;
use settings::Settings;

/// Deposit guarantee fund coverage simulator
#[derive(Parser)]
#[command(
    name = "fgc",
    version,
    about = "Simulate how much of an investment the deposit guarantee fund covers",
    long_about = "Computes the portion of an investment protected by a per-institution \
                  deposit guarantee ceiling, draws a covered/uncovered chart and keeps \
                  a spreadsheet report of past simulations."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,

    /// Settings file (YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Coverage ceiling for this run (overrides the settings file)
    #[arg(long, global = true)]
    ceiling: Option<Decimal>,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the covered and uncovered parts of an investment
    Simulate(SimulateArgs),
    /// List the simulations saved in the report
    Report(ReportArgs),
    /// Explain the deposit guarantee fund
    About,
    /// Line-driven session: set inputs, simulate, chart and export
    Interactive,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", "error".red().bold(), e);
    process::exit(1);
}

fn strict_settings(cli: &Cli) -> Settings {
    Settings::resolve(cli.config.as_deref(), cli.ceiling).unwrap_or_else(|e| fail(e))
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Settings are resolved per command; `version` never reads them.
    let (result, settings) = match &cli.command {
        Commands::Version => {
            println!("fgc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Commands::About => {
            let settings = Settings::resolve_or_default(cli.config.as_deref(), cli.ceiling);
            commands::about::run_about(&settings);
            return;
        }
        Commands::Interactive => {
            if let Err(e) = commands::interactive::run_interactive(&strict_settings(&cli)) {
                fail(e);
            }
            return;
        }
        Commands::Simulate(args) => {
            let settings = strict_settings(&cli);
            (
                commands::simulate::run_simulate(args.clone(), &settings, &cli.output),
                settings,
            )
        }
        Commands::Report(args) => {
            let settings = strict_settings(&cli);
            (commands::report::run_report(args.clone(), &settings), settings)
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value, &settings.coverage.currency_symbol);
            process::exit(0);
        }
        Err(e) => fail(e),
    }
}
