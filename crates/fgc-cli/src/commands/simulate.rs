use clap::Args;
use fgc_core::chart::GuaranteeChart;
use fgc_core::guarantee::{parse_investment_amount, simulate};
use fgc_core::report::export_record;
use fgc_core::{ApplicationType, InstitutionType, InvestmentInput};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::input;
use crate::render::chart::render_chart;
use crate::settings::Settings;
use crate::store::xlsx::XlsxReportStore;
use crate::OutputFormat;

/// Arguments for a guarantee simulation
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Path to a JSON file with the simulation request
    #[arg(long)]
    pub input: Option<String>,

    /// Amount invested (e.g. "150000" or "1.5e5")
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Institution type: bank, finance-company, credit-union
    #[arg(long, default_value = "bank")]
    pub institution: InstitutionType,

    /// Application type: cdb, lci, lca, savings, other
    #[arg(long, default_value = "cdb")]
    pub application: ApplicationType,

    /// Append the result as a row to the spreadsheet report
    #[arg(long)]
    pub export: bool,

    /// Report file to append to (overrides the settings file)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Draw the covered/uncovered bar chart
    #[arg(long)]
    pub chart: bool,
}

/// JSON request accepted from `--input` or stdin.
#[derive(Debug, Deserialize)]
struct SimulateRequest {
    amount: RawAmount,
    #[serde(default)]
    institution_type: Option<InstitutionType>,
    #[serde(default)]
    application_type: Option<ApplicationType>,
}

/// Amount as the user wrote it; numbers and strings both go through validation.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl RawAmount {
    fn into_text(self) -> String {
        match self {
            RawAmount::Number(n) => n.to_string(),
            RawAmount::Text(s) => s,
        }
    }
}

#[instrument(skip_all, fields(export = args.export, chart = args.chart))]
pub fn run_simulate(
    args: SimulateArgs,
    settings: &Settings,
    format: &OutputFormat,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request = if let Some(amount) = args.amount {
        SimulateRequest {
            amount: RawAmount::Text(amount),
            institution_type: Some(args.institution),
            application_type: Some(args.application),
        }
    } else if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(request) = input::stdin::read_stdin()? {
        request
    } else {
        return Err("--amount is required (or provide --input)".into());
    };

    // Nothing below runs unless the amount validates.
    let input = InvestmentInput {
        amount: parse_investment_amount(&request.amount.into_text())?,
        institution_type: request.institution_type.unwrap_or(args.institution),
        application_type: request.application_type.unwrap_or(args.application),
    };

    let (simulation, output) = simulate(&input, &settings.coverage)?;
    let mut value = serde_json::to_value(&output)?;

    if args.chart {
        let chart = GuaranteeChart::from_result(&simulation.input.amount, &simulation.result);
        match format {
            OutputFormat::Table | OutputFormat::Minimal => {
                println!("{}", render_chart(&chart, &settings.coverage.currency_symbol));
            }
            OutputFormat::Json | OutputFormat::Csv => {
                value["chart"] = serde_json::to_value(&chart)?;
            }
        }
    }

    if args.export {
        let mut store =
            XlsxReportStore::new(args.report.unwrap_or_else(|| settings.report_path.clone()));
        export_record(&mut store, &simulation.record())?;
        info!(path = %store.path().display(), "simulation exported");
        value["exported_to"] = Value::String(store.path().display().to_string());
    }

    Ok(value)
}
