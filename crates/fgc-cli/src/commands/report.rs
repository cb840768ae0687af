use clap::Args;
use fgc_core::report::{ReportStore, ReportSummary};
use fgc_core::{Money, ReportRecord};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::settings::Settings;
use crate::store::xlsx::XlsxReportStore;

/// Arguments for listing the saved report
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Report file to read (overrides the settings file)
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// One listed row, with selections shown by their report labels.
#[derive(Debug, Serialize)]
struct ReportRow {
    application_type: &'static str,
    institution_type: &'static str,
    amount: Money,
    covered_amount: Money,
    uncovered_amount: Money,
}

impl From<&ReportRecord> for ReportRow {
    fn from(r: &ReportRecord) -> Self {
        ReportRow {
            application_type: r.application_type.label(),
            institution_type: r.institution_type.label(),
            amount: r.amount,
            covered_amount: r.covered_amount,
            uncovered_amount: r.uncovered_amount,
        }
    }
}

pub fn run_report(args: ReportArgs, settings: &Settings) -> Result<Value, Box<dyn std::error::Error>> {
    let path = args.report.unwrap_or_else(|| settings.report_path.clone());
    let store = XlsxReportStore::new(&path);
    let records = store.load_existing()?;

    let rows: Vec<ReportRow> = records.iter().map(ReportRow::from).collect();
    Ok(serde_json::json!({
        "source": path.display().to_string(),
        "results": rows,
        "summary": ReportSummary::from_records(&records),
    }))
}
