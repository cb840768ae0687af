use colored::Colorize;
use fgc_core::about::about_text;
use fgc_core::currency::format_currency;
use fgc_core::report::{export_record, ReportStore};
use fgc_core::session::SimulationSession;
use fgc_core::{ApplicationType, InstitutionType};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

use crate::render::chart::render_chart;
use crate::settings::Settings;
use crate::store::xlsx::XlsxReportStore;

const HELP: &str = "\
Commands:
  amount <value>          set the invested amount
  institution <type>      bank | finance-company | credit-union
  application <type>      cdb | lci | lca | savings | other
  simulate                compute the guarantee for the current inputs
  chart                   draw the last result
  export                  append the last result to the report
  show                    print the current inputs and last result
  about                   explain the guarantee fund
  help                    this text
  quit                    leave";

pub fn run_interactive(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = SimulationSession::new(settings.coverage.clone())?;
    let mut store = XlsxReportStore::new(&settings.report_path);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let exported = run_session(&mut session, &mut store, stdin.lock(), stdout.lock())?;
    debug!(exported, "interactive session finished");
    Ok(())
}

/// Drive a session from line-oriented input. Returns how many rows were exported.
pub fn run_session<S, R, W>(
    session: &mut SimulationSession,
    store: &mut S,
    reader: R,
    mut out: W,
) -> io::Result<usize>
where
    S: ReportStore,
    R: BufRead,
    W: Write,
{
    let symbol = session.config().currency_symbol.clone();
    let mut exported = 0;

    writeln!(out, "Deposit guarantee simulator. Type 'help' for commands.")?;
    write!(out, "> ")?;
    out.flush()?;

    for line in reader.lines() {
        let line = line?;
        let (command, arg) = match line.trim().split_once(char::is_whitespace) {
            Some((c, a)) => (c.to_lowercase(), a.trim().to_string()),
            None => (line.trim().to_lowercase(), String::new()),
        };

        match command.as_str() {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "about" => writeln!(out, "{}", about_text(session.config()))?,
            "amount" => session.set_amount_text(arg),
            "institution" => match arg.parse::<InstitutionType>() {
                Ok(t) => session.select_institution(t),
                Err(e) => writeln!(out, "{}: {e}", "error".red().bold())?,
            },
            "application" => match arg.parse::<ApplicationType>() {
                Ok(t) => session.select_application(t),
                Err(e) => writeln!(out, "{}: {e}", "error".red().bold())?,
            },
            "show" => {
                let result = match session.last() {
                    Some(sim) => format!(
                        "covered {} of {}",
                        format_currency(sim.result.covered_amount, &symbol),
                        format_currency(sim.input.amount.value(), &symbol)
                    ),
                    None => "none".to_string(),
                };
                writeln!(
                    out,
                    "amount: '{}' | institution: {} | application: {} | result: {result}",
                    session.amount_text(),
                    session.institution_type(),
                    session.application_type(),
                )?
            }
            "simulate" => match session.simulate() {
                Ok(sim) => {
                    writeln!(
                        out,
                        "Type: {} | Institution: {}",
                        sim.input.application_type, sim.input.institution_type
                    )?;
                    writeln!(out, "Invested:  {}", format_currency(sim.input.amount.value(), &symbol))?;
                    writeln!(out, "Covered:   {}", format_currency(sim.result.covered_amount, &symbol))?;
                    writeln!(out, "Uncovered: {}", format_currency(sim.result.uncovered_amount, &symbol))?;
                }
                Err(e) => writeln!(out, "{}: {e}", "error".red().bold())?,
            },
            "chart" => match session.chart() {
                Some(chart) => write!(out, "{}", render_chart(&chart, &symbol))?,
                None => writeln!(out, "Run 'simulate' first.")?,
            },
            "export" => match session.pending_record() {
                Some(record) => match export_record(store, &record) {
                    Ok(()) => {
                        exported += 1;
                        writeln!(out, "Simulation saved to the report.")?;
                    }
                    Err(e) => {
                        warn!(error = %e, "export failed");
                        writeln!(out, "{}: {e}", "error".red().bold())?;
                    }
                },
                None => writeln!(out, "Run 'simulate' first.")?,
            },
            other => writeln!(out, "Unknown command '{other}'. Type 'help'.")?,
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(exported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fgc_core::report::MemoryReportStore;
    use fgc_core::{CoverageConfig, FgcError, FgcResult, ReportRecord};
    use rust_decimal_macros::dec;

    fn drive<S: ReportStore>(store: &mut S, script: &str) -> (usize, String) {
        let mut session = SimulationSession::new(CoverageConfig::default()).unwrap();
        let mut out = Vec::new();
        let n = run_session(&mut session, store, script.as_bytes(), &mut out).unwrap();
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_simulate_and_export() {
        let mut store = MemoryReportStore::new();
        let (n, out) = drive(
            &mut store,
            "amount 300000\ninstitution credit-union\nsimulate\nexport\nquit\n",
        );
        assert_eq!(n, 1);
        assert!(out.contains("Uncovered: R$ 50,000.00"));
        assert_eq!(store.rows()[0].covered_amount, dec!(250000));
        assert_eq!(store.rows()[0].institution_type, InstitutionType::CreditUnion);
    }

    #[test]
    fn test_export_requires_simulation() {
        let mut store = MemoryReportStore::new();
        let (n, out) = drive(&mut store, "amount 100\nexport\nchart\n");
        assert_eq!(n, 0);
        assert_eq!(out.matches("Run 'simulate' first.").count(), 2);
        assert!(store.rows().is_empty());
    }

    #[test]
    fn test_changed_input_disables_export() {
        let mut store = MemoryReportStore::new();
        let (n, _) = drive(&mut store, "amount 100\nsimulate\napplication lca\nexport\n");
        assert_eq!(n, 0);
    }

    #[test]
    fn test_invalid_amount_reported() {
        let mut store = MemoryReportStore::new();
        let (n, out) = drive(&mut store, "amount abc\nsimulate\nexport\n");
        assert_eq!(n, 0);
        assert!(out.contains("Invalid amount 'abc'"));
    }

    #[test]
    fn test_show_reports_last_result() {
        let mut store = MemoryReportStore::new();
        let (_, out) = drive(&mut store, "show\namount 300000\nsimulate\nshow\namount 1\nshow\n");
        let shown: Vec<&str> = out.lines().filter(|l| l.contains("| result: ")).collect();
        assert_eq!(shown.len(), 3);
        assert!(shown[0].ends_with("result: none"));
        assert!(shown[1].ends_with("result: covered R$ 250,000.00 of R$ 300,000.00"));
        assert!(shown[2].ends_with("result: none"));
    }

    struct LockedStore;

    impl ReportStore for LockedStore {
        fn load_existing(&self) -> FgcResult<Vec<ReportRecord>> {
            Ok(Vec::new())
        }

        fn append_and_save(&mut self, _records: &[ReportRecord]) -> FgcResult<()> {
            Err(FgcError::persistence("relatorio_fgc.xlsx", "file is locked"))
        }
    }

    #[test]
    fn test_persistence_failure_keeps_result() {
        let (n, out) = drive(&mut LockedStore, "amount 10\nsimulate\nexport\nchart\n");
        assert_eq!(n, 0);
        assert!(out.contains("file is locked"));
        assert!(out.contains("Garantia FGC"));
    }
}
