//! Report persistence boundary.
//!
//! The core never touches files: a [`ReportStore`] implementation decides
//! whether a report already exists and how rows are written.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FgcError;
use crate::types::{Money, ReportRecord};
use crate::FgcResult;

/// Column headers of a persisted report, in column order.
pub const REPORT_HEADERS: [&str; 5] = [
    "Tipo de Aplicação",
    "Instituição",
    "Valor Investido (R$)",
    "Valor Garantido FGC (R$)",
    "Valor Não Garantido (R$)",
];

/// Default file name for the spreadsheet report.
pub const DEFAULT_REPORT_FILE: &str = "relatorio_fgc.xlsx";

/// Durable, ordered sequence of report rows.
pub trait ReportStore {
    /// Rows already stored, oldest first. Empty when nothing exists yet.
    fn load_existing(&self) -> FgcResult<Vec<ReportRecord>>;

    /// Append `records` after the stored rows and persist the whole sequence.
    fn append_and_save(&mut self, records: &[ReportRecord]) -> FgcResult<()>;
}

/// In-process store, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryReportStore {
    rows: Vec<ReportRecord>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ReportRecord] {
        &self.rows
    }
}

impl ReportStore for MemoryReportStore {
    fn load_existing(&self) -> FgcResult<Vec<ReportRecord>> {
        Ok(self.rows.clone())
    }

    fn append_and_save(&mut self, records: &[ReportRecord]) -> FgcResult<()> {
        self.rows.extend_from_slice(records);
        Ok(())
    }
}

/// Hand one record to the store.
///
/// A record whose parts do not add up to its amount is refused as
/// [`FgcError::InvalidAmount`] before the store is touched: the amount it
/// carries cannot be reported as given. Store errors are returned unchanged.
pub fn export_record<S: ReportStore + ?Sized>(
    store: &mut S,
    record: &ReportRecord,
) -> FgcResult<()> {
    if !record.is_consistent() {
        return Err(FgcError::InvalidAmount {
            input: record.amount.to_string(),
            reason: "inconsistent record: covered and uncovered parts do not add up to the amount"
                .into(),
        });
    }
    store.append_and_save(std::slice::from_ref(record))
}

/// Totals over a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub simulations: usize,
    pub total_invested: Money,
    pub total_covered: Money,
    pub total_uncovered: Money,
}

impl ReportSummary {
    pub fn from_records(records: &[ReportRecord]) -> Self {
        let mut summary = ReportSummary {
            simulations: records.len(),
            total_invested: Decimal::ZERO,
            total_covered: Decimal::ZERO,
            total_uncovered: Decimal::ZERO,
        };
        // Rows come from files, so totals saturate instead of overflowing.
        for r in records {
            summary.total_invested = saturating_add(summary.total_invested, r.amount);
            summary.total_covered = saturating_add(summary.total_covered, r.covered_amount);
            summary.total_uncovered = saturating_add(summary.total_uncovered, r.uncovered_amount);
        }
        summary
    }
}

fn saturating_add(a: Money, b: Money) -> Money {
    a.checked_add(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn record(amount: Decimal, covered: Decimal) -> ReportRecord {
        ReportRecord {
            application_type: ApplicationType::Cdb,
            institution_type: InstitutionType::Bank,
            amount,
            covered_amount: covered,
            uncovered_amount: amount - covered,
        }
    }

    struct FailingStore;

    impl ReportStore for FailingStore {
        fn load_existing(&self) -> FgcResult<Vec<ReportRecord>> {
            Ok(Vec::new())
        }

        fn append_and_save(&mut self, _records: &[ReportRecord]) -> FgcResult<()> {
            Err(FgcError::persistence("report.xlsx", "file is locked"))
        }
    }

    #[test]
    fn test_memory_store_preserves_order() {
        let mut store = MemoryReportStore::new();
        let first = record(dec!(100), dec!(100));
        let second = record(dec!(300000), dec!(250000));
        export_record(&mut store, &first).unwrap();
        export_record(&mut store, &second).unwrap();
        assert_eq!(store.load_existing().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_inconsistent_record_not_stored() {
        let mut store = MemoryReportStore::new();
        let mut bad = record(dec!(100), dec!(100));
        bad.uncovered_amount = dec!(5);
        match export_record(&mut store, &bad) {
            Err(FgcError::InvalidAmount { reason, .. }) => {
                assert!(reason.starts_with("inconsistent record"))
            }
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
        assert!(store.rows().is_empty());
    }

    #[test]
    fn test_store_failure_propagates() {
        let err = export_record(&mut FailingStore, &record(dec!(10), dec!(10))).unwrap_err();
        assert!(matches!(err, FgcError::PersistenceFailure { .. }));
    }

    #[test]
    fn test_summary_totals() {
        let rows = vec![record(dec!(100000), dec!(100000)), record(dec!(300000), dec!(250000))];
        let summary = ReportSummary::from_records(&rows);
        assert_eq!(summary.simulations, 2);
        assert_eq!(summary.total_invested, dec!(400000));
        assert_eq!(summary.total_covered, dec!(350000));
        assert_eq!(summary.total_uncovered, dec!(50000));
    }

    #[test]
    fn test_summary_saturates_on_huge_rows() {
        let rows = vec![record(Decimal::MAX, dec!(250000)), record(Decimal::MAX, dec!(250000))];
        let summary = ReportSummary::from_records(&rows);
        assert_eq!(summary.total_invested, Decimal::MAX);
        assert_eq!(summary.total_uncovered, Decimal::MAX);
        assert_eq!(summary.total_covered, dec!(500000));
    }
}
