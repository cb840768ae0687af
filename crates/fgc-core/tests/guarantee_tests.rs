use fgc_core::guarantee::{build_record, calculate_guarantee, parse_investment_amount, simulate};
use fgc_core::report::{export_record, MemoryReportStore, ReportStore};
use fgc_core::*;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const CEILING: Decimal = dec!(250000);

fn run(raw: &str) -> FgcResult<(InvestmentInput, GuaranteeResult)> {
    let input = InvestmentInput {
        amount: parse_investment_amount(raw)?,
        institution_type: InstitutionType::Bank,
        application_type: ApplicationType::Cdb,
    };
    let result = GuaranteeResult::compute(&input.amount, CEILING);
    Ok((input, result))
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_below_ceiling() {
    let (_, result) = run("100000").unwrap();
    assert_eq!(result.covered_amount, dec!(100000));
    assert_eq!(result.uncovered_amount, Decimal::ZERO);
}

#[test]
fn test_scenario_above_ceiling() {
    let (_, result) = run("300000").unwrap();
    assert_eq!(result.covered_amount, dec!(250000));
    assert_eq!(result.uncovered_amount, dec!(50000));
}

#[test]
fn test_scenario_exact_ceiling() {
    let (_, result) = run("250000").unwrap();
    assert_eq!(result.covered_amount, dec!(250000));
    assert_eq!(result.uncovered_amount, Decimal::ZERO);
}

#[test]
fn test_scenario_negative_input_produces_no_record() {
    let mut store = MemoryReportStore::new();
    if let Ok((input, result)) = run("-50") {
        export_record(&mut store, &build_record(&input, &result)).unwrap();
    }
    assert!(matches!(run("-50"), Err(FgcError::InvalidAmount { .. })));
    assert!(store.load_existing().unwrap().is_empty());
}

#[test]
fn test_scenario_non_numeric_input() {
    assert!(matches!(run("abc"), Err(FgcError::InvalidAmount { .. })));
}

// ---------------------------------------------------------------------------
// Properties over a spread of amounts
// ---------------------------------------------------------------------------

fn sample_amounts() -> Vec<Decimal> {
    vec![
        dec!(0.01),
        dec!(1),
        dec!(999.99),
        dec!(124999.995),
        dec!(249999.99),
        dec!(250000),
        dec!(250000.01),
        dec!(1000000),
        dec!(98765432.1),
    ]
}

#[test]
fn test_parts_always_sum_to_amount() {
    for value in sample_amounts() {
        let amount = InvestmentAmount::new(value).unwrap();
        let result = GuaranteeResult::compute(&amount, CEILING);
        assert_eq!(result.covered_amount + result.uncovered_amount, value);
        assert!(result.covered_amount <= CEILING);
        assert!(result.covered_amount >= Decimal::ZERO);
        assert!(result.uncovered_amount >= Decimal::ZERO);
    }
}

#[test]
fn test_covered_matches_clamp_rule() {
    for value in sample_amounts() {
        let amount = InvestmentAmount::new(value).unwrap();
        let covered = calculate_guarantee(&amount, CEILING);
        if value <= CEILING {
            assert_eq!(covered, value);
        } else {
            assert_eq!(covered, CEILING);
        }
    }
}

#[test]
fn test_calculation_is_repeatable() {
    let amount = InvestmentAmount::new(dec!(312345.67)).unwrap();
    let first = GuaranteeResult::compute(&amount, CEILING);
    let second = GuaranteeResult::compute(&amount, CEILING);
    assert_eq!(first, second);
}

#[test]
fn test_custom_ceiling() {
    let config = CoverageConfig::with_ceiling(dec!(70000)).unwrap();
    let input = InvestmentInput {
        amount: parse_investment_amount("100000").unwrap(),
        institution_type: InstitutionType::FinanceCompany,
        application_type: ApplicationType::Lci,
    };
    let (_, out) = simulate(&input, &config).unwrap();
    assert_eq!(out.result.covered_amount, dec!(70000));
    assert_eq!(out.result.uncovered_amount, dec!(30000));
    assert_eq!(out.result.coverage_ceiling, dec!(70000));
}

// ---------------------------------------------------------------------------
// Record flow
// ---------------------------------------------------------------------------

#[test]
fn test_records_appended_in_simulation_order() {
    let mut store = MemoryReportStore::new();
    for raw in ["100000", "300000", "250000"] {
        let (input, result) = run(raw).unwrap();
        export_record(&mut store, &build_record(&input, &result)).unwrap();
    }
    let amounts: Vec<Decimal> = store
        .load_existing()
        .unwrap()
        .iter()
        .map(|r| r.amount)
        .collect();
    assert_eq!(amounts, vec![dec!(100000), dec!(300000), dec!(250000)]);
    assert!(store.rows().iter().all(ReportRecord::is_consistent));
}

#[test]
fn test_record_serialises_with_machine_names() {
    let (input, result) = run("300000").unwrap();
    let value = serde_json::to_value(build_record(&input, &result)).unwrap();
    assert_eq!(value["institution_type"], "bank");
    assert_eq!(value["application_type"], "cdb");
    assert_eq!(value["uncovered_amount"], "50000");
}
