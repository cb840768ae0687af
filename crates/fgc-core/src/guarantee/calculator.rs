use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::CoverageConfig;
use crate::guarantee::record::build_record;
use crate::types::*;
use crate::FgcResult;

/// Amount protected by the guarantee: `min(amount, ceiling)`.
///
/// A negative ceiling is treated as zero so the covered amount never goes
/// below zero.
pub fn calculate_guarantee(amount: &InvestmentAmount, ceiling: Money) -> Money {
    amount.value().min(ceiling.max(Decimal::ZERO))
}

impl GuaranteeResult {
    pub fn compute(amount: &InvestmentAmount, ceiling: Money) -> Self {
        let covered_amount = calculate_guarantee(amount, ceiling);
        GuaranteeResult {
            covered_amount,
            uncovered_amount: (amount.value() - covered_amount).max(Decimal::ZERO),
        }
    }

    pub fn is_fully_covered(&self) -> bool {
        self.uncovered_amount.is_zero()
    }
}

/// A validated input together with its computed split and the ceiling used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
    pub input: InvestmentInput,
    pub result: GuaranteeResult,
    pub ceiling: Money,
}

impl Simulation {
    pub fn run(input: InvestmentInput, ceiling: Money) -> Self {
        let result = GuaranteeResult::compute(&input.amount, ceiling);
        Simulation {
            input,
            result,
            ceiling,
        }
    }

    pub fn record(&self) -> ReportRecord {
        build_record(&self.input, &self.result)
    }
}

/// Output of a guarantee simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub application_type: ApplicationType,
    pub institution_type: InstitutionType,
    pub invested_amount: Money,
    pub covered_amount: Money,
    pub uncovered_amount: Money,
    pub coverage_ceiling: Money,
    /// Covered share of the invested amount (0 to 1)
    pub coverage_ratio: Decimal,
    pub fully_covered: bool,
}

impl SimulationOutput {
    pub fn from_simulation(simulation: &Simulation) -> Self {
        let invested = simulation.input.amount.value();
        SimulationOutput {
            application_type: simulation.input.application_type,
            institution_type: simulation.input.institution_type,
            invested_amount: invested,
            covered_amount: simulation.result.covered_amount,
            uncovered_amount: simulation.result.uncovered_amount,
            coverage_ceiling: simulation.ceiling,
            coverage_ratio: (simulation.result.covered_amount / invested).round_dp(6),
            fully_covered: simulation.result.is_fully_covered(),
        }
    }
}

/// Run one guarantee simulation.
///
/// Returns the simulation itself (for records and charts) together with the
/// envelope describing it, so both come from the same computation.
pub fn simulate(
    input: &InvestmentInput,
    config: &CoverageConfig,
) -> FgcResult<(Simulation, ComputationOutput<SimulationOutput>)> {
    let start = Instant::now();
    config.validate()?;

    let mut warnings: Vec<String> = Vec::new();
    let ceiling = config.coverage_ceiling;
    let simulation = Simulation::run(input.clone(), ceiling);

    if !simulation.result.is_fully_covered() {
        warnings.push(format!(
            "Amount exceeds the coverage ceiling of {ceiling}; {} is not protected",
            simulation.result.uncovered_amount
        ));
    }
    let near_ceiling = ceiling.checked_mul(dec!(0.9)).unwrap_or(Decimal::MAX);
    if input.amount.value() >= near_ceiling && simulation.result.is_fully_covered() {
        warnings.push("Amount is within 10% of the coverage ceiling".into());
    }

    let output = SimulationOutput::from_simulation(&simulation);

    let elapsed = start.elapsed().as_micros() as u64;
    let envelope = with_metadata(
        "Deposit guarantee ceiling: covered = min(amount, ceiling)",
        &serde_json::json!({
            "coverage_ceiling": ceiling.to_string(),
            "scope": "per depositor, per institution",
        }),
        warnings,
        elapsed,
        output,
    );
    Ok((simulation, envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn amount(v: Decimal) -> InvestmentAmount {
        InvestmentAmount::new(v).unwrap()
    }

    #[test]
    fn test_below_ceiling_fully_covered() {
        let result = GuaranteeResult::compute(&amount(dec!(100000)), dec!(250000));
        assert_eq!(
            result,
            GuaranteeResult {
                covered_amount: dec!(100000),
                uncovered_amount: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn test_above_ceiling_clamped() {
        let result = GuaranteeResult::compute(&amount(dec!(300000)), dec!(250000));
        assert_eq!(result.covered_amount, dec!(250000));
        assert_eq!(result.uncovered_amount, dec!(50000));
    }

    #[test]
    fn test_exact_boundary() {
        let result = GuaranteeResult::compute(&amount(dec!(250000)), dec!(250000));
        assert_eq!(result.covered_amount, dec!(250000));
        assert!(result.is_fully_covered());
    }

    #[test]
    fn test_negative_ceiling_covers_nothing() {
        let result = GuaranteeResult::compute(&amount(dec!(10)), dec!(-5));
        assert_eq!(result.covered_amount, Decimal::ZERO);
        assert_eq!(result.uncovered_amount, dec!(10));
    }

    #[test]
    fn test_simulate_envelope() {
        let input = InvestmentInput {
            amount: amount(dec!(300000)),
            institution_type: InstitutionType::Bank,
            application_type: ApplicationType::Cdb,
        };
        let (simulation, out) = simulate(&input, &CoverageConfig::default()).unwrap();
        assert_eq!(simulation.record().covered_amount, out.result.covered_amount);
        assert_eq!(simulation.ceiling, dec!(250000));
        assert_eq!(out.result.covered_amount, dec!(250000));
        assert_eq!(out.result.uncovered_amount, dec!(50000));
        assert!(!out.result.fully_covered);
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    }

    #[test]
    fn test_simulate_near_ceiling_warning() {
        let input = InvestmentInput {
            amount: amount(dec!(240000)),
            institution_type: InstitutionType::CreditUnion,
            application_type: ApplicationType::Lca,
        };
        let (_, out) = simulate(&input, &CoverageConfig::default()).unwrap();
        assert!(out.result.fully_covered);
        assert_eq!(out.result.coverage_ratio, Decimal::ONE);
        assert_eq!(out.warnings, vec!["Amount is within 10% of the coverage ceiling".to_string()]);
    }

    #[test]
    fn test_huge_ceiling_does_not_overflow_warning_threshold() {
        let input = InvestmentInput {
            amount: amount(dec!(100)),
            institution_type: InstitutionType::Bank,
            application_type: ApplicationType::Cdb,
        };
        let config = CoverageConfig::with_ceiling(Decimal::MAX).unwrap();
        let (simulation, out) = simulate(&input, &config).unwrap();
        assert!(simulation.result.is_fully_covered());
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_simulate_rejects_bad_config() {
        let input = InvestmentInput {
            amount: amount(dec!(1)),
            institution_type: InstitutionType::Bank,
            application_type: ApplicationType::Other,
        };
        let config = CoverageConfig {
            coverage_ceiling: Decimal::ZERO,
            ..CoverageConfig::default()
        };
        assert!(simulate(&input, &config).is_err());
    }
}
