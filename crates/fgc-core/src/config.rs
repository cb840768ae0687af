use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FgcError;
use crate::types::Money;
use crate::FgcResult;

/// Maximum amount guaranteed per depositor (CPF/CNPJ) per institution.
pub const DEFAULT_COVERAGE_CEILING: Money = dec!(250000);

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Parameters fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    pub coverage_ceiling: Money,
    pub currency_symbol: String,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        CoverageConfig {
            coverage_ceiling: DEFAULT_COVERAGE_CEILING,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl CoverageConfig {
    pub fn with_ceiling(coverage_ceiling: Money) -> FgcResult<Self> {
        let config = CoverageConfig {
            coverage_ceiling,
            ..CoverageConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FgcResult<()> {
        if self.coverage_ceiling <= Decimal::ZERO {
            return Err(FgcError::InvalidConfiguration {
                field: "coverage_ceiling".into(),
                reason: format!("Must be positive, got {}", self.coverage_ceiling),
            });
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(FgcError::InvalidConfiguration {
                field: "currency_symbol".into(),
                reason: "Must not be empty".into(),
            });
        }
        Ok(())
    }
}
