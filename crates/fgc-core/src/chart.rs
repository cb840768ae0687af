use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{GuaranteeResult, InvestmentAmount, Money};

pub const COVERED_COLOR: &str = "#4CAF50";
pub const UNCOVERED_COLOR: &str = "#F44336";

/// Lowest y-axis bound, so tiny amounts still get a readable scale.
const MIN_Y_AXIS: Money = dec!(1000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub value: Money,
    /// Hex colour, `#RRGGBB`
    pub color: String,
}

/// Two-bar comparison of covered vs uncovered money, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuaranteeChart {
    pub title: String,
    pub y_label: String,
    pub y_max: Money,
    pub bars: [ChartBar; 2],
}

impl GuaranteeChart {
    /// Build the chart from the invested and covered amounts; the uncovered
    /// bar is `max(amount - covered, 0)`.
    pub fn from_amounts(amount: Money, covered: Money) -> Self {
        let uncovered = amount
            .checked_sub(covered)
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO);
        GuaranteeChart {
            title: "Garantia FGC".into(),
            y_label: "Valor (R$)".into(),
            y_max: amount
                .checked_mul(dec!(1.1))
                .unwrap_or(Decimal::MAX)
                .max(MIN_Y_AXIS),
            bars: [
                ChartBar {
                    label: "Garantido".into(),
                    value: covered,
                    color: COVERED_COLOR.into(),
                },
                ChartBar {
                    label: "Não Garantido".into(),
                    value: uncovered,
                    color: UNCOVERED_COLOR.into(),
                },
            ],
        }
    }

    pub fn from_result(amount: &InvestmentAmount, result: &GuaranteeResult) -> Self {
        Self::from_amounts(amount.value(), result.covered_amount)
    }

    /// Fraction of the y-axis a bar fills, in `[0, 1]`.
    pub fn bar_fraction(&self, bar: &ChartBar) -> Decimal {
        if self.y_max.is_zero() {
            return Decimal::ZERO;
        }
        (bar.value / self.y_max).max(Decimal::ZERO).min(Decimal::ONE)
    }
}
