use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FgcError;
use crate::FgcResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Kind of institution holding the deposit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstitutionType {
    #[default]
    Bank,
    FinanceCompany,
    CreditUnion,
}

impl InstitutionType {
    pub const ALL: [InstitutionType; 3] = [
        InstitutionType::Bank,
        InstitutionType::FinanceCompany,
        InstitutionType::CreditUnion,
    ];

    /// Machine name used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            InstitutionType::Bank => "bank",
            InstitutionType::FinanceCompany => "finance-company",
            InstitutionType::CreditUnion => "credit-union",
        }
    }

    /// Display label written to reports.
    pub fn label(self) -> &'static str {
        match self {
            InstitutionType::Bank => "Banco",
            InstitutionType::FinanceCompany => "Financeira",
            InstitutionType::CreditUnion => "Cooperativa",
        }
    }
}

impl fmt::Display for InstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InstitutionType {
    type Err = FgcError;

    fn from_str(s: &str) -> FgcResult<Self> {
        match_selection(s, &Self::ALL, |t| [t.name(), t.label()], "institution type")
    }
}

/// Kind of product the money is invested in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationType {
    #[default]
    Cdb,
    Lci,
    Lca,
    Savings,
    Other,
}

impl ApplicationType {
    pub const ALL: [ApplicationType; 5] = [
        ApplicationType::Cdb,
        ApplicationType::Lci,
        ApplicationType::Lca,
        ApplicationType::Savings,
        ApplicationType::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ApplicationType::Cdb => "cdb",
            ApplicationType::Lci => "lci",
            ApplicationType::Lca => "lca",
            ApplicationType::Savings => "savings",
            ApplicationType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApplicationType::Cdb => "CDB",
            ApplicationType::Lci => "LCI",
            ApplicationType::Lca => "LCA",
            ApplicationType::Savings => "Poupança",
            ApplicationType::Other => "Outros",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationType {
    type Err = FgcError;

    fn from_str(s: &str) -> FgcResult<Self> {
        match_selection(s, &Self::ALL, |t| [t.name(), t.label()], "application type")
    }
}

fn match_selection<T: Copy>(
    raw: &str,
    all: &[T],
    names: impl Fn(T) -> [&'static str; 2],
    field: &str,
) -> FgcResult<T> {
    let wanted = raw.trim().to_lowercase();
    all.iter()
        .copied()
        .find(|t| names(*t).iter().any(|n| n.to_lowercase() == wanted))
        .ok_or_else(|| FgcError::InvalidSelection {
            field: field.into(),
            value: raw.to_string(),
        })
}

/// Largest amount accepted. Two-decimal amounts up to here have at most 15
/// significant digits, which a spreadsheet (IEEE double) cell keeps exactly.
pub const MAX_INVESTMENT_AMOUNT: Money = dec!(9999999999999.99);

/// An invested amount that has passed validation (strictly positive and at
/// most [`MAX_INVESTMENT_AMOUNT`]).
///
/// The only ways to obtain one are [`InvestmentAmount::new`] and
/// [`crate::guarantee::validation::parse_investment_amount`], so the
/// calculator never sees a zero or negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct InvestmentAmount(Money);

impl InvestmentAmount {
    pub fn new(value: Money) -> FgcResult<Self> {
        if value <= Decimal::ZERO {
            return Err(FgcError::invalid_amount(
                &value.to_string(),
                "Must be greater than zero",
            ));
        }
        if value > MAX_INVESTMENT_AMOUNT {
            return Err(FgcError::invalid_amount(
                &value.to_string(),
                format!("Must not exceed {MAX_INVESTMENT_AMOUNT}"),
            ));
        }
        Ok(InvestmentAmount(value))
    }

    pub fn value(self) -> Money {
        self.0
    }
}

impl TryFrom<Decimal> for InvestmentAmount {
    type Error = FgcError;

    fn try_from(value: Decimal) -> FgcResult<Self> {
        InvestmentAmount::new(value)
    }
}

impl From<InvestmentAmount> for Decimal {
    fn from(amount: InvestmentAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for InvestmentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub amount: InvestmentAmount,
    #[serde(default)]
    pub institution_type: InstitutionType,
    #[serde(default)]
    pub application_type: ApplicationType,
}

/// Split of an amount into its guaranteed and unguaranteed parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuaranteeResult {
    pub covered_amount: Money,
    pub uncovered_amount: Money,
}

/// One report row, one per successful simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub application_type: ApplicationType,
    pub institution_type: InstitutionType,
    pub amount: Money,
    pub covered_amount: Money,
    pub uncovered_amount: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
