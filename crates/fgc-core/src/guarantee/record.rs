use crate::types::{GuaranteeResult, InvestmentInput, ReportRecord};

/// Package one simulation as a report row.
pub fn build_record(input: &InvestmentInput, result: &GuaranteeResult) -> ReportRecord {
    ReportRecord {
        application_type: input.application_type,
        institution_type: input.institution_type,
        amount: input.amount.value(),
        covered_amount: result.covered_amount,
        uncovered_amount: result.uncovered_amount,
    }
}

impl ReportRecord {
    /// `covered + uncovered == amount` and neither part is negative.
    pub fn is_consistent(&self) -> bool {
        self.covered_amount.checked_add(self.uncovered_amount) == Some(self.amount)
            && !self.covered_amount.is_sign_negative()
            && !self.uncovered_amount.is_sign_negative()
    }
}
