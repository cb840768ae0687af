//! Presentation-layer state for an interactive front end.
//!
//! A session starts with no result. A successful [`SimulationSession::simulate`]
//! fills it, and any edit to the inputs clears it again, so charting and
//! exporting are only available for the inputs currently shown.

use crate::config::CoverageConfig;
use crate::guarantee::{parse_investment_amount, Simulation};
use crate::types::*;
use crate::FgcResult;

#[cfg(feature = "chart")]
use crate::chart::GuaranteeChart;

#[derive(Debug, Clone)]
pub struct SimulationSession {
    config: CoverageConfig,
    amount_text: String,
    institution_type: InstitutionType,
    application_type: ApplicationType,
    last: Option<Simulation>,
}

impl SimulationSession {
    pub fn new(config: CoverageConfig) -> FgcResult<Self> {
        config.validate()?;
        Ok(SimulationSession {
            config,
            amount_text: String::new(),
            institution_type: InstitutionType::default(),
            application_type: ApplicationType::default(),
            last: None,
        })
    }

    pub fn config(&self) -> &CoverageConfig {
        &self.config
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn institution_type(&self) -> InstitutionType {
        self.institution_type
    }

    pub fn application_type(&self) -> ApplicationType {
        self.application_type
    }

    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.amount_text {
            self.amount_text = text;
            self.last = None;
        }
    }

    pub fn select_institution(&mut self, institution_type: InstitutionType) {
        if institution_type != self.institution_type {
            self.institution_type = institution_type;
            self.last = None;
        }
    }

    pub fn select_application(&mut self, application_type: ApplicationType) {
        if application_type != self.application_type {
            self.application_type = application_type;
            self.last = None;
        }
    }

    /// Validate the current inputs and compute the guarantee.
    ///
    /// On failure any previous result is discarded.
    pub fn simulate(&mut self) -> FgcResult<&Simulation> {
        self.last = None;
        let amount = parse_investment_amount(&self.amount_text)?;
        let input = InvestmentInput {
            amount,
            institution_type: self.institution_type,
            application_type: self.application_type,
        };
        let simulation = Simulation::run(input, self.config.coverage_ceiling);
        Ok(&*self.last.insert(simulation))
    }

    pub fn last(&self) -> Option<&Simulation> {
        self.last.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.last.is_some()
    }

    /// Record for the current result, if there is one.
    pub fn pending_record(&self) -> Option<ReportRecord> {
        self.last.as_ref().map(Simulation::record)
    }

    #[cfg(feature = "chart")]
    pub fn chart(&self) -> Option<GuaranteeChart> {
        self.last
            .as_ref()
            .map(|s| GuaranteeChart::from_result(&s.input.amount, &s.result))
    }
}
