//! # Efficiency Panel
//!
//! Substrate concentration and cost, submitted to `/api/analyze`.

use crate::repl::controllers::RemoteCallController;
use crate::repl::models::{
    AnalyzeRequest, AnalyzeResponse, ErrorClearPolicy, FieldSpec, Form, UnknownField,
    ValidationRule,
};
use crate::repl::services::{Analyze, HttpService};

pub const SUBSTRATE_CONCENTRATION: &str = "substrate-concentration";
pub const COST: &str = "cost";

const FIELDS: [FieldSpec; 2] = [
    FieldSpec::new(
        SUBSTRATE_CONCENTRATION,
        "Substrate Concentration",
        ValidationRule::positive_number(),
    ),
    FieldSpec::new(COST, "Cost", ValidationRule::positive_number()),
];

pub struct EfficiencyPanel {
    form: Form,
    call: RemoteCallController<Analyze>,
}

impl EfficiencyPanel {
    pub const TITLE: &'static str = "Biotech Efficiency Analyzer";

    pub fn new(service: HttpService, policy: ErrorClearPolicy) -> Self {
        Self {
            form: Form::new(FIELDS, policy),
            call: RemoteCallController::new(service),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn call(&self) -> &RemoteCallController<Analyze> {
        &self.call
    }

    pub fn handle_input(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        self.form.handle_input(name, value)
    }

    /// Calculate and reset are enabled only once both fields have a value
    pub fn can_submit(&self) -> bool {
        self.form.is_complete()
    }

    pub fn request(&self) -> AnalyzeRequest {
        AnalyzeRequest {
            substrate_concentration: self.form.value(SUBSTRATE_CONCENTRATION).to_string(),
            cost: self.form.value(COST).to_string(),
        }
    }

    pub async fn submit(&self) -> Option<AnalyzeResponse> {
        self.call.perform_call(self.request()).await
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.call.clear_data();
    }
}
