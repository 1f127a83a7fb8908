//! # Stability Panel
//!
//! Temperature and pH, submitted to `/api/stability`. Temperature may be zero
//! or negative; pH must lie on the (0, 14] scale.

use crate::repl::controllers::RemoteCallController;
use crate::repl::models::{
    ErrorClearPolicy, FieldSpec, Form, StabilityRequest, StabilityResponse, UnknownField,
    ValidationRule,
};
use crate::repl::services::{HttpService, Stability};

pub const TEMPERATURE: &str = "temperature";
pub const PH: &str = "ph";

/// Upper end of the pH scale
pub const PH_MAX: f64 = 14.0;

const FIELDS: [FieldSpec; 2] = [
    FieldSpec::new(TEMPERATURE, "Temperature", ValidationRule::number()),
    FieldSpec::new(PH, "pH", ValidationRule::positive_number().at_most(PH_MAX)),
];

pub struct StabilityPanel {
    form: Form,
    call: RemoteCallController<Stability>,
}

impl StabilityPanel {
    pub const TITLE: &'static str = "Stability Checker";

    pub fn new(service: HttpService, policy: ErrorClearPolicy) -> Self {
        Self {
            form: Form::new(FIELDS, policy),
            call: RemoteCallController::new(service),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn call(&self) -> &RemoteCallController<Stability> {
        &self.call
    }

    pub fn handle_input(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        self.form.handle_input(name, value)
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_complete()
    }

    pub fn request(&self) -> StabilityRequest {
        StabilityRequest {
            temperature: self.form.value(TEMPERATURE).to_string(),
            ph: self.form.value(PH).to_string(),
        }
    }

    pub async fn submit(&self) -> Option<StabilityResponse> {
        self.call.perform_call(self.request()).await
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.call.clear_data();
    }
}
