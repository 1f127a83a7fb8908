//! Form model
//!
//! Owns the raw text and validation message of every field of one panel.
//! Values are recomputed synchronously on each change, before the new value
//! is committed.

use super::validation::ValidationRule;

/// Which validation messages a field change clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorClearPolicy {
    /// Every change wipes all fields' messages before recomputing the changed one
    Global,
    /// Only the changed field's message is recomputed
    #[default]
    Scoped,
}

/// Static description of a form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Name used when routing input and building payloads
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub rule: ValidationRule,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, rule: ValidationRule) -> Self {
        Self { name, label, rule }
    }
}

/// Value and validation message of a single field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Raw text as entered
    pub value: String,
    /// Empty when valid or untouched
    pub error_message: String,
}

impl FieldState {
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown field '{0}'")]
pub struct UnknownField(pub String);

#[derive(Debug, Clone)]
struct Field {
    spec: FieldSpec,
    state: FieldState,
}

/// Ordered set of validated fields
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    policy: ErrorClearPolicy,
}

impl Form {
    pub fn new(specs: impl IntoIterator<Item = FieldSpec>, policy: ErrorClearPolicy) -> Self {
        Self {
            fields: specs
                .into_iter()
                .map(|spec| Field {
                    spec,
                    state: FieldState::default(),
                })
                .collect(),
            policy,
        }
    }

    /// Handle a change event: validate `value`, then commit it
    pub fn handle_input(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let value = value.into();
        let index = self
            .fields
            .iter()
            .position(|field| field.spec.name == name)
            .ok_or_else(|| UnknownField(name.to_string()))?;

        let error_message = self.fields[index].spec.rule.validate(name, &value);

        if self.policy == ErrorClearPolicy::Global {
            for field in &mut self.fields {
                field.state.error_message.clear();
            }
        }

        let state = &mut self.fields[index].state;
        state.error_message = error_message;
        state.value = value;

        tracing::debug!(
            "Field '{}' set to {:?} (error: {:?})",
            name,
            state.value,
            state.error_message
        );
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.spec.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|field| field.spec.name == name)
            .map(|field| &field.state)
    }

    /// Current value, or empty when the field does not exist
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map_or("", |state| state.value.as_str())
    }

    /// Current message, or empty when the field does not exist
    pub fn error_message(&self, name: &str) -> &str {
        self.field(name)
            .map_or("", |state| state.error_message.as_str())
    }

    /// Fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&FieldSpec, &FieldState)> {
        self.fields.iter().map(|field| (&field.spec, &field.state))
    }

    /// True when every field has a value
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|field| !field.state.value.is_empty())
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| field.state.has_error())
    }

    /// Restore every value and message to empty
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.state = FieldState::default();
        }
    }
}
