//! # Field Validation
//!
//! Validation rules for numeric form fields. A rule maps a field's raw text to
//! an error message; the empty string means "valid".

/// Message for input that does not parse as a number
pub const NOT_A_NUMBER: &str = "Input shall be a number";

/// Message for input that is zero or negative on a field requiring positives
pub const NOT_POSITIVE: &str = "Input shall be a positive number";

/// Composable numeric validation rule
///
/// Checks run in a fixed priority order and stop at the first failure:
/// empty, non-numeric, non-positive, above the upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRule {
    positive: bool,
    upper_bound: Option<f64>,
}

impl ValidationRule {
    /// Any number, including zero and negatives
    pub const fn number() -> Self {
        Self {
            positive: false,
            upper_bound: None,
        }
    }

    /// Numbers strictly greater than zero
    pub const fn positive_number() -> Self {
        Self {
            positive: true,
            upper_bound: None,
        }
    }

    /// Additionally reject values above `bound`
    pub const fn at_most(self, bound: f64) -> Self {
        Self {
            upper_bound: Some(bound),
            ..self
        }
    }

    /// Validate `value` for the field `name`, returning the error message
    pub fn validate(&self, name: &str, value: &str) -> String {
        let message = self.check(value).unwrap_or_default();
        tracing::trace!("Validated field '{}' = {:?}: {:?}", name, value, message);
        message
    }

    fn check(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }

        let Some(number) = parse_number(value) else {
            return Some(NOT_A_NUMBER.to_string());
        };

        if self.positive && number <= 0.0 {
            return Some(NOT_POSITIVE.to_string());
        }

        match self.upper_bound {
            Some(bound) if number > bound => Some(format!("Input shall be <= {bound}")),
            _ => None,
        }
    }
}

/// Parse field text as a number.
///
/// Surrounding whitespace is ignored. Only finite values count: `NaN`,
/// `inf`/`infinity` and whitespace-only input are not numbers. Exponent
/// notation is.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
