//! Field validators
//!
//! A validator pairs a pure check with the message key shown when the check
//! fails. Chains are evaluated in order and stop at the first failure.

use super::field::FieldValue;
use crate::state::Money;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Failed validation, resolved against the message catalog at render time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub key: &'static str,
    pub params: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Check {
    Required,
    MaxLength(usize),
    GreaterThanZero,
    MoneyAtLeast(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    check: Check,
    error: ValidationError,
}

impl Validator {
    fn new(check: Check, key: &'static str, params: Vec<(&'static str, String)>) -> Self {
        Self {
            check,
            error: ValidationError { key, params },
        }
    }

    /// Returns the error when `value` fails this check
    pub fn validate(&self, value: &FieldValue) -> Option<ValidationError> {
        let valid = match self.check {
            Check::Required => is_present(value),
            Check::MaxLength(max) => match value {
                FieldValue::Text(s) => s.chars().count() <= max,
                _ => true,
            },
            Check::GreaterThanZero => match value {
                FieldValue::Text(s) => parse_number(s).is_some_and(|n| n > Decimal::ZERO),
                FieldValue::Money { money, .. } => money.as_ref().is_some_and(|m| m.amount > 0),
                _ => false,
            },
            Check::MoneyAtLeast(min) => match value {
                FieldValue::Money { money, .. } => {
                    money.as_ref().is_some_and(|m| m.amount >= min)
                }
                _ => false,
            },
        };
        if valid {
            None
        } else {
            Some(self.error.clone())
        }
    }
}

fn is_present(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(s) => !s.trim().is_empty(),
        FieldValue::Money { money, .. } => money.is_some(),
        FieldValue::Choice(choice) => choice.as_deref().is_some_and(|c| !c.is_empty()),
        FieldValue::Choices(choices) => !choices.is_empty(),
    }
}

/// Parse numeric text input, ignoring surrounding whitespace
pub fn parse_number(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Value must be non-empty (trimmed text, a selected choice, a parsed amount)
pub fn required(key: &'static str) -> Validator {
    Validator::new(Check::Required, key, Vec::new())
}

/// Text must have at most `max` characters; `{maxLength}` is available to
/// the message
pub fn max_length(key: &'static str, max: usize) -> Validator {
    Validator::new(
        Check::MaxLength(max),
        key,
        vec![("maxLength", max.to_string())],
    )
}

/// Value must be a number strictly greater than zero
pub fn greater_than_zero(key: &'static str) -> Validator {
    Validator::new(Check::GreaterThanZero, key, Vec::new())
}

/// Money amount must be at least `min` subunits; `{minPrice}` is available
/// to the message
pub fn money_subunit_amount_at_least(key: &'static str, min: &Money) -> Validator {
    Validator::new(
        Check::MoneyAtLeast(min.amount),
        key,
        vec![("minPrice", min.to_string())],
    )
}

/// Run the chain left to right and return the first failure
pub fn compose(validators: &[Validator], value: &FieldValue) -> Option<ValidationError> {
    validators.iter().find_map(|v| v.validate(value))
}
