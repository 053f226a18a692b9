//! Declarative payload validation shared by every resource.
//!
//! Each inbound payload implements [`Validate`] by running a handful of field
//! rules and collecting failures into a field -> message map, which surfaces
//! as a single `VALIDATION_ERROR` response naming the offending fields.

use std::collections::HashMap;

use crate::error::ApiError;

/// Payloads that can be checked against their declared shape before
/// acceptance.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// Accumulates per-field failures across all rules of a payload.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(
                "Request payload failed validation",
                Some(self.errors),
            ))
        }
    }
}

pub fn require_non_empty(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "must not be empty");
    }
}

pub fn require_range(errors: &mut FieldErrors, field: &str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        errors.push(field, format!("must be between {} and {}", min, max));
    }
}

pub fn require_email(errors: &mut FieldErrors, field: &str, value: &str) {
    let well_formed = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());

    if !well_formed {
        errors.push(field, "must be a valid email address");
    }
}

/// Field name for an element of a list field, e.g. `skills[2].level`.
pub fn indexed(field: &str, index: usize, sub: &str) -> String {
    format!("{}[{}].{}", field, index, sub)
}
