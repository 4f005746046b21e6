//! Validation helpers shared by entity types.

use crate::domain::email::is_valid_email;
use crate::domain::schema::ValidationError;

pub(super) fn ensure_email(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, "not a valid email address"))
    }
}

pub(super) fn ensure_non_negative_amount(
    value: f64,
    field: &'static str,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            field,
            format!("must be a finite number >= 0, got {value}"),
        ));
    }
    Ok(())
}

pub(super) fn ensure_non_negative_count(
    value: i64,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(field, format!("must be >= 0, got {value}")));
    }
    Ok(())
}

pub(super) fn ensure_min_quantity(value: i64, field: &'static str) -> Result<(), ValidationError> {
    if value < 1 {
        return Err(ValidationError::new(field, format!("must be >= 1, got {value}")));
    }
    Ok(())
}

pub(super) fn ensure_rating_range(
    value: f64,
    min: f64,
    max: f64,
    field: &'static str,
) -> Result<(), ValidationError> {
    if !value.is_finite() || !(min..=max).contains(&value) {
        return Err(ValidationError::new(
            field,
            format!("must be between {min} and {max}, got {value}"),
        ));
    }
    Ok(())
}

/// Round a monetary amount to two decimal places, half away from zero.
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
