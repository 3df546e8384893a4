//! Construction-time validation rules shared by every employee variant.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Message reported for an empty or whitespace-only name.
pub const INVALID_NAME: &str = "Invalid name";
/// Message reported for a non-positive id.
pub const INVALID_ID: &str = "Invalid ID";
/// Message reported for a negative monthly salary.
pub const INVALID_SALARY: &str = "Invalid salary";
/// Message reported for negative hours or a negative hourly rate.
pub const INVALID_HOURS_OR_RATE: &str = "Invalid hours/rate";

/// Checks that a name contains at least one non-whitespace character.
///
/// # Examples
///
/// ```
/// use payroll_ledger::models::validate_name;
///
/// assert!(validate_name("Hari").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> PayrollResult<()> {
    if name.trim().is_empty() {
        return Err(PayrollError::invalid_employee(INVALID_NAME));
    }
    Ok(())
}

/// Checks that an id is strictly positive.
pub fn validate_id(id: i64) -> PayrollResult<()> {
    if id <= 0 {
        return Err(PayrollError::invalid_employee(INVALID_ID));
    }
    Ok(())
}

/// Checks that a monetary amount is not negative.
///
/// `message` is the error reported on failure, so each variant can keep its
/// own wording.
pub fn ensure_non_negative(amount: Decimal, message: &str) -> PayrollResult<()> {
    if amount < Decimal::ZERO {
        return Err(PayrollError::invalid_employee(message));
    }
    Ok(())
}
