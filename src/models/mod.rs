//! Core data models for the payroll ledger.
//!
//! This module contains the employee variants, the [`Payable`] capability
//! and the validation rules every employee passes at construction.

mod employee;
mod payable;
mod validation;

pub use employee::{Employee, EmployeeIdentity, EmploymentType, FullTimeEmployee, PartTimeEmployee};
pub use payable::{Payable, format_payment_details};
pub use validation::{
    INVALID_HOURS_OR_RATE, INVALID_ID, INVALID_NAME, INVALID_SALARY, ensure_non_negative,
    validate_id, validate_name,
};
