//! The payroll container.
//!
//! [`PayrollSystem`] owns the active employees in insertion order and guards
//! its two mutations (add, remove) with id checks.

mod system;

pub use system::{DUPLICATE_ID, EMPLOYEE_NOT_FOUND, PayrollSystem};
