//! The salary capability shared by all employee variants.

use rust_decimal::{Decimal, RoundingStrategy};

/// Something that can be paid.
///
/// Implementors provide [`Payable::calculate_salary`]; the formatted payment
/// line comes for free through [`Payable::payment_details`].
pub trait Payable {
    /// Computes the salary from the implementor's stored fields.
    ///
    /// Must be pure: repeated calls return the same value.
    fn calculate_salary(&self) -> Decimal;

    /// Returns the salary formatted as `"Salary: <amount>"` with two decimals.
    fn payment_details(&self) -> String {
        format_payment_details(self.calculate_salary())
    }
}

/// Formats a salary as `"Salary: <amount>"`, rounded half away from zero to
/// two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_ledger::models::format_payment_details;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_payment_details(Decimal::from(300)), "Salary: 300.00");
/// assert_eq!(format_payment_details(Decimal::new(12345, 3)), "Salary: 12.35");
/// ```
pub fn format_payment_details(salary: Decimal) -> String {
    let rounded = salary.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("Salary: {:.2}", rounded)
}
