//! Employee model and related types.
//!
//! This module defines the two employee variants, the [`Employee`] sum type
//! that the payroll stores, and the [`EmploymentType`] tag used for display.

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::payable::Payable;
use super::validation::{
    INVALID_HOURS_OR_RATE, INVALID_SALARY, ensure_non_negative, validate_id, validate_name,
};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentType {
    /// Paid a fixed monthly salary.
    FullTime,
    /// Paid by the hour.
    PartTime,
}

impl EmploymentType {
    /// Returns the name used in employee descriptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::EmploymentType;
    ///
    /// assert_eq!(EmploymentType::FullTime.variant_name(), "FullTimeEmployee");
    /// assert_eq!(EmploymentType::PartTime.variant_name(), "PartTimeEmployee");
    /// ```
    pub fn variant_name(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FullTimeEmployee",
            EmploymentType::PartTime => "PartTimeEmployee",
        }
    }
}

/// The validated name and id every employee carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeIdentity {
    name: String,
    id: i64,
}

impl EmployeeIdentity {
    /// Validates and builds an identity.
    ///
    /// The name is checked before the id, so a record with both problems
    /// reports `"Invalid name"`.
    pub fn new(name: impl Into<String>, id: i64) -> PayrollResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_id(id)?;
        Ok(Self { name, id })
    }

    /// The employee's name, as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's id.
    pub fn id(&self) -> i64 {
        self.id
    }
}

/// An employee paid a fixed monthly salary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTimeEmployee {
    identity: EmployeeIdentity,
    monthly_salary: Decimal,
}

impl FullTimeEmployee {
    /// Creates a full-time employee.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidEmployee`] when the name is blank, the
    /// id is not positive, or the salary is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::{FullTimeEmployee, Payable};
    /// use rust_decimal::Decimal;
    ///
    /// let hari = FullTimeEmployee::new("Hari", 1, Decimal::from(5000)).unwrap();
    /// assert_eq!(hari.calculate_salary(), Decimal::from(5000));
    /// ```
    pub fn new(name: impl Into<String>, id: i64, monthly_salary: Decimal) -> PayrollResult<Self> {
        EmployeeIdentity::new(name, id)
            .and_then(|identity| {
                ensure_non_negative(monthly_salary, INVALID_SALARY)?;
                Ok(Self {
                    identity,
                    monthly_salary,
                })
            })
            .inspect_err(|e| debug!(employee_id = id, error = %e, "Rejected full-time employee"))
    }

    /// The shared name and id.
    pub fn identity(&self) -> &EmployeeIdentity {
        &self.identity
    }

    /// The fixed monthly salary.
    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }
}

impl Payable for FullTimeEmployee {
    fn calculate_salary(&self) -> Decimal {
        self.monthly_salary
    }
}

/// An employee paid for the hours they worked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartTimeEmployee {
    identity: EmployeeIdentity,
    hours_worked: i64,
    hourly_rate: Decimal,
}

impl PartTimeEmployee {
    /// Creates a part-time employee.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidEmployee`] when the name is blank, the
    /// id is not positive, or either the hours or the rate is negative. A
    /// combination whose product does not fit in a [`Decimal`] is rejected
    /// with the same hours/rate message.
    pub fn new(
        name: impl Into<String>,
        id: i64,
        hours_worked: i64,
        hourly_rate: Decimal,
    ) -> PayrollResult<Self> {
        EmployeeIdentity::new(name, id)
            .and_then(|identity| {
                if hours_worked < 0 {
                    return Err(PayrollError::invalid_employee(INVALID_HOURS_OR_RATE));
                }
                ensure_non_negative(hourly_rate, INVALID_HOURS_OR_RATE)?;
                if Decimal::from(hours_worked).checked_mul(hourly_rate).is_none() {
                    return Err(PayrollError::invalid_employee(INVALID_HOURS_OR_RATE));
                }
                Ok(Self {
                    identity,
                    hours_worked,
                    hourly_rate,
                })
            })
            .inspect_err(|e| {
                debug!(
                    employee_id = id,
                    hours_worked,
                    hourly_rate = %hourly_rate,
                    error = %e,
                    "Rejected part-time employee"
                )
            })
    }

    /// The shared name and id.
    pub fn identity(&self) -> &EmployeeIdentity {
        &self.identity
    }

    /// Hours worked in the pay period.
    pub fn hours_worked(&self) -> i64 {
        self.hours_worked
    }

    /// Pay per hour.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }
}

impl Payable for PartTimeEmployee {
    fn calculate_salary(&self) -> Decimal {
        Decimal::from(self.hours_worked) * self.hourly_rate
    }
}

/// Any employee the payroll can hold.
///
/// # Examples
///
/// ```
/// use payroll_ledger::models::Employee;
/// use rust_decimal::Decimal;
///
/// let giri = Employee::part_time("Giri", 2, 20, Decimal::from(15)).unwrap();
/// assert_eq!(giri.describe(), "PartTimeEmployee[id=2, Salary: 300.00]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Employee {
    /// A salaried employee.
    FullTime(FullTimeEmployee),
    /// An hourly employee.
    PartTime(PartTimeEmployee),
}

impl Employee {
    /// Shorthand for [`FullTimeEmployee::new`] wrapped as an `Employee`.
    pub fn full_time(
        name: impl Into<String>,
        id: i64,
        monthly_salary: Decimal,
    ) -> PayrollResult<Self> {
        FullTimeEmployee::new(name, id, monthly_salary).map(Self::FullTime)
    }

    /// Shorthand for [`PartTimeEmployee::new`] wrapped as an `Employee`.
    pub fn part_time(
        name: impl Into<String>,
        id: i64,
        hours_worked: i64,
        hourly_rate: Decimal,
    ) -> PayrollResult<Self> {
        PartTimeEmployee::new(name, id, hours_worked, hourly_rate).map(Self::PartTime)
    }

    fn identity(&self) -> &EmployeeIdentity {
        match self {
            Employee::FullTime(e) => e.identity(),
            Employee::PartTime(e) => e.identity(),
        }
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        self.identity().name()
    }

    /// The employee's id.
    pub fn id(&self) -> i64 {
        self.identity().id()
    }

    /// Which variant this employee is.
    pub fn employment_type(&self) -> EmploymentType {
        match self {
            Employee::FullTime(_) => EmploymentType::FullTime,
            Employee::PartTime(_) => EmploymentType::PartTime,
        }
    }

    /// Renders `"<VariantName>[id=<id>, Salary: <amount>]"`.
    pub fn describe(&self) -> String {
        format!(
            "{}[id={}, {}]",
            self.employment_type().variant_name(),
            self.id(),
            self.payment_details()
        )
    }
}

impl Payable for Employee {
    fn calculate_salary(&self) -> Decimal {
        match self {
            Employee::FullTime(e) => e.calculate_salary(),
            Employee::PartTime(e) => e.calculate_salary(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<FullTimeEmployee> for Employee {
    fn from(employee: FullTimeEmployee) -> Self {
        Employee::FullTime(employee)
    }
}

impl From<PartTimeEmployee> for Employee {
    fn from(employee: PartTimeEmployee) -> Self {
        Employee::PartTime(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{INVALID_ID, INVALID_NAME};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn message(err: PayrollError) -> String {
        match err {
            PayrollError::InvalidEmployee { message } => message,
            other => panic!("expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_fulltime_salary_is_monthly_salary() {
        let employee = FullTimeEmployee::new("Hari", 1, dec("5000.0")).unwrap();
        assert_eq!(employee.calculate_salary(), dec("5000"));
        assert_eq!(employee.monthly_salary(), dec("5000.0"));
        assert_eq!(employee.identity().name(), "Hari");
        assert_eq!(employee.identity().id(), 1);
    }

    #[test]
    fn test_parttime_salary_is_hours_times_rate() {
        let employee = PartTimeEmployee::new("Giri", 2, 20, dec("15.0")).unwrap();
        assert_eq!(employee.calculate_salary(), dec("300"));
        assert_eq!(employee.hours_worked(), 20);
        assert_eq!(employee.hourly_rate(), dec("15.0"));
    }

    #[test]
    fn test_zero_values_are_valid() {
        let ft = FullTimeEmployee::new("Zero", 3, Decimal::ZERO).unwrap();
        assert_eq!(ft.calculate_salary(), Decimal::ZERO);

        let pt = PartTimeEmployee::new("Zero", 4, 0, dec("22.50")).unwrap();
        assert_eq!(pt.calculate_salary(), Decimal::ZERO);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = FullTimeEmployee::new("  ", 1, dec("100")).unwrap_err();
        assert_eq!(message(err), INVALID_NAME);

        let err = PartTimeEmployee::new("", 1, 1, dec("1")).unwrap_err();
        assert_eq!(message(err), INVALID_NAME);
    }

    #[test]
    fn test_name_is_checked_before_id() {
        let err = FullTimeEmployee::new("", 0, dec("-1")).unwrap_err();
        assert_eq!(message(err), INVALID_NAME);
    }

    #[test]
    fn test_non_positive_id_is_rejected() {
        let err = FullTimeEmployee::new("Hari", 0, dec("100")).unwrap_err();
        assert_eq!(message(err), INVALID_ID);

        let err = PartTimeEmployee::new("Giri", -2, 1, dec("1")).unwrap_err();
        assert_eq!(message(err), INVALID_ID);
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let err = FullTimeEmployee::new("Hari", 1, dec("-0.01")).unwrap_err();
        assert_eq!(message(err), INVALID_SALARY);
    }

    #[test]
    fn test_negative_hours_or_rate_is_rejected() {
        let err = PartTimeEmployee::new("Giri", 2, -1, dec("15")).unwrap_err();
        assert_eq!(message(err), INVALID_HOURS_OR_RATE);

        let err = PartTimeEmployee::new("Giri", 2, 20, dec("-15")).unwrap_err();
        assert_eq!(message(err), INVALID_HOURS_OR_RATE);
    }

    #[test]
    fn test_negative_rate_is_rejected_with_zero_hours() {
        let err = PartTimeEmployee::new("Giri", 2, 0, dec("-0.01")).unwrap_err();
        assert_eq!(message(err), INVALID_HOURS_OR_RATE);
    }

    #[test]
    fn test_identity_is_checked_before_amounts() {
        let err = FullTimeEmployee::new("Hari", 0, dec("-1")).unwrap_err();
        assert_eq!(message(err), INVALID_ID);

        let err = PartTimeEmployee::new("Giri", -1, -1, dec("-1")).unwrap_err();
        assert_eq!(message(err), INVALID_ID);
    }

    #[test]
    fn test_overflowing_salary_product_is_rejected() {
        let err = PartTimeEmployee::new("Giri", 2, i64::MAX, Decimal::MAX).unwrap_err();
        assert_eq!(message(err), INVALID_HOURS_OR_RATE);
    }

    #[test]
    fn test_name_is_kept_as_given() {
        let employee = Employee::full_time(" Hari ", 1, dec("1")).unwrap();
        assert_eq!(employee.name(), " Hari ");
    }

    #[test]
    fn test_describe_fulltime() {
        let employee = Employee::full_time("Hari", 1, dec("5000.0")).unwrap();
        assert_eq!(employee.describe(), "FullTimeEmployee[id=1, Salary: 5000.00]");
        assert_eq!(employee.to_string(), employee.describe());
    }

    #[test]
    fn test_describe_parttime() {
        let employee = Employee::part_time("Giri", 2, 20, dec("15.0")).unwrap();
        assert_eq!(employee.describe(), "PartTimeEmployee[id=2, Salary: 300.00]");
    }

    #[test]
    fn test_describe_rounds_fractional_salary() {
        let employee = Employee::part_time("Giri", 2, 3, dec("3.335")).unwrap();
        // 3 * 3.335 = 10.005
        assert_eq!(employee.payment_details(), "Salary: 10.01");
    }

    #[test]
    fn test_employment_type_and_accessors() {
        let ft: Employee = FullTimeEmployee::new("Hari", 1, dec("1")).unwrap().into();
        let pt: Employee = PartTimeEmployee::new("Giri", 2, 1, dec("1")).unwrap().into();
        assert_eq!(ft.employment_type(), EmploymentType::FullTime);
        assert_eq!(pt.employment_type(), EmploymentType::PartTime);
        assert_eq!(ft.name(), "Hari");
        assert_eq!(pt.id(), 2);
    }

    proptest! {
        #[test]
        fn prop_fulltime_salary_is_exact(
            id in 1i64..=i64::MAX,
            cents in 0i64..1_000_000_000_000,
        ) {
            let salary = Decimal::new(cents, 2);
            let employee = Employee::full_time("Hari", id, salary).unwrap();
            prop_assert_eq!(employee.calculate_salary(), salary);
            prop_assert_eq!(employee.calculate_salary(), employee.calculate_salary());
        }

        #[test]
        fn prop_parttime_salary_is_hours_times_rate(
            hours in 0i64..100_000,
            rate_cents in 0i64..10_000_000,
        ) {
            let rate = Decimal::new(rate_cents, 2);
            let employee = Employee::part_time("Giri", 2, hours, rate).unwrap();
            prop_assert_eq!(employee.calculate_salary(), Decimal::from(hours) * rate);
        }

        #[test]
        fn prop_non_positive_id_always_fails(id in i64::MIN..=0) {
            prop_assert!(Employee::full_time("Hari", id, Decimal::ONE).is_err());
            prop_assert!(Employee::part_time("Giri", id, 1, Decimal::ONE).is_err());
        }

        #[test]
        fn prop_negative_amounts_always_fail(cents in 1i64..1_000_000_000) {
            let negative = -Decimal::new(cents, 2);
            prop_assert!(Employee::full_time("Hari", 1, negative).is_err());
            prop_assert!(Employee::part_time("Giri", 2, 1, negative).is_err());
        }

        #[test]
        fn prop_whitespace_names_always_fail(name in "[ \t\n]{0,8}") {
            prop_assert!(Employee::full_time(name, 1, Decimal::ONE).is_err());
        }
    }
}
