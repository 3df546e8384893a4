//! Insertion-ordered employee store with id-guarded add and remove.

use std::io::Write;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, Payable};

/// Message reported when adding an employee whose id is already present.
pub const DUPLICATE_ID: &str = "Duplicate ID";
/// Message reported when removing an id that is not present.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// The in-memory payroll.
///
/// Employees are kept in the order they were added. No two stored employees
/// share an id. Ids are only checked against current members, so an id can
/// be reused once its employee has been removed.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::Employee;
/// use payroll_ledger::payroll::PayrollSystem;
/// use rust_decimal::Decimal;
///
/// let mut payroll = PayrollSystem::new();
/// payroll.add_employee(Employee::full_time("Hari", 1, Decimal::from(5000))?)?;
/// payroll.add_employee(Employee::part_time("Giri", 2, 20, Decimal::from(15))?)?;
///
/// payroll.remove_employee(2)?;
/// assert_eq!(
///     payroll.descriptions(),
///     vec!["FullTimeEmployee[id=1, Salary: 5000.00]".to_string()]
/// );
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollSystem {
    employees: Vec<Employee>,
}

impl PayrollSystem {
    /// Creates an empty payroll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidEmployee`] with `"Duplicate ID"` when an
    /// employee with the same id is already stored. The payroll is unchanged
    /// in that case.
    pub fn add_employee(&mut self, employee: Employee) -> PayrollResult<()> {
        let id = employee.id();
        if self.employees.iter().any(|e| e.id() == id) {
            warn!(employee_id = id, "Rejected duplicate employee id");
            return Err(PayrollError::invalid_employee(DUPLICATE_ID));
        }

        info!(
            employee_id = id,
            employment_type = employee.employment_type().variant_name(),
            "Added employee"
        );
        self.employees.push(employee);
        Ok(())
    }

    /// Removes the employee with the given id and hands it back.
    ///
    /// The remaining employees keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidEmployee`] with `"Employee not found"`
    /// when no stored employee has that id.
    pub fn remove_employee(&mut self, id: i64) -> PayrollResult<Employee> {
        let Some(index) = self.employees.iter().position(|e| e.id() == id) else {
            warn!(employee_id = id, "Attempted to remove unknown employee");
            return Err(PayrollError::invalid_employee(EMPLOYEE_NOT_FOUND));
        };

        let removed = self.employees.remove(index);
        info!(employee_id = id, "Removed employee");
        Ok(removed)
    }

    /// Writes one description line per employee, in insertion order.
    pub fn display_employees<W: Write>(&self, out: &mut W) -> PayrollResult<()> {
        for employee in &self.employees {
            writeln!(out, "{}", employee)?;
        }
        Ok(())
    }

    /// The description of every employee, in insertion order.
    pub fn descriptions(&self) -> Vec<String> {
        self.employees.iter().map(Employee::describe).collect()
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// All employees, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Iterates over the employees in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Number of stored employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true when no employees are stored.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Sum of every employee's salary.
    ///
    /// Returns `None` if the total does not fit in a [`Decimal`].
    pub fn total_payroll(&self) -> Option<Decimal> {
        self.employees
            .iter()
            .try_fold(Decimal::ZERO, |total, e| total.checked_add(e.calculate_salary()))
    }
}

impl<'a> IntoIterator for &'a PayrollSystem {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
