//! Roster configuration types.
//!
//! These are the raw records deserialized from YAML. They carry no
//! guarantees; converting them into [`Employee`] runs the usual validation.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::PayrollError;
use crate::models::Employee;

/// One employee entry in a roster file, tagged by `employment_type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "employment_type", rename_all = "snake_case")]
pub enum EmployeeRecord {
    /// A salaried employee.
    FullTime {
        /// Employee name.
        name: String,
        /// Employee id.
        id: i64,
        /// Fixed monthly salary.
        monthly_salary: Decimal,
    },
    /// An hourly employee.
    PartTime {
        /// Employee name.
        name: String,
        /// Employee id.
        id: i64,
        /// Hours worked in the pay period.
        hours_worked: i64,
        /// Pay per hour.
        hourly_rate: Decimal,
    },
}

impl EmployeeRecord {
    /// The id as written in the roster.
    pub fn id(&self) -> i64 {
        match self {
            EmployeeRecord::FullTime { id, .. } | EmployeeRecord::PartTime { id, .. } => *id,
        }
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = PayrollError;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        match record {
            EmployeeRecord::FullTime {
                name,
                id,
                monthly_salary,
            } => Employee::full_time(name, id, monthly_salary),
            EmployeeRecord::PartTime {
                name,
                id,
                hours_worked,
                hourly_rate,
            } => Employee::part_time(name, id, hours_worked, hourly_rate),
        }
    }
}

/// Top-level structure of a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// Employees in the order they should be added.
    pub employees: Vec<EmployeeRecord>,
}
