//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for loading employee
//! rosters from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;
use crate::payroll::PayrollSystem;

use super::types::{EmployeeRecord, RosterConfig};

/// The roster bundled with the crate, used by the demo binary.
pub const DEMO_ROSTER: &str = include_str!("../../config/demo_roster.yaml");

/// Loads a roster and turns it into a [`PayrollSystem`].
///
/// # File Format
///
/// ```text
/// employees:
///   - employment_type: full_time
///     name: Hari
///     id: 1
///     monthly_salary: "5000.00"
///   - employment_type: part_time
///     name: Giri
///     id: 2
///     hours_worked: 20
///     hourly_rate: "15.00"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::config::RosterLoader;
///
/// let loader = RosterLoader::load("./config/demo_roster.yaml")?;
/// let payroll = loader.build_payroll()?;
/// println!("{} employees", payroll.len());
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RosterLoader {
    origin: String,
    roster: RosterConfig,
}

impl RosterLoader {
    /// Loads a roster from the given YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `RosterLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not a valid roster (`ConfigParseError`)
    ///
    /// Employee validation does not run here; see [`RosterLoader::build_payroll`].
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, path_str)
    }

    /// Parses a roster from YAML text.
    ///
    /// `origin` names the source in error messages and logs.
    pub fn from_yaml(content: &str, origin: impl Into<String>) -> PayrollResult<Self> {
        let origin = origin.into();
        let roster: RosterConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: origin.clone(),
                message: e.to_string(),
            })?;

        info!(
            path = %origin,
            employees = roster.employees.len(),
            "Loaded roster"
        );
        Ok(Self { origin, roster })
    }

    /// Parses the bundled [`DEMO_ROSTER`].
    pub fn demo() -> PayrollResult<Self> {
        Self::from_yaml(DEMO_ROSTER, "demo_roster.yaml")
    }

    /// Where this roster came from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The raw records, in file order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.roster.employees
    }

    /// Validates every record and adds it to a fresh payroll, in file order.
    ///
    /// Stops at the first record that fails validation or repeats an id.
    pub fn build_payroll(&self) -> PayrollResult<PayrollSystem> {
        let mut payroll = PayrollSystem::new();
        for record in self.records() {
            let employee = Employee::try_from(record.clone())?;
            payroll.add_employee(employee)?;
        }
        Ok(payroll)
    }
}
