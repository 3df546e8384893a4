//! Roster configuration for the payroll ledger.
//!
//! This module loads employee rosters from YAML and builds a
//! [`PayrollSystem`](crate::payroll::PayrollSystem) from them. Every record
//! goes through the same validation as hand-built employees.
//!
//! # Example
//!
//! ```
//! use payroll_ledger::config::RosterLoader;
//!
//! let payroll = RosterLoader::demo()?.build_payroll()?;
//! assert_eq!(payroll.len(), 2);
//! # Ok::<(), payroll_ledger::error::PayrollError>(())
//! ```

mod loader;
mod types;

pub use loader::{DEMO_ROSTER, RosterLoader};
pub use types::{EmployeeRecord, RosterConfig};
