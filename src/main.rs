//! Demo driver: loads the bundled roster, lists it, removes one employee and
//! lists it again.

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use payroll_ledger::config::RosterLoader;
use payroll_ledger::error::PayrollResult;

fn run() -> PayrollResult<()> {
    let mut payroll = RosterLoader::demo()?.build_payroll()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "All Employees:")?;
    payroll.display_employees(&mut out)?;

    payroll.remove_employee(2)?;
    writeln!(out, "\nAfter Removal:")?;
    payroll.display_employees(&mut out)?;

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}
