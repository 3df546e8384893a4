//! Payroll Ledger
//!
//! This crate keeps an in-memory payroll of full-time and part-time
//! employees, validates them at construction and computes each one's salary.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
