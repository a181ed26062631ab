//! # inflow-entity
//!
//! Domain entity models shared across the InFlow crates.
//!
//! Only the credential projection of the employee aggregate lives here;
//! the full HR domain entities (contracts, attendance, payroll, ...)
//! belong to their respective domain crates.

pub mod employee;

pub use employee::{Employee, EmployeeRole, ResignationStatus};
