//! Concrete repository implementations.

pub mod employee;

pub use employee::EmployeeRepository;
