//! # inflow-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the InFlow auth core.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
