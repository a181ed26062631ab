//! Axum middleware stack.

pub mod authn;
pub mod authz;
pub mod cors;
pub mod logging;
