//! Declarative authorization policy.
//!
//! The policy table is the single point of truth for access decisions:
//! the authentication filter only attaches identity, and this module
//! decides allow/deny from `(path, method, security context)`.

pub mod pattern;
pub mod rule;
pub mod rules;
pub mod table;

pub use pattern::PathPattern;
pub use rule::{Access, AuthorizationRule};
pub use rules::default_rules;
pub use table::PolicyTable;

/// Outcome of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The request may proceed to its handler.
    Allow,
    /// The request is rejected.
    Deny(DenyReason),
}

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No security context and the matched rule requires one.
    Unauthenticated,
    /// A security context exists but its role is not in the allowed set.
    Forbidden,
}
