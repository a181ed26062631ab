//! The ordered authorization policy table.

use http::Method;

use crate::context::SecurityContext;

use super::rule::{Access, AuthorizationRule};
use super::rules::default_rules;
use super::{AccessDecision, DenyReason};

/// Immutable, ordered authorization table.
///
/// Built once at startup and shared read-only across all request flows.
/// Evaluation is first-match-wins; identical entries are deduplicated at
/// construction, keeping the earliest occurrence. Requests matching no
/// rule require authentication with any role — absence from the table is
/// not public access.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    rules: Vec<AuthorizationRule>,
}

impl PolicyTable {
    /// Builds a table from an ordered rule list, dropping exact duplicates.
    pub fn new(rules: Vec<AuthorizationRule>) -> Self {
        let mut deduplicated: Vec<AuthorizationRule> = Vec::with_capacity(rules.len());
        for rule in rules {
            if !deduplicated.contains(&rule) {
                deduplicated.push(rule);
            }
        }
        Self {
            rules: deduplicated,
        }
    }

    /// Builds the table for the InFlow route map.
    pub fn default_table() -> Self {
        Self::new(default_rules())
    }

    /// Evaluates a request against the table.
    ///
    /// Pure function over immutable data: the first matching rule decides,
    /// and the fallback for unmatched requests is "authenticated, any role".
    pub fn evaluate(
        &self,
        path: &str,
        method: &Method,
        context: Option<&SecurityContext>,
    ) -> AccessDecision {
        for rule in &self.rules {
            if !rule.applies_to(path, method) {
                continue;
            }
            return match &rule.access {
                Access::PermitAll => AccessDecision::Allow,
                Access::Roles(allowed) => match context {
                    None => AccessDecision::Deny(DenyReason::Unauthenticated),
                    Some(ctx) if allowed.contains(&ctx.role) => AccessDecision::Allow,
                    Some(_) => AccessDecision::Deny(DenyReason::Forbidden),
                },
            };
        }

        match context {
            Some(_) => AccessDecision::Allow,
            None => AccessDecision::Deny(DenyReason::Unauthenticated),
        }
    }

    /// Whether the first rule matching this request permits anonymous
    /// access. The authentication filter uses this as its whitelist.
    pub fn is_public(&self, path: &str, method: &Method) -> bool {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(path, method))
            .is_some_and(|rule| rule.access == Access::PermitAll)
    }

    /// The number of rules after deduplication.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
