//! Authorization rule data model.

use http::Method;

use inflow_entity::EmployeeRole;

use super::pattern::PathPattern;

/// Who may pass a matched rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// No authentication required.
    PermitAll,
    /// The security context's role must be in this set.
    Roles(Vec<EmployeeRole>),
}

/// One entry in the ordered authorization table.
///
/// `method: None` matches any HTTP method. Rules are static data built
/// once at startup; evaluation order is declaration order with the first
/// match winning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRule {
    /// Path pattern to match against the request path.
    pub pattern: PathPattern,
    /// Required HTTP method, or `None` for any.
    pub method: Option<Method>,
    /// Allowed access.
    pub access: Access,
}

impl AuthorizationRule {
    /// Creates a rule for one specific HTTP method.
    pub fn new(pattern: &str, method: Method, access: Access) -> Self {
        Self {
            pattern: PathPattern::new(pattern),
            method: Some(method),
            access,
        }
    }

    /// Creates a rule matching every HTTP method.
    pub fn any_method(pattern: &str, access: Access) -> Self {
        Self {
            pattern: PathPattern::new(pattern),
            method: None,
            access,
        }
    }

    /// Whether this rule applies to the given request path and method.
    pub fn applies_to(&self, path: &str, method: &Method) -> bool {
        let method_matches = match &self.method {
            Some(required) => required == method,
            None => true,
        };
        method_matches && self.pattern.matches(path)
    }
}
