//! The InFlow route authorization table.
//!
//! This is the system's access-control configuration, kept as data so it
//! can be audited in one place. Order matters: the first matching rule
//! wins. `PolicyTable::new` drops exact duplicates at construction.

use http::Method;

use inflow_entity::EmployeeRole;

use super::rule::{Access, AuthorizationRule};

/// Rule for one method, open to every authenticated role.
fn all_roles(pattern: &str, method: Method) -> AuthorizationRule {
    AuthorizationRule::new(pattern, method, Access::Roles(EmployeeRole::ALL.to_vec()))
}

/// Rule for one method, open without authentication.
fn public(pattern: &str, method: Method) -> AuthorizationRule {
    AuthorizationRule::new(pattern, method, Access::PermitAll)
}

/// The ordered rule list for the InFlow API.
pub fn default_rules() -> Vec<AuthorizationRule> {
    vec![
        // Public: health probe, login, and the public auth sub-tree.
        public("/actuator/health", Method::GET),
        public("/api/login", Method::POST),
        public("/api/auth/**", Method::POST),
        // Employee domain.
        all_roles("/api/employees/**", Method::GET),
        all_roles("/api/employees/**", Method::POST),
        all_roles("/api/employees/**", Method::DELETE),
        all_roles("/api/employees/**", Method::PUT),
        all_roles("/api/employees/**", Method::PATCH),
        // Personnel appointments.
        all_roles("/api/appointments/**", Method::GET),
        all_roles("/api/appointments/**", Method::POST),
        all_roles("/api/appointments/**", Method::DELETE),
        all_roles("/api/appointments/**", Method::PUT),
        all_roles("/api/appointments/**", Method::PATCH),
        // Company, spreadsheet forms, field validation.
        all_roles("/api/companies/**", Method::GET),
        all_roles("/api/forms/**", Method::GET),
        all_roles("/api/validations/**", Method::GET),
        // Department domain.
        all_roles("/api/departments/hierarchy/**", Method::GET),
        all_roles("/api/departments/search/members/**", Method::GET),
        all_roles(
            "/api/departments/search/members/detail/employee-code/**",
            Method::GET,
        ),
        all_roles(
            "/api/departments/search/members/detail/department-code/**",
            Method::GET,
        ),
        all_roles("/api/departments/search/departments/**", Method::GET),
        all_roles("/api/departments/dropdown/**", Method::GET),
        all_roles("/api/departments/my-department/*/members/**", Method::GET),
        all_roles("/api/departments/**", Method::DELETE),
        all_roles("/api/departments/add-department/**", Method::POST),
        all_roles("/api/departments/**", Method::PATCH),
        // Attendance requests.
        all_roles("/api/attendance-requests/**", Method::GET),
        all_roles("/api/attendance-requests/**", Method::POST),
        all_roles("/api/attendance-requests/**", Method::DELETE),
        all_roles("/api/attendance-requests/**", Method::PUT),
        all_roles("/api/attendance-requests/**", Method::PATCH),
        // Vacations.
        all_roles("/api/vacations/**", Method::GET),
        all_roles("/api/vacations/**", Method::POST),
        all_roles("/api/vacations/**", Method::DELETE),
        all_roles("/api/vacations/**", Method::PUT),
        all_roles("/api/vacations/**", Method::PATCH),
        // Evaluation domain: task types.
        all_roles("/api/evaluations/taskType/allTaskType", Method::GET),
        all_roles("/api/evaluations/taskType/create", Method::POST),
        all_roles("/api/evaluations/taskType/**", Method::PATCH),
        all_roles("/api/evaluations/taskType/**", Method::DELETE),
        // Evaluation domain: task items.
        all_roles("/api/evaluations/taskItem/departmentTasks", Method::GET),
        all_roles("/api/evaluations/taskItem/departmentTask", Method::GET),
        all_roles("/api/evaluations/taskItem/individualTasks", Method::GET),
        all_roles("/api/evaluations/taskItem/individualTask/**", Method::GET),
        all_roles("/api/evaluations/taskItem/AllTaskItems/**", Method::GET),
        all_roles("/api/evaluations/taskItem/commonTasks", Method::GET),
        all_roles("/api/evaluations/taskItem/commonTask/**", Method::GET),
        all_roles("/api/evaluations/taskItem/TaskItems/**", Method::GET),
        // Evaluation domain: per-task evaluations.
        all_roles("/api/evaluations/taskEval/**", Method::GET),
        all_roles("/api/evaluations/taskEval/byEvaluationId/**", Method::GET),
        all_roles("/api/evaluations/taskEval/**", Method::POST),
        all_roles("/api/evaluations/taskEval/**", Method::PATCH),
        // Evaluation domain: grades and feedback.
        all_roles("/api/evaluations/grade/**", Method::GET),
        all_roles("/api/evaluations/feedback/**", Method::GET),
        all_roles("/api/evaluations/feedback/**", Method::POST),
        all_roles("/api/evaluations/feedback/**", Method::PATCH),
        // Evaluation domain: policies.
        all_roles("/api/evaluations/evaluationPolicy/policySearch", Method::GET),
        all_roles("/api/evaluations/evaluationPolicy/**", Method::GET),
        all_roles("/api/evaluations/evaluationPolicy/**", Method::PATCH),
        all_roles("/api/evaluations/evaluationPolicy/**", Method::DELETE),
        all_roles(
            "/api/evaluations/evaluationPolicy/policyCreation",
            Method::POST,
        ),
        // Evaluation domain: evaluations and per-policy evaluations.
        all_roles("/api/evaluations/evaluation/**", Method::GET),
        all_roles("/api/evaluations/taskTypeEval/**", Method::GET),
        // Payroll domain.
        all_roles("/api/payrolls/details", Method::GET),
        all_roles("/api/payrolls/all", Method::GET),
        all_roles("/api/payrolls/**", Method::POST),
        all_roles("/api/payrolls/**", Method::DELETE),
        all_roles("/api/payrolls/**", Method::PUT),
        all_roles("/api/payrolls/**", Method::PATCH),
        all_roles("/api/payrolls/period", Method::GET),
        AuthorizationRule::any_method(
            "/api/payrolls/list",
            Access::Roles(EmployeeRole::ALL.to_vec()),
        ),
        all_roles("/api/non-taxable-payrolls/**", Method::GET),
        all_roles("/api/non-taxable-payrolls/**", Method::POST),
        all_roles("/api/non-taxable-payrolls/**", Method::PUT),
        all_roles("/api/irregular-allowances/**", Method::GET),
        all_roles("/api/irregular-allowances/**", Method::POST),
        all_roles("/api/irregular-allowances/**", Method::PUT),
        all_roles("/api/severance-pay/estimate/**", Method::GET),
        all_roles("/api/severance-pay/calculate/**", Method::GET),
        // Statistics domain.
        all_roles("/api/statistics/**", Method::GET),
        all_roles("/api/statistics/**", Method::POST),
        all_roles("/api/statistics/**", Method::DELETE),
        all_roles("/api/statistics/**", Method::PUT),
        all_roles("/api/statistics/**", Method::PATCH),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SecurityContext;
    use crate::policy::{AccessDecision, DenyReason, PolicyTable};

    fn ctx(role: EmployeeRole) -> SecurityContext {
        SecurityContext::new("E001", role)
    }

    #[test]
    fn test_whitelist_is_public() {
        let table = PolicyTable::default_table();
        assert!(table.is_public("/actuator/health", &Method::GET));
        assert!(table.is_public("/api/login", &Method::POST));
        assert!(table.is_public("/api/auth/password-reset", &Method::POST));
    }

    #[test]
    fn test_auth_subtree_is_public_for_post_only() {
        let table = PolicyTable::default_table();
        assert!(!table.is_public("/api/auth/me", &Method::GET));
        assert_eq!(
            table.evaluate("/api/auth/me", &Method::GET, None),
            AccessDecision::Deny(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn test_every_role_reaches_employee_routes() {
        let table = PolicyTable::default_table();
        for role in EmployeeRole::ALL {
            assert_eq!(
                table.evaluate("/api/employees/2024001", &Method::GET, Some(&ctx(role))),
                AccessDecision::Allow,
                "role {role} should reach /api/employees"
            );
        }
    }

    #[test]
    fn test_statistics_delete_requires_authentication() {
        let table = PolicyTable::default_table();
        assert_eq!(
            table.evaluate("/api/statistics/turnover", &Method::DELETE, None),
            AccessDecision::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(
            table.evaluate(
                "/api/statistics/turnover",
                &Method::DELETE,
                Some(&ctx(EmployeeRole::Employee))
            ),
            AccessDecision::Allow
        );
    }

    #[test]
    fn test_payroll_list_matches_any_method() {
        let table = PolicyTable::default_table();
        assert_eq!(
            table.evaluate("/api/payrolls/list", &Method::GET, Some(&ctx(EmployeeRole::Hr))),
            AccessDecision::Allow
        );
    }

    #[test]
    fn test_default_rules_carry_no_duplicates() {
        // Construction deduplicates; the shipped table must not rely on it.
        let rules = default_rules();
        let distinct = rules.len();
        let table = PolicyTable::new(rules);
        assert_eq!(table.len(), distinct);
    }
}
