//! Employee resignation status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an employee has resigned.
///
/// Resigned employees keep their record for HR history but must be
/// invisible to authentication: the principal loader treats them as
/// not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resignation_status")]
pub enum ResignationStatus {
    /// Still employed.
    N,
    /// Resigned.
    Y,
}

impl ResignationStatus {
    /// Whether this status permits authentication.
    pub fn can_login(&self) -> bool {
        matches!(self, Self::N)
    }
}

impl fmt::Display for ResignationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::N => write!(f, "N"),
            Self::Y => write!(f, "Y"),
        }
    }
}
