//! JWT claims structure embedded in every issued token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use inflow_entity::EmployeeRole;

/// JWT claims payload.
///
/// Tokens are stateless: nothing is persisted server-side, and a token
/// stays valid until `exp` regardless of later account changes. The
/// authentication filter compensates by re-deriving the role from the
/// credential store on each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the employee number.
    pub sub: String,
    /// Employee role at the time of token issuance.
    pub role: EmployeeRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
