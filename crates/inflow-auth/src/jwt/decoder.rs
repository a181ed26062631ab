//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use inflow_core::config::auth::AuthConfig;

use super::claims::Claims;

/// Why a token string was rejected.
///
/// These kinds never reach a client as distinct response bodies: the
/// login path and the authentication filter both collapse them into a
/// generic unauthenticated outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token structure could not be parsed.
    #[error("token is malformed")]
    Malformed,
    /// The token is past its expiry timestamp.
    #[error("token has expired")]
    Expired,
    /// The signature does not verify against the signing key.
    #[error("token signature is invalid")]
    InvalidSignature,
}

/// Validates JWT tokens against the server signing key.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks the signature against the signing key and the expiry against
    /// the current time. There is no blocklist: a token stays valid until
    /// expiry, and privilege revocation is enforced by the per-request
    /// principal re-derivation instead.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::Malformed,
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use inflow_entity::EmployeeRole;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-signing-secret".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
        }
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let (token, expires_at) = encoder.issue("E001", EmployeeRole::Employee).unwrap();
        let claims = decoder.verify(&token).unwrap();

        assert_eq!(claims.sub, "E001");
        assert_eq!(claims.role, EmployeeRole::Employee);
        assert_eq!(claims.exp, expires_at.timestamp());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "E001".to_string(),
            role: EmployeeRole::Employee,
            iat: now - 7200,
            exp: now - 3600, // well past the 5s leeway
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(decoder.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_signature() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let (token, _) = encoder.issue("E001", EmployeeRole::Hr).unwrap();
        let sig_start = token.rfind('.').unwrap() + 1;
        let flipped = if token.as_bytes()[sig_start] == b'A' {
            'B'
        } else {
            'A'
        };
        let mut tampered = token.clone();
        tampered.replace_range(sig_start..sig_start + 1, &flipped.to_string());

        assert_eq!(
            decoder.verify(&tampered),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_wrong_key_rejected() {
        let encoder = JwtEncoder::new(&test_config());
        let decoder = JwtDecoder::new(&AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..test_config()
        });

        let (token, _) = encoder.issue("E001", EmployeeRole::Admin).unwrap();
        assert_eq!(decoder.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_malformed_token() {
        let decoder = JwtDecoder::new(&test_config());
        assert_eq!(decoder.verify("not-a-jwt"), Err(TokenError::Malformed));
        assert_eq!(decoder.verify(""), Err(TokenError::Malformed));
    }
}
