//! # inflow-auth
//!
//! Authentication and authorization core for the InFlow HR backend.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing
//! - `principal` — credential store seam, principal loading, and the login flow
//! - `policy` — the declarative authorization policy table
//! - `context` — the per-request security context

pub mod context;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod principal;

pub use context::SecurityContext;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
pub use policy::{AccessDecision, DenyReason, PolicyTable};
pub use principal::{
    Authenticator, CredentialStore, MemoryCredentialStore, Principal, PrincipalLoader,
    StoredSecret,
};
