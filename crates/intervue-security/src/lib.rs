//! intervue-security — Credentials and session tokens.
//!
//! Password strength rules, Argon2id hashing and HS256 bearer tokens.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password, PasswordPolicy, PasswordRule};
pub use token::{Claims, TokenService};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecurityError {
    #[error("Password does not meet requirements: {}", .0.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", "))]
    WeakPassword(Vec<PasswordRule>),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

pub type Result<T> = std::result::Result<T, SecurityError>;
