use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::{Result, SecurityError};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordRule::MinLength => write!(f, "at least {MIN_PASSWORD_LENGTH} characters"),
            PasswordRule::Uppercase => f.write_str("an uppercase letter"),
            PasswordRule::Lowercase => f.write_str("a lowercase letter"),
            PasswordRule::Digit     => f.write_str("a number"),
            PasswordRule::Special   => f.write_str("a special character"),
        }
    }
}

pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Rules `password` breaks, in declaration order. Empty when it passes.
    pub fn check(password: &str) -> Vec<PasswordRule> {
        let checks = [
            (PasswordRule::MinLength, password.chars().count() >= MIN_PASSWORD_LENGTH),
            (PasswordRule::Uppercase, password.chars().any(|c| c.is_ascii_uppercase())),
            (PasswordRule::Lowercase, password.chars().any(|c| c.is_ascii_lowercase())),
            (PasswordRule::Digit,     password.chars().any(|c| c.is_ascii_digit())),
            (PasswordRule::Special,   password.chars().any(|c| !c.is_ascii_alphanumeric())),
        ];
        checks.into_iter().filter(|(_, ok)| !ok).map(|(rule, _)| rule).collect()
    }

    /// `WeakPassword` listing every broken rule.
    pub fn enforce(password: &str) -> Result<()> {
        let failed = Self::check(password);
        if failed.is_empty() {
            Ok(())
        } else {
            Err(SecurityError::WeakPassword(failed))
        }
    }
}

/// Argon2id PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| SecurityError::Hash(e.to_string()))
}

/// `false` for a wrong password and for a hash that does not parse.
pub fn verify_password(password: &str, phc: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
}
