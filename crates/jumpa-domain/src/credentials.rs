// credentials.rs
use crate::DomainError;
use std::fmt;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Contraseña con longitud mínima. No implementa `Display` ni `Serialize`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(format!("Password must be at least {MIN_PASSWORD_LEN} characters")));
        }
        Ok(Password(raw.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
