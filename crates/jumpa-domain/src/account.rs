// account.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACCOUNT_NUMBER_LEN: usize = 10;

/// Número de cuenta bancaria destino: exactamente 10 dígitos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankAccountNumber(String);

impl BankAccountNumber {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation("Account number must be digits only"));
        }
        if trimmed.len() != ACCOUNT_NUMBER_LEN {
            return Err(DomainError::validation(format!("Must be {ACCOUNT_NUMBER_LEN} digits")));
        }
        Ok(BankAccountNumber(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BankAccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
