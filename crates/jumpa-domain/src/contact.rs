// contact.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_PHONE_DIGITS: usize = 11;

/// Teléfono: `+` opcional seguido de al menos 11 dígitos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation("Please enter a valid phone number"));
        }
        if digits.len() < MIN_PHONE_DIGITS {
            return Err(DomainError::validation(format!("Phone number must be at least {MIN_PHONE_DIGITS} digits")));
        }
        Ok(PhoneNumber(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dirección de correo bien formada: `local@dominio.tld`, sin espacios.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if Self::is_well_formed(trimmed) {
            Ok(EmailAddress(trimmed.to_string()))
        } else {
            Err(DomainError::validation("Please enter a valid email address"))
        }
    }

    fn is_well_formed(s: &str) -> bool {
        if s.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = s.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        let labels: Vec<&str> = domain.split('.').collect();
        labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Enmascara la parte local dejando la primera letra:
    /// `john@gmail.com` -> `J***@gmail.com`.
    pub fn masked(&self) -> String {
        let (local, domain) = self.0.split_once('@').unwrap_or((self.0.as_str(), ""));
        let mut chars = local.chars();
        let first = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or('*');
        format!("{}{}@{}", first, "*".repeat(chars.count()), domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_needs_eleven_digits() {
        assert!(PhoneNumber::parse("08012345678").is_ok());
        assert!(PhoneNumber::parse("+233501234567").is_ok());
        assert_eq!(PhoneNumber::parse("0801234567").unwrap_err().to_string(),
                   "Phone number must be at least 11 digits");
        assert!(PhoneNumber::parse("0801-234-5678").is_err());
        assert!(PhoneNumber::parse("").is_err());
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "john.doe@gmail.com", "x+y@mail.example.org"] {
            assert!(EmailAddress::parse(ok).is_ok(), "{ok}");
        }
        for bad in ["", "plain", "@gmail.com", "a@", "a@b", "a@@b.com", "a b@c.com", "a@b..com"] {
            assert!(EmailAddress::parse(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn email_masking() {
        let e = EmailAddress::parse("johndoe12@gmail.com").unwrap();
        assert_eq!(e.masked(), "J********@gmail.com");
    }
}
