//! Restricciones del core respaldadas por los tipos del dominio.
//!
//! Cada restricción delega en el `parse` del tipo correspondiente; el
//! mensaje del dominio puede sustituirse por el de la pantalla concreta.

use jumpa_calc::parse_number;
use jumpa_core::{Constraint, FieldValue};
use jumpa_domain::{BankAccountNumber, DomainError, EmailAddress, Password, PhoneNumber, Pin};

fn text_of(value: &FieldValue) -> &str {
    value.as_text().unwrap_or("")
}

fn pick(result: Result<(), DomainError>, message: &Option<String>) -> Result<(), String> {
    result.map_err(|e| message.clone().unwrap_or_else(|| e.to_string()))
}

#[derive(Debug, Clone)]
pub struct PinRule {
    pub length: usize,
}

impl Default for PinRule {
    fn default() -> Self {
        Self { length: jumpa_domain::PIN_LENGTH }
    }
}

impl Constraint for PinRule {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        let text = text_of(value);
        if text.chars().count() != self.length || !text.chars().all(|c| c.is_ascii_digit()) {
            let noun = if self.length == jumpa_domain::PIN_LENGTH { "PIN" } else { "Code" };
            return Err(format!("{noun} must be {} digits", self.length));
        }
        Pin::parse_with_length(text, self.length).map(|_| ()).map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhoneRule {
    pub message: Option<String>,
}

impl PhoneRule {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }
}

impl Constraint for PhoneRule {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        pick(PhoneNumber::parse(text_of(value)).map(|_| ()), &self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmailRule {
    pub message: Option<String>,
}

impl EmailRule {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }
}

impl Constraint for EmailRule {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        pick(EmailAddress::parse(text_of(value)).map(|_| ()), &self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PasswordRule;

impl Constraint for PasswordRule {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        Password::parse(text_of(value)).map(|_| ()).map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountNumberRule;

impl Constraint for AccountNumberRule {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        BankAccountNumber::parse(text_of(value)).map(|_| ()).map_err(|e| e.to_string())
    }
}

/// Importe numérico estrictamente positivo (admite separadores `,`).
#[derive(Debug, Clone)]
pub struct PositiveAmount {
    pub message: String,
}

impl Default for PositiveAmount {
    fn default() -> Self {
        Self { message: "Please enter a valid amount".to_string() }
    }
}

impl Constraint for PositiveAmount {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        match parse_number(text_of(value)) {
            Some(n) if n > 0.0 => Ok(()),
            _ => Err(self.message.clone()),
        }
    }
}
