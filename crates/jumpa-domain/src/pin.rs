// pin.rs
use crate::DomainError;
use sha2::{Digest, Sha256};
use std::fmt;

/// Longitud de PIN usada en toda la app (login, transferencias, retiro).
pub const PIN_LENGTH: usize = 4;

/// PIN numérico de longitud exacta.
///
/// `Debug` nunca muestra los dígitos; para registrar o transportar un PIN se
/// usa `digest()`.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Self::parse_with_length(raw, PIN_LENGTH)
    }

    pub fn parse_with_length(raw: &str, length: usize) -> Result<Self, DomainError> {
        if raw.chars().count() != length || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!("PIN must be {length} digits")));
        }
        Ok(Pin(raw.to_string()))
    }

    /// SHA-256 en hexadecimal de los dígitos.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Acceso explícito a los dígitos (verificación contra el backend).
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pin({})", "*".repeat(self.0.len()))
    }
}

/// Teclado de PIN: acumula dígitos hasta `length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinPad {
    length: usize,
    masked: bool,
    digits: String,
}

impl Default for PinPad {
    fn default() -> Self {
        Self::new(PIN_LENGTH)
    }
}

impl PinPad {
    pub fn new(length: usize) -> Self {
        Self { length: length.max(1),
               masked: true,
               digits: String::new() }
    }

    pub fn unmasked(mut self) -> Self {
        self.masked = false;
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn entered(&self) -> usize {
        self.digits.len()
    }

    pub fn value(&self) -> &str {
        &self.digits
    }

    pub fn is_complete(&self) -> bool {
        self.digits.len() == self.length
    }

    /// Pulsa una tecla. Ignora lo que no sea dígito y las pulsaciones con el
    /// teclado lleno. Devuelve `true` si esta pulsación completó el PIN.
    pub fn press(&mut self, key: char) -> bool {
        if !key.is_ascii_digit() || self.is_complete() {
            return false;
        }
        self.digits.push(key);
        self.is_complete()
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Reemplaza el contenido con texto libre (pegado o campo de texto):
    /// sólo se conservan dígitos, truncados a `length`.
    pub fn set_text(&mut self, raw: &str) {
        self.digits = raw.chars().filter(|c| c.is_ascii_digit()).take(self.length).collect();
    }

    /// Retira el PIN si está completo y deja el teclado vacío.
    pub fn take_pin(&mut self) -> Option<Pin> {
        if !self.is_complete() {
            return None;
        }
        let pin = Pin::parse_with_length(&self.digits, self.length).ok();
        self.digits.clear();
        pin
    }

    /// Una posición por dígito: `•` (o el dígito si no está enmascarado) y
    /// `○` para las vacías.
    pub fn display(&self) -> String {
        let filled = self.digits.chars().map(|c| if self.masked { '•' } else { c });
        filled.chain(std::iter::repeat('○').take(self.length - self.digits.len())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_requires_exact_digits() {
        assert!(Pin::parse("1234").is_ok());
        assert!(Pin::parse("123").is_err());
        assert!(Pin::parse("12345").is_err());
        assert_eq!(Pin::parse("12a4").unwrap_err().to_string(), "PIN must be 4 digits");
    }

    #[test]
    fn pin_debug_and_digest_hide_digits() {
        let pin = Pin::parse("1234").unwrap();
        assert_eq!(format!("{:?}", pin), "Pin(****)");
        let digest = pin.digest();
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, Pin::parse("1234").unwrap().digest());
        assert_ne!(digest, Pin::parse("4321").unwrap().digest());
    }

    #[test]
    fn pad_ignores_extra_and_non_digits() {
        let mut pad = PinPad::default();
        assert!(!pad.press('x'));
        assert!(!pad.press('1'));
        pad.press('2');
        pad.press('3');
        assert!(pad.press('4'));
        assert!(!pad.press('5'));
        assert_eq!(pad.value(), "1234");
        assert_eq!(pad.display(), "••••");
        pad.backspace();
        assert_eq!(pad.display(), "•••○");
        pad.clear();
        assert_eq!(pad.entered(), 0);
    }

    #[test]
    fn pad_set_text_keeps_only_digits() {
        let mut pad = PinPad::new(4).unmasked();
        pad.set_text("1a2 3-45");
        assert_eq!(pad.value(), "1234");
        assert_eq!(pad.display(), "1234");
        assert!(pad.take_pin().is_some());
        assert_eq!(pad.value(), "");
    }
}
