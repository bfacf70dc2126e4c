//! Payloads de entrega entre pantallas.
//!
//! Cada struct declara su destino y los valores con los que se muestra la
//! pantalla cuando se llega sin payload. `#[serde(default)]` completa los
//! campos ausentes de un payload parcial con esos mismos valores.

use jumpa_calc::{format_money, CurrencyUnit, LoanQuote};
use jumpa_core::HandoffPayload;
use jumpa_domain::{CryptoChain, EmailAddress};
use serde::{Deserialize, Serialize};

/// Resumen de la solicitud de préstamo enviada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoanSummary {
    pub principal: f64,
    pub interest: f64,
    pub processing_fee: f64,
    pub total_payback: f64,
    pub currency_symbol: String,
    pub due_date: String,
}

impl Default for LoanSummary {
    fn default() -> Self {
        Self { principal: 0.0,
               interest: 0.0,
               processing_fee: 0.0,
               total_payback: 0.0,
               currency_symbol: "$".to_string(),
               due_date: "N/A".to_string() }
    }
}

impl HandoffPayload for LoanSummary {
    const DESTINATION: &'static str = "/driver/loan/submitted";

    fn fallback() -> Self {
        Self::default()
    }
}

impl LoanSummary {
    pub fn from_quote(quote: &LoanQuote, unit: CurrencyUnit, due_date: String) -> Self {
        Self { principal: quote.principal,
               interest: quote.interest,
               processing_fee: quote.processing_fee,
               total_payback: quote.total_payback,
               currency_symbol: unit.symbol().to_string(),
               due_date }
    }

    fn money(&self, amount: f64) -> String {
        format!("{} {}", self.currency_symbol, format_money(amount))
    }

    pub fn principal_display(&self) -> String {
        self.money(self.principal)
    }

    pub fn total_display(&self) -> String {
        self.money(self.total_payback)
    }

    /// Filas de la pantalla de confirmación.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![("Amount", self.money(self.principal)),
             ("Interest", self.money(self.interest)),
             ("Processing fee", self.money(self.processing_fee)),
             ("Total payback", self.money(self.total_payback)),
             ("Due date", self.due_date.clone())]
    }
}

/// Ficha de un objetivo de ahorro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavingsSummary {
    pub title: String,
    pub saved: String,
    pub total: String,
    pub days_left: String,
    pub duration: String,
    pub withdrawal_date: String,
    pub interest: String,
    pub lock_status: String,
}

impl Default for SavingsSummary {
    fn default() -> Self {
        Self { title: "Unknown".to_string(),
               saved: "0".to_string(),
               total: "0".to_string(),
               days_left: "0".to_string(),
               duration: "--".to_string(),
               withdrawal_date: "--".to_string(),
               interest: "0%".to_string(),
               lock_status: "--".to_string() }
    }
}

impl HandoffPayload for SavingsSummary {
    const DESTINATION: &'static str = "/driver/savings/summary";

    fn fallback() -> Self {
        Self::default()
    }
}

/// Correo al que se envió el código de verificación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailOtpContext {
    pub email: String,
}

impl EmailOtpContext {
    pub const FALLBACK_EMAIL: &'static str = "J********@gmail.com";

    /// Correo tal como se muestra: enmascarado si es válido, el de
    /// respaldo si falta.
    pub fn display_email(&self) -> String {
        if self.email.trim().is_empty() {
            return Self::FALLBACK_EMAIL.to_string();
        }
        EmailAddress::parse(&self.email).map(|e| e.masked())
                                        .unwrap_or_else(|_| self.email.clone())
    }
}

impl Default for EmailOtpContext {
    fn default() -> Self {
        Self { email: Self::FALLBACK_EMAIL.to_string() }
    }
}

impl HandoffPayload for EmailOtpContext {
    const DESTINATION: &'static str = "/verify-email";

    fn fallback() -> Self {
        Self::default()
    }
}

/// Cadena elegida en la pantalla de selección de cripto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoWithdrawContext {
    pub chain: CryptoChain,
}

impl HandoffPayload for CryptoWithdrawContext {
    const DESTINATION: &'static str = "/driver/withdraw/crypto-withdraw";

    fn fallback() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpa_core::HandoffStore;

    #[test]
    fn loan_summary_without_payload() {
        let store = HandoffStore::new();
        let summary: LoanSummary = store.take_payload();
        assert_eq!(summary.principal, 0.0);
        assert_eq!(summary.currency_symbol, "$");
        assert_eq!(summary.due_date, "N/A");
        assert_eq!(summary.principal_display(), "$ 0.00");
    }

    #[test]
    fn loan_summary_partial_payload() {
        let store = HandoffStore::new();
        store.put_value(LoanSummary::DESTINATION, serde_json::json!({ "principal": 500, "currencySymbol": "₵" }));
        let summary: LoanSummary = store.take_payload();
        assert_eq!(summary.principal_display(), "₵ 500.00");
        assert_eq!(summary.due_date, "N/A");
    }

    #[test]
    fn savings_summary_fallback() {
        let s: SavingsSummary = HandoffStore::new().take_payload();
        assert_eq!((s.title.as_str(), s.saved.as_str(), s.total.as_str()), ("Unknown", "0", "0"));
        assert_eq!((s.duration.as_str(), s.withdrawal_date.as_str(), s.lock_status.as_str()), ("--", "--", "--"));
        assert_eq!(s.interest, "0%");
        assert_eq!(s.days_left, "0");
    }

    #[test]
    fn email_context_display() {
        assert_eq!(EmailOtpContext::default().display_email(), "J********@gmail.com");
        let ctx = EmailOtpContext { email: "ama@mail.com".into() };
        assert_eq!(ctx.display_email(), "A**@mail.com");
        assert_eq!(EmailOtpContext { email: String::new() }.display_email(), "J********@gmail.com");
    }

    #[test]
    fn crypto_context_defaults_to_solana() {
        let store = HandoffStore::new();
        store.put_value(CryptoWithdrawContext::DESTINATION, serde_json::json!({}));
        let ctx: CryptoWithdrawContext = store.take_payload();
        assert_eq!(ctx.chain, CryptoChain::Solana);
    }
}
