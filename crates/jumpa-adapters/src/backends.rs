//! Backends simulados de las pantallas.
//!
//! Cada uno es un `SimulatedRemote` con retardo fijo y una regla de
//! decisión. Sustituirlos por un cliente real sólo exige otra
//! implementación de `RemoteOperation`.

use std::time::Duration;

use jumpa_calc::LoanTerms;
use jumpa_core::{RemoteOperation, SimulatedRemote, SubmissionRequest};
use serde_json::{json, Value};

use crate::flows::{account, bank_transfer, email_otp, login, savings, withdraw_pin};

// Confirmación bancaria tras introducir el PIN.
const BANK_SUBMIT_DELAY: Duration = Duration::from_millis(300);

/// Parámetros de los backends simulados.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendSettings {
    pub remote_delay: Duration,
    pub transfer_delay: Duration,
    pub login_pin: String,
    pub email_otp: String,
    pub otp_ttl_secs: u64,
    pub loan_terms: LoanTerms,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self { remote_delay: Duration::from_millis(1000),
               transfer_delay: Duration::from_millis(2000),
               login_pin: "1234".to_string(),
               email_otp: "12345".to_string(),
               otp_ttl_secs: 267,
               loan_terms: LoanTerms::default() }
    }
}

fn ok(delay: Duration, name: &str, result: Value) -> Box<dyn RemoteOperation> {
    Box::new(SimulatedRemote::new(name, delay, move |_req: &SubmissionRequest| Ok(result.clone())))
}

impl BackendSettings {
    /// Verifica el PIN de acceso contra el configurado.
    pub fn login(&self) -> Box<dyn RemoteOperation> {
        let expected = self.login_pin.clone();
        Box::new(SimulatedRemote::new("login", self.remote_delay, move |req: &SubmissionRequest| {
                     if req.text(login::PIN) == expected {
                         Ok(json!({ "destination": login::SUCCESS_DESTINATION }))
                     } else {
                         Err("Incorrect PIN".to_string())
                     }
                 }))
    }

    /// Solicitud de código por correo: siempre acepta.
    pub fn request_email_code(&self) -> Box<dyn RemoteOperation> {
        Box::new(SimulatedRemote::new("request_email_code", self.remote_delay, |req: &SubmissionRequest| {
                     Ok(json!({ "email": req.text(email_otp::EMAIL) }))
                 }))
    }

    pub fn verify_email_code(&self) -> Box<dyn RemoteOperation> {
        let expected = self.email_otp.clone();
        Box::new(SimulatedRemote::new("verify_email_code", self.remote_delay, move |req: &SubmissionRequest| {
                     if req.text(email_otp::CODE) == expected {
                         Ok(json!({ "destination": email_otp::SUCCESS_DESTINATION }))
                     } else {
                         Err("Invalid code. Please try again.".to_string())
                     }
                 }))
    }

    /// Revisión KYC: aprueba siempre tras el retardo de procesamiento.
    pub fn kyc_review(&self) -> Box<dyn RemoteOperation> {
        ok(self.transfer_delay, "kyc_review", json!({ "approved": true }))
    }

    /// Igual que `kyc_review` pero rechazando, para ejercitar la ruta fallida.
    pub fn kyc_review_rejecting(&self) -> Box<dyn RemoteOperation> {
        Box::new(SimulatedRemote::new("kyc_review", self.transfer_delay, |_req: &SubmissionRequest| {
                     Err("Verification failed".to_string())
                 }))
    }

    pub fn crypto_transfer(&self) -> Box<dyn RemoteOperation> {
        ok(self.transfer_delay, "crypto_transfer", json!({ "status": "sent" }))
    }

    /// Envío bancario; devuelve el titular resuelto de la cuenta destino.
    pub fn bank_transfer(&self) -> Box<dyn RemoteOperation> {
        Box::new(SimulatedRemote::new("bank_transfer", BANK_SUBMIT_DELAY, |req: &SubmissionRequest| {
                     let recipient = bank_transfer::lookup_recipient(req.text(bank_transfer::ACCOUNT_NUMBER))
                                     .unwrap_or_default();
                     Ok(json!({
                         "status": "sent",
                         "recipientName": recipient.name,
                         "recipientBank": recipient.bank,
                         "amount": req.text(bank_transfer::AMOUNT),
                     }))
                 }))
    }

    pub fn create_account(&self) -> Box<dyn RemoteOperation> {
        ok(self.remote_delay, "create_account", json!({ "destination": account::SUCCESS_DESTINATION }))
    }

    pub fn save_withdraw_pin(&self) -> Box<dyn RemoteOperation> {
        ok(self.remote_delay, "save_withdraw_pin", json!({ "destination": withdraw_pin::SUCCESS_DESTINATION }))
    }

    pub fn loan_request(&self) -> Box<dyn RemoteOperation> {
        ok(self.remote_delay, "loan_request", json!({ "status": "submitted" }))
    }

    pub fn savings_target(&self) -> Box<dyn RemoteOperation> {
        ok(self.remote_delay, "savings_target", json!({ "destination": savings::SUCCESS_DESTINATION }))
    }
}
