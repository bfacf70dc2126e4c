//! jumpa-adapters: capa de adaptación Dominio ↔ Core
//!
//! Este crate provee:
//! - Restricciones del core respaldadas por los tipos de `jumpa-domain`.
//! - Los wizards concretos de la app (`flows`), con sus nombres de campo,
//!   mensajes y destinos.
//! - Payloads de entrega entre pantallas con sus valores de respaldo.
//! - Backends simulados configurables.
//!
//! Nota: el core no conoce ningún campo concreto; todo lo específico de una
//! pantalla vive aquí.

pub mod backends;
pub mod constraints;
pub mod flows;
pub mod payloads;

pub use backends::BackendSettings;
pub use payloads::{CryptoWithdrawContext, EmailOtpContext, LoanSummary, SavingsSummary};
