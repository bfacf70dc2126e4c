//! Wizards concretos de la app.
//!
//! Cada módulo expone los nombres de campo, la `WizardDefinition` y, cuando
//! la pantalla lo necesita, un envoltorio que combina el motor con teclados
//! o valores derivados.

pub mod account;
pub mod bank_transfer;
pub mod crypto_withdraw;
pub mod email_otp;
pub mod kyc;
pub mod loan;
pub mod login;
pub mod savings;
pub mod withdraw_pin;
