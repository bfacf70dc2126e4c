//! jumpa-calc – valores derivados de pantalla.
//!
//! Funciones puras `entradas -> salidas`, recalculadas en cada cambio de
//! entrada y nunca persistidas: cotización de préstamo, alternancia de
//! moneda, formato de importes, fechas de vencimiento y la nota de débito
//! del ahorro programado.

pub mod amount;
pub mod currency;
pub mod loan;
pub mod savings;
pub mod schedule;

pub use amount::{format_amount, format_money, parse_amount, parse_number, sanitize_amount_input};
pub use currency::{eligible_limit, CurrencyUnit};
pub use loan::{LoanDuration, LoanQuote, LoanTerms};
pub use savings::{debit_note, reminder_note, SavingsFrequency, SavingsMode};
pub use schedule::{days_between, due_date, format_long_date, today};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("{0}")]
    InvalidInput(String),
}
