//! Textos derivados del formulario de ahorro programado.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::amount::format_amount;
use crate::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl SavingsFrequency {
    pub const ALL: [SavingsFrequency; 3] = [SavingsFrequency::Weekly, SavingsFrequency::Daily, SavingsFrequency::Monthly];

    pub fn as_str(self) -> &'static str {
        match self {
            SavingsFrequency::Daily => "Daily",
            SavingsFrequency::Weekly => "Weekly",
            SavingsFrequency::Monthly => "Monthly",
        }
    }
}

impl FromStr for SavingsFrequency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(SavingsFrequency::Daily),
            "weekly" => Ok(SavingsFrequency::Weekly),
            "monthly" => Ok(SavingsFrequency::Monthly),
            _ => Err(CalcError::InvalidInput("Frequency is required".to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsMode {
    Automatic,
    Manual,
}

impl SavingsMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SavingsMode::Automatic => "automatic",
            SavingsMode::Manual => "manual",
        }
    }
}

impl FromStr for SavingsMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "automatic" => Ok(SavingsMode::Automatic),
            "manual" => Ok(SavingsMode::Manual),
            _ => Err(CalcError::InvalidInput("Please select a savings mode".to_string())),
        }
    }
}

pub const PREFERRED_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

/// Nota del modo automático:
/// `You will be debited $1,000 weekly every Friday of the week`.
/// Importe vacío -> `0.00`, frecuencia vacía -> `daily`, día vacío -> `Monday`.
pub fn debit_note(save_amount: &str, frequency: &str, day: &str) -> String {
    let amount = if save_amount.trim().is_empty() {
        "0.00".to_string()
    } else {
        format_amount(save_amount.trim())
    };
    format!("You will be debited ${} {} every {} of the week",
            amount,
            or_default(frequency, "daily").to_lowercase(),
            or_default(day, "Monday"))
}

/// Nota del modo manual.
pub fn reminder_note(day: &str) -> String {
    format!("A reminder will be sent to you to contribute to your savings plan every {} of the week",
            or_default(day, "Monday"))
}
