//! Cotización de préstamo.
//!
//! `interest = principal × interest_rate`,
//! `processing_fee = ceil(principal × fee_rate) + base_fee` si
//! `principal > 0` (si no, 0) y `total = principal + interest + fee`.

use chrono::NaiveDate;
use jumpa_core::hashing::{hash_str, to_canonical_json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

use crate::amount::parse_number;
use crate::currency::CurrencyUnit;
use crate::schedule::{due_date, format_long_date};
use crate::CalcError;

// Tolerancia relativa para tratar como entero un producto que sólo difiere
// por redondeo binario (2000 × 0.0015 = 3.0000000000000004).
const SNAP_TOLERANCE: f64 = 1e-12;

/// `ceil` que ignora el ruido de coma flotante pero no fracciones reales,
/// por pequeñas que sean (1.00000000005 -> 2, 1.5e-10 -> 1).
fn ceil_exact(x: f64) -> f64 {
    let nearest = x.round();
    if (x - nearest).abs() <= nearest.abs() * SNAP_TOLERANCE {
        nearest
    } else {
        x.ceil()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub interest_rate: f64,
    pub fee_rate: f64,
    pub base_fee: f64,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self { interest_rate: 0.05,
               fee_rate: 0.0015,
               base_fee: 20.0 }
    }
}

impl LoanTerms {
    pub fn quote(&self, principal: f64) -> LoanQuote {
        let principal = if principal.is_finite() { principal } else { 0.0 };
        let interest = principal * self.interest_rate;
        let processing_fee = if principal > 0.0 {
            ceil_exact(principal * self.fee_rate) + self.base_fee
        } else {
            0.0
        };
        LoanQuote { principal,
                    interest,
                    processing_fee,
                    total_payback: principal + interest + processing_fee }
    }

    /// Cotiza lo que hay en el campo de importe; vacío o no numérico
    /// cuenta como 0.
    pub fn quote_input(&self, raw: &str) -> LoanQuote {
        self.quote(parse_number(raw).unwrap_or(0.0))
    }

    /// Hash estable de los parámetros, para auditar con qué tarifas se
    /// cotizó.
    pub fn terms_hash(&self) -> String {
        hash_str(&to_canonical_json(&json!({
                     "interest_rate": self.interest_rate,
                     "fee_rate": self.fee_rate,
                     "base_fee": self.base_fee,
                 })))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub principal: f64,
    pub interest: f64,
    pub processing_fee: f64,
    pub total_payback: f64,
}

impl LoanQuote {
    /// Líneas del resumen en el orden en que se muestran.
    pub fn lines(&self, unit: CurrencyUnit) -> Vec<(&'static str, String)> {
        vec![("Amount", unit.display(self.principal)),
             ("Interest", unit.display(self.interest)),
             ("Processing fee", unit.display(self.processing_fee)),
             ("Total payback", unit.display(self.total_payback))]
    }
}

/// Plazo del préstamo en días.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LoanDuration {
    Week,
    #[default]
    BiWeek,
    Month,
}

impl LoanDuration {
    pub const ALL: [LoanDuration; 3] = [LoanDuration::Week, LoanDuration::BiWeek, LoanDuration::Month];

    pub fn days(self) -> u32 {
        match self {
            LoanDuration::Week => 7,
            LoanDuration::BiWeek => 14,
            LoanDuration::Month => 30,
        }
    }

    pub fn label(self) -> String {
        format!("{} Days", self.days())
    }

    pub fn cadence(self) -> &'static str {
        match self {
            LoanDuration::Week => "Weekly",
            LoanDuration::BiWeek => "Bi-Weekly",
            LoanDuration::Month => "Monthly",
        }
    }

    /// Opción destacada en el selector.
    pub fn is_popular(self) -> bool {
        self == LoanDuration::BiWeek
    }

    /// Fecha de vencimiento contando desde `today`, ya formateada.
    pub fn due_date_from(self, today: NaiveDate) -> String {
        format_long_date(due_date(today, self.days()))
    }
}

impl FromStr for LoanDuration {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7" => Ok(LoanDuration::Week),
            "14" => Ok(LoanDuration::BiWeek),
            "30" => Ok(LoanDuration::Month),
            _ => Err(CalcError::InvalidInput("Please select a duration".to_string())),
        }
    }
}

impl TryFrom<String> for LoanDuration {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LoanDuration> for String {
    fn from(d: LoanDuration) -> Self {
        d.days().to_string()
    }
}

impl fmt::Display for LoanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}
