use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amount::format_money;

/// Unidad mostrada junto a los importes.
///
/// Alternar la unidad cambia sólo el símbolo: la magnitud no se convierte.
/// El límite elegible sí tiene una cifra distinta por unidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurrencyUnit {
    #[default]
    Dollar,
    Cedi,
}

impl CurrencyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            CurrencyUnit::Dollar => "$",
            CurrencyUnit::Cedi => "₵",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            CurrencyUnit::Dollar => CurrencyUnit::Cedi,
            CurrencyUnit::Cedi => CurrencyUnit::Dollar,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "$" => Some(CurrencyUnit::Dollar),
            "₵" => Some(CurrencyUnit::Cedi),
            _ => None,
        }
    }

    /// `"$ 1,072.00"`.
    pub fn display(self, amount: f64) -> String {
        format!("{} {}", self.symbol(), format_money(amount))
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Límite de préstamo elegible mostrado en el panel.
pub fn eligible_limit(unit: CurrencyUnit) -> String {
    match unit {
        CurrencyUnit::Dollar => unit.display(1_500.0),
        CurrencyUnit::Cedi => unit.display(16_000.0),
    }
}
