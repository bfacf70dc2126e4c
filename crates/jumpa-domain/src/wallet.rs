// wallet.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cadena de la que se retira. Sin indicación explícita se asume Solana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptoChain {
    #[default]
    Solana,
    Evm,
}

impl CryptoChain {
    pub fn display_name(self) -> &'static str {
        match self {
            CryptoChain::Solana => "Solana",
            CryptoChain::Evm => "EVM",
        }
    }

    pub fn ticker(self) -> &'static str {
        match self {
            CryptoChain::Solana => "SOL",
            CryptoChain::Evm => "ETH",
        }
    }

    pub fn network(self) -> &'static str {
        match self {
            CryptoChain::Solana => "Solana",
            CryptoChain::Evm => "Ethereum",
        }
    }

    /// Cadena a partir del estado de navegación; ausente o desconocida -> Solana.
    pub fn from_state(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for CryptoChain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solana" | "sol" => Ok(CryptoChain::Solana),
            "evm" | "eth" | "ethereum" => Ok(CryptoChain::Evm),
            other => Err(DomainError::validation(format!("Unsupported chain: {other}"))),
        }
    }
}

impl fmt::Display for CryptoChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Dirección de billetera destino. Sólo se exige que no esté vacía.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Wallet address is required"));
        }
        Ok(WalletAddress(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Forma corta para pantallas de confirmación: `7xKXtg...sgAsU`.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}
