//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! Un valor mal formado no detiene la app: se registra un aviso y se usa el
//! valor por defecto.
use std::env;
use std::str::FromStr;
use std::time::Duration;

use jumpa_adapters::BackendSettings;
use jumpa_calc::LoanTerms;
use log::warn;
use once_cell::sync::Lazy;

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Latencias de los backends simulados.
    pub remote: RemoteConfig,
    /// Credenciales de prueba aceptadas por los backends simulados.
    pub auth: AuthConfig,
    /// Tarifas del préstamo.
    pub loan: LoanTerms,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub delay_ms: u64,
    pub transfer_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub login_pin: String,
    pub email_otp: String,
    pub otp_ttl_secs: u64,
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
    where T: FromStr,
          F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                                           warn!("{key}='{raw}' is not valid, using default");
                                           default
                                       }),
    }
}

impl AppConfig {
    /// Construye la configuración a partir de una función de búsqueda
    /// (el entorno en producción, un mapa en tests).
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = LoanTerms::default();
        AppConfig { remote: RemoteConfig { delay_ms: parse_or(&lookup, "JUMPA_REMOTE_DELAY_MS", 1000),
                                           transfer_delay_ms: parse_or(&lookup, "JUMPA_TRANSFER_DELAY_MS", 2000) },
                    auth: AuthConfig { login_pin: parse_or(&lookup, "JUMPA_LOGIN_PIN", "1234".to_string()),
                                       email_otp: parse_or(&lookup, "JUMPA_EMAIL_OTP", "12345".to_string()),
                                       otp_ttl_secs: parse_or(&lookup, "JUMPA_OTP_TTL_SECS", 267) },
                    loan: LoanTerms { interest_rate: parse_or(&lookup, "JUMPA_LOAN_INTEREST_RATE", defaults.interest_rate),
                                      fee_rate: parse_or(&lookup, "JUMPA_LOAN_FEE_RATE", defaults.fee_rate),
                                      base_fee: parse_or(&lookup, "JUMPA_LOAN_BASE_FEE", defaults.base_fee) } }
    }

    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parámetros para los backends simulados de `jumpa-adapters`.
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings { remote_delay: Duration::from_millis(self.remote.delay_ms),
                          transfer_delay: Duration::from_millis(self.remote.transfer_delay_ms),
                          login_pin: self.auth.login_pin.clone(),
                          email_otp: self.auth.email_otp.clone(),
                          otp_ttl_secs: self.auth.otp_ttl_secs,
                          loan_terms: self.loan }
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);
