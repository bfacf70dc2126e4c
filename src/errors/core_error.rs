use jumpa_core::WizardError;
use thiserror::Error;

use super::domain_error::DomainError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error del wizard: {0}")]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
