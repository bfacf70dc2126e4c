use thiserror::Error;

/// Errores del dominio de la aplicación
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entidad no encontrada: {0}")]
    NotFound(String),
    #[error("Validación fallida: {0}")]
    Validation(String),
    #[error("Error genérico de dominio: {0}")]
    Generic(String),
}

impl From<jumpa_domain::DomainError> for DomainError {
    fn from(e: jumpa_domain::DomainError) -> Self {
        match e {
            jumpa_domain::DomainError::ValidationError(m) => DomainError::Validation(m),
            other => DomainError::Generic(other.to_string()),
        }
    }
}

impl From<jumpa_calc::CalcError> for DomainError {
    fn from(e: jumpa_calc::CalcError) -> Self {
        match e {
            jumpa_calc::CalcError::InvalidInput(m) => DomainError::Validation(m),
        }
    }
}
