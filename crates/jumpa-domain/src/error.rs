use thiserror::Error;

/// Error del dominio: el mensaje de `ValidationError` se muestra tal cual
/// junto al campo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Error de serialización: {0}")]
    SerializationError(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::ValidationError(message.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::SerializationError(e.to_string())
    }
}
