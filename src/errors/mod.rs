//! Errores de nivel aplicación.

pub mod core_error;
pub mod domain_error;

pub use core_error::CoreError;
pub use domain_error::DomainError;
