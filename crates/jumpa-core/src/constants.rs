//! Constantes del motor de wizards.
//!
//! `ENGINE_VERSION` forma parte del input de los fingerprints de envío: un
//! cambio de versión invalida fingerprints previos aunque los valores no
//! cambien. Mantener estable mientras no haya cambios incompatibles.

/// Versión lógica del motor.
pub const ENGINE_VERSION: &str = "W1.0";
