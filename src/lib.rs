//! Jumpa Flow Rust Library
//!
//! Este crate actúa como la librería central de la app:
//! - Expone `errors` para manejar errores de núcleo y dominio.
//! - Expone `config` con la configuración cargada del entorno.
//! - Expone `logging` para inicializar los logs de los binarios.
//! - Reexporta los crates del workspace para quien use sólo este.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;
pub mod logging;

pub use jumpa_adapters as adapters;
pub use jumpa_calc as calc;
pub use jumpa_core as wizard;
pub use jumpa_domain as domain;
