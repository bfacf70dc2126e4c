//! Inicialización de logs para los binarios.
//!
//! Las librerías escriben con `log`; el suscriptor de `tracing` recoge esos
//! registros y los filtra con `RUST_LOG` (por defecto `info`).
use tracing_subscriber::EnvFilter;

/// Instala el suscriptor global. Llamarlo más de una vez no tiene efecto.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
