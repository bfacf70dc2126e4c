//! Motor de wizards: envuelve el controlador puro, conserva el estado,
//! registra eventos y ejecuta el envío contra una `RemoteOperation`.

pub mod builder;
pub mod core;

pub use self::core::{Transition, WizardEngine};
pub use builder::WizardBuilder;
