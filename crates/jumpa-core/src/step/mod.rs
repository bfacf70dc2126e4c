//! Definiciones relacionadas a steps del wizard.
//!
//! - `StepDefinition`: conjunto ordenado de campos, comprobaciones cruzadas y
//!   steps dependientes.
//! - `CrossCheck` + `MismatchPolicy`: igualdad u orden entre campo primario y de
//!   confirmación (PIN / confirmar PIN).
//! - `WizardPhase` y `RetryPolicy`: estados de la máquina y política de
//!   reintento tras un fallo remoto.

mod check;
mod definition;
mod status;

pub use check::{CrossCheck, MismatchPolicy, Relation};
pub use definition::StepDefinition;
pub use status::{RetryPolicy, WizardPhase};
