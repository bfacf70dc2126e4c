//! Modelo de datos del wizard: valores de campo, especificaciones y estado.

mod field;
mod state;
mod value;

pub use field::{Constraint, FieldKind, FieldSpec};
pub use state::WizardState;
pub use value::{FieldErrors, FieldValue, FieldValues, FileRef};
