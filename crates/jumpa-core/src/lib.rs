//! jumpa-core: motor de wizards multi-paso con validación local.
//!
//! Piezas:
//! - `model` / `step` / `definition`: campos, steps y definición inmutable.
//! - `validate`: validador síncrono por step (presencia, forma,
//!   restricciones, comprobaciones cruzadas).
//! - `controller`: transiciones puras `advance` / `retreat` / `retry`.
//! - `engine`: `WizardEngine`, dueño del estado, con eventos y envío remoto.
//! - `remote`: contrato asíncrono de backend y su versión simulada.
//! - `handoff`: entrega efímera de resultados a la pantalla siguiente.
//! - `timer`: cuenta regresiva de códigos de un solo uso.
pub mod constants;
pub mod controller;
pub mod definition;
pub mod engine;
pub mod errors;
pub mod event;
pub mod handoff;
pub mod hashing;
pub mod model;
pub mod remote;
pub mod step;
pub mod timer;
pub mod validate;

pub use controller::{AdvanceOutcome, FieldUpdate, Retreat};
pub use definition::{build_wizard_definition, WizardDefinition};
pub use engine::{Transition, WizardBuilder, WizardEngine};
pub use errors::WizardError;
pub use event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
pub use handoff::{HandoffPayload, HandoffStore, Navigation};
pub use model::{Constraint, FieldErrors, FieldKind, FieldSpec, FieldValue, FieldValues, FileRef, WizardState};
pub use remote::{RemoteFailure, RemoteOperation, SimulatedRemote, SubmissionRequest};
pub use step::{CrossCheck, MismatchPolicy, Relation, RetryPolicy, StepDefinition, WizardPhase};
pub use timer::{spawn_countdown, Countdown, CountdownHandle};
