//! Errores específicos del core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::remote::RemoteFailure;
use crate::step::WizardPhase;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum WizardError {
    #[error("wizard definition has no steps")] EmptyDefinition,
    #[error("duplicate field `{0}`")] DuplicateField(String),
    #[error("unknown field `{0}`")] UnknownField(String),
    #[error("invalid step index {0}")] InvalidStepIndex(usize),
    #[error("step {step} blocked by invalid fields: {fields:?}")] StepBlocked { step: usize, fields: Vec<String> },
    #[error("wizard is not accepting input (phase {0:?})")] NotEditing(WizardPhase),
    #[error("wizard is not awaiting submission")] NotSubmitting,
    #[error("wizard has no retry path")] NoRetryPath,
    #[error("nothing to retry in phase {0:?}")] NothingToRetry(WizardPhase),
    #[error(transparent)] Remote(#[from] RemoteFailure),
    #[error("serialization: {0}")] Serialization(String),
    #[error("internal: {0}")] Internal(String),
}

impl From<serde_json::Error> for WizardError {
    fn from(e: serde_json::Error) -> Self {
        WizardError::Serialization(e.to_string())
    }
}
