//! Tipos de evento del wizard y estructura `WizardEvent`.
//!
//! Cada transición del `WizardEngine` se anota en un `EventStore`
//! append-only. Los eventos llevan nombres de campo, nunca valores: un PIN
//! no debe aparecer en la traza.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardEventKind {
    /// Primer evento de un `wizard_id`.
    WizardInitialized { wizard: String, definition_hash: String, step_count: usize },
    FieldChanged { step_index: usize, field: String },
    /// Steps vaciados porque cambió un valor del que dependen.
    DependentStepsCleared { step_index: usize, cleared: Vec<usize> },
    StepAdvanced { from: usize, to: usize },
    StepRejected { step_index: usize, fields: Vec<String> },
    StepRetreated { from: usize, to: usize },
    WizardExited { step_index: usize },
    /// Reinicio por política de mismatch.
    WizardRestarted { from: usize, reason: String },
    /// Último step válido; el wizard espera el envío.
    SubmissionReady { step_index: usize },
    SubmissionStarted { fingerprint: String },
    SubmissionSucceeded { result_hash: String },
    SubmissionFailed { reason: String },
    RetryRequested { to_step: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardEvent {
    pub seq: u64,
    pub wizard_id: Uuid,
    pub kind: WizardEventKind,
    pub ts: DateTime<Utc>,
}
