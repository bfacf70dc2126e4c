use serde::{Deserialize, Serialize};

use super::{FieldErrors, FieldValue, FieldValues};
use crate::errors::WizardError;
use crate::step::WizardPhase;

/// Estado de un wizard en curso.
///
/// Invariante: `1 <= current_step <= total_steps`. Los campos sólo se mutan
/// desde el controlador del crate, de modo que la invariante se mantiene
/// tras cualquier secuencia de `advance`/`retreat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    current_step: usize,
    total_steps: usize,
    phase: WizardPhase,
    values: FieldValues,
    errors: FieldErrors,
    /// Aviso no ligado a un campo (p. ej. "PINs do not match" tras reinicio).
    notice: Option<String>,
    /// Motivo del último fallo remoto.
    failure: Option<String>,
}

impl WizardState {
    pub fn new(total_steps: usize) -> Result<Self, WizardError> {
        if total_steps == 0 {
            return Err(WizardError::EmptyDefinition);
        }
        Ok(Self { current_step: 1,
                  total_steps,
                  phase: WizardPhase::Editing,
                  values: FieldValues::new(),
                  errors: FieldErrors::new(),
                  notice: None,
                  failure: None })
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Texto del campo o "" si no hay texto.
    pub fn text(&self, field: &str) -> &str {
        self.values.get(field).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps
    }

    pub(crate) fn set_step(&mut self, step: usize) {
        self.current_step = step.clamp(1, self.total_steps);
    }

    pub(crate) fn set_phase(&mut self, phase: WizardPhase) {
        self.phase = phase;
    }

    pub(crate) fn values_mut(&mut self) -> &mut FieldValues {
        &mut self.values
    }

    pub(crate) fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }

    pub(crate) fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }

    pub(crate) fn set_failure(&mut self, failure: Option<String>) {
        self.failure = failure;
    }

    /// Vuelve al step 1 en edición, sin valores ni errores.
    pub(crate) fn reset(&mut self) {
        self.current_step = 1;
        self.phase = WizardPhase::Editing;
        self.values.clear();
        self.errors.clear();
        self.notice = None;
        self.failure = None;
    }
}
