//! Core WizardEngine implementation

use log::{debug, info, warn};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controller::{self, AdvanceOutcome, Retreat};
use crate::definition::WizardDefinition;
use crate::engine::WizardBuilder;
use crate::errors::WizardError;
use crate::event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
use crate::hashing::hash_value;
use crate::model::{FieldErrors, FieldValue, WizardState};
use crate::remote::{RemoteOperation, SubmissionRequest};
use crate::step::WizardPhase;
use crate::validate::validate;

/// Transición observada tras una operación del engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: usize, to: usize },
    ReadyToSubmit,
    /// Reinicio por mismatch; `reason` es el aviso para el usuario.
    Restarted { reason: String },
    Retreated { from: usize, to: usize },
    /// Retroceso desde el step 1: el llamador debe navegar atrás.
    Exited,
    Retried { to: usize },
}

/// Motor de un wizard concreto.
///
/// Posee el `WizardState` (nadie más lo muta), anota cada transición en el
/// `EventStore` y guarda el resultado del envío hasta que se retira.
#[derive(Debug)]
pub struct WizardEngine<E: EventStore = InMemoryEventStore> {
    id: Uuid,
    definition: WizardDefinition,
    state: WizardState,
    event_store: E,
    result: Option<Value>,
}

impl WizardEngine<InMemoryEventStore> {
    /// Crea un nuevo builder con store de eventos en memoria
    #[inline]
    pub fn builder(name: impl Into<String>) -> WizardBuilder {
        WizardBuilder::new(name)
    }

    pub fn new(definition: WizardDefinition) -> Result<Self, WizardError> {
        Self::with_store(definition, InMemoryEventStore::default())
    }
}

impl<E: EventStore> WizardEngine<E> {
    pub fn with_store(definition: WizardDefinition, event_store: E) -> Result<Self, WizardError> {
        let state = controller::start(&definition)?;
        let mut engine = Self { id: Uuid::new_v4(),
                                definition,
                                state,
                                event_store,
                                result: None };
        engine.append(WizardEventKind::WizardInitialized { wizard: engine.definition.name().to_string(),
                                                           definition_hash: engine.definition
                                                                                  .definition_hash()
                                                                                  .to_string(),
                                                           step_count: engine.definition.len() });
        Ok(engine)
    }

    fn append(&mut self, kind: WizardEventKind) -> WizardEvent {
        self.event_store.append_kind(self.id, kind)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    pub fn events(&self) -> Vec<WizardEvent> {
        self.event_store.list(self.id)
    }

    /// Variante compacta de eventos (una letra por evento) para tests y logs.
    pub fn event_variants(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(|e| match e.kind {
                WizardEventKind::WizardInitialized { .. } => "I",
                WizardEventKind::FieldChanged { .. } => "F",
                WizardEventKind::DependentStepsCleared { .. } => "D",
                WizardEventKind::StepAdvanced { .. } => "A",
                WizardEventKind::StepRejected { .. } => "X",
                WizardEventKind::StepRetreated { .. } => "R",
                WizardEventKind::WizardExited { .. } => "E",
                WizardEventKind::WizardRestarted { .. } => "W",
                WizardEventKind::SubmissionReady { .. } => "Q",
                WizardEventKind::SubmissionStarted { .. } => "S",
                WizardEventKind::SubmissionSucceeded { .. } => "K",
                WizardEventKind::SubmissionFailed { .. } => "N",
                WizardEventKind::RetryRequested { .. } => "Y",
            })
            .collect()
    }

    pub fn set_value(&mut self, field: &str, value: impl Into<FieldValue>) -> Result<(), WizardError> {
        let update = controller::set_value(&self.definition, &self.state, field, value.into())?;
        let step_index = self.definition.step_of_field(field).unwrap_or(self.state.current_step());
        self.state = update.state;
        self.append(WizardEventKind::FieldChanged { step_index,
                                                    field: field.to_string() });
        if !update.cleared_steps.is_empty() {
            debug!("wizard '{}': steps {:?} cleared by change of '{}'",
                   self.definition.name(),
                   update.cleared_steps,
                   field);
            self.append(WizardEventKind::DependentStepsCleared { step_index,
                                                                 cleared: update.cleared_steps });
        }
        Ok(())
    }

    /// Errores actuales del step visible, sin mutar el estado.
    pub fn validate_current(&self) -> FieldErrors {
        self.definition
            .step(self.state.current_step())
            .map(|s| validate(s, self.state.values()))
            .unwrap_or_default()
    }

    pub fn can_advance(&self) -> bool {
        controller::can_advance(&self.definition, &self.state)
    }

    /// Avanza; un step inválido devuelve `StepBlocked` y deja los errores
    /// en el estado.
    pub fn advance(&mut self) -> Result<Transition, WizardError> {
        let from = self.state.current_step();
        match controller::advance(&self.definition, &self.state)? {
            AdvanceOutcome::Moved(next) => {
                let to = next.current_step();
                self.state = next;
                self.append(WizardEventKind::StepAdvanced { from, to });
                Ok(Transition::Advanced { from, to })
            }
            AdvanceOutcome::ReadyToSubmit(next) => {
                self.state = next;
                self.append(WizardEventKind::SubmissionReady { step_index: from });
                Ok(Transition::ReadyToSubmit)
            }
            AdvanceOutcome::Rejected(next) => {
                let fields: Vec<String> = next.errors().keys().cloned().collect();
                warn!("wizard '{}': step {} blocked by {:?}", self.definition.name(), from, fields);
                self.state = next;
                self.append(WizardEventKind::StepRejected { step_index: from,
                                                            fields: fields.clone() });
                Err(WizardError::StepBlocked { step: from, fields })
            }
            AdvanceOutcome::Restarted(next) => {
                let reason = next.notice().unwrap_or_default().to_string();
                self.state = next;
                self.append(WizardEventKind::WizardRestarted { from,
                                                               reason: reason.clone() });
                Ok(Transition::Restarted { reason })
            }
        }
    }

    pub fn retreat(&mut self) -> Transition {
        let from = self.state.current_step();
        match controller::retreat(&self.state) {
            Retreat::Moved(next) => {
                let to = next.current_step();
                self.state = next;
                self.append(WizardEventKind::StepRetreated { from, to });
                Transition::Retreated { from, to }
            }
            Retreat::Exit => {
                self.append(WizardEventKind::WizardExited { step_index: from });
                Transition::Exited
            }
        }
    }

    /// Fingerprint del envío: versión del motor + definición + valores.
    pub fn fingerprint(&self) -> String {
        hash_value(&json!({
            "engine_version": crate::constants::ENGINE_VERSION,
            "definition_hash": self.definition.definition_hash(),
            "values": serde_json::to_value(self.state.values()).unwrap_or_default(),
        }))
    }

    /// Ejecuta la operación remota. Sólo válido en fase `Submitting`.
    pub async fn submit(&mut self, remote: &dyn RemoteOperation) -> Result<Value, WizardError> {
        if self.state.phase() != WizardPhase::Submitting {
            return Err(WizardError::NotSubmitting);
        }
        let fingerprint = self.fingerprint();
        self.append(WizardEventKind::SubmissionStarted { fingerprint: fingerprint.clone() });
        let request = SubmissionRequest { wizard_id: self.id,
                                          wizard: self.definition.name().to_string(),
                                          definition_hash: self.definition.definition_hash().to_string(),
                                          fingerprint,
                                          values: self.state.values().clone() };

        match remote.execute(&request).await {
            Ok(result) => {
                self.state = controller::resolve_submission(&self.state, Ok(()))?;
                self.append(WizardEventKind::SubmissionSucceeded { result_hash: hash_value(&result) });
                info!("wizard '{}' submitted via '{}'", self.definition.name(), remote.name());
                self.result = Some(result.clone());
                Ok(result)
            }
            Err(failure) => {
                self.state = controller::resolve_submission(&self.state, Err(failure.reason.clone()))?;
                self.append(WizardEventKind::SubmissionFailed { reason: failure.reason.clone() });
                Err(failure.into())
            }
        }
    }

    pub fn retry(&mut self) -> Result<Transition, WizardError> {
        self.state = controller::retry(&self.definition, &self.state)?;
        let to = self.state.current_step();
        self.append(WizardEventKind::RetryRequested { to_step: to });
        Ok(Transition::Retried { to })
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// Retira el resultado del envío (para depositarlo en el handoff).
    pub fn take_result(&mut self) -> Option<Value> {
        self.result.take()
    }
}
