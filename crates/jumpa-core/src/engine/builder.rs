//! Builder para `WizardEngine`.
//!
//! ```ignore
//! let engine = WizardEngine::builder("withdraw_pin")
//!     .step(create_step)
//!     .step(confirm_step)
//!     .retry_policy(RetryPolicy::RestartFromFirst)
//!     .build()?;
//! ```

use crate::definition::{build_wizard_definition, WizardDefinition};
use crate::engine::WizardEngine;
use crate::errors::WizardError;
use crate::event::{EventStore, InMemoryEventStore};
use crate::step::{RetryPolicy, StepDefinition};

#[derive(Debug)]
pub struct WizardBuilder {
    name: String,
    steps: Vec<StepDefinition>,
    retry_policy: RetryPolicy,
}

impl WizardBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               steps: Vec::new(),
               retry_policy: RetryPolicy::default() }
    }

    /// Añade el siguiente step; el orden de llamada es el orden del wizard.
    pub fn step(mut self, step: StepDefinition) -> Self {
        self.steps.push(step);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn build_definition(self) -> Result<WizardDefinition, WizardError> {
        build_wizard_definition(self.name, self.steps, self.retry_policy)
    }

    pub fn build(self) -> Result<WizardEngine<InMemoryEventStore>, WizardError> {
        self.build_with_store(InMemoryEventStore::default())
    }

    pub fn build_with_store<E: EventStore>(self, event_store: E) -> Result<WizardEngine<E>, WizardError> {
        WizardEngine::with_store(self.build_definition()?, event_store)
    }
}
