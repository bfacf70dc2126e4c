//! PIN de retiro: crear y confirmar. Si la confirmación no coincide se
//! vuelve a la creación con todo borrado.
//!
//! La comprobación cruzada del wizard es la única máquina crear→confirmar;
//! `PinSetup` sólo le pone delante el teclado compartido.

use jumpa_core::{CrossCheck, FieldSpec, Navigation, RemoteOperation, RetryPolicy, StepDefinition, Transition,
                 WizardBuilder, WizardDefinition, WizardEngine, WizardError, WizardPhase, WizardState};
use jumpa_domain::{Pin, PinPad};
use log::debug;

use crate::constraints::PinRule;

pub const PIN: &str = "pin";
pub const CONFIRM_PIN: &str = "confirmPin";
pub const MISMATCH: &str = "PINs do not match. Try again.";
pub const SUCCESS_DESTINATION: &str = "/driver/withdraw/bank-details";

pub fn builder() -> WizardBuilder {
    WizardBuilder::new("withdraw_pin")
        .step(StepDefinition::new("create").title("Create PIN")
                                           .field(FieldSpec::text(PIN).label("PIN").constraint(PinRule::default()))
                                           .invalidates(2))
        .step(StepDefinition::new("confirm").title("Confirm PIN")
                                            .field(FieldSpec::text(CONFIRM_PIN).label("PIN")
                                                                               .constraint(PinRule::default()))
                                            .cross_check(CrossCheck::equals(PIN, CONFIRM_PIN, MISMATCH).restart_on_mismatch()))
        .retry_policy(RetryPolicy::RestartFromFirst)
}

pub fn definition() -> Result<WizardDefinition, WizardError> {
    builder().build_definition()
}

/// Huella del PIN confirmado, lo único que sale del wizard.
pub fn pin_digest(state: &WizardState) -> Option<String> {
    Pin::parse(state.text(PIN)).ok().map(|p| p.digest())
}

pub fn on_success() -> Navigation {
    Navigation::to(SUCCESS_DESTINATION)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinSetupStatus {
    Typing,
    /// Primer PIN aceptado; el teclado pasa a la confirmación.
    AwaitingConfirm,
    /// La confirmación no coincidió y se volvió a la creación.
    Mismatch(String),
    /// Ambos coinciden; listo para guardar.
    Confirmed,
}

/// Pantalla de PIN de retiro: teclado + wizard de dos pasos.
#[derive(Debug)]
pub struct PinSetup {
    pad: PinPad,
    engine: WizardEngine,
}

impl PinSetup {
    pub fn new() -> Result<Self, WizardError> {
        Ok(Self { pad: PinPad::default(),
                  engine: builder().build()?, })
    }

    pub fn pad(&self) -> &PinPad {
        &self.pad
    }

    pub fn engine(&self) -> &WizardEngine {
        &self.engine
    }

    pub fn is_confirming(&self) -> bool {
        self.engine.state().current_step() == 2
    }

    /// Mensaje del último mismatch, hasta que se entrega el siguiente PIN.
    pub fn notice(&self) -> Option<&str> {
        self.engine.state().notice()
    }

    pub fn backspace(&mut self) {
        self.pad.backspace();
    }

    /// Pulsa una tecla; al completar cuatro dígitos los entrega al step
    /// visible y avanza.
    pub fn press(&mut self, key: char) -> Result<PinSetupStatus, WizardError> {
        if !self.pad.press(key) {
            return Ok(PinSetupStatus::Typing);
        }
        let Some(pin) = self.pad.take_pin() else {
            return Ok(PinSetupStatus::Typing);
        };
        let field = if self.is_confirming() { CONFIRM_PIN } else { PIN };
        self.engine.set_value(field, pin.expose())?;
        match self.engine.advance()? {
            Transition::Advanced { .. } => Ok(PinSetupStatus::AwaitingConfirm),
            Transition::Restarted { reason } => {
                debug!("withdraw pin confirmation mismatch");
                Ok(PinSetupStatus::Mismatch(reason))
            }
            Transition::ReadyToSubmit => Ok(PinSetupStatus::Confirmed),
            _ => Ok(PinSetupStatus::Typing),
        }
    }

    /// Desde la confirmación vuelve a la creación; desde la creación sale.
    pub fn back(&mut self) -> Transition {
        self.pad.clear();
        self.engine.retreat()
    }

    /// Guarda el PIN confirmado. Si el backend falla el wizard vuelve a
    /// empezar según su política y el error se devuelve al llamador.
    pub async fn save(&mut self, backend: &dyn RemoteOperation) -> Result<Navigation, WizardError> {
        match self.engine.submit(backend).await {
            Ok(_) => Ok(on_success()),
            Err(e) => {
                if self.engine.state().phase() == WizardPhase::Failed {
                    self.engine.retry()?;
                }
                Err(e)
            }
        }
    }

    pub fn digest(&self) -> Option<String> {
        pin_digest(self.engine.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpa_core::{Transition, WizardPhase};

    #[test]
    fn changing_first_pin_clears_confirmation() {
        let mut engine = builder().build().unwrap();
        engine.set_value(PIN, "1234").unwrap();
        engine.advance().unwrap();
        engine.set_value(CONFIRM_PIN, "12").unwrap();
        engine.retreat();
        engine.set_value(PIN, "5678").unwrap();
        assert!(engine.state().value(CONFIRM_PIN).is_none());
        assert_eq!(engine.event_variants().last(), Some(&"D"));
    }

    #[test]
    fn mismatch_restarts() {
        let mut engine = builder().build().unwrap();
        engine.set_value(PIN, "1234").unwrap();
        engine.advance().unwrap();
        engine.set_value(CONFIRM_PIN, "4321").unwrap();
        assert_eq!(engine.advance().unwrap(), Transition::Restarted { reason: MISMATCH.to_string() });
        assert_eq!(engine.state().current_step(), 1);
        assert!(engine.state().values().is_empty());
        assert_eq!(engine.state().phase(), WizardPhase::Editing);
        assert!(pin_digest(engine.state()).is_none());
    }

    #[test]
    fn mismatch_keeps_the_advance_button_enabled() {
        let mut engine = builder().build().unwrap();
        engine.set_value(PIN, "1234").unwrap();
        engine.advance().unwrap();
        engine.set_value(CONFIRM_PIN, "4321").unwrap();
        assert!(engine.can_advance());
        assert!(matches!(engine.advance().unwrap(), Transition::Restarted { .. }));
        assert!(!engine.can_advance(), "empty create step is blocked again");
    }

    fn type_in(setup: &mut PinSetup, digits: &str) -> PinSetupStatus {
        let mut last = PinSetupStatus::Typing;
        for d in digits.chars() {
            last = setup.press(d).unwrap();
        }
        last
    }

    #[test]
    fn keypad_setup_confirms() {
        let mut setup = PinSetup::new().unwrap();
        assert_eq!(type_in(&mut setup, "123"), PinSetupStatus::Typing);
        assert_eq!(setup.pad().display(), "•••○");
        assert_eq!(type_in(&mut setup, "4"), PinSetupStatus::AwaitingConfirm);
        assert!(setup.is_confirming());
        assert_eq!(setup.pad().entered(), 0);
        assert_eq!(type_in(&mut setup, "1234"), PinSetupStatus::Confirmed);
        assert_eq!(setup.digest(), Some(Pin::parse("1234").unwrap().digest()));
    }

    #[test]
    fn keypad_setup_mismatch_starts_over() {
        let mut setup = PinSetup::new().unwrap();
        type_in(&mut setup, "1234");
        assert_eq!(type_in(&mut setup, "4321"), PinSetupStatus::Mismatch(MISMATCH.to_string()));
        assert!(!setup.is_confirming());
        assert_eq!(setup.notice(), Some(MISMATCH));
        assert!(setup.engine().state().values().is_empty());
        assert_eq!(type_in(&mut setup, "5678"), PinSetupStatus::AwaitingConfirm);
        assert_eq!(type_in(&mut setup, "5678"), PinSetupStatus::Confirmed);
    }

    #[test]
    fn keypad_back_from_confirm_returns_to_create() {
        let mut setup = PinSetup::new().unwrap();
        type_in(&mut setup, "1234");
        type_in(&mut setup, "9");
        assert_eq!(setup.back(), Transition::Retreated { from: 2, to: 1 });
        assert_eq!(setup.pad().entered(), 0);
        assert_eq!(setup.back(), Transition::Exited);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_save_starts_over_then_succeeds() {
        use jumpa_core::SimulatedRemote;
        use std::time::Duration;

        let failing = SimulatedRemote::new("save_withdraw_pin", Duration::from_millis(10), |_req: &jumpa_core::SubmissionRequest| {
            Err("Network error".to_string())
        });
        let mut setup = PinSetup::new().unwrap();
        type_in(&mut setup, "1234");
        type_in(&mut setup, "1234");
        let err = setup.save(&failing).await.unwrap_err();
        assert!(matches!(err, WizardError::Remote(_)));
        assert_eq!(setup.engine().state().phase(), WizardPhase::Editing);
        assert_eq!(setup.engine().state().current_step(), 1);

        type_in(&mut setup, "1234");
        assert_eq!(type_in(&mut setup, "1234"), PinSetupStatus::Confirmed);
        let ok = crate::backends::BackendSettings::default().save_withdraw_pin();
        assert_eq!(setup.save(ok.as_ref()).await.unwrap().destination, SUCCESS_DESTINATION);
    }
}
