//! Acceso con PIN: el teclado envía solo al completar los cuatro dígitos.

use jumpa_core::{FieldSpec, Navigation, RemoteOperation, RetryPolicy, StepDefinition, Transition, WizardBuilder,
                 WizardDefinition, WizardEngine, WizardError, WizardPhase};
use jumpa_domain::PinPad;
use log::{debug, info};

use crate::constraints::PinRule;

pub const PIN: &str = "pin";
pub const SUCCESS_DESTINATION: &str = "/home";

pub fn builder() -> WizardBuilder {
    WizardBuilder::new("login")
        .step(StepDefinition::new("pin").title("Enter your PIN")
                                        .field(FieldSpec::text(PIN).label("PIN").constraint(PinRule::default())))
        .retry_policy(RetryPolicy::RestartFromFirst)
}

pub fn definition() -> Result<WizardDefinition, WizardError> {
    builder().build_definition()
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginStatus {
    Typing,
    LoggedIn(Navigation),
    Rejected(String),
}

/// Pantalla de acceso: teclado + wizard de un paso.
#[derive(Debug)]
pub struct PinLogin {
    pad: PinPad,
    engine: WizardEngine,
    has_error: bool,
}

impl PinLogin {
    pub fn new() -> Result<Self, WizardError> {
        Ok(Self { pad: PinPad::default(),
                  engine: builder().build()?,
                  has_error: false })
    }

    pub fn pad(&self) -> &PinPad {
        &self.pad
    }

    pub fn engine(&self) -> &WizardEngine {
        &self.engine
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn backspace(&mut self) {
        self.pad.backspace();
    }

    /// Pulsa una tecla; al completar el PIN lo verifica contra `backend`.
    pub async fn press(&mut self, key: char, backend: &dyn RemoteOperation) -> Result<LoginStatus, WizardError> {
        if self.has_error {
            self.has_error = false;
        }
        if !self.pad.press(key) {
            return Ok(LoginStatus::Typing);
        }
        let Some(pin) = self.pad.take_pin() else {
            return Ok(LoginStatus::Typing);
        };
        self.engine.set_value(PIN, pin.expose())?;
        if self.engine.advance()? != Transition::ReadyToSubmit {
            return Ok(LoginStatus::Typing);
        }
        match self.engine.submit(backend).await {
            Ok(_) => {
                info!("login accepted");
                Ok(LoginStatus::LoggedIn(Navigation::to(SUCCESS_DESTINATION)))
            }
            Err(WizardError::Remote(failure)) => {
                debug!("login rejected: {}", failure.reason);
                self.has_error = true;
                if self.engine.state().phase() == WizardPhase::Failed {
                    self.engine.retry()?;
                }
                Ok(LoginStatus::Rejected(failure.reason))
            }
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::BackendSettings;

    #[tokio::test(start_paused = true)]
    async fn wrong_then_right_pin() {
        let backend = BackendSettings::default().login();
        let mut screen = PinLogin::new().unwrap();
        for key in "999".chars() {
            assert_eq!(screen.press(key, backend.as_ref()).await.unwrap(), LoginStatus::Typing);
        }
        let status = screen.press('9', backend.as_ref()).await.unwrap();
        assert_eq!(status, LoginStatus::Rejected("Incorrect PIN".to_string()));
        assert!(screen.has_error());
        assert_eq!(screen.pad().entered(), 0);
        assert_eq!(screen.engine().state().current_step(), 1);

        let mut last = LoginStatus::Typing;
        for key in "1234".chars() {
            last = screen.press(key, backend.as_ref()).await.unwrap();
        }
        assert_eq!(last, LoginStatus::LoggedIn(Navigation::to("/home")));
        assert_eq!(screen.engine().state().phase(), WizardPhase::Succeeded);
    }
}
