//! Recuperación por correo: pedir código y verificarlo antes de que expire.

use std::time::Duration;

use jumpa_core::{spawn_countdown, CountdownHandle, FieldSpec, Navigation, RetryPolicy, StepDefinition, WizardBuilder,
                 WizardDefinition, WizardError};

use crate::backends::BackendSettings;
use crate::constraints::{EmailRule, PinRule};
use crate::payloads::EmailOtpContext;

pub const EMAIL: &str = "email";
pub const CODE: &str = "code";
pub const CODE_LENGTH: usize = 5;
pub const SUCCESS_DESTINATION: &str = "/login";

/// Primer paso: correo al que se envía el código.
pub fn request_builder() -> WizardBuilder {
    WizardBuilder::new("request_email_code")
        .step(StepDefinition::new("email").field(FieldSpec::text(EMAIL).required_message("Please enter a valid email address")
                                                                       .constraint(EmailRule::default())))
        .retry_policy(RetryPolicy::ReturnToLast)
}

pub fn verify_builder() -> WizardBuilder {
    WizardBuilder::new("verify_email_code")
        .step(StepDefinition::new("code").title("Verify email address")
                                         .field(FieldSpec::text(CODE).constraint(PinRule { length: CODE_LENGTH })))
        .retry_policy(RetryPolicy::ReturnToLast)
}

pub fn request_definition() -> Result<WizardDefinition, WizardError> {
    request_builder().build_definition()
}

pub fn verify_definition() -> Result<WizardDefinition, WizardError> {
    verify_builder().build_definition()
}

/// Navegación hacia la verificación llevando el correo.
pub fn to_verification(email: &str) -> Result<Navigation, WizardError> {
    Navigation::with_payload(&EmailOtpContext { email: email.to_string() })
}

/// Cuenta regresiva del código, a un tick por segundo.
pub fn start_countdown(settings: &BackendSettings) -> CountdownHandle {
    spawn_countdown(settings.otp_ttl_secs, Duration::from_secs(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpa_core::{HandoffStore, Transition};

    #[tokio::test(start_paused = true)]
    async fn request_then_verify() {
        let settings = BackendSettings::default();
        let handoffs = HandoffStore::new();

        let mut request = request_builder().build().unwrap();
        request.set_value(EMAIL, "kofi@mail.com").unwrap();
        assert_eq!(request.advance().unwrap(), Transition::ReadyToSubmit);
        request.submit(settings.request_email_code().as_ref()).await.unwrap();
        handoffs.dispatch(&to_verification(request.state().text(EMAIL)).unwrap());

        let ctx: EmailOtpContext = handoffs.take_payload();
        assert_eq!(ctx.display_email(), "K***@mail.com");

        let countdown = start_countdown(&settings);
        assert_eq!(countdown.display(), "4:27");

        let mut verify = verify_builder().build().unwrap();
        verify.set_value(CODE, "11111").unwrap();
        verify.advance().unwrap();
        assert!(verify.submit(settings.verify_email_code().as_ref()).await.is_err());
        assert_eq!(verify.retry().unwrap(), Transition::Retried { to: 1 });
        assert_eq!(verify.state().text(CODE), "11111");

        verify.set_value(CODE, "12345").unwrap();
        verify.advance().unwrap();
        let result = verify.submit(settings.verify_email_code().as_ref()).await.unwrap();
        assert_eq!(result["destination"], SUCCESS_DESTINATION);
    }

    #[test]
    fn code_needs_five_digits() {
        let mut verify = verify_builder().build().unwrap();
        verify.set_value(CODE, "1234").unwrap();
        assert!(verify.advance().is_err());
        assert_eq!(verify.state().error(CODE), Some("Code must be 5 digits"));
    }
}
