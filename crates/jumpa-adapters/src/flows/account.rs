//! Alta de cuenta: datos personales y PIN de transacciones.

use jumpa_core::{CrossCheck, FieldSpec, Navigation, RetryPolicy, StepDefinition, WizardBuilder, WizardDefinition,
                 WizardError};

use crate::constraints::{EmailRule, PasswordRule, PhoneRule, PinRule};

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const PIN: &str = "pin";
pub const CONFIRM_PIN: &str = "confirmPin";

pub const SUCCESS_DESTINATION: &str = "/driver";

pub fn builder() -> WizardBuilder {
    WizardBuilder::new("create_account")
        .step(StepDefinition::new("details").title("Create account")
                                            .field(FieldSpec::text(FIRST_NAME))
                                            .field(FieldSpec::text(LAST_NAME))
                                            .field(FieldSpec::text(PHONE).label("Phone number")
                                                                         .constraint(PhoneRule::with_message("Please enter a valid phone number")))
                                            .field(FieldSpec::text(EMAIL).optional()
                                                                         .constraint(EmailRule::default()))
                                            .field(FieldSpec::text(PASSWORD).constraint(PasswordRule)))
        .step(StepDefinition::new("pin").title("Set transaction PIN")
                                        .field(FieldSpec::text(PIN).label("PIN").constraint(PinRule::default()))
                                        .field(FieldSpec::text(CONFIRM_PIN).label("Confirm PIN")
                                                                           .constraint(PinRule::default()))
                                        .cross_check(CrossCheck::equals(PIN, CONFIRM_PIN, "PINs do not match")))
        .retry_policy(RetryPolicy::ReturnToLast)
}

pub fn definition() -> Result<WizardDefinition, WizardError> {
    builder().build_definition()
}

pub fn on_success() -> Navigation {
    Navigation::to(SUCCESS_DESTINATION)
}
