//! Verificación de identidad en tres pasos: datos personales, documento y
//! selfie. La revisión simulada decide el destino.

use jumpa_core::{FieldSpec, Navigation, RetryPolicy, StepDefinition, WizardBuilder, WizardDefinition, WizardError};
use serde_json::Value;

use crate::constraints::{EmailRule, PhoneRule};

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const GENDER: &str = "gender";
pub const DATE_OF_BIRTH: &str = "dateOfBirth";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const ADDRESS: &str = "address";
pub const REGION: &str = "region";
pub const COUNTRY: &str = "country";
pub const ID_TYPE: &str = "idType";
pub const FRONT_IMAGE: &str = "frontImage";
pub const BACK_IMAGE: &str = "backImage";
pub const SELFIE_IMAGE: &str = "selfieImage";

pub const GENDERS: [&str; 2] = ["Male", "Female"];
pub const ID_TYPES: [&str; 3] = ["national_id", "passport", "drivers_license"];

pub const SUCCESS_DESTINATION: &str = "/driver/verification/success";
pub const FAILED_DESTINATION: &str = "/driver/verification/failed";

pub fn builder() -> WizardBuilder {
    WizardBuilder::new("kyc_verification")
        .step(StepDefinition::new("personal").title("Personal information")
                                             .field(FieldSpec::text(FIRST_NAME))
                                             .field(FieldSpec::text(LAST_NAME))
                                             .field(FieldSpec::one_of(GENDER, GENDERS))
                                             .field(FieldSpec::date(DATE_OF_BIRTH))
                                             .field(FieldSpec::text(EMAIL).optional()
                                                                          .constraint(EmailRule::with_message("Invalid email address")))
                                             .field(FieldSpec::text(PHONE).label("Phone number").constraint(PhoneRule::default()))
                                             .field(FieldSpec::text(ADDRESS))
                                             .field(FieldSpec::text(REGION))
                                             .field(FieldSpec::text(COUNTRY)))
        .step(StepDefinition::new("document").title("Identity document")
                                             .field(FieldSpec::one_of(ID_TYPE, ID_TYPES).label("ID Type"))
                                             .field(FieldSpec::file(FRONT_IMAGE).required_message("Front ID image is required"))
                                             .field(FieldSpec::file(BACK_IMAGE).required_message("Back ID image is required")))
        .step(StepDefinition::new("selfie").title("Take a selfie")
                                           .field(FieldSpec::file(SELFIE_IMAGE).required_message("Selfie is required")))
        .retry_policy(RetryPolicy::ReturnToLast)
}

pub fn definition() -> Result<WizardDefinition, WizardError> {
    builder().build_definition()
}

/// Destino tras la revisión: aprobada o no.
pub fn review_destination(outcome: &Result<Value, WizardError>) -> Navigation {
    match outcome {
        Ok(_) => Navigation::to(SUCCESS_DESTINATION),
        Err(_) => Navigation::to(FAILED_DESTINATION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use jumpa_core::{FileRef, Transition};

    #[test]
    fn documents_are_files() {
        let mut engine = builder().build().unwrap();
        for (f, v) in [(FIRST_NAME, "Ama"),
                       (LAST_NAME, "Mensah"),
                       (GENDER, "Female"),
                       (PHONE, "02331234567"),
                       (ADDRESS, "12 Ring Rd"),
                       (REGION, "Greater Accra"),
                       (COUNTRY, "Ghana")]
        {
            engine.set_value(f, v).unwrap();
        }
        engine.set_value(DATE_OF_BIRTH, NaiveDate::from_ymd_opt(1995, 4, 2).unwrap()).unwrap();
        assert_eq!(engine.advance().unwrap(), Transition::Advanced { from: 1, to: 2 });

        engine.set_value(ID_TYPE, "passport").unwrap();
        engine.set_value(FRONT_IMAGE, FileRef::new("front.jpg", 1024)).unwrap();
        assert!(engine.advance().is_err());
        assert_eq!(engine.state().error(BACK_IMAGE), Some("Back ID image is required"));
        engine.set_value(BACK_IMAGE, FileRef::new("back.jpg", 1024).with_mime("image/jpeg")).unwrap();
        engine.advance().unwrap();

        assert!(engine.advance().is_err());
        assert_eq!(engine.state().error(SELFIE_IMAGE), Some("Selfie is required"));
    }

    #[test]
    fn personal_step_messages() {
        let mut engine = builder().build().unwrap();
        engine.set_value(EMAIL, "a@b").unwrap();
        engine.set_value(GENDER, "Other").unwrap();
        let _ = engine.advance();
        let s = engine.state();
        assert_eq!(s.error(FIRST_NAME), Some("First name is required"));
        assert_eq!(s.error(EMAIL), Some("Invalid email address"));
        assert_eq!(s.error(GENDER), Some("Please select a gender"));
        assert_eq!(s.error(DATE_OF_BIRTH), Some("Date of birth is required"));
    }

    #[test]
    fn review_routes() {
        assert_eq!(review_destination(&Ok(Value::Null)).destination, SUCCESS_DESTINATION);
        let failed = Err(WizardError::NoRetryPath);
        assert_eq!(review_destination(&failed).destination, FAILED_DESTINATION);
    }
}
