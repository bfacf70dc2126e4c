//! Validador de campos por step.
//!
//! Orden de evaluación por campo: presencia (blanco = ausente), forma según
//! `FieldKind`, restricciones en orden de declaración (gana el primer
//! mensaje). Después, las comprobaciones cruzadas del step, sólo sobre pares
//! cuyos campos son válidos por separado. Síncrono, sin I/O.
use crate::model::{FieldErrors, FieldKind, FieldSpec, FieldValue, FieldValues};
use crate::step::{MismatchPolicy, StepDefinition};

/// Resultado completo de validar un step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: FieldErrors,
    /// Alguna comprobación cruzada con `RestartWizard` falló.
    pub restart: Option<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.restart.is_none()
    }

    /// `advance` hace algo útil: pasa de step o aplica el reinicio.
    pub fn allows_advance(&self) -> bool {
        self.restart.is_some() || self.errors.is_empty()
    }
}

/// Errores de los campos del step (vacío si el step es válido).
pub fn validate(step: &StepDefinition, values: &FieldValues) -> FieldErrors {
    validate_step(step, values).errors
}

pub fn validate_step(step: &StepDefinition, values: &FieldValues) -> ValidationReport {
    let mut report = ValidationReport::default();
    let empty = FieldValue::Empty;
    for spec in step.fields() {
        let value = values.get(spec.name()).unwrap_or(&empty);
        if let Err(message) = validate_field(spec, value) {
            report.errors.insert(spec.name().to_string(), message);
        }
    }
    for check in step.cross_checks() {
        if report.errors.contains_key(&check.primary) || report.errors.contains_key(&check.confirm) {
            continue;
        }
        let primary = values.get(&check.primary).unwrap_or(&empty);
        let confirm = values.get(&check.confirm).unwrap_or(&empty);
        if confirm.is_blank() || check.holds(primary, confirm) {
            continue;
        }
        match check.policy {
            MismatchPolicy::InlineError => {
                report.errors.insert(check.confirm.clone(), check.message.clone());
            }
            MismatchPolicy::RestartWizard => {
                report.restart = Some(check.message.clone());
            }
        }
    }
    report
}

/// Valida un único campo; útil para mostrar errores en línea al escribir.
pub fn validate_field(spec: &FieldSpec, value: &FieldValue) -> Result<(), String> {
    if value.is_blank() {
        return if spec.is_required() { Err(spec.missing_message()) } else { Ok(()) };
    }
    check_kind(spec, value)?;
    for c in spec.constraints() {
        c.check(value)?;
    }
    Ok(())
}

fn check_kind(spec: &FieldSpec, value: &FieldValue) -> Result<(), String> {
    let label = spec.display_label();
    match (spec.kind(), value) {
        (FieldKind::Text, FieldValue::Text(_)) => Ok(()),
        (FieldKind::Number, FieldValue::Text(s)) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(()),
            _ => Err(format!("{label} must be a number")),
        },
        (FieldKind::Date, FieldValue::Date(_)) => Ok(()),
        (FieldKind::File, FieldValue::File(_)) => Ok(()),
        (FieldKind::Enum(options), FieldValue::Text(s)) if options.iter().any(|o| o == s) => Ok(()),
        (FieldKind::Enum(_), _) => Err(format!("Please select a {}", label.to_lowercase())),
        (FieldKind::Text, _) | (FieldKind::Number, _) => Err(format!("{label} must be text")),
        (FieldKind::Date, _) => Err(format!("{label} must be a date")),
        (FieldKind::File, _) => Err(format!("{label} must be a file")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Constraint, FileRef};
    use crate::step::CrossCheck;

    #[derive(Debug)]
    struct FourDigits;
    impl Constraint for FourDigits {
        fn check(&self, value: &FieldValue) -> Result<(), String> {
            match value.as_text() {
                Some(s) if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) => Ok(()),
                _ => Err("PIN must be 4 digits".into()),
            }
        }
    }

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs.iter().map(|(k, v)| (k.to_string(), FieldValue::text(*v))).collect()
    }

    fn pin_step(policy_restart: bool) -> StepDefinition {
        let check = CrossCheck::equals("pin", "confirm_pin", "PINs do not match");
        let check = if policy_restart { check.restart_on_mismatch() } else { check };
        StepDefinition::new("pin").field(FieldSpec::text("pin").constraint(FourDigits))
                                  .field(FieldSpec::text("confirm_pin").constraint(FourDigits))
                                  .cross_check(check)
    }

    #[test]
    fn blank_required_fields_are_missing() {
        let step = StepDefinition::new("s").field(FieldSpec::text("firstName"))
                                           .field(FieldSpec::text("email").optional());
        let errs = validate(&step, &values(&[("firstName", "  ")]));
        assert_eq!(errs.get("firstName").map(String::as_str), Some("First name is required"));
        assert!(!errs.contains_key("email"));
    }

    #[test]
    fn kind_checks_run_before_constraints() {
        let step = StepDefinition::new("s").field(FieldSpec::number("amount"))
                                           .field(FieldSpec::one_of("duration", ["7", "14", "30"]))
                                           .field(FieldSpec::file("selfie"));
        let mut vals = values(&[("amount", "12a"), ("duration", "9")]);
        vals.insert("selfie".into(), FieldValue::text("not-a-file"));
        let errs = validate(&step, &vals);
        assert_eq!(errs["amount"], "Amount must be a number");
        assert_eq!(errs["duration"], "Please select a duration");
        assert_eq!(errs["selfie"], "Selfie must be a file");

        let mut ok = values(&[("amount", "1000"), ("duration", "14")]);
        ok.insert("selfie".into(), FieldValue::File(FileRef::new("me.jpg", 10)));
        assert!(validate(&step, &ok).is_empty());
    }

    #[test]
    fn cross_check_only_after_fields_are_valid() {
        let step = pin_step(false);
        let errs = validate(&step, &values(&[("pin", "12"), ("confirm_pin", "4321")]));
        assert_eq!(errs["pin"], "PIN must be 4 digits");
        assert!(!errs.contains_key("confirm_pin"));

        let errs = validate(&step, &values(&[("pin", "1234"), ("confirm_pin", "4321")]));
        assert_eq!(errs["confirm_pin"], "PINs do not match");

        assert!(validate(&step, &values(&[("pin", "1234"), ("confirm_pin", "1234")])).is_empty());
    }

    #[test]
    fn restart_policy_is_reported_separately() {
        let report = validate_step(&pin_step(true), &values(&[("pin", "1234"), ("confirm_pin", "4321")]));
        assert!(report.errors.is_empty());
        assert_eq!(report.restart.as_deref(), Some("PINs do not match"));
        assert!(!report.is_valid());
        assert!(report.allows_advance());
    }

    #[test]
    fn end_date_not_before_start() {
        use chrono::NaiveDate;
        let step = StepDefinition::new("dates").field(FieldSpec::date("startDate"))
                                               .field(FieldSpec::date("endDate"))
                                               .cross_check(CrossCheck::not_before("startDate",
                                                                                   "endDate",
                                                                                   "End date cannot be before start date"));
        let day = |d| FieldValue::Date(NaiveDate::from_ymd_opt(2026, 10, d).unwrap());
        let mut vals = FieldValues::new();
        vals.insert("startDate".into(), day(19));
        vals.insert("endDate".into(), day(18));
        assert_eq!(validate(&step, &vals)["endDate"], "End date cannot be before start date");
        vals.insert("endDate".into(), day(19));
        assert!(validate(&step, &vals).is_empty());
    }
}
