//! Controlador de steps: transiciones puras sobre `WizardState`.
//!
//! Cada función recibe el estado actual por referencia y devuelve un estado
//! nuevo; nunca muta la entrada. `WizardEngine` envuelve estas funciones y
//! registra eventos, pero pueden usarse directamente desde una UI que guarde
//! el estado por su cuenta.
use log::debug;

use crate::definition::WizardDefinition;
use crate::errors::WizardError;
use crate::model::{FieldValue, WizardState};
use crate::step::{RetryPolicy, WizardPhase};
use crate::validate::validate_step;

/// Resultado de intentar avanzar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Step actual válido; el estado apunta al siguiente step.
    Moved(WizardState),
    /// Último step válido; fase `Submitting`.
    ReadyToSubmit(WizardState),
    /// Mismo step, con los errores de sus campos.
    Rejected(WizardState),
    /// Una comprobación con `RestartWizard` falló: step 1, sin valores.
    Restarted(WizardState),
}

impl AdvanceOutcome {
    pub fn state(&self) -> &WizardState {
        match self {
            AdvanceOutcome::Moved(s)
            | AdvanceOutcome::ReadyToSubmit(s)
            | AdvanceOutcome::Rejected(s)
            | AdvanceOutcome::Restarted(s) => s,
        }
    }

    pub fn into_state(self) -> WizardState {
        match self {
            AdvanceOutcome::Moved(s)
            | AdvanceOutcome::ReadyToSubmit(s)
            | AdvanceOutcome::Rejected(s)
            | AdvanceOutcome::Restarted(s) => s,
        }
    }
}

/// Resultado de retroceder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retreat {
    Moved(WizardState),
    /// Retroceder desde el step 1 (o desde un estado final) sale del wizard.
    Exit,
}

/// Estado tras asignar un valor, con los steps dependientes que se vaciaron.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub state: WizardState,
    pub cleared_steps: Vec<usize>,
}

pub fn start(definition: &WizardDefinition) -> Result<WizardState, WizardError> {
    WizardState::new(definition.len())
}

fn ensure_editing(state: &WizardState) -> Result<(), WizardError> {
    match state.phase() {
        WizardPhase::Editing => Ok(()),
        other => Err(WizardError::NotEditing(other)),
    }
}

/// Asigna `value` a `field`. Borra el error previo del campo; si el valor
/// cambió, vacía valores y errores de los steps dependientes del step dueño.
pub fn set_value(definition: &WizardDefinition,
                 state: &WizardState,
                 field: &str,
                 value: FieldValue)
                 -> Result<FieldUpdate, WizardError> {
    ensure_editing(state)?;
    let owner = definition.step_of_field(field)
                          .ok_or_else(|| WizardError::UnknownField(field.to_string()))?;
    let mut next = state.clone();
    let changed = next.value(field) != Some(&value);
    next.values_mut().insert(field.to_string(), value);
    next.errors_mut().shift_remove(field);
    next.set_notice(None);

    let mut cleared_steps = Vec::new();
    if changed {
        let dependents = definition.step(owner).map(|s| s.dependent_steps().clone()).unwrap_or_default();
        for dep in dependents {
            let Some(dep_step) = definition.step(dep) else { continue };
            let mut removed = false;
            for name in dep_step.field_names() {
                removed |= next.values_mut().shift_remove(name).is_some();
                next.errors_mut().shift_remove(name);
            }
            if removed {
                cleared_steps.push(dep);
            }
        }
    }
    Ok(FieldUpdate { state: next,
                     cleared_steps })
}

/// Valida sólo los campos del step actual y avanza si todos pasan.
pub fn advance(definition: &WizardDefinition, state: &WizardState) -> Result<AdvanceOutcome, WizardError> {
    ensure_editing(state)?;
    let current = state.current_step();
    let step = definition.step(current).ok_or(WizardError::InvalidStepIndex(current))?;
    let report = validate_step(step, state.values());

    let mut next = state.clone();
    for name in step.field_names() {
        next.errors_mut().shift_remove(name);
    }

    if let Some(reason) = report.restart {
        debug!("wizard '{}' restarted at step {}: {}", definition.name(), current, reason);
        next.reset();
        next.set_notice(Some(reason));
        return Ok(AdvanceOutcome::Restarted(next));
    }
    if !report.errors.is_empty() {
        next.errors_mut().extend(report.errors);
        return Ok(AdvanceOutcome::Rejected(next));
    }
    if next.is_last_step() {
        next.set_phase(WizardPhase::Submitting);
        return Ok(AdvanceOutcome::ReadyToSubmit(next));
    }
    next.set_step(current + 1);
    Ok(AdvanceOutcome::Moved(next))
}

/// Retrocede un step; nunca por debajo de 1.
pub fn retreat(state: &WizardState) -> Retreat {
    match state.phase() {
        WizardPhase::Submitting => {
            let mut next = state.clone();
            next.set_phase(WizardPhase::Editing);
            Retreat::Moved(next)
        }
        WizardPhase::Editing if state.current_step() > 1 => {
            let mut next = state.clone();
            next.set_step(state.current_step() - 1);
            Retreat::Moved(next)
        }
        WizardPhase::Editing | WizardPhase::Succeeded | WizardPhase::Failed => Retreat::Exit,
    }
}

/// El botón de avanzar está habilitado si el step actual es válido o si un
/// mismatch con `RestartWizard` haría reiniciar el wizard.
pub fn can_advance(definition: &WizardDefinition, state: &WizardState) -> bool {
    state.phase() == WizardPhase::Editing
    && definition.step(state.current_step())
                 .map(|s| validate_step(s, state.values()).allows_advance())
                 .unwrap_or(false)
}

/// Cierra un envío: `Ok` -> `Succeeded`, `Err(motivo)` -> `Failed`.
pub fn resolve_submission(state: &WizardState, outcome: Result<(), String>) -> Result<WizardState, WizardError> {
    if state.phase() != WizardPhase::Submitting {
        return Err(WizardError::NotSubmitting);
    }
    let mut next = state.clone();
    match outcome {
        Ok(()) => {
            next.set_phase(WizardPhase::Succeeded);
            next.set_failure(None);
        }
        Err(reason) => {
            next.set_phase(WizardPhase::Failed);
            next.set_failure(Some(reason));
        }
    }
    Ok(next)
}

/// Sale de `Failed` según la `RetryPolicy` de la definición.
pub fn retry(definition: &WizardDefinition, state: &WizardState) -> Result<WizardState, WizardError> {
    if state.phase() != WizardPhase::Failed {
        return Err(WizardError::NothingToRetry(state.phase()));
    }
    let mut next = state.clone();
    match definition.retry_policy() {
        RetryPolicy::NoRetry => return Err(WizardError::NoRetryPath),
        RetryPolicy::RestartFromFirst => next.reset(),
        RetryPolicy::ReturnToLast => {
            next.set_phase(WizardPhase::Editing);
            next.set_step(next.total_steps());
            next.set_failure(None);
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::build_wizard_definition;
    use crate::model::{Constraint, FieldSpec};
    use crate::step::{CrossCheck, StepDefinition};

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

    fn pin_setup() -> WizardDefinition {
        let steps = vec![StepDefinition::new("create").field(FieldSpec::text("pin").constraint(FourDigits))
                                                      .invalidates(2),
                         StepDefinition::new("confirm").field(FieldSpec::text("confirm_pin").constraint(FourDigits))
                                                       .cross_check(CrossCheck::equals("pin",
                                                                                       "confirm_pin",
                                                                                       "PINs do not match. Try again.").restart_on_mismatch())];
        build_wizard_definition("withdraw_pin", steps, RetryPolicy::RestartFromFirst).unwrap()
    }

    fn put(def: &WizardDefinition, s: &WizardState, f: &str, v: &str) -> WizardState {
        set_value(def, s, f, FieldValue::text(v)).unwrap().state
    }

    #[test]
    fn matching_pins_reach_submission() {
        let def = pin_setup();
        let s = start(&def).unwrap();
        let s = put(&def, &s, "pin", "1234");
        let s = advance(&def, &s).unwrap();
        assert!(matches!(s, AdvanceOutcome::Moved(_)));
        let s = put(&def, s.state(), "confirm_pin", "1234");
        let out = advance(&def, &s).unwrap();
        assert!(matches!(out, AdvanceOutcome::ReadyToSubmit(_)));
        let done = resolve_submission(out.state(), Ok(())).unwrap();
        assert_eq!(done.phase(), WizardPhase::Succeeded);
        assert_eq!(done.current_step(), 2);
    }

    #[test]
    fn mismatch_restarts_with_cleared_values() {
        let def = pin_setup();
        let s = start(&def).unwrap();
        let s = put(&def, &s, "pin", "1234");
        let s = advance(&def, &s).unwrap().into_state();
        let s = put(&def, &s, "confirm_pin", "4321");
        assert!(can_advance(&def, &s), "a restarting mismatch keeps the button enabled");
        let out = advance(&def, &s).unwrap();
        let AdvanceOutcome::Restarted(s) = out else { panic!("expected restart") };
        assert_eq!(s.current_step(), 1);
        assert!(s.values().is_empty());
        assert!(s.errors().is_empty());
        assert_eq!(s.notice(), Some("PINs do not match. Try again."));
    }

    #[test]
    fn invalid_step_does_not_advance() {
        let def = pin_setup();
        let s = start(&def).unwrap();
        let out = advance(&def, &s).unwrap();
        let AdvanceOutcome::Rejected(r) = out else { panic!("expected rejection") };
        assert_eq!(r.current_step(), 1);
        assert_eq!(r.error("pin"), Some("Pin is required"));
        assert!(!can_advance(&def, &r));

        let r = put(&def, &r, "pin", "12a4");
        assert!(r.error("pin").is_none(), "editing clears the field error");
        let AdvanceOutcome::Rejected(r) = advance(&def, &r).unwrap() else { panic!() };
        assert_eq!(r.error("pin"), Some("PIN must be 4 digits"));
    }

    #[test]
    fn changing_pin_clears_dependent_confirmation() {
        let def = pin_setup();
        let s = start(&def).unwrap();
        let s = put(&def, &s, "pin", "1234");
        let s = advance(&def, &s).unwrap().into_state();
        let s = put(&def, &s, "confirm_pin", "12");
        let Retreat::Moved(s) = retreat(&s) else { panic!() };
        let upd = set_value(&def, &s, "pin", FieldValue::text("5678")).unwrap();
        assert_eq!(upd.cleared_steps, vec![2]);
        assert!(upd.state.value("confirm_pin").is_none());

        // mismo valor: no invalida nada
        let again = set_value(&def, &upd.state, "pin", FieldValue::text("5678")).unwrap();
        assert!(again.cleared_steps.is_empty());
    }

    #[test]
    fn retreat_never_goes_below_one() {
        let def = pin_setup();
        let s = start(&def).unwrap();
        assert_eq!(retreat(&s), Retreat::Exit);
        let s = put(&def, &s, "pin", "1234");
        let s = advance(&def, &s).unwrap().into_state();
        let Retreat::Moved(back) = retreat(&s) else { panic!() };
        assert_eq!(back.current_step(), 1);
    }

    #[test]
    fn failed_submission_retries_per_policy() {
        let def = pin_setup();
        let s = start(&def).unwrap();
        let s = put(&def, &s, "pin", "1234");
        let s = advance(&def, &s).unwrap().into_state();
        let s = put(&def, &s, "confirm_pin", "1234");
        let s = advance(&def, &s).unwrap().into_state();
        let failed = resolve_submission(&s, Err("timeout".into())).unwrap();
        assert_eq!(failed.failure(), Some("timeout"));
        assert!(set_value(&def, &failed, "pin", FieldValue::text("1")).is_err());

        let again = retry(&def, &failed).unwrap();
        assert_eq!(again.current_step(), 1);
        assert_eq!(again.phase(), WizardPhase::Editing);
        assert!(again.values().is_empty());
        assert_eq!(retry(&def, &again).unwrap_err(), WizardError::NothingToRetry(WizardPhase::Editing));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let def = pin_setup();
        let s = start(&def).unwrap();
        assert_eq!(set_value(&def, &s, "nope", FieldValue::Empty).unwrap_err(),
                   WizardError::UnknownField("nope".into()));
    }
}
