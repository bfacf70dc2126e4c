//! Definición inmutable de un wizard.
//!
//! `build_wizard_definition` asigna índices 1-based a los steps, comprueba la
//! coherencia (nombres de campo únicos en todo el wizard, comprobaciones
//! cruzadas sobre campos existentes, steps dependientes dentro de rango) y
//! calcula un `definition_hash` estable a partir de ids de steps y campos.
use serde_json::json;

use crate::errors::WizardError;
use crate::hashing::hash_value;
use crate::model::FieldSpec;
use crate::step::{RetryPolicy, StepDefinition};

#[derive(Debug, Clone)]
pub struct WizardDefinition {
    name: String,
    steps: Vec<StepDefinition>,
    retry_policy: RetryPolicy,
    definition_hash: String,
}

impl WizardDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Step por índice 1-based.
    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        index.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    /// Índice del step que declara `field`.
    pub fn step_of_field(&self, field: &str) -> Option<usize> {
        self.steps.iter().find(|s| s.has_field(field)).map(StepDefinition::index)
    }

    pub fn field(&self, field: &str) -> Option<&FieldSpec> {
        self.steps.iter().find_map(|s| s.field_spec(field))
    }
}

pub fn build_wizard_definition(name: impl Into<String>,
                               mut steps: Vec<StepDefinition>,
                               retry_policy: RetryPolicy)
                               -> Result<WizardDefinition, WizardError> {
    if steps.is_empty() {
        return Err(WizardError::EmptyDefinition);
    }
    let total = steps.len();
    let mut seen: Vec<String> = Vec::new();
    for (i, step) in steps.iter_mut().enumerate() {
        step.set_index(i + 1);
        for name in step.field_names() {
            if seen.iter().any(|s| s == name) {
                return Err(WizardError::DuplicateField(name.to_string()));
            }
            seen.push(name.to_string());
        }
        if let Some(bad) = step.dependent_steps()
                               .iter()
                               .find(|d| **d == 0 || **d > total || **d == i + 1)
        {
            return Err(WizardError::InvalidStepIndex(*bad));
        }
    }
    for step in steps.iter() {
        for check in step.cross_checks() {
            if !step.has_field(&check.confirm) {
                return Err(WizardError::UnknownField(check.confirm.clone()));
            }
            if !seen.iter().any(|s| s == &check.primary) {
                return Err(WizardError::UnknownField(check.primary.clone()));
            }
        }
    }

    let name = name.into();
    let shape: Vec<serde_json::Value> = steps.iter()
                                             .map(|s| json!({ "id": s.id(), "fields": s.field_names().collect::<Vec<_>>() }))
                                             .collect();
    let definition_hash = hash_value(&json!({ "name": name, "steps": shape }));
    Ok(WizardDefinition { name,
                          steps,
                          retry_policy,
                          definition_hash })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::CrossCheck;

    fn two_steps() -> Vec<StepDefinition> {
        vec![StepDefinition::new("create").field(FieldSpec::text("pin")).invalidates(2),
             StepDefinition::new("confirm").field(FieldSpec::text("confirm_pin"))
                                           .cross_check(CrossCheck::equals("pin", "confirm_pin", "PINs do not match"))]
    }

    #[test]
    fn assigns_one_based_indices() {
        let def = build_wizard_definition("pin", two_steps(), RetryPolicy::default()).unwrap();
        assert_eq!(def.len(), 2);
        assert_eq!(def.step(1).unwrap().id(), "create");
        assert_eq!(def.step(2).unwrap().index(), 2);
        assert!(def.step(0).is_none());
        assert!(def.step(3).is_none());
        assert_eq!(def.step_of_field("confirm_pin"), Some(2));
    }

    #[test]
    fn hash_depends_on_shape_only() {
        let a = build_wizard_definition("pin", two_steps(), RetryPolicy::default()).unwrap();
        let b = build_wizard_definition("pin", two_steps(), RetryPolicy::NoRetry).unwrap();
        assert_eq!(a.definition_hash(), b.definition_hash());
        let c = build_wizard_definition("pin2", two_steps(), RetryPolicy::default()).unwrap();
        assert_ne!(a.definition_hash(), c.definition_hash());
    }

    #[test]
    fn rejects_incoherent_definitions() {
        assert_eq!(build_wizard_definition("x", vec![], RetryPolicy::default()).unwrap_err(),
                   WizardError::EmptyDefinition);

        let dup = vec![StepDefinition::new("a").field(FieldSpec::text("n")),
                       StepDefinition::new("b").field(FieldSpec::text("n"))];
        assert_eq!(build_wizard_definition("x", dup, RetryPolicy::default()).unwrap_err(),
                   WizardError::DuplicateField("n".into()));

        let bad_dep = vec![StepDefinition::new("a").field(FieldSpec::text("n")).invalidates(4)];
        assert_eq!(build_wizard_definition("x", bad_dep, RetryPolicy::default()).unwrap_err(),
                   WizardError::InvalidStepIndex(4));

        let bad_check = vec![StepDefinition::new("a").field(FieldSpec::text("n"))
                                                     .cross_check(CrossCheck::equals("ghost", "n", "m"))];
        assert_eq!(build_wizard_definition("x", bad_check, RetryPolicy::default()).unwrap_err(),
                   WizardError::UnknownField("ghost".into()));
    }
}
