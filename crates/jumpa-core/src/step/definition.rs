use std::collections::BTreeSet;

use super::CrossCheck;
use crate::model::FieldSpec;

/// Un step del wizard: subconjunto ordenado de campos que se valida entero
/// antes de avanzar.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    id: String,
    title: Option<String>,
    /// Índice 1-based; lo asigna la definición del wizard.
    index: usize,
    fields: Vec<FieldSpec>,
    cross_checks: Vec<CrossCheck>,
    /// Steps cuyos valores quedan inválidos si cambia un valor de este step.
    dependent_steps: BTreeSet<usize>,
}

impl StepDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(),
               title: None,
               index: 0,
               fields: Vec::new(),
               cross_checks: Vec::new(),
               dependent_steps: BTreeSet::new() }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn cross_check(mut self, check: CrossCheck) -> Self {
        self.cross_checks.push(check);
        self
    }

    /// Declara que cambiar este step invalida `step_index`.
    pub fn invalidates(mut self, step_index: usize) -> Self {
        self.dependent_steps.insert(step_index);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field_spec(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldSpec::name)
    }

    pub fn cross_checks(&self) -> &[CrossCheck] {
        &self.cross_checks
    }

    pub fn dependent_steps(&self) -> &BTreeSet<usize> {
        &self.dependent_steps
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}
