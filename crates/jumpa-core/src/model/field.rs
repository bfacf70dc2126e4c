use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::FieldValue;

/// Tipo declarado de un campo. Determina la comprobación de forma que se
/// ejecuta antes de las restricciones propias del campo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    /// Texto numérico sin separadores de miles.
    Number,
    Date,
    File,
    /// Uno de los valores listados.
    Enum(Vec<String>),
}

/// Predicado sobre el valor de un campo.
///
/// Las implementaciones deben ser puras y deterministas: mismo valor, mismo
/// resultado, sin efectos secundarios. `Err` lleva el mensaje visible.
pub trait Constraint: Send + Sync + fmt::Debug {
    fn check(&self, value: &FieldValue) -> Result<(), String>;
}

/// Especificación de un campo dentro de un step.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    label: String,
    kind: FieldKind,
    required: bool,
    required_message: Option<String>,
    constraints: Vec<Arc<dyn Constraint>>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self { label: humanize(&name),
               name,
               kind,
               required: true,
               required_message: None,
               constraints: Vec::new() }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::File)
    }

    pub fn one_of<I, S>(name: impl Into<String>, options: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self::new(name, FieldKind::Enum(options.into_iter().map(Into::into).collect()))
    }

    /// Marca el campo como opcional: en blanco no se valida.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    pub fn constraint(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Arc::new(constraint));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.constraints
    }

    pub fn missing_message(&self) -> String {
        self.required_message
            .clone()
            .unwrap_or_else(|| format!("{} is required", self.label))
    }
}

// "dateOfBirth" / "date_of_birth" -> "Date of birth"
fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c == '_' || c == '-' {
            out.push(' ');
        } else if c.is_uppercase() && i > 0 {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
