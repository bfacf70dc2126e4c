use serde::{Deserialize, Serialize};

use crate::model::FieldValue;

/// Qué hacer cuando primario y confirmación no coinciden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MismatchPolicy {
    /// Error en línea bajo el campo de confirmación; el step no avanza.
    #[default]
    InlineError,
    /// Vuelve al step 1 y borra todos los valores introducidos.
    RestartWizard,
}

/// Relación exigida entre los dos campos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Relation {
    #[default]
    Equal,
    /// Fechas: `confirm >= primary` (fin no anterior al inicio).
    NotBefore,
}

/// Relación entre un campo primario y otro que lo confirma o acota.
///
/// Sólo se evalúa cuando ambos campos son válidos por separado. El primario
/// puede vivir en un step anterior (PIN en step 1, confirmación en step 2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCheck {
    pub primary: String,
    pub confirm: String,
    pub message: String,
    pub policy: MismatchPolicy,
    #[serde(default)]
    pub relation: Relation,
}

impl CrossCheck {
    pub fn equals(primary: impl Into<String>, confirm: impl Into<String>, message: impl Into<String>) -> Self {
        Self { primary: primary.into(),
               confirm: confirm.into(),
               message: message.into(),
               policy: MismatchPolicy::InlineError,
               relation: Relation::Equal }
    }

    pub fn not_before(earlier: impl Into<String>, later: impl Into<String>, message: impl Into<String>) -> Self {
        Self { relation: Relation::NotBefore,
               ..Self::equals(earlier, later, message) }
    }

    pub fn holds(&self, primary: &FieldValue, confirm: &FieldValue) -> bool {
        match self.relation {
            Relation::Equal => primary == confirm,
            Relation::NotBefore => match (primary.as_date(), confirm.as_date()) {
                (Some(start), Some(end)) => end >= start,
                _ => true,
            },
        }
    }

    pub fn restart_on_mismatch(mut self) -> Self {
        self.policy = MismatchPolicy::RestartWizard;
        self
    }
}
