use serde::{Deserialize, Serialize};

/// Fase del wizard.
///
/// Transiciones válidas:
/// - `Editing` -> `Submitting` (último step válido)
/// - `Submitting` -> `Succeeded` | `Failed`
/// - `Submitting` -> `Editing` (retroceso antes de enviar)
/// - `Failed` -> `Editing` (reintento, según `RetryPolicy`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardPhase {
    /// El usuario está completando el step actual.
    Editing,
    /// Todos los steps son válidos; a la espera de la operación remota.
    Submitting,
    /// La operación remota terminó bien. Terminal.
    Succeeded,
    /// La operación remota falló.
    Failed,
}

impl WizardPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, WizardPhase::Succeeded)
    }
}

/// A dónde vuelve un wizard fallido al reintentar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// Step 1 con todos los valores borrados (PIN de login, códigos).
    RestartFromFirst,
    /// Último step conservando valores.
    #[default]
    ReturnToLast,
    /// Sin reintento: `Failed` es terminal.
    NoRetry,
}
