//! Envío a cuenta bancaria: destinatario, importe y PIN de confirmación.

use jumpa_core::{FieldSpec, RetryPolicy, StepDefinition, WizardBuilder, WizardDefinition, WizardError};
use jumpa_domain::BankAccountNumber;
use serde::{Deserialize, Serialize};

use crate::constraints::{AccountNumberRule, PinRule, PositiveAmount};

pub const ACCOUNT_NUMBER: &str = "accountNumber";
pub const AMOUNT: &str = "amount";
pub const REMARK: &str = "remark";
pub const PIN: &str = "pin";

/// Cuenta vinculada del usuario.
pub const LINKED_ACCOUNT: &str = "8102910839";

pub fn builder() -> WizardBuilder {
    WizardBuilder::new("bank_transfer")
        .step(StepDefinition::new("recipient").title("Recipient")
                                              .field(FieldSpec::text(ACCOUNT_NUMBER).constraint(AccountNumberRule)))
        .step(StepDefinition::new("amount").field(FieldSpec::text(AMOUNT).required_message("Enter amount")
                                                                         .constraint(PositiveAmount::default()))
                                           .field(FieldSpec::text(REMARK).optional()))
        .step(StepDefinition::new("pin").title("Enter PIN")
                                        .field(FieldSpec::text(PIN).label("PIN").constraint(PinRule::default())))
        .retry_policy(RetryPolicy::ReturnToLast)
}

pub fn definition() -> Result<WizardDefinition, WizardError> {
    builder().build_definition()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub bank: String,
}

/// Titular de la cuenta destino. Sólo resuelve números de 10 dígitos.
pub fn lookup_recipient(account_number: &str) -> Option<Recipient> {
    let account = BankAccountNumber::parse(account_number).ok()?;
    if account.as_str() == LINKED_ACCOUNT {
        return Some(Recipient { name: "Effiong Musa".to_string(),
                                bank: "MoMo PSB".to_string() });
    }
    Some(Recipient { name: "Ndukwe Anita Nwakaego".to_string(),
                     bank: "MoMo".to_string() })
}
