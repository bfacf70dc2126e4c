//! Retiro cripto: dirección, importe por teclado, confirmación y envío.

use jumpa_core::{FieldSpec, RemoteOperation, RetryPolicy, StepDefinition, Transition, WizardBuilder, WizardDefinition,
                 WizardEngine, WizardError, WizardPhase};
use jumpa_domain::{AmountKeypad, CryptoChain, WalletAddress};
use serde_json::Value;

use crate::constraints::PositiveAmount;
use crate::payloads::CryptoWithdrawContext;

pub const ADDRESS: &str = "address";
pub const AMOUNT: &str = "amount";

pub fn builder() -> WizardBuilder {
    WizardBuilder::new("crypto_withdraw")
        .step(StepDefinition::new("address").title("Withdraw Asset")
                                            .field(FieldSpec::text(ADDRESS).label("Wallet address")))
        .step(StepDefinition::new("amount").field(FieldSpec::text(AMOUNT).constraint(PositiveAmount::default())))
        .step(StepDefinition::new("confirm").title("Confirm transfer"))
        .retry_policy(RetryPolicy::ReturnToLast)
}

pub fn definition() -> Result<WizardDefinition, WizardError> {
    builder().build_definition()
}

/// Pantalla de retiro para una cadena concreta.
#[derive(Debug)]
pub struct CryptoWithdrawal {
    chain: CryptoChain,
    keypad: AmountKeypad,
    engine: WizardEngine,
}

impl CryptoWithdrawal {
    pub fn new(context: CryptoWithdrawContext) -> Result<Self, WizardError> {
        let mut engine = builder().build()?;
        let keypad = AmountKeypad::default();
        engine.set_value(AMOUNT, keypad.value())?;
        Ok(Self { chain: context.chain,
                  keypad,
                  engine })
    }

    pub fn chain(&self) -> CryptoChain {
        self.chain
    }

    pub fn engine(&self) -> &WizardEngine {
        &self.engine
    }

    pub fn amount(&self) -> &str {
        self.keypad.value()
    }

    pub fn set_address(&mut self, address: &str) -> Result<(), WizardError> {
        self.engine.set_value(ADDRESS, address)
    }

    /// Tecla del teclado numérico (`0`-`9`, `.`, `x`).
    pub fn press(&mut self, key: char) -> Result<(), WizardError> {
        if self.keypad.press(key) {
            self.engine.set_value(AMOUNT, self.keypad.value())?;
        }
        Ok(())
    }

    pub fn advance(&mut self) -> Result<Transition, WizardError> {
        self.engine.advance()
    }

    pub fn back(&mut self) -> Transition {
        self.engine.retreat()
    }

    /// Tras un envío fallido vuelve a la confirmación para reintentar.
    pub fn retry(&mut self) -> Result<Transition, WizardError> {
        self.engine.retry()
    }

    /// Filas de la pantalla de confirmación.
    pub fn confirmation_rows(&self) -> Vec<(&'static str, String)> {
        let to = WalletAddress::parse(self.engine.state().text(ADDRESS)).map(|a| a.short())
                                                                        .unwrap_or_default();
        vec![("Asset", self.chain.display_name().to_string()),
             ("Amount", format!("{} {}", self.keypad.value(), self.chain.ticker())),
             ("To", to),
             ("Network", self.chain.network().to_string())]
    }

    pub async fn send(&mut self, backend: &dyn RemoteOperation) -> Result<Value, WizardError> {
        if self.engine.state().phase() != WizardPhase::Submitting {
            return Err(WizardError::NotSubmitting);
        }
        self.engine.submit(backend).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::BackendSettings;

    #[tokio::test(start_paused = true)]
    async fn address_amount_confirm_send() {
        let mut w = CryptoWithdrawal::new(CryptoWithdrawContext { chain: CryptoChain::Evm }).unwrap();
        assert!(w.advance().is_err());
        w.set_address("0x52908400098527886E0F7030069857D2E4169EE7").unwrap();
        assert_eq!(w.advance().unwrap(), Transition::Advanced { from: 1, to: 2 });

        assert!(w.advance().is_err());
        for k in "0.25".chars() {
            w.press(k).unwrap();
        }
        assert_eq!(w.amount(), "0.25");
        assert_eq!(w.advance().unwrap(), Transition::Advanced { from: 2, to: 3 });
        let rows = w.confirmation_rows();
        assert_eq!(rows[1].1, "0.25 ETH");
        assert_eq!(rows[2].1, "0x5290...9EE7");
        assert_eq!(rows[3].1, "Ethereum");

        assert!(w.send(BackendSettings::default().crypto_transfer().as_ref()).await.is_err());
        assert_eq!(w.advance().unwrap(), Transition::ReadyToSubmit);
        let start = tokio::time::Instant::now();
        w.send(BackendSettings::default().crypto_transfer().as_ref()).await.unwrap();
        assert!(start.elapsed() >= std::time::Duration::from_secs(2));
        assert_eq!(w.engine().state().phase(), WizardPhase::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_send_can_be_retried() {
        use jumpa_core::{SimulatedRemote, SubmissionRequest};

        let failing = SimulatedRemote::new("crypto_transfer", std::time::Duration::from_secs(2), |_req: &SubmissionRequest| {
            Err("Insufficient balance".to_string())
        });
        let mut w = CryptoWithdrawal::new(CryptoWithdrawContext::default()).unwrap();
        w.set_address("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").unwrap();
        w.advance().unwrap();
        w.press('3').unwrap();
        w.advance().unwrap();
        assert_eq!(w.advance().unwrap(), Transition::ReadyToSubmit);
        assert!(matches!(w.send(&failing).await, Err(WizardError::Remote(_))));
        assert_eq!(w.engine().state().phase(), WizardPhase::Failed);

        assert_eq!(w.retry().unwrap(), Transition::Retried { to: 3 });
        assert_eq!(w.engine().state().phase(), WizardPhase::Editing);
        assert_eq!(w.amount(), "3");
        assert_eq!(w.advance().unwrap(), Transition::ReadyToSubmit);
        w.send(BackendSettings::default().crypto_transfer().as_ref()).await.unwrap();
        assert_eq!(w.engine().state().phase(), WizardPhase::Succeeded);
    }

    #[test]
    fn default_chain_is_solana() {
        let w = CryptoWithdrawal::new(CryptoWithdrawContext::default()).unwrap();
        assert_eq!(w.chain().ticker(), "SOL");
        assert_eq!(w.amount(), "0");
    }
}
