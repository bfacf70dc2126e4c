//! Solicitud de préstamo: importe y plazo con cotización en vivo.

use chrono::NaiveDate;
use jumpa_calc::{eligible_limit, sanitize_amount_input, CurrencyUnit, LoanDuration, LoanQuote, LoanTerms};
use jumpa_core::{FieldErrors, FieldSpec, HandoffStore, Navigation, RemoteOperation, RetryPolicy, StepDefinition, Transition,
                 WizardBuilder, WizardDefinition, WizardEngine, WizardError};
use log::debug;

use crate::constraints::PositiveAmount;
use crate::payloads::LoanSummary;

pub const AMOUNT: &str = "amount";
pub const DURATION: &str = "duration";

pub fn builder() -> WizardBuilder {
    let durations = LoanDuration::ALL.map(|d| d.days().to_string());
    WizardBuilder::new("loan_request")
        .step(StepDefinition::new("request").title("Request a loan")
                                            .field(FieldSpec::text(AMOUNT).required_message("Please enter a valid amount")
                                                                          .constraint(PositiveAmount::default()))
                                            .field(FieldSpec::one_of(DURATION, durations)))
        .retry_policy(RetryPolicy::ReturnToLast)
}

pub fn definition() -> Result<WizardDefinition, WizardError> {
    builder().build_definition()
}

/// Pantalla del préstamo: wizard + unidad mostrada + tarifas.
#[derive(Debug)]
pub struct LoanApplication {
    engine: WizardEngine,
    unit: CurrencyUnit,
    terms: LoanTerms,
}

impl LoanApplication {
    /// Arranca con el plazo por defecto (14 días) ya elegido.
    pub fn new(terms: LoanTerms) -> Result<Self, WizardError> {
        let mut engine = builder().build()?;
        engine.set_value(DURATION, LoanDuration::default().days().to_string())?;
        Ok(Self { engine,
                  unit: CurrencyUnit::default(),
                  terms })
    }

    pub fn engine(&self) -> &WizardEngine {
        &self.engine
    }

    pub fn unit(&self) -> CurrencyUnit {
        self.unit
    }

    /// Texto tecleado en el campo de importe. Lo que no es un importe se
    /// ignora y el valor anterior se mantiene; devuelve si se aceptó.
    pub fn type_amount(&mut self, typed: &str) -> Result<bool, WizardError> {
        match sanitize_amount_input(typed) {
            Some(raw) => {
                self.engine.set_value(AMOUNT, raw)?;
                Ok(true)
            }
            None => {
                debug!("loan amount input '{}' ignored", typed);
                Ok(false)
            }
        }
    }

    pub fn select_duration(&mut self, duration: LoanDuration) -> Result<(), WizardError> {
        self.engine.set_value(DURATION, duration.days().to_string())
    }

    pub fn duration(&self) -> LoanDuration {
        self.engine.state().text(DURATION).parse().unwrap_or_default()
    }

    /// Importe con separadores, tal como se muestra en el campo.
    pub fn amount_display(&self) -> String {
        jumpa_calc::format_amount(self.engine.state().text(AMOUNT))
    }

    pub fn toggle_currency(&mut self) -> CurrencyUnit {
        self.unit = self.unit.toggle();
        self.unit
    }

    pub fn eligible_limit(&self) -> String {
        eligible_limit(self.unit)
    }

    /// Errores que bloquearían el envío, sin marcarlos en el estado.
    pub fn pending_errors(&self) -> FieldErrors {
        self.engine.validate_current()
    }

    pub fn quote(&self) -> LoanQuote {
        self.terms.quote_input(self.engine.state().text(AMOUNT))
    }

    pub fn summary(&self, today: NaiveDate) -> LoanSummary {
        LoanSummary::from_quote(&self.quote(), self.unit, self.duration().due_date_from(today))
    }

    /// Sale de un envío fallido: el importe y el plazo se conservan.
    pub fn retry(&mut self) -> Result<Transition, WizardError> {
        self.engine.retry()
    }

    /// Valida, envía y deposita el resumen para la pantalla de éxito.
    pub async fn submit(&mut self,
                        backend: &dyn RemoteOperation,
                        handoffs: &HandoffStore,
                        today: NaiveDate)
                        -> Result<Navigation, WizardError> {
        if self.engine.advance()? != Transition::ReadyToSubmit {
            return Err(WizardError::NotSubmitting);
        }
        self.engine.submit(backend).await?;
        let navigation = Navigation::with_payload(&self.summary(today))?;
        handoffs.dispatch(&navigation);
        Ok(navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::BackendSettings;
    use jumpa_core::HandoffPayload;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 5).unwrap()
    }

    #[test]
    fn live_quote_and_toggle() {
        let mut app = LoanApplication::new(LoanTerms::default()).unwrap();
        assert_eq!(app.duration(), LoanDuration::BiWeek);
        assert!(app.type_amount("1,000").unwrap());
        assert!(!app.type_amount("1,000x").unwrap());
        assert_eq!(app.amount_display(), "1,000");
        let q = app.quote();
        assert_eq!(q.processing_fee, 22.0);
        assert_eq!(app.eligible_limit(), "$ 1,500.00");
        app.toggle_currency();
        assert_eq!(app.eligible_limit(), "₵ 16,000.00");
        assert_eq!(app.quote(), q);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_hands_summary_to_success_screen() {
        let settings = BackendSettings::default();
        let handoffs = HandoffStore::new();
        let mut app = LoanApplication::new(settings.loan_terms).unwrap();
        app.type_amount("1000").unwrap();
        app.select_duration(LoanDuration::BiWeek).unwrap();
        let nav = app.submit(settings.loan_request().as_ref(), &handoffs, today()).await.unwrap();
        assert_eq!(nav.destination, LoanSummary::DESTINATION);

        let summary: LoanSummary = handoffs.take_payload();
        assert_eq!(summary.total_display(), "$ 1,072.00");
        assert_eq!(summary.due_date, "19 October 2026");
        // lectura única
        let again: LoanSummary = handoffs.take_payload();
        assert_eq!(again, LoanSummary::fallback());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_request_can_be_retried() {
        use jumpa_core::{SimulatedRemote, SubmissionRequest, WizardPhase};

        let settings = BackendSettings::default();
        let failing = SimulatedRemote::new("loan_request", settings.remote_delay, |_req: &SubmissionRequest| {
            Err("Service unavailable".to_string())
        });
        let handoffs = HandoffStore::new();
        let mut app = LoanApplication::new(settings.loan_terms).unwrap();
        app.type_amount("1000").unwrap();
        assert!(matches!(app.submit(&failing, &handoffs, today()).await, Err(WizardError::Remote(_))));
        assert!(handoffs.is_empty());
        assert_eq!(app.engine().state().phase(), WizardPhase::Failed);

        assert_eq!(app.retry().unwrap(), Transition::Retried { to: 1 });
        assert!(app.type_amount("500").unwrap());
        app.submit(settings.loan_request().as_ref(), &handoffs, today()).await.unwrap();
        let summary: LoanSummary = handoffs.take_payload();
        assert_eq!(summary.principal_display(), "$ 500.00");
    }

    #[tokio::test]
    async fn zero_amount_is_blocked() {
        let handoffs = HandoffStore::new();
        let mut app = LoanApplication::new(LoanTerms::default()).unwrap();
        app.type_amount("0").unwrap();
        let err = app.submit(BackendSettings::default().loan_request().as_ref(), &handoffs, today())
                     .await
                     .unwrap_err();
        assert!(matches!(err, WizardError::StepBlocked { .. }));
        assert_eq!(app.engine().state().error(AMOUNT), Some("Please enter a valid amount"));
        assert!(handoffs.is_empty());
    }

    #[test]
    fn pending_errors_leave_the_screen_untouched() {
        let mut app = LoanApplication::new(LoanTerms::default()).unwrap();
        let pending = app.pending_errors();
        assert_eq!(pending.get(AMOUNT).map(String::as_str), Some("Please enter a valid amount"));
        assert!(!pending.contains_key(DURATION));
        assert_eq!(app.engine().state().error(AMOUNT), None);

        app.type_amount("500").unwrap();
        assert!(app.pending_errors().is_empty());
    }
}
