//! Objetivo de ahorro: plan (importe, fechas, frecuencia) y modo de ahorro.

use chrono::NaiveDate;
use jumpa_calc::savings::PREFERRED_DAYS;
use jumpa_calc::{days_between, debit_note, format_long_date, reminder_note, SavingsFrequency, SavingsMode};
use jumpa_core::{CrossCheck, FieldSpec, HandoffStore, Navigation, RetryPolicy, StepDefinition, WizardBuilder,
                 WizardDefinition, WizardError, WizardState};

use crate::constraints::PositiveAmount;
use crate::payloads::SavingsSummary;

pub const REASON: &str = "reason";
pub const TARGET_AMOUNT: &str = "targetAmount";
pub const START_DATE: &str = "startDate";
pub const END_DATE: &str = "endDate";
pub const FREQUENCY: &str = "duration";
pub const PREFERRED_DAY: &str = "durationDay";
pub const SAVE_AMOUNT: &str = "saveAmount";
pub const SAVINGS_MODE: &str = "savingsMode";

pub const SUCCESS_DESTINATION: &str = "/driver/savings/success";

pub fn builder() -> WizardBuilder {
    let frequencies = SavingsFrequency::ALL.map(SavingsFrequency::as_str);
    WizardBuilder::new("savings_target")
        .step(StepDefinition::new("plan").title("Create a savings target")
                                         .field(FieldSpec::text(REASON))
                                         .field(FieldSpec::text(TARGET_AMOUNT).required_message("Target Amount is required")
                                                                              .constraint(PositiveAmount::default()))
                                         .field(FieldSpec::date(START_DATE))
                                         .field(FieldSpec::date(END_DATE))
                                         .field(FieldSpec::one_of(FREQUENCY, frequencies).label("Frequency"))
                                         .field(FieldSpec::one_of(PREFERRED_DAY, PREFERRED_DAYS).label("Preferred day"))
                                         .field(FieldSpec::text(SAVE_AMOUNT).required_message("Daily save amount is required")
                                                                            .constraint(PositiveAmount::default()))
                                         .cross_check(CrossCheck::not_before(START_DATE,
                                                                             END_DATE,
                                                                             "End date cannot be before start date")))
        .step(StepDefinition::new("mode").title("How do you want to save?")
                                         .field(FieldSpec::one_of(SAVINGS_MODE, ["automatic", "manual"]).label("Savings mode")))
        .retry_policy(RetryPolicy::ReturnToLast)
}

pub fn definition() -> Result<WizardDefinition, WizardError> {
    builder().build_definition()
}

/// Texto bajo el modo elegido; `None` si aún no se eligió.
pub fn mode_note(state: &WizardState) -> Option<String> {
    match state.text(SAVINGS_MODE).parse::<SavingsMode>().ok()? {
        SavingsMode::Automatic => {
            Some(debit_note(state.text(SAVE_AMOUNT), state.text(FREQUENCY), state.text(PREFERRED_DAY)))
        }
        SavingsMode::Manual => Some(reminder_note(state.text(PREFERRED_DAY))),
    }
}

pub fn on_success() -> Navigation {
    Navigation::to(SUCCESS_DESTINATION)
}

/// Objetivo de la pestaña "completed" del tablero de ahorro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTarget {
    pub title: String,
    pub saved: String,
    pub total: String,
    pub start: NaiveDate,
    pub withdrawal: NaiveDate,
    pub interest: String,
    pub lock_status: String,
}

impl CompletedTarget {
    /// Ficha del objetivo; `days_left` nunca baja de cero.
    pub fn summary(&self, today: NaiveDate) -> SavingsSummary {
        SavingsSummary { title: self.title.clone(),
                         saved: self.saved.clone(),
                         total: self.total.clone(),
                         days_left: days_between(today, self.withdrawal).max(0).to_string(),
                         duration: format!("{} Day", days_between(self.start, self.withdrawal)),
                         withdrawal_date: format_long_date(self.withdrawal),
                         interest: self.interest.clone(),
                         lock_status: self.lock_status.clone() }
    }
}

fn completed(title: &str,
             amount: &str,
             start: (i32, u32, u32),
             withdrawal: (i32, u32, u32),
             interest: &str,
             lock_status: &str)
             -> Option<CompletedTarget> {
    Some(CompletedTarget { title: title.to_string(),
                           saved: amount.to_string(),
                           total: amount.to_string(),
                           start: NaiveDate::from_ymd_opt(start.0, start.1, start.2)?,
                           withdrawal: NaiveDate::from_ymd_opt(withdrawal.0, withdrawal.1, withdrawal.2)?,
                           interest: interest.to_string(),
                           lock_status: lock_status.to_string() })
}

/// Objetivos cumplidos que lista el tablero (datos fijos, sin backend).
pub fn completed_targets() -> Vec<CompletedTarget> {
    [completed("Rent", "700", (2024, 12, 31), (2025, 1, 30), "8%", "Earn high interest"),
     completed("Car", "2000", (2025, 1, 14), (2025, 3, 15), "12%", "Standard lock")].into_iter()
                                                                                      .flatten()
                                                                                      .collect()
}

/// Abre la ficha de un objetivo: deposita su resumen y navega a ella.
pub fn open_summary(handoffs: &HandoffStore,
                    target: &CompletedTarget,
                    today: NaiveDate)
                    -> Result<Navigation, WizardError> {
    let navigation = Navigation::with_payload(&target.summary(today))?;
    handoffs.dispatch(&navigation);
    Ok(navigation)
}
