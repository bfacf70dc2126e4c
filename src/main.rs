use chrono::NaiveDate;
use jumpa_adapters::flows::{account, bank_transfer, crypto_withdraw, email_otp, kyc, loan, login, savings, withdraw_pin};
use jumpa_adapters::{CryptoWithdrawContext, EmailOtpContext, LoanSummary, SavingsSummary};
use jumpa_calc::{format_amount, parse_amount, schedule};
use jumpa_core::{FileRef, HandoffStore};
use jumpa_domain::CryptoChain;
use jumpa_flow::config::CONFIG;
use jumpa_flow::errors::CoreError;
use jumpa_flow::logging::init_logging;
use log::info;

/// Alta de cuenta con error en línea de PIN y corrección.
async fn run_account_demo() -> Result<(), CoreError> {
    let backends = CONFIG.backend_settings();
    let mut engine = account::builder().build()?;
    engine.set_value(account::FIRST_NAME, "Effiong")?;
    engine.set_value(account::LAST_NAME, "Musa")?;
    engine.set_value(account::PHONE, "08012345678")?;
    engine.set_value(account::PASSWORD, "secret12")?;
    engine.advance()?;
    engine.set_value(account::PIN, "1234")?;
    engine.set_value(account::CONFIRM_PIN, "1243")?;
    if engine.advance().is_err() {
        println!("[account] confirmPin: {}", engine.state().error(account::CONFIRM_PIN).unwrap_or_default());
    }
    engine.set_value(account::CONFIRM_PIN, "1234")?;
    engine.advance()?;
    engine.submit(backends.create_account().as_ref()).await?;
    println!("[account] creada -> {}", account::on_success().destination);
    println!("[account] eventos: {:?}", engine.event_variants());
    Ok(())
}

/// Verificación KYC completa.
async fn run_kyc_demo() -> Result<(), CoreError> {
    let backends = CONFIG.backend_settings();
    let mut engine = kyc::builder().build()?;
    for (field, value) in [(kyc::FIRST_NAME, "Effiong"),
                           (kyc::LAST_NAME, "Musa"),
                           (kyc::GENDER, "Male"),
                           (kyc::PHONE, "08012345678"),
                           (kyc::ADDRESS, "12 Marina Rd"),
                           (kyc::REGION, "Lagos"),
                           (kyc::COUNTRY, "Nigeria")]
    {
        engine.set_value(field, value)?;
    }
    let dob = NaiveDate::from_ymd_opt(1994, 6, 1).ok_or_else(|| CoreError::Internal("fecha inválida".into()))?;
    engine.set_value(kyc::DATE_OF_BIRTH, dob)?;
    engine.advance()?;
    engine.set_value(kyc::ID_TYPE, "passport")?;
    engine.set_value(kyc::FRONT_IMAGE, FileRef::new("front.jpg", 48_213).with_mime("image/jpeg"))?;
    engine.set_value(kyc::BACK_IMAGE, FileRef::new("back.jpg", 47_990).with_mime("image/jpeg"))?;
    engine.advance()?;
    engine.set_value(kyc::SELFIE_IMAGE, FileRef::new("selfie.jpg", 60_114).with_mime("image/jpeg"))?;
    engine.advance()?;
    let outcome = engine.submit(backends.kyc_review().as_ref()).await;
    println!("[kyc] revisión -> {}", kyc::review_destination(&outcome).destination);
    Ok(())
}

/// Objetivo de ahorro con nota de débito derivada.
async fn run_savings_demo(today: NaiveDate) -> Result<(), CoreError> {
    let backends = CONFIG.backend_settings();
    let mut engine = savings::builder().build()?;
    engine.set_value(savings::REASON, "School fees")?;
    engine.set_value(savings::TARGET_AMOUNT, "250000")?;
    engine.set_value(savings::START_DATE, today)?;
    engine.set_value(savings::END_DATE, schedule::due_date(today, 180))?;
    engine.set_value(savings::FREQUENCY, "Weekly")?;
    engine.set_value(savings::PREFERRED_DAY, "Friday")?;
    engine.set_value(savings::SAVE_AMOUNT, "10000")?;
    engine.advance()?;
    engine.set_value(savings::SAVINGS_MODE, "automatic")?;
    if let Some(note) = savings::mode_note(engine.state()) {
        println!("[savings] {}", note);
    }
    engine.advance()?;
    engine.submit(backends.savings_target().as_ref()).await?;
    println!("[savings] -> {}", savings::on_success().destination);

    // ficha de un objetivo cumplido, abierta desde el tablero
    let handoffs = HandoffStore::new();
    for target in savings::completed_targets() {
        savings::open_summary(&handoffs, &target, today)?;
        let summary: SavingsSummary = handoffs.take_payload();
        println!("[savings] {} {}/{} {} ({}, retiro {})",
                 summary.title, summary.saved, summary.total, summary.interest, summary.duration, summary.withdrawal_date);
    }
    Ok(())
}

/// PIN de retiro por teclado: primero un mismatch (reinicio), luego coincidencia.
async fn run_withdraw_pin_demo() -> Result<(), CoreError> {
    let backends = CONFIG.backend_settings();
    let mut screen = withdraw_pin::PinSetup::new()?;
    for key in "12344321".chars() {
        if let withdraw_pin::PinSetupStatus::Mismatch(reason) = screen.press(key)? {
            println!("[withdraw-pin] {} (step {})", reason, screen.engine().state().current_step());
        }
    }
    for key in "12341234".chars() {
        screen.press(key)?;
    }
    let nav = screen.save(backends.save_withdraw_pin().as_ref()).await?;
    println!("[withdraw-pin] digest {} -> {}", screen.digest().unwrap_or_default(), nav.destination);
    Ok(())
}

/// Retiro cripto: la cadena llega por handoff desde la selección.
async fn run_crypto_demo(handoffs: &HandoffStore) -> Result<(), CoreError> {
    let backends = CONFIG.backend_settings();
    handoffs.put(&CryptoWithdrawContext { chain: CryptoChain::Evm })?;
    let mut screen = crypto_withdraw::CryptoWithdrawal::new(handoffs.take_payload())?;
    screen.set_address("0x52908400098527886E0F7030069857D2E4169EE7")?;
    screen.advance()?;
    for key in "0.5".chars() {
        screen.press(key)?;
    }
    screen.advance()?;
    for (label, value) in screen.confirmation_rows() {
        println!("[crypto] {label}: {value}");
    }
    screen.advance()?;
    screen.send(backends.crypto_transfer().as_ref()).await?;
    println!("[crypto] enviado");
    Ok(())
}

async fn run_bank_transfer_demo() -> Result<(), CoreError> {
    let backends = CONFIG.backend_settings();
    let mut engine = bank_transfer::builder().build()?;
    engine.set_value(bank_transfer::ACCOUNT_NUMBER, "0123456789")?;
    if let Some(r) = bank_transfer::lookup_recipient(engine.state().text(bank_transfer::ACCOUNT_NUMBER)) {
        println!("[bank] destinatario: {} ({})", r.name, r.bank);
    }
    engine.advance()?;
    engine.set_value(bank_transfer::AMOUNT, "5000")?;
    engine.set_value(bank_transfer::REMARK, "Rent")?;
    engine.advance()?;
    engine.set_value(bank_transfer::PIN, "1234")?;
    engine.advance()?;
    let receipt = engine.submit(backends.bank_transfer().as_ref()).await?;
    println!("[bank] recibo: {}", receipt);
    Ok(())
}

async fn run_loan_demo(handoffs: &HandoffStore, today: NaiveDate) -> Result<(), CoreError> {
    let backends = CONFIG.backend_settings();
    let mut app = loan::LoanApplication::new(backends.loan_terms)?;
    println!("[loan] límite elegible: {}", app.eligible_limit());
    app.type_amount("1,000")?;
    for (label, value) in app.quote().lines(app.unit()) {
        println!("[loan] {label}: {value}");
    }
    let nav = app.submit(backends.loan_request().as_ref(), handoffs, today).await?;
    let summary: LoanSummary = handoffs.take_payload();
    println!("[loan] -> {}: total {} vence {}", nav.destination, summary.total_display(), summary.due_date);
    let empty: LoanSummary = handoffs.take_payload();
    println!("[loan] segunda lectura (respaldo): {} / {}", empty.principal_display(), empty.due_date);
    Ok(())
}

async fn run_login_demo() -> Result<(), CoreError> {
    let backend = CONFIG.backend_settings().login();
    let mut screen = login::PinLogin::new()?;
    let attempts: &[&str] = if cfg!(feature = "failure_demo") { &["0000", "1234"] } else { &["1234"] };
    for attempt in attempts {
        let mut status = login::LoginStatus::Typing;
        for key in attempt.chars() {
            status = screen.press(key, backend.as_ref()).await?;
        }
        println!("[login] {:?}", status);
    }
    Ok(())
}

async fn run_email_otp_demo(handoffs: &HandoffStore) -> Result<(), CoreError> {
    let backends = CONFIG.backend_settings();
    let mut request = email_otp::request_builder().build()?;
    request.set_value(email_otp::EMAIL, "effiong@gmail.com")?;
    request.advance()?;
    request.submit(backends.request_email_code().as_ref()).await?;
    handoffs.dispatch(&email_otp::to_verification(request.state().text(email_otp::EMAIL))?);

    let ctx: EmailOtpContext = handoffs.take_payload();
    let countdown = email_otp::start_countdown(&backends);
    println!("[otp] código enviado a {} (expira en {})", ctx.display_email(), countdown.display());

    let mut verify = email_otp::verify_builder().build()?;
    verify.set_value(email_otp::CODE, CONFIG.auth.email_otp.as_str())?;
    verify.advance()?;
    let result = verify.submit(backends.verify_email_code().as_ref()).await?;
    println!("[otp] verificado -> {} (quedaban {})", result["destination"], countdown.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    init_logging();
    info!("jumpa demo with {:?}", *CONFIG);
    let today = schedule::today();
    let handoffs = HandoffStore::new();

    let raw = "1000000";
    println!("[format] {} -> {} -> {}", raw, format_amount(raw), parse_amount(&format_amount(raw)));

    run_account_demo().await?;
    run_kyc_demo().await?;
    run_savings_demo(today).await?;
    run_withdraw_pin_demo().await?;
    run_crypto_demo(&handoffs).await?;
    run_bank_transfer_demo().await?;
    run_loan_demo(&handoffs, today).await?;
    run_login_demo().await?;
    run_email_otp_demo(&handoffs).await?;

    println!("!Demo completa: todos los flujos terminaron");
    Ok(())
}
