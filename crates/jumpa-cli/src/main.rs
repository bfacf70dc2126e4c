use clap::{Parser, Subcommand};
use jumpa_adapters::flows::{email_otp, loan, login, withdraw_pin};
use jumpa_adapters::{EmailOtpContext, LoanSummary};
use jumpa_calc::{format_amount, parse_amount, schedule, LoanDuration};
use jumpa_core::{HandoffStore, WizardError};
use jumpa_flow::config::CONFIG;
use jumpa_flow::errors::CoreError;
use jumpa_flow::logging::init_logging;

// Códigos de salida: 4 rechazo del usuario o del backend, 5 error interno.
const EXIT_REJECTED: i32 = 4;
const EXIT_ERROR: i32 = 5;

#[derive(Parser, Debug)]
#[command(name = "jumpa", about = "Flujos de la billetera Jumpa contra backends simulados")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cotiza un préstamo y, con --submit, lo envía.
    Loan {
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = "14")]
        days: String,
        #[arg(long)]
        cedi: bool,
        #[arg(long)]
        submit: bool,
    },
    /// Crea y confirma un PIN de retiro.
    Pin {
        #[arg(long)]
        create: String,
        #[arg(long)]
        confirm: String,
    },
    /// Agrupa (o con --parse desagrupa) un importe.
    Format {
        value: String,
        #[arg(long)]
        parse: bool,
    },
    /// Acceso con PIN.
    Login {
        #[arg(long)]
        pin: String,
    },
    /// Pide un código por correo y lo verifica.
    Otp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
    },
}

async fn run_loan(amount: &str, days: &str, cedi: bool, submit: bool) -> Result<i32, CoreError> {
    let settings = CONFIG.backend_settings();
    let duration: LoanDuration = match days.parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("[jumpa loan] {e}");
            return Ok(EXIT_REJECTED);
        }
    };
    let mut app = loan::LoanApplication::new(settings.loan_terms)?;
    if !app.type_amount(amount)? {
        eprintln!("[jumpa loan] importe ignorado: {amount}");
        return Ok(EXIT_REJECTED);
    }
    app.select_duration(duration)?;
    if cedi {
        app.toggle_currency();
    }
    println!("Eligible limit: {}", app.eligible_limit());
    for (label, value) in app.quote().lines(app.unit()) {
        println!("{label}: {value}");
    }
    let today = schedule::today();
    println!("Due date: {} ({})", duration.due_date_from(today), duration.cadence());
    if !submit {
        return Ok(0);
    }
    let pending = app.pending_errors();
    if !pending.is_empty() {
        for (field, message) in &pending {
            eprintln!("[jumpa loan] {field}: {message}");
        }
        return Ok(EXIT_REJECTED);
    }

    let handoffs = HandoffStore::new();
    match app.submit(settings.loan_request().as_ref(), &handoffs, today).await {
        Ok(nav) => {
            let summary: LoanSummary = handoffs.take_payload();
            println!("-> {}", nav.destination);
            for (label, value) in summary.rows() {
                println!("  {label}: {value}");
            }
            Ok(0)
        }
        Err(WizardError::StepBlocked { fields, .. }) => {
            for field in fields {
                eprintln!("[jumpa loan] {field}: {}", app.engine().state().error(&field).unwrap_or_default());
            }
            Ok(EXIT_REJECTED)
        }
        Err(e) => Err(e.into()),
    }
}

async fn run_pin(create: &str, confirm: &str) -> Result<i32, CoreError> {
    let settings = CONFIG.backend_settings();
    let mut screen = withdraw_pin::PinSetup::new()?;
    let mut status = withdraw_pin::PinSetupStatus::Typing;
    for key in create.chars().chain(confirm.chars()) {
        status = screen.press(key)?;
        if let withdraw_pin::PinSetupStatus::Mismatch(reason) = &status {
            eprintln!("[jumpa pin] {reason}");
            return Ok(EXIT_REJECTED);
        }
    }
    if status != withdraw_pin::PinSetupStatus::Confirmed {
        eprintln!("[jumpa pin] PIN incompleto ({} de 4)", screen.pad().entered());
        return Ok(EXIT_REJECTED);
    }
    match screen.save(settings.save_withdraw_pin().as_ref()).await {
        Ok(nav) => {
            println!("digest: {}", screen.digest().unwrap_or_default());
            println!("-> {}", nav.destination);
            Ok(0)
        }
        Err(WizardError::Remote(failure)) => {
            eprintln!("[jumpa pin] {}", failure.reason);
            Ok(EXIT_REJECTED)
        }
        Err(e) => Err(e.into()),
    }
}

async fn run_login(pin: &str) -> Result<i32, CoreError> {
    let backend = CONFIG.backend_settings().login();
    let mut screen = login::PinLogin::new()?;
    let mut status = login::LoginStatus::Typing;
    for key in pin.chars() {
        status = screen.press(key, backend.as_ref()).await?;
    }
    match status {
        login::LoginStatus::LoggedIn(nav) => {
            println!("-> {}", nav.destination);
            Ok(0)
        }
        login::LoginStatus::Rejected(reason) => {
            eprintln!("[jumpa login] {reason}");
            Ok(EXIT_REJECTED)
        }
        login::LoginStatus::Typing => {
            eprintln!("[jumpa login] PIN incompleto ({} de 4)", screen.pad().entered());
            Ok(EXIT_REJECTED)
        }
    }
}

async fn run_otp(email: &str, code: &str) -> Result<i32, CoreError> {
    let settings = CONFIG.backend_settings();
    let handoffs = HandoffStore::new();

    let mut request = email_otp::request_builder().build()?;
    request.set_value(email_otp::EMAIL, email)?;
    if request.advance().is_err() {
        eprintln!("[jumpa otp] {}", request.state().error(email_otp::EMAIL).unwrap_or_default());
        return Ok(EXIT_REJECTED);
    }
    request.submit(settings.request_email_code().as_ref()).await?;
    handoffs.dispatch(&email_otp::to_verification(email)?);
    let ctx: EmailOtpContext = handoffs.take_payload();
    let countdown = email_otp::start_countdown(&settings);
    println!("code sent to {} (expires in {})", ctx.display_email(), countdown.display());

    let mut verify = email_otp::verify_builder().build()?;
    verify.set_value(email_otp::CODE, code)?;
    if verify.advance().is_err() {
        eprintln!("[jumpa otp] {}", verify.state().error(email_otp::CODE).unwrap_or_default());
        return Ok(EXIT_REJECTED);
    }
    match verify.submit(settings.verify_email_code().as_ref()).await {
        Ok(_) => {
            println!("-> {}", email_otp::SUCCESS_DESTINATION);
            Ok(0)
        }
        Err(WizardError::Remote(failure)) => {
            eprintln!("[jumpa otp] {}", failure.reason);
            Ok(EXIT_REJECTED)
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Loan { amount,
                        days,
                        cedi,
                        submit, } => run_loan(&amount, &days, cedi, submit).await,
        Command::Pin { create, confirm } => run_pin(&create, &confirm).await,
        Command::Format { value, parse } => {
            if parse {
                println!("{}", parse_amount(&value));
            } else {
                println!("{}", format_amount(&value));
            }
            Ok(0)
        }
        Command::Login { pin } => run_login(&pin).await,
        Command::Otp { email, code } => run_otp(&email, &code).await,
    };

    match outcome {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(EXIT_ERROR);
        }
    }
}
