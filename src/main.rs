use bmi_calc::utils::error::ErrorSeverity;
use bmi_calc::utils::logger::{self, LogFormat};
use bmi_calc::utils::validation::Validate;
use bmi_calc::{
    alert_for, AppConfig, BmiError, CalculatorSession, CliConfig, Command, FileStore, Language,
};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => exit_with(&e, cli.lang.unwrap_or_default()),
    };
    let lang = config.display.language;

    if let Err(e) = run(&cli.command, &config) {
        exit_with(&e, lang);
    }
}

fn run(command: &Command, config: &AppConfig) -> bmi_calc::Result<()> {
    let store = FileStore::open(&config.storage.path)?;
    let mut session =
        CalculatorSession::open(store)?.with_weight_masked(config.display.mask_weight);
    let lang = config.display.language;

    match command {
        Command::Calc { height, weight } => {
            if let Some(height) = height {
                session.set_height(height.as_str());
            }
            if let Some(weight) = weight {
                session.set_weight(weight.as_str());
            }
            submit_and_show(&mut session, lang)
        }
        Command::Random { submit } => {
            session.randomize();
            print_inputs(&session);
            if *submit {
                submit_and_show(&mut session, lang)
            } else {
                Ok(())
            }
        }
        Command::Last => {
            let last = session.repository().load()?;
            match (last.height, last.weight) {
                (None, None) => println!("No saved entry"),
                _ => print_inputs(&session),
            }
            if let Some(updated_at) = session.repository().store().updated_at() {
                println!("Saved at: {}", updated_at.to_rfc3339());
            }
            Ok(())
        }
    }
}

fn submit_and_show(
    session: &mut CalculatorSession<FileStore>,
    lang: Language,
) -> bmi_calc::Result<()> {
    print_inputs(session);
    let outcome = session.submit();
    println!("{}", alert_for(&outcome, lang));
    outcome.map(|_| ())
}

fn print_inputs(session: &CalculatorSession<FileStore>) {
    println!("Height (cm): {}", session.height_text());
    println!("Weight (kg): {}", session.displayed_weight());
}

fn exit_with(e: &BmiError, lang: Language) -> ! {
    if e.is_user_error() {
        // The alert text has already been printed.
        tracing::debug!("Rejected input: {}", e);
    } else {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.localized_message(lang));
    }
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
