use clap::Parser;
use rust_decimal::Decimal;
use serde::Serialize;
use tip_time::utils::{logger, validation::Validate};
use tip_time::{
    run_session, CliConfig, ConfigProvider, InvalidInputPolicy, LocaleCurrencyFormatter,
    Notification, ResolvedConfig, TipScreen, TomlConfig, UiEvent,
};

#[derive(Debug, Serialize)]
struct TipReport<'a> {
    cost: &'a str,
    percentage: u8,
    round_up: bool,
    tip: Option<Decimal>,
    display: &'a str,
    error: Option<&'a str>,
}

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "{} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> tip_time::Result<()> {
    config.validate()?;

    let file = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Some(TomlConfig::from_file(path)?)
        }
        None => None,
    };

    let resolved = ResolvedConfig::resolve(config.overrides(), file.as_ref())?;
    let formatter = LocaleCurrencyFormatter::resolve(resolved.locale());
    let mut screen = TipScreen::from_config(&resolved, formatter);

    match &config.cost {
        Some(cost) => one_shot(&mut screen, cost, config.json, resolved.invalid_input_policy()),
        None => {
            let stdin = std::io::stdin();
            run_session(&mut screen, stdin.lock(), std::io::stdout())
        }
    }
}

fn one_shot(
    screen: &mut TipScreen<LocaleCurrencyFormatter>,
    cost: &str,
    json: bool,
    policy: InvalidInputPolicy,
) -> tip_time::Result<()> {
    screen.handle(UiEvent::CostEdited(cost.to_string()));
    let notifications = screen.handle(UiEvent::CalculatePressed);

    let (tip, error) = match notifications.first() {
        Some(Notification::TipRendered { tip, .. }) => (Some(tip.normalize()), None),
        Some(Notification::ValidationFailed { message, .. }) => (None, Some(message.as_str())),
        _ => (None, None),
    };

    if json {
        let input = screen.input();
        let report = TipReport {
            cost,
            percentage: input.percentage.percent(),
            round_up: input.round_up,
            tip,
            display: screen.display(),
            error,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if error.is_none() || policy == InvalidInputPolicy::ResetToZero {
        println!("{}", screen.display());
    }

    match (screen.take_error(), policy) {
        (Some(e), InvalidInputPolicy::Reject) => Err(e),
        _ => Ok(()),
    }
}
