use clap::Parser;
use salon_booking::config::toml_config::LogFormat;
use salon_booking::utils::error::ErrorSeverity;
use salon_booking::utils::{logger, validation::Validate};
use salon_booking::{AppConfig, BookingError, Cli, ReservationClient, TerminalNotifier};
use std::sync::Arc;

fn fail(e: &BookingError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            fail(&e)
        }
    };

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let notifier = Arc::new(TerminalNotifier);
    let api = match ReservationClient::from_config(&config, notifier.clone()) {
        Ok(api) => api,
        Err(e) => fail(&e),
    };

    let today = chrono::Local::now().date_naive();
    match salon_booking::app::commands::run(&cli.command, &config, &api, notifier.as_ref(), today)
        .await
    {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }
}
