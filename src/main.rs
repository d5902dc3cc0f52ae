use clap::Parser;
use roman_numerals::utils::logger;
use roman_numerals::{CliConfig, Converter, Session, StdConsole};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    logger::init_cli_logger(settings.verbose);

    tracing::info!("Starting roman-numerals");
    if settings.verbose {
        tracing::debug!("CLI config: {:?}, effective settings: {:?}", config, settings);
    }

    let converter = Converter::new(settings.strategy);
    let mut session = Session::new(StdConsole::stdio(), converter);

    if let Err(e) = session.run().await {
        tracing::error!(
            "❌ Session failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}
