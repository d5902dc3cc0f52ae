use clap::{Parser, Subcommand};
use roman_numerals::utils::logger;
use roman_numerals::{Converter, DecodeStrategy, Direction, Settings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roman-convert")]
#[command(about = "Convert one value to or from a Roman numeral")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Decoder to use: search or parse (overrides the config file)
    #[arg(long)]
    strategy: Option<DecodeStrategy>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Number (1 thru 4999) to Roman numeral
    Encode {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Roman numeral to number
    Decode { numeral: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = match Settings::resolve(args.config.as_deref(), args.strategy, args.verbose) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    if args.json {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    let (direction, input) = match &args.command {
        Command::Encode { number } => (Direction::ToNumeral, number.as_str()),
        Command::Decode { numeral } => (Direction::ToNumber, numeral.as_str()),
    };

    let converter = Converter::new(settings.strategy);
    let rendered = converter.convert(direction, input).and_then(|conversion| {
        if args.json {
            conversion.to_json_pretty()
        } else {
            Ok(conversion.output)
        }
    });

    match rendered {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            tracing::debug!("Conversion failed (Category: {:?})", e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }
}
