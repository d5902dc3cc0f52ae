pub mod console;
pub mod toml_config;

use crate::core::{ConfigProvider, DecodeStrategy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::Path;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "roman-numerals")]
#[command(about = "Interactive converter between numbers and Roman numerals")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Decoder to use: search or parse (overrides the config file)
    #[arg(long)]
    pub strategy: Option<DecodeStrategy>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        Settings::resolve(self.config.as_deref(), self.strategy, self.verbose)
    }
}

/// Effective configuration after defaults, the config file and CLI flags
/// have been applied in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub strategy: DecodeStrategy,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(
        config_path: Option<&Path>,
        strategy: Option<DecodeStrategy>,
        verbose: bool,
    ) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(path) = config_path {
            validate_path("config", &path.to_string_lossy())?;
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings.strategy = file.decode_strategy();
            settings.verbose = file.verbose();
        }

        if let Some(strategy) = strategy {
            settings.strategy = strategy;
        }
        settings.verbose |= verbose;

        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn decode_strategy(&self) -> DecodeStrategy {
        self.strategy
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
