pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{console::StdConsole, Settings};
pub use crate::core::{
    converter::Converter,
    decoder::{decode, parse},
    encoder::encode,
    session::Session,
};
pub use domain::model::{
    Conversion, ConversionError, DecodeStrategy, Direction, MAX_VALUE, MIN_VALUE,
};
pub use utils::error::{RomanError, Result};
