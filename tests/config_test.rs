use anyhow::Result;
use roman_numerals::config::toml_config::TomlConfig;
use roman_numerals::core::ConfigProvider;
use roman_numerals::utils::error::ErrorCategory;
use roman_numerals::utils::validation::Validate;
use roman_numerals::{Conversion, Converter, DecodeStrategy, Direction, Settings};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_file_drives_converter() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[decoder]")?;
    writeln!(file, "strategy = \"parse\"")?;

    let settings = Settings::resolve(Some(file.path()), None, false)?;
    assert_eq!(settings.decode_strategy(), DecodeStrategy::Parse);

    let converter = Converter::new(settings.strategy);
    let conversion = converter.convert(Direction::ToNumber, "CDXCIV")?;
    assert_eq!(conversion.output, "494");
    Ok(())
}

#[test]
fn test_bad_strategy_is_configuration_error() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[decoder]\nstrategy = \"binary\"")?;

    let parsed = TomlConfig::from_file(file.path())?;
    assert!(parsed.validate().is_err());

    let err = Settings::resolve(Some(file.path()), None, false).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert_eq!(err.severity().exit_code(), 3);
    Ok(())
}

#[test]
fn test_conversion_json_shape() -> Result<()> {
    let conversion = Converter::default().convert(Direction::ToNumeral, "2026")?;
    let json: serde_json::Value = serde_json::to_value(&conversion)?;

    assert_eq!(
        json,
        serde_json::json!({
            "direction": "to_numeral",
            "input": "2026",
            "output": "MMXXVI"
        })
    );
    Ok(())
}

#[test]
fn test_pretty_json_round_trips() -> Result<()> {
    let conversion = Converter::new(DecodeStrategy::Parse).convert(Direction::ToNumber, "MMXXVI")?;
    let pretty = conversion.to_json_pretty()?;

    assert!(pretty.contains('\n'));
    let parsed: Conversion = serde_json::from_str(&pretty)?;
    assert_eq!(parsed, conversion);
    assert_eq!(parsed.output, "2026");
    Ok(())
}
