use crate::core::decoder;
use crate::core::encoder;
use crate::domain::model::{Conversion, ConversionError, DecodeStrategy, Direction};
use crate::utils::error::Result;
use crate::utils::validation::parse_integer;

/// Entry point for both conversion directions with a chosen decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    strategy: DecodeStrategy,
}

impl Converter {
    pub fn new(strategy: DecodeStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> DecodeStrategy {
        self.strategy
    }

    pub fn to_numeral(&self, num: i64) -> std::result::Result<String, ConversionError> {
        let result = encoder::encode(num);
        match &result {
            Ok(numeral) => tracing::debug!("Encoded {} as {}", num, numeral),
            Err(e) => tracing::debug!("Rejected number: {}", e),
        }
        result
    }

    pub fn to_number(&self, numeral: &str) -> std::result::Result<u16, ConversionError> {
        let result = match self.strategy {
            DecodeStrategy::Search => decoder::decode(numeral),
            DecodeStrategy::Parse => decoder::parse(numeral),
        };
        match &result {
            Ok(value) => tracing::debug!(
                "Decoded {} as {} (strategy: {})",
                numeral,
                value,
                self.strategy
            ),
            Err(e) => tracing::debug!("Rejected numeral: {}", e),
        }
        result
    }

    /// Converts raw text in the given direction. Text that should be a
    /// number but is not surfaces as `MalformedInput`.
    pub fn convert(&self, direction: Direction, input: &str) -> Result<Conversion> {
        let output = match direction {
            Direction::ToNumeral => self.to_numeral(parse_integer(input)?)?,
            Direction::ToNumber => self.to_number(input)?.to_string(),
        };

        Ok(Conversion {
            direction,
            input: input.to_string(),
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorCategory, RomanError};
    use std::sync::{Arc, Mutex};

    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn log_rejections_at(level: tracing::Level) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || CaptureWriter(writer.clone()))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let converter = Converter::default();
            assert!(converter.to_numeral(0).is_err());
            assert!(converter.to_number("IIII").is_err());
        });

        let captured = buffer.lock().unwrap().clone();
        String::from_utf8(captured).unwrap()
    }

    #[test]
    fn test_rejections_log_below_warn() {
        assert_eq!(log_rejections_at(tracing::Level::WARN), "");

        let debug_output = log_rejections_at(tracing::Level::DEBUG);
        assert!(debug_output.contains("Rejected number: Invalid Number 0"));
        assert!(debug_output.contains("Rejected numeral: Invalid Roman Numeral IIII"));
    }

    #[test]
    fn test_strategies_agree() {
        let search = Converter::new(DecodeStrategy::Search);
        let parse = Converter::new(DecodeStrategy::Parse);
        for input in ["MMXXVI", "CDXLIV", "IIII", "mmxxvi", ""] {
            assert_eq!(search.to_number(input), parse.to_number(input));
        }
    }

    #[test]
    fn test_convert_to_numeral() {
        let conversion = Converter::default()
            .convert(Direction::ToNumeral, " 1987 ")
            .unwrap();
        assert_eq!(conversion.output, "MCMLXXXVII");
        assert_eq!(conversion.input, " 1987 ");
    }

    #[test]
    fn test_convert_to_number() {
        let conversion = Converter::new(DecodeStrategy::Parse)
            .convert(Direction::ToNumber, "MMMDCCCLXXXVIII")
            .unwrap();
        assert_eq!(conversion.output, "3888");
        assert_eq!(conversion.direction, Direction::ToNumber);
    }

    #[test]
    fn test_convert_errors() {
        let converter = Converter::default();

        let err = converter.convert(Direction::ToNumeral, "abc").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::UserInput);

        let err = converter.convert(Direction::ToNumeral, "0").unwrap_err();
        assert!(matches!(
            err,
            RomanError::Conversion(ConversionError::InvalidNumber(0))
        ));

        let err = converter.convert(Direction::ToNumber, "IC").unwrap_err();
        assert_eq!(err.to_string(), "Invalid Roman Numeral IC");
    }
}
