use crate::core::converter::Converter;
use crate::domain::model::Direction;
use crate::domain::ports::Console;
use crate::utils::error::{RomanError, Result};
use crate::utils::validation::parse_integer;

pub const MENU: [&str; 2] = [
    "Decimal to Roman Numeral: press 1",
    "Roman Numeral to Decimal: press 2",
];
pub const NUMBER_PROMPT: &str = "Enter number (1 thru 4999) to be converted to a Roman Numeral: ";
pub const NUMERAL_PROMPT: &str = "Enter a Roman Numeral: ";

/// The interactive prompt loop. It only moves text between the console and
/// the converter; there is no exit command.
pub struct Session<C: Console> {
    console: C,
    converter: Converter,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, converter: Converter) -> Self {
        Self { console, converter }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs rounds until the console reports end of input. Returns the
    /// number of completed rounds.
    pub async fn run(&mut self) -> Result<usize> {
        tracing::info!(
            "Starting interactive session (decoder: {})",
            self.converter.strategy()
        );

        let mut rounds = 0;
        while self.run_round().await? {
            rounds += 1;
        }

        tracing::info!("Input closed after {} rounds", rounds);
        Ok(rounds)
    }

    /// One menu cycle. `Ok(false)` means input ended before the round
    /// could complete.
    pub async fn run_round(&mut self) -> Result<bool> {
        for line in MENU {
            self.console.write_line(line).await?;
        }

        let Some(option) = self.console.read_line().await? else {
            return Ok(false);
        };

        match Direction::from_option(&option) {
            Some(Direction::ToNumeral) => self.number_to_numeral().await,
            Some(Direction::ToNumber) => self.numeral_to_number().await,
            None => {
                let err = RomanError::InvalidOption(option);
                tracing::debug!("Unrecognized selection: {:?}", err);
                self.console.write_line(&err.user_friendly_message()).await?;
                Ok(true)
            }
        }
    }

    async fn number_to_numeral(&mut self) -> Result<bool> {
        self.console.write(NUMBER_PROMPT).await?;
        let Some(line) = self.console.read_line().await? else {
            return Ok(false);
        };

        match parse_integer(&line) {
            Ok(num) => {
                let numeral = self
                    .converter
                    .to_numeral(num)
                    .unwrap_or_else(|e| e.to_string());
                self.console
                    .write_line(&format!("Roman Numeral for {} is {}\n", num, numeral))
                    .await?;
            }
            Err(e) => self.console.write_line(&e.user_friendly_message()).await?,
        }

        Ok(true)
    }

    async fn numeral_to_number(&mut self) -> Result<bool> {
        self.console.write(NUMERAL_PROMPT).await?;
        let Some(numeral) = self.console.read_line().await? else {
            return Ok(false);
        };

        let number = match self.converter.to_number(&numeral) {
            Ok(value) => value.to_string(),
            Err(e) => e.to_string(),
        };
        self.console
            .write_line(&format!("Number for {} is {}\n", numeral, number))
            .await?;

        Ok(true)
    }
}
