use crate::core::encoder::{encode, FRAGMENTS, PLACES};
use crate::domain::model::{ConversionError, MAX_VALUE, MIN_VALUE};
use crate::utils::validation::is_numeral_alphabet;

/// Finds the value whose canonical numeral equals `numeral` by encoding
/// every candidate in range. Non-canonical spellings such as `IIII` never
/// come out of the encoder, so they are rejected.
pub fn decode(numeral: &str) -> Result<u16, ConversionError> {
    (MIN_VALUE..=MAX_VALUE)
        .find(|&candidate| encode(candidate).is_ok_and(|encoded| encoded == numeral))
        .map(|value| value as u16)
        .ok_or_else(|| ConversionError::InvalidNumeral(numeral.to_string()))
}

/// Same acceptance set as [`decode`] without the search: take the longest
/// fragment for each place from thousands down, then require the value to
/// re-encode to exactly the input.
pub fn parse(numeral: &str) -> Result<u16, ConversionError> {
    let invalid = || ConversionError::InvalidNumeral(numeral.to_string());

    if !is_numeral_alphabet(numeral) {
        return Err(invalid());
    }

    let mut rest = numeral;
    let mut value: i64 = 0;
    for place in (0..PLACES).rev() {
        let (digit, len) = longest_fragment(place, rest);
        value = value * 10 + digit;
        rest = &rest[len..];
    }

    if !rest.is_empty() {
        return Err(invalid());
    }

    match encode(value) {
        Ok(canonical) if canonical == numeral => Ok(value as u16),
        _ => Err(invalid()),
    }
}

fn longest_fragment(place: usize, input: &str) -> (i64, usize) {
    FRAGMENTS[place]
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, fragment)| input.starts_with(*fragment))
        .max_by_key(|(_, fragment)| fragment.len())
        .map(|(digit, fragment)| (digit as i64, fragment.len()))
        .unwrap_or((0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REJECTED: &[&str] = &[
        "", "IIII", "xyz", "ABC", "iv", "VV", "IL", "IC", "XM", "VX", "MMMMM", "CMM", "IXI",
        "XCX", "DD", "LL", "CCCC", "XXXX", " X", "X ", "X\n", "MCMXCIXI", "IVI", "IIV",
    ];

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("I"), Ok(1));
        assert_eq!(decode("XLII"), Ok(42));
        assert_eq!(decode("MCMXCIX"), Ok(1999));
        assert_eq!(decode("MMMMCMXCIX"), Ok(4999));
    }

    #[test]
    fn test_decode_rejects_with_input() {
        for input in REJECTED {
            assert_eq!(
                decode(input),
                Err(ConversionError::InvalidNumeral(input.to_string())),
                "decoding {:?}",
                input
            );
        }
        assert_eq!(
            decode("ABC").unwrap_err().to_string(),
            "Invalid Roman Numeral ABC"
        );
    }

    #[test]
    fn test_failure_is_deterministic() {
        assert_eq!(decode("IIII"), decode("IIII"));
        assert_eq!(parse("IIII"), parse("IIII"));
    }

    #[test]
    fn test_round_trip_both_decoders() {
        for n in MIN_VALUE..=MAX_VALUE {
            let numeral = encode(n).unwrap();
            assert_eq!(decode(&numeral), Ok(n as u16), "search {}", numeral);
            assert_eq!(parse(&numeral), Ok(n as u16), "parse {}", numeral);
        }
    }

    #[test]
    fn test_parse_matches_decode_on_rejects() {
        for input in REJECTED {
            assert_eq!(parse(input), decode(input), "input {:?}", input);
        }
    }

    #[test]
    fn test_longest_fragment_prefers_subtractive_form() {
        assert_eq!(longest_fragment(0, "IV"), (4, 2));
        assert_eq!(longest_fragment(0, "VIII"), (8, 4));
        assert_eq!(longest_fragment(2, "CDX"), (4, 2));
        assert_eq!(longest_fragment(1, "IX"), (0, 0));
    }
}
