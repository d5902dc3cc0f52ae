use crate::domain::model::{ConversionError, MAX_VALUE, MIN_VALUE};

/// Number of decimal places covered by the value range.
pub(crate) const PLACES: usize = 4;

/// Fragment for each (place, digit). Thousands stop at 4 since the range
/// ends at 4999.
pub(crate) const FRAGMENTS: [&[&str]; PLACES] = [
    &["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"],
    &["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"],
    &["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"],
    &["", "M", "MM", "MMM", "MMMM"],
];

/// Converts `num` to its canonical Roman numeral.
///
/// Digits are read from the units place upwards and each fragment is
/// prepended, so the result reads from the most significant place down.
pub fn encode(num: i64) -> Result<String, ConversionError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&num) {
        return Err(ConversionError::InvalidNumber(num));
    }

    let mut remaining = num as usize;
    let mut place = 0;
    let mut numeral = String::new();

    while remaining > 0 {
        let digit = remaining % 10;
        if digit > 0 {
            numeral.insert_str(0, FRAGMENTS[place][digit]);
        }
        remaining /= 10;
        place += 1;
    }

    Ok(numeral)
}
