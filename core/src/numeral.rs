//! Conversion between Arabic integers and canonical Roman numerals.
//!
//! # Design
//! Encoding is a greedy walk over a descending table that already contains
//! the six subtractive pairs, so it always yields the canonical spelling.
//! Decoding is a single left-to-right scan followed by a re-encode of the
//! computed value: the scan alone also accepts spellings such as `IIII`, and
//! comparing against the canonical form rejects them.
//!
//! Every function here is pure and holds no state, so callers may invoke them
//! concurrently without coordination.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Smallest value representable as a Roman numeral.
pub const MIN_ARABIC: u16 = 1;

/// Largest value representable without overlined symbols.
pub const MAX_ARABIC: u16 = 3999;

/// Symbol table in descending order, including the subtractive pairs.
const NUMERALS: [(&str, u16); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// A numeric input that can be checked for being a whole number.
///
/// Integer types always pass. Floating point types pass only when finite and
/// without a fractional part; anything else is `NotInteger`.
pub trait ArabicValue: Copy {
    fn to_whole(self) -> Result<i64, ConversionError>;
}

macro_rules! impl_arabic_value_for_int {
    ($($t:ty),*) => {
        $(
            impl ArabicValue for $t {
                fn to_whole(self) -> Result<i64, ConversionError> {
                    Ok(i64::from(self))
                }
            }
        )*
    };
}

impl_arabic_value_for_int!(i8, i16, i32, i64, u8, u16, u32);

impl ArabicValue for f64 {
    fn to_whole(self) -> Result<i64, ConversionError> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(ConversionError::NotInteger { value: self });
        }
        // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
        if self < i64::MIN as f64 || self >= i64::MAX as f64 {
            return Err(ConversionError::OutOfRange {
                value: self.to_string(),
            });
        }
        Ok(self as i64)
    }
}

impl ArabicValue for f32 {
    fn to_whole(self) -> Result<i64, ConversionError> {
        f64::from(self).to_whole()
    }
}

/// Convert a number in `1..=3999` to its canonical Roman numeral.
///
/// ```
/// assert_eq!(numeral_core::arabic_to_roman(1999).unwrap(), "MCMXCIX");
/// assert!(numeral_core::arabic_to_roman(1.5).is_err());
/// ```
pub fn arabic_to_roman<N: ArabicValue>(value: N) -> Result<String, ConversionError> {
    let whole = value.to_whole()?;
    let value = check_range(whole)?;
    Ok(encode(value))
}

/// Convert a Roman numeral to its Arabic value.
///
/// Surrounding whitespace is ignored and lowercase symbols are accepted, but
/// the numeral must otherwise be the canonical spelling of its value.
pub fn roman_to_arabic(input: &str) -> Result<u16, ConversionError> {
    let normalized = input.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let values = normalized
        .chars()
        .map(|c| {
            symbol_value(c).ok_or_else(|| ConversionError::InvalidCharacter {
                input: input.to_string(),
                character: c,
            })
        })
        .collect::<Result<Vec<u16>, _>>()?;

    let mut total: i64 = 0;
    let mut symbols = values.iter().peekable();
    while let Some(&current) = symbols.next() {
        match symbols.peek() {
            Some(&&next) if current < next => total -= i64::from(current),
            _ => total += i64::from(current),
        }
    }

    let value = check_range(total)?;
    let canonical = encode(value);
    if canonical != normalized {
        return Err(ConversionError::NonCanonicalForm {
            input: normalized,
            canonical,
        });
    }
    Ok(value)
}

/// `true` when `arabic_to_roman` would succeed for `value`.
pub fn is_valid_arabic<N: ArabicValue>(value: N) -> bool {
    arabic_to_roman(value).is_ok()
}

/// `true` when `roman_to_arabic` would succeed for `input`.
pub fn is_valid_roman(input: &str) -> bool {
    roman_to_arabic(input).is_ok()
}

fn check_range(value: i64) -> Result<u16, ConversionError> {
    match u16::try_from(value) {
        Ok(v) if (MIN_ARABIC..=MAX_ARABIC).contains(&v) => Ok(v),
        _ => Err(ConversionError::OutOfRange {
            value: value.to_string(),
        }),
    }
}

fn encode(mut remaining: u16) -> String {
    let mut out = String::with_capacity(15);
    for &(symbol, value) in &NUMERALS {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    out
}

fn symbol_value(c: char) -> Option<u16> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// A value in `1..=3999` that is known to have a Roman spelling.
///
/// Displays as its canonical uppercase numeral and travels over the wire as
/// that string; deserializing a non-canonical string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RomanNumeral(u16);

impl RomanNumeral {
    pub fn new<N: ArabicValue>(value: N) -> Result<Self, ConversionError> {
        let whole = value.to_whole()?;
        check_range(whole).map(Self)
    }

    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.0))
    }
}

impl FromStr for RomanNumeral {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        roman_to_arabic(s).map(Self)
    }
}

impl TryFrom<u16> for RomanNumeral {
    type Error = ConversionError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for RomanNumeral {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RomanNumeral> for u16 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.0
    }
}

impl From<RomanNumeral> for String {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.to_string()
    }
}
