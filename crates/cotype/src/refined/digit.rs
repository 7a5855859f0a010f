//! The decimal digit refinement: a byte in 0..=9.

use std::fmt;

use crate::error::RefinementError;

/// A single decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Validating factory: `None` unless the value is in 0..=9.
    pub fn try_new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Throwing factory: fails with a [`RefinementError`] naming the value
    /// when it is not a digit.
    pub fn new(value: u8) -> Result<Self, RefinementError> {
        Self::try_new(value).ok_or_else(|| RefinementError::new("digit", value))
    }

    /// A digit from its character form: `None` unless the character is one
    /// of `'0'..='9'`.
    pub fn try_from_char(value: char) -> Option<Self> {
        value.to_digit(10).map(|digit| Self(digit as u8))
    }

    /// The digit's numeric value.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// The digit's character form.
    pub fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl From<Digit> for u32 {
    fn from(digit: Digit) -> u32 {
        u32::from(digit.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = RefinementError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = RefinementError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::try_from_char(value).ok_or_else(|| RefinementError::new("digit", value))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Extracts, in left-to-right order, every digit character of the text,
/// discarding the rest. The returned sequence is lazy, finite, and
/// restartable (clone it to iterate again).
pub fn filter_digits(text: &str) -> Digits<'_> {
    Digits {
        chars: text.chars(),
    }
}

/// Lazy iterator over the digits of a string; see [`filter_digits`].
#[derive(Debug, Clone)]
pub struct Digits<'a> {
    chars: std::str::Chars<'a>,
}

impl Iterator for Digits<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        loop {
            let next = self.chars.next()?;
            if let Some(digit) = Digit::try_from_char(next) {
                return Some(digit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_only_single_digits() {
        assert_eq!(Digit::try_new(0).map(|d| d.get()), Some(0));
        assert_eq!(Digit::try_new(9).map(|d| d.get()), Some(9));
        assert_eq!(Digit::try_new(10), None);
    }

    #[test]
    fn test_character_construction() {
        assert_eq!(Digit::try_from_char('7').map(|d| d.get()), Some(7));
        assert_eq!(Digit::try_from_char('x'), None);
        assert_eq!(Digit::try_from_char(' '), None);
    }

    #[test]
    fn test_to_char_round_trip() {
        let digit = Digit::try_from_char('4').unwrap();
        assert_eq!(digit.to_char(), '4');
    }

    #[test]
    fn test_new_reports_the_offending_value() {
        let error = Digit::new(12).unwrap_err();
        assert_eq!(error.to_string(), "'12' is not a valid digit");
    }

    #[test]
    fn test_filter_digits_preserves_order() {
        let digits: Vec<u8> = filter_digits("a1b22c3").map(|d| d.get()).collect();
        assert_eq!(digits, vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_filter_digits_is_restartable() {
        let digits = filter_digits("90x1");
        let first_pass: Vec<u8> = digits.clone().map(|d| d.get()).collect();
        let second_pass: Vec<u8> = digits.map(|d| d.get()).collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass, vec![9, 0, 1]);
    }

    #[test]
    fn test_filter_digits_of_digitless_text_is_empty() {
        assert_eq!(filter_digits("none here").count(), 0);
    }
}
