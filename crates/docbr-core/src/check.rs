//! # Check Characters
//!
//! A check character is either a decimal digit or, for the São Paulo RG,
//! the literal `X`. Keeping the two apart in the type means a remainder of
//! 10 can never leak into a document as the two characters `"10"`.

use serde::{Deserialize, Serialize};

/// One computed or supplied check character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckChar {
    /// A decimal digit, always `0..=9`.
    Digit(u8),
    /// The letter `X` (RG-SP remainder 1).
    X,
}

impl CheckChar {
    /// Build a digit check character. Values above 9 are reduced mod 10.
    pub fn digit(value: u8) -> Self {
        Self::Digit(value % 10)
    }

    /// Parse a single character. Lowercase `x` is accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            'X' | 'x' => Some(Self::X),
            _ => None,
        }
    }

    /// Render as the character that appears in the document.
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d),
            Self::X => 'X',
        }
    }

    /// Numeric value, `None` for `X`.
    pub fn value(self) -> Option<u8> {
        match self {
            Self::Digit(d) => Some(d),
            Self::X => None,
        }
    }
}

impl std::fmt::Display for CheckChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for CheckChar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CheckChar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid check character {c:?}"))),
            _ => Err(serde::de::Error::custom(format!(
                "check character must be exactly one character, got {raw:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_accepts_digits_and_x() {
        assert_eq!(CheckChar::from_char('7'), Some(CheckChar::Digit(7)));
        assert_eq!(CheckChar::from_char('x'), Some(CheckChar::X));
        assert_eq!(CheckChar::from_char('X'), Some(CheckChar::X));
        assert_eq!(CheckChar::from_char('-'), None);
    }

    #[test]
    fn as_char_roundtrip() {
        for c in "0123456789X".chars() {
            assert_eq!(CheckChar::from_char(c).unwrap().as_char(), c);
        }
    }

    #[test]
    fn digit_constructor_stays_in_range() {
        assert_eq!(CheckChar::digit(10), CheckChar::Digit(0));
        assert_eq!(CheckChar::digit(4), CheckChar::Digit(4));
    }

    #[test]
    fn x_has_no_numeric_value() {
        assert_eq!(CheckChar::X.value(), None);
        assert_eq!(CheckChar::Digit(2).value(), Some(2));
    }

    #[test]
    fn serde_uses_plain_string() {
        assert_eq!(serde_json::to_string(&CheckChar::X).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&CheckChar::Digit(5)).unwrap(), "\"5\"");
        let parsed: CheckChar = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(parsed, CheckChar::X);
    }

    #[test]
    fn serde_rejects_multi_char() {
        assert!(serde_json::from_str::<CheckChar>("\"10\"").is_err());
        assert!(serde_json::from_str::<CheckChar>("\"\"").is_err());
        assert!(serde_json::from_str::<CheckChar>("\"?\"").is_err());
    }
}
