//! # Vehicle Plate (Mercosul)
//!
//! Pattern `LLL#L##`: three letters, a digit, a letter, two digits.
//! Plates carry no check digit, so validation is a shape check only.

use docbr_core::{DigitSource, DocumentError};

/// Shape of a Mercosul plate: `L` = letter, `#` = digit.
pub const PATTERN: &str = "LLL#L##";

/// Generate a random Mercosul plate.
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R) -> String {
    PATTERN
        .chars()
        .map(|slot| match slot {
            'L' => rng.letter(),
            _ => char::from(b'0' + rng.digit()),
        })
        .collect()
}

/// Check the Mercosul shape. Hyphens and whitespace are ignored and
/// letters may be lowercase.
///
/// # Errors
///
/// [`DocumentError::WrongLength`] or [`DocumentError::InvalidCharacter`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    let clean: Vec<char> = raw
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if clean.len() != PATTERN.len() {
        return Err(DocumentError::WrongLength {
            expected: PATTERN.len(),
            found: clean.len(),
        });
    }

    for (slot, c) in PATTERN.chars().zip(clean.iter().copied()) {
        let fits = match slot {
            'L' => c.is_ascii_uppercase(),
            _ => c.is_ascii_digit(),
        };
        if !fits {
            return Err(DocumentError::InvalidCharacter(c));
        }
    }
    Ok(())
}

/// Whether `raw` has the Mercosul plate shape.
pub fn validate(raw: &str) -> bool {
    check(raw).is_ok()
}
