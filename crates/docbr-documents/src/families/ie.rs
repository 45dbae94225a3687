//! # Inscrição Estadual — São Paulo
//!
//! Twelve digits laid out as `base(8) d1 free(2) d2`:
//!
//! - `d1 = (Σ base[i] * [1,3,4,5,6,7,8,10][i]) % 11 % 10`
//! - `d2 = (Σ first11[i] * [3,2,10,9,8,7,6,5,4,3,2][i]) % 11 % 10`
//!
//! The two free digits sit between the check digits, so the shared engine
//! treats `base(8) ++ free(2)` as the family base.

use docbr_core::{weighted_sum, DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Weights for the first check digit.
pub const FIRST_WEIGHTS: [u32; 8] = [1, 3, 4, 5, 6, 7, 8, 10];

/// Weights for the second check digit over the first eleven digits.
pub const SECOND_WEIGHTS: [u32; 11] = [3, 2, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Display template.
pub const MASK: &str = "###.###.###.###";

/// Inscrição Estadual (SP) family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::IeSp,
    base_len: 10,
    len: 12,
    input: InputLength::Exact,
    base: BaseRule::Uniform,
    scheme: Scheme::IeSp,
    alphabet: Alphabet::Digits,
    mask: Some(MASK),
};

/// First check digit over the eight leading digits.
pub fn first_digit(base: &[u8]) -> u8 {
    (weighted_sum(base.get(..8).unwrap_or(base), &FIRST_WEIGHTS) % 11 % 10) as u8
}

/// Second check digit over the first eleven document digits.
pub fn second_digit(first_eleven: &[u8]) -> u8 {
    (weighted_sum(first_eleven, &SECOND_WEIGHTS) % 11 % 10) as u8
}

/// Lay out a ten-digit base (eight leading plus two free digits) as the full document.
pub fn seal(base: &[u8]) -> Vec<u8> {
    let (leading, free) = base.split_at(base.len().min(8));
    let mut digits = Vec::with_capacity(12);
    digits.extend_from_slice(leading);
    digits.push(first_digit(leading));
    digits.extend_from_slice(free);
    digits.push(second_digit(&digits));
    digits
}

/// Recover `base(8) ++ free(2)` from a twelve-character document.
pub fn base_of(document: &str) -> Option<String> {
    let leading = document.get(..8)?;
    let free = document.get(9..11)?;
    Some(format!("{leading}{free}"))
}

/// Generate a random valid Inscrição Estadual (SP).
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> String {
    FAMILY.generate(rng, masked)
}

/// Validate an Inscrição Estadual (SP), reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a valid Inscrição Estadual (SP).
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}
