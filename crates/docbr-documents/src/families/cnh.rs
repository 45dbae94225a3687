//! # CNH — Carteira Nacional de Habilitação
//!
//! Nine base digits and two check digits, no standard mask.
//!
//! The first digit is the weighted sum (weights 9 down to 1) mod 11. When
//! that is 10 the digit becomes 0 and a penalty of 2 is carried into the
//! second computation. The second digit is the weighted sum with weights 1
//! up to 9, mod 11 (10 becomes 0), minus the penalty mod 11. A result of
//! 10 after the subtraction is written as 0 so the document always has
//! exactly eleven digits.

use docbr_core::{weighted_sum, DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Weights for the first check digit.
pub const FIRST_WEIGHTS: [u32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Weights for the second check digit.
pub const SECOND_WEIGHTS: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Carried into the second digit when the first remainder is 10.
pub const PENALTY: u32 = 2;

/// CNH family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::Cnh,
    base_len: 9,
    len: 11,
    input: InputLength::Exact,
    base: BaseRule::Uniform,
    scheme: Scheme::Cnh,
    alphabet: Alphabet::Digits,
    mask: None,
};

/// Both check digits for a nine-digit base.
pub fn check_digits(base: &[u8]) -> [u8; 2] {
    let mut first = weighted_sum(base, &FIRST_WEIGHTS) % 11;
    let mut penalty = 0;
    if first >= 10 {
        first = 0;
        penalty = PENALTY;
    }

    let mut second = weighted_sum(base, &SECOND_WEIGHTS) % 11;
    if second >= 10 {
        second = 0;
    }
    second = (second + 11 - penalty) % 11;
    if second >= 10 {
        second = 0;
    }

    [first as u8, second as u8]
}

/// Generate a random valid CNH. CNH has no mask; `masked` is accepted for
/// symmetry with the other families and has no effect.
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> String {
    FAMILY.generate(rng, masked)
}

/// Validate a CNH, reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a valid CNH.
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}
