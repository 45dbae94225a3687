//! # RG (SP) — Registro Geral, São Paulo
//!
//! Eight base digits weighted 2 through 9, one mod-11 check character.
//! Remainder 0 gives `0`, remainder 1 gives the letter `X`, anything else
//! gives `11 - r`. Input may carry the `X` in either case.

use docbr_core::{weighted_sum, CheckChar, DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Weights over the eight base digits.
pub const WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Display template.
pub const MASK: &str = "##.###.###-#";

/// RG (SP) family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::RgSp,
    base_len: 8,
    len: 9,
    input: InputLength::Exact,
    base: BaseRule::Uniform,
    scheme: Scheme::RgSp,
    alphabet: Alphabet::TrailingX,
    mask: Some(MASK),
};

/// Check character for an eight-digit base.
pub fn check_char(base: &[u8]) -> CheckChar {
    match weighted_sum(base, &WEIGHTS) % 11 {
        0 => CheckChar::Digit(0),
        1 => CheckChar::X,
        r => CheckChar::digit((11 - r) as u8),
    }
}

/// Generate a random valid RG (SP).
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> String {
    FAMILY.generate(rng, masked)
}

/// Validate an RG (SP), reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a valid RG (SP).
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}
