//! # PIS/PASEP
//!
//! Ten base digits and one weighted mod-11 check digit.

use docbr_core::{DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Weights over the ten base digits.
pub const WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Display template.
pub const MASK: &str = "###.#####.##-#";

/// PIS/PASEP family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::Pis,
    base_len: 10,
    len: 11,
    input: InputLength::Exact,
    base: BaseRule::Uniform,
    scheme: Scheme::Mod11Chain(&[&WEIGHTS]),
    alphabet: Alphabet::Digits,
    mask: Some(MASK),
};

/// Generate a random valid PIS/PASEP.
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> String {
    FAMILY.generate(rng, masked)
}

/// Validate a PIS/PASEP, reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a valid PIS/PASEP.
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}
