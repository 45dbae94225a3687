//! # CPF — Cadastro de Pessoas Físicas
//!
//! Nine base digits followed by two chained mod-11 check digits. The first
//! uses weights 10 down to 2; the second runs over the base plus the first
//! check digit with weights 11 down to 2.

use docbr_core::{DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Weights for the first check digit.
pub const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit.
pub const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Display template.
pub const MASK: &str = "###.###.###-##";

/// CPF family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::Cpf,
    base_len: 9,
    len: 11,
    input: InputLength::Exact,
    base: BaseRule::Uniform,
    scheme: Scheme::Mod11Chain(&[&FIRST_WEIGHTS, &SECOND_WEIGHTS]),
    alphabet: Alphabet::Digits,
    mask: Some(MASK),
};

/// Generate a random valid CPF.
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> String {
    FAMILY.generate(rng, masked)
}

/// Validate a CPF, reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a valid CPF. Separators are ignored.
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}
