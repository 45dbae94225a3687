//! # CNPJ — Cadastro Nacional da Pessoa Jurídica
//!
//! Eight root digits, the four-digit branch number, then two chained
//! mod-11 check digits. Generated numbers always use the head-office
//! branch `0001`; validation accepts any branch.

use docbr_core::{DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Weights for the first check digit (12 base digits).
pub const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit (12 base digits plus the first check digit).
pub const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Head-office branch appended to generated roots.
pub const HEAD_OFFICE: [u8; 4] = [0, 0, 0, 1];

/// Display template.
pub const MASK: &str = "##.###.###/####-##";

/// CNPJ family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::Cnpj,
    base_len: 12,
    len: 14,
    input: InputLength::Exact,
    base: BaseRule::FixedSuffix(&HEAD_OFFICE),
    scheme: Scheme::Mod11Chain(&[&FIRST_WEIGHTS, &SECOND_WEIGHTS]),
    alphabet: Alphabet::Digits,
    mask: Some(MASK),
};

/// Generate a random valid CNPJ for branch `0001`.
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> String {
    FAMILY.generate(rng, masked)
}

/// Validate a CNPJ, reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a valid CNPJ. Separators are ignored.
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}
