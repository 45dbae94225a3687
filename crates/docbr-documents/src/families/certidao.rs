//! # Certidão Civil (birth / marriage / death certificate number)
//!
//! Thirty-two digits: a 29-digit body, a two-digit mod-97 field, and a
//! final mod-11 digit.
//!
//! - field = `(98 - body mod 97) % 97`, zero-padded to two digits
//! - last = weighted mod-11 over the first 31 digits with [`WEIGHTS`]
//!
//! This scheme is provisional. The weight vector has not been checked
//! against the civil-registry standard, so numbers accepted here are only
//! self-consistent, not guaranteed to be accepted by registry systems.

use docbr_core::{mod11, mod97_check, DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Weights for the final digit over the body and the mod-97 field.
pub const WEIGHTS: [u32; 31] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
];

/// Display template.
pub const MASK: &str = "###### ## ## #### # ##### ### ####### ##";

/// Certidão family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::Certidao,
    base_len: 29,
    len: 32,
    input: InputLength::Exact,
    base: BaseRule::Uniform,
    scheme: Scheme::Certidao,
    alphabet: Alphabet::Digits,
    mask: Some(MASK),
};

/// The two-digit mod-97 field and the final mod-11 digit for a 29-digit body.
pub fn check_digits(body: &[u8]) -> (u8, u8) {
    let field = mod97_check(body);
    let mut digits = body.to_vec();
    digits.extend([field / 10, field % 10]);
    (field, mod11(&digits, &WEIGHTS))
}

/// Generate a random self-consistent certidão number.
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> String {
    FAMILY.generate(rng, masked)
}

/// Validate a certidão number, reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a self-consistent 32-digit certidão number.
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}
