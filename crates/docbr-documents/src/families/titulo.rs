//! # Título de Eleitor
//!
//! Eight sequential digits, a two-digit state code (`01` to `28`), and two
//! mod-11 check digits: the first over the sequential digits with weights
//! 2 through 9, the second over the state code and the first check digit
//! with weights 7, 8, 9.

use docbr_core::{mod11, DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Weights over the eight sequential digits.
pub const FIRST_WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Weights over `[state tens, state units, first check digit]`.
pub const SECOND_WEIGHTS: [u32; 3] = [7, 8, 9];

/// Highest valid state code.
pub const MAX_STATE_CODE: u8 = 28;

/// Display template.
pub const MASK: &str = "#### #### ####";

/// Título de Eleitor family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::TituloEleitor,
    base_len: 10,
    len: 12,
    input: InputLength::Exact,
    base: BaseRule::StateCode,
    scheme: Scheme::Titulo,
    alphabet: Alphabet::Digits,
    mask: Some(MASK),
};

/// State code carried in digits 9 and 10 of the base.
pub fn state_code(base: &[u8]) -> Option<u8> {
    match base.get(8..10)? {
        [tens, units] => Some(tens * 10 + units),
        _ => None,
    }
}

/// Reject state codes outside `01..=28`.
///
/// # Errors
///
/// [`DocumentError::StateCodeOutOfRange`] with the offending code.
pub fn check_state_code(base: &[u8]) -> Result<(), DocumentError> {
    let code = state_code(base).unwrap_or(0);
    if (1..=MAX_STATE_CODE).contains(&code) {
        Ok(())
    } else {
        Err(DocumentError::StateCodeOutOfRange(code))
    }
}

/// Both check digits for a ten-digit base (eight digits plus state code).
pub fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = mod11(base.get(..8).unwrap_or(base), &FIRST_WEIGHTS);
    let mut tail = base.get(8..10).unwrap_or_default().to_vec();
    tail.push(first);
    [first, mod11(&tail, &SECOND_WEIGHTS)]
}

/// Generate a random valid Título de Eleitor.
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> String {
    FAMILY.generate(rng, masked)
}

/// Validate a Título de Eleitor, reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a valid Título de Eleitor.
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}
