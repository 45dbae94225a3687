//! # RENAVAM — Registro Nacional de Veículos Automotores
//!
//! Ten base digits and one mod-11 check digit computed over the base read
//! right to left, with weights 2 through 9 cycling. Legacy nine- and
//! ten-digit numbers are left-padded with zeros to eleven digits before
//! validation.

use docbr_core::{mod11, DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Weight cycle applied to the reversed base.
pub const WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// RENAVAM family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::Renavam,
    base_len: 10,
    len: 11,
    input: InputLength::PadFrom(9),
    base: BaseRule::Uniform,
    scheme: Scheme::Renavam,
    alphabet: Alphabet::Digits,
    mask: None,
};

/// Check digit for a ten-digit base.
pub fn check_digit(base: &[u8]) -> u8 {
    let reversed: Vec<u8> = base.iter().rev().copied().collect();
    mod11(&reversed, &WEIGHTS)
}

/// Generate a random valid RENAVAM (always eleven digits).
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R) -> String {
    FAMILY.generate(rng, false)
}

/// Validate a RENAVAM, reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a valid RENAVAM.
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weights_apply_to_reversed_base() {
        // rightmost base digit gets weight 2, leftmost gets weight 3
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 1]), 9);
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 8);
        assert_eq!(check_digit(&[6, 3, 9, 8, 8, 0, 8, 8, 4, 6]), 9);
    }

    #[test]
    fn known_vectors() {
        assert!(validate("10000000008"));
        assert!(validate("63988088469"));
        assert!(!validate("63988088463"));
    }

    #[test]
    fn legacy_lengths_are_padded() {
        assert!(validate("00000000019"));
        assert!(validate("0000000019"));
        assert!(validate("000000019"));
        assert_eq!(
            check("19"),
            Err(DocumentError::WrongLength {
                expected: 11,
                found: 2
            })
        );
    }

    #[test]
    fn generated_renavams_validate() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let renavam = generate(&mut rng);
            assert_eq!(renavam.len(), 11);
            assert!(validate(&renavam), "{renavam}");
        }
    }
}
