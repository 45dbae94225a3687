//! # Credit Card (Luhn)
//!
//! Fifteen random digits followed by the Luhn complement digit, giving a
//! sixteen-digit number whose Luhn total is a multiple of ten.
//!
//! Validation accepts any card length from 13 to 19 digits (Visa 13 and 16,
//! Amex 15, ...) and only asks that the trailing digit complete the Luhn
//! total.

use docbr_core::{luhn_check_digit, DigitSource, DocumentError};

use crate::family::{Alphabet, BaseRule, Family, InputLength};
use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// Shortest card number accepted by the validator.
pub const MIN_LEN: usize = 13;

/// Longest card number accepted by the validator.
pub const MAX_LEN: usize = 19;

/// Display template.
pub const MASK: &str = "#### #### #### ####";

/// Credit-card family record.
pub static FAMILY: Family = Family {
    kind: DocumentKind::CartaoCredito,
    base_len: 15,
    len: 16,
    input: InputLength::Range(MIN_LEN, MAX_LEN),
    base: BaseRule::Uniform,
    scheme: Scheme::Luhn,
    alphabet: Alphabet::Digits,
    mask: Some(MASK),
};

/// Luhn check digit completing `payload`.
pub fn check_digit(payload: &[u8]) -> u8 {
    luhn_check_digit(payload)
}

/// Generate a random sixteen-digit number passing the Luhn check.
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> String {
    FAMILY.generate(rng, masked)
}

/// Validate a card number, reporting the rejection reason.
///
/// # Errors
///
/// See [`Family::check`].
pub fn check(raw: &str) -> Result<(), DocumentError> {
    FAMILY.check(raw)
}

/// Whether `raw` is a 13 to 19 digit number passing the Luhn check.
pub fn validate(raw: &str) -> bool {
    FAMILY.validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::Index;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn known_test_card() {
        assert!(validate("4539148803436467"));
        assert!(validate("4539 1488 0343 6467"));
    }

    #[test]
    fn single_digit_change_detected() {
        let valid = "4539148803436467";
        for pos in 0..valid.len() {
            let original = valid.as_bytes()[pos];
            let mut flipped = 0;
            for replacement in b'0'..=b'9' {
                if replacement == original {
                    continue;
                }
                let mut bytes = valid.as_bytes().to_vec();
                bytes[pos] = replacement;
                if !validate(std::str::from_utf8(&bytes).unwrap()) {
                    flipped += 1;
                }
            }
            assert_eq!(flipped, 9, "every single-digit substitution at {pos} must fail");
        }
    }

    #[test]
    fn other_card_lengths_accepted() {
        assert!(validate("378282246310005"));
        assert!(validate("3782 822463 10005"));
        assert!(validate("4222222222222"));
        assert!(validate("4111111111111111"));
        assert!(validate("1234567890123456785"));
    }

    #[test]
    fn lengths_outside_range_rejected() {
        assert_eq!(
            check("123456789015"),
            Err(DocumentError::WrongLength {
                expected: 13,
                found: 12
            })
        );
        assert_eq!(
            check("12345678901234567894"),
            Err(DocumentError::WrongLength {
                expected: 19,
                found: 20
            })
        );
    }

    #[test]
    fn repeated_digits_rejected_at_any_length() {
        assert_eq!(check("0000000000000"), Err(DocumentError::RepeatedDigits));
        assert_eq!(check(&"0".repeat(19)), Err(DocumentError::RepeatedDigits));
    }

    #[test]
    fn exactly_one_appended_digit_passes() {
        let passing: Vec<u8> = (0..=9)
            .filter(|d| validate(&format!("4539148803436467{d}")))
            .collect();
        assert_eq!(passing, vec![8]);
    }

    #[test]
    fn mismatch_points_at_last_digit() {
        assert_eq!(
            check("378282246310006"),
            Err(DocumentError::CheckDigitMismatch {
                position: 14,
                expected: docbr_core::CheckChar::Digit(5),
                found: docbr_core::CheckChar::Digit(6),
            })
        );
    }

    #[test]
    fn generated_cards_validate() {
        let mut rng = StdRng::seed_from_u64(16);
        for _ in 0..500 {
            let card = generate(&mut rng, true);
            assert_eq!(card.len(), 19);
            assert!(validate(&card), "{card}");
        }
    }

    proptest! {
        /// Any payload of 12 to 18 digits plus its Luhn digit validates.
        #[test]
        fn any_length_payload_validates(payload in "[0-9]{12,18}") {
            prop_assume!(!docbr_core::is_repeated(payload.as_bytes()));
            let digits = docbr_core::digits_of(&payload).unwrap();
            let number = format!("{payload}{}", check_digit(&digits));
            prop_assert!(validate(&number), "{}", number);
        }

        /// Every single-digit substitution is caught.
        #[test]
        fn substitution_anywhere_rejected(
            seed in any::<u64>(),
            at in any::<Index>(),
            delta in 1u8..=9,
        ) {
            let number = generate(&mut StdRng::seed_from_u64(seed), false);
            let pos = at.index(number.len());
            let mut bytes = number.into_bytes();
            bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
            let mutated = String::from_utf8(bytes).unwrap();
            prop_assert!(!validate(&mutated), "{}", mutated);
        }
    }
}
