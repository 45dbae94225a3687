//! # Degenerate Inputs
//!
//! Validators are total: empty strings, wrong lengths, single-digit
//! repeats and arbitrary text are rejected without panicking.

use docbr_documents::{DocumentError, DocumentKind};
use proptest::prelude::*;
use proptest::sample::select;

#[test]
fn repeated_digits_rejected_for_every_family() {
    for kind in DocumentKind::all() {
        let Some(family) = kind.family() else { continue };
        for d in 0..=9 {
            let doc = d.to_string().repeat(family.len);
            assert_eq!(
                kind.check(&doc),
                Err(DocumentError::RepeatedDigits),
                "{kind} accepted {doc}"
            );
        }
    }
}

#[test]
fn empty_input_rejected() {
    for kind in DocumentKind::all() {
        assert!(!kind.validate(""), "{kind}");
        assert!(!kind.validate("   ...--//"), "{kind}");
    }
}

#[test]
fn length_errors_report_expected_length() {
    for kind in DocumentKind::all() {
        let Some(family) = kind.family() else { continue };
        let (min, max) = family.accepted_lengths();
        let long = "1".repeat(max + 1);
        assert_eq!(
            kind.check(&long),
            Err(DocumentError::WrongLength {
                expected: max,
                found: max + 1,
            }),
            "{kind}"
        );
        let short = "1".repeat(min - 1);
        assert!(
            matches!(kind.check(&short), Err(DocumentError::WrongLength { found, .. }) if found == min - 1),
            "{kind}"
        );
    }
}

#[test]
fn letters_other_than_x_are_dropped() {
    // "abc" never reaches the length check as characters.
    assert!(DocumentKind::Cpf.validate("abc111.444.777-35"));
    assert!(!DocumentKind::Cpf.validate("111.444.777-3X"));
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(
        kind in select(DocumentKind::all().to_vec()),
        raw in ".{0,64}",
    ) {
        let _ = kind.validate(&raw);
    }

    #[test]
    fn arbitrary_digit_strings_never_panic(
        kind in select(DocumentKind::all().to_vec()),
        raw in "[0-9Xx]{0,40}",
    ) {
        let _ = kind.check(&raw);
    }
}
