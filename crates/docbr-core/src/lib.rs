//! # docbr-core — Check-Digit Primitives
//!
//! Leaf crate of the docbr workspace. Everything here is pure arithmetic
//! over digit sequences; the document families in `docbr-documents` are
//! built entirely on top of these pieces.
//!
//! ## Contents
//!
//! - [`mask`] — template-driven separator insertion (`#` = digit slot) and
//!   the inverse digit extraction.
//! - [`checksum`] — weighted mod-11, mod-97 and Luhn reducers.
//! - [`check`] — [`CheckChar`], the tagged check character (`0`-`9` or `X`).
//! - [`random`] — [`DigitSource`], the randomness provider threaded through
//!   every generator so tests can replay exact sequences.
//! - [`error`] — [`DocumentError`], the rejection reasons surfaced by
//!   validators.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `docbr-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod check;
pub mod checksum;
pub mod error;
pub mod mask;
pub mod random;

pub use check::CheckChar;
pub use checksum::{
    is_repeated, luhn_check_digit, luhn_sum, luhn_valid, mod11, mod11_remainder, mod97,
    mod97_check, weighted_sum,
};
pub use error::DocumentError;
pub use mask::{apply_mask, digits_of, placeholder_count, render_digits, unmask, PLACEHOLDER};
pub use random::{DigitSource, SequenceSource};
