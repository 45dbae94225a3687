//! # Error Types — Document Rejection Reasons
//!
//! Validators in docbr are total: they answer `true` or `false` and never
//! panic. The `check` variants return a [`DocumentError`] instead, so a
//! caller that wants to tell the user *why* a number was refused (wrong
//! length versus bad check digit) can do so.
//!
//! ## Design
//!
//! - Structural failures (length, repeated digits, stray characters,
//!   out-of-range fields) are reported before any checksum arithmetic.
//! - Arithmetic failures carry the position and both characters so the
//!   mismatch can be shown without recomputing anything.

use thiserror::Error;

use crate::check::CheckChar;

/// Reason a document string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Cleaned input has the wrong number of characters.
    #[error("expected {expected} characters after cleaning, found {found}")]
    WrongLength {
        /// Required length of the unmasked document.
        expected: usize,
        /// Length actually found after cleaning.
        found: usize,
    },

    /// Every character of the document is the same digit.
    #[error("document is a single repeated digit")]
    RepeatedDigits,

    /// A character that cannot appear at its position.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    /// Título de Eleitor state code outside `01..=28`.
    #[error("state code {0:02} is outside 01-28")]
    StateCodeOutOfRange(u8),

    /// Recomputed check character differs from the one supplied.
    #[error("check character mismatch at position {position}: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// Zero-based index into the unmasked document.
        position: usize,
        /// Character recomputed from the base digits.
        expected: CheckChar,
        /// Character present in the input.
        found: CheckChar,
    },

    /// Identifier does not name a known document kind.
    #[error("unknown document kind: {0:?}")]
    UnknownKind(String),

    /// The document kind has no such operation (e.g. validating a bank account).
    #[error("{kind} does not support {operation}")]
    Unsupported {
        /// Kind identifier.
        kind: &'static str,
        /// Operation that was requested.
        operation: &'static str,
    },
}
