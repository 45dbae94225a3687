//! # Document Families — Declarative Records and the Shared Engine
//!
//! Every check-digit document is described by one [`Family`] value: how its
//! base digits are drawn, how many characters the finished document has,
//! which [`Scheme`] seals the base into a document, which characters survive
//! input cleaning, and which mask formats it. Adding a document type means
//! adding a record, not a new generate/validate pair.
//!
//! ## Validation pipeline
//!
//! 1. Clean: keep ASCII digits (and `X`/`x` for RG, upper-cased).
//! 2. Left-pad legacy short inputs when the family allows it (RENAVAM).
//! 3. Reject lengths outside [`InputLength`], misplaced letters, and
//!    single-digit repeats.
//! 4. Check structural fields of the base (Título state code).
//! 5. Re-seal the base and require the result to equal the input exactly.
//!
//! Steps 3 and 4 run before any checksum arithmetic.

use docbr_core::{
    apply_mask, digits_of, is_repeated, CheckChar, DigitSource, DocumentError,
};

use crate::kind::DocumentKind;
use crate::scheme::Scheme;

/// How the random base digits of a family are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseRule {
    /// Every base digit uniform in `0..=9`.
    Uniform,
    /// Uniform digits followed by a fixed suffix (CNPJ branch `0001`).
    FixedSuffix(&'static [u8]),
    /// Uniform digits followed by a two-digit state code in `01..=28`.
    StateCode,
}

/// Characters kept when cleaning user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// ASCII digits only.
    Digits,
    /// ASCII digits plus a trailing `X` check character.
    TrailingX,
}

/// Cleaned input lengths a family accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLength {
    /// Exactly the document length.
    Exact,
    /// Inputs from this length up to the document length; shorter ones are
    /// left-padded with zeros.
    PadFrom(usize),
    /// Any length in `min..=max`, unpadded. The check characters are the
    /// trailing ones, so the base is everything before them.
    Range(usize, usize),
}

/// Declarative description of one check-digit document family.
#[derive(Debug, Clone, Copy)]
pub struct Family {
    /// Which document this record describes.
    pub kind: DocumentKind,
    /// Number of base digits drawn by the generator.
    pub base_len: usize,
    /// Length of the finished, unmasked document.
    pub len: usize,
    /// Cleaned lengths accepted by the validator.
    pub input: InputLength,
    /// How base digits are drawn.
    pub base: BaseRule,
    /// Check-character computation.
    pub scheme: Scheme,
    /// Characters kept during cleaning.
    pub alphabet: Alphabet,
    /// Display template, `None` when the document has no standard mask.
    pub mask: Option<&'static str>,
}

impl Family {
    /// Draw a base for this family from `rng`.
    ///
    /// A base made of one repeated digit would seal into a document the
    /// validator refuses, so its first digit is shifted by one.
    pub fn draw_base<R: DigitSource + ?Sized>(&self, rng: &mut R) -> Vec<u8> {
        let mut base = self.draw_raw_base(rng);
        if is_repeated(&base) {
            if let Some(first) = base.first_mut() {
                *first = (*first + 1) % 10;
            }
        }
        base
    }

    fn draw_raw_base<R: DigitSource + ?Sized>(&self, rng: &mut R) -> Vec<u8> {
        match self.base {
            BaseRule::Uniform => rng.digits(self.base_len),
            BaseRule::FixedSuffix(suffix) => {
                let mut base = rng.digits(self.base_len.saturating_sub(suffix.len()));
                base.extend_from_slice(suffix);
                base
            }
            BaseRule::StateCode => {
                let mut base = rng.digits(self.base_len.saturating_sub(2));
                let code = rng.below(28) as u8 + 1;
                base.push(code / 10);
                base.push(code % 10);
                base
            }
        }
    }

    /// Generate a structurally valid document, optionally masked.
    pub fn generate<R: DigitSource + ?Sized>(&self, rng: &mut R, masked: bool) -> String {
        let base = self.draw_base(rng);
        let document = self.scheme.seal(&base);
        self.format(&document, masked)
    }

    /// Apply the family mask to an unmasked document when requested.
    pub fn format(&self, document: &str, masked: bool) -> String {
        match (masked, self.mask) {
            (true, Some(template)) => apply_mask(document, template),
            _ => document.to_string(),
        }
    }

    /// Reduce raw input to the characters this family keeps.
    pub fn clean(&self, raw: &str) -> String {
        raw.chars()
            .filter_map(|c| match c {
                '0'..='9' => Some(c),
                'X' | 'x' if self.alphabet == Alphabet::TrailingX => Some('X'),
                _ => None,
            })
            .collect()
    }

    /// Validate `raw`, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns the first [`DocumentError`] found by the pipeline described
    /// in the module documentation.
    pub fn check(&self, raw: &str) -> Result<(), DocumentError> {
        let result = self.check_clean(self.clean(raw));
        if let Err(error) = &result {
            tracing::debug!(kind = %self.kind, %error, "document rejected");
        }
        result
    }

    /// Shortest and longest cleaned input the validator accepts.
    pub fn accepted_lengths(&self) -> (usize, usize) {
        match self.input {
            InputLength::Exact => (self.len, self.len),
            InputLength::PadFrom(min) => (min, self.len),
            InputLength::Range(min, max) => (min, max),
        }
    }

    /// Validate `raw`. Never panics; any malformed input is simply invalid.
    pub fn validate(&self, raw: &str) -> bool {
        self.check(raw).is_ok()
    }

    fn check_clean(&self, mut clean: String) -> Result<(), DocumentError> {
        let (min, max) = self.accepted_lengths();
        if let InputLength::PadFrom(_) = self.input {
            if clean.len() >= min && clean.len() < self.len {
                clean = format!("{clean:0>width$}", width = self.len);
            }
        }
        let expected = match self.input {
            InputLength::Range(..) if clean.len() < min => Some(min),
            InputLength::Range(..) if clean.len() > max => Some(max),
            InputLength::Range(..) => None,
            _ => (clean.len() != self.len).then_some(self.len),
        };
        if let Some(expected) = expected {
            return Err(DocumentError::WrongLength {
                expected,
                found: clean.len(),
            });
        }
        if let Some(pos) = clean.find('X') {
            if pos + 1 != clean.len() {
                return Err(DocumentError::InvalidCharacter('X'));
            }
        }
        if is_repeated(clean.as_bytes()) {
            return Err(DocumentError::RepeatedDigits);
        }

        let base = self
            .scheme
            .base_of(&clean, clean.len().saturating_sub(self.len - self.base_len))
            .and_then(|s| digits_of(&s))
            .ok_or(DocumentError::InvalidCharacter('X'))?;
        self.scheme.check_base(&base)?;

        let expected = self.scheme.seal(&base);
        match expected
            .chars()
            .zip(clean.chars())
            .enumerate()
            .find(|(_, (e, f))| e != f)
        {
            None => Ok(()),
            Some((position, (e, f))) => Err(DocumentError::CheckDigitMismatch {
                position,
                expected: to_check(e),
                found: to_check(f),
            }),
        }
    }
}

fn to_check(c: char) -> CheckChar {
    CheckChar::from_char(c).unwrap_or(CheckChar::Digit(0))
}
