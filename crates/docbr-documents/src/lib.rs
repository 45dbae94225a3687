//! # docbr-documents — Brazilian Document Families
//!
//! Generates and validates Brazilian identifier numbers. Each check-digit
//! document is a declarative [`Family`] record (base length, base rule,
//! check scheme, input alphabet, mask) driven by one shared engine, so the
//! generator and the validator of a family can never disagree about the
//! arithmetic.
//!
//! ## Usage
//!
//! ```
//! use docbr_documents::{families::cpf, DocumentKind};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let cpf = cpf::generate(&mut rng, true);
//! assert!(cpf::validate(&cpf));
//!
//! let kind: DocumentKind = "cnpj".parse().unwrap();
//! assert!(kind.validate("11.222.333/0001-81"));
//! ```
//!
//! ## Randomness
//!
//! Every generator takes `&mut R` with `R: DigitSource`. Any `rand::Rng`
//! works; [`docbr_core::SequenceSource`] replays scripted values for exact
//! assertions. [`generate_random`] is a convenience over `thread_rng`.

pub mod bank;
pub mod families;
pub mod family;
pub mod kind;
pub mod plate;
pub mod scheme;

pub use bank::BankAccount;
pub use family::{Alphabet, BaseRule, Family};
pub use kind::DocumentKind;
pub use scheme::Scheme;

pub use docbr_core::{apply_mask, CheckChar, DigitSource, DocumentError};

/// Generate one document of `kind` from `rng`.
pub fn generate<R: DigitSource + ?Sized>(kind: DocumentKind, rng: &mut R, masked: bool) -> String {
    kind.generate(rng, masked)
}

/// Generate one document of `kind` using the thread-local RNG.
pub fn generate_random(kind: DocumentKind, masked: bool) -> String {
    kind.generate(&mut rand::thread_rng(), masked)
}

/// Whether `raw` is a valid document of `kind`.
pub fn validate(kind: DocumentKind, raw: &str) -> bool {
    kind.validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_output_validates() {
        for kind in DocumentKind::all() {
            if kind.supports_validation() {
                let doc = generate_random(*kind, true);
                assert!(validate(*kind, &doc), "{kind}: {doc}");
            }
        }
    }

    #[test]
    fn known_vectors_through_dispatch() {
        assert!(validate(DocumentKind::Cpf, "11144477735"));
        assert!(!validate(DocumentKind::Cpf, "00000000000"));
        assert!(!validate(DocumentKind::Cnpj, "11111111111111"));
        assert!(validate(DocumentKind::CartaoCredito, "4539148803436467"));
    }
}
