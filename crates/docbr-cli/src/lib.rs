//! # docbr-cli — Command-Line Front End
//!
//! Provides the `docbr` binary over the generator and validator library.
//!
//! ## Subcommands
//!
//! - `docbr generate` — Produce one or more documents of a kind.
//! - `docbr validate` — Check a document and print the Portuguese verdict.
//! - `docbr mock` — Assemble a composite record (person, company, ...).
//! - `docbr list` — Show every document kind with its capabilities.
//!
//! ```bash
//! docbr generate cpf --count 5
//! docbr validate cnpj 11.222.333/0001-81
//! docbr mock person --json --seed 42
//! DOCBR_SEED=7 docbr generate renavam
//! ```
//!
//! ## Exit codes
//!
//! `0` success or valid document, `1` error, `2` invalid document.

pub mod generate;
pub mod list;
pub mod mock;
pub mod validate;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Exit code for a document that failed validation.
pub const EXIT_INVALID: u8 = 2;

/// Build the random source for a command: seeded when a seed was given,
/// otherwise from OS entropy.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
