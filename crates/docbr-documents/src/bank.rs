//! # Bank Account
//!
//! A random `bank / branch / account-digit` triple. The bank code comes
//! from a fixed pool of large Brazilian banks; branch, account and digit are
//! uniform digits. No check-digit scheme is applied, since each bank uses
//! its own.

use docbr_core::{render_digits, DigitSource};
use serde::{Deserialize, Serialize};

/// Bank codes drawn by the generator: Banco do Brasil, Bradesco, Itaú,
/// Caixa, Santander.
pub const BANK_CODES: [&str; 5] = ["001", "237", "341", "104", "033"];

/// A generated bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Three-digit bank code.
    #[serde(rename = "banco")]
    pub bank: String,
    /// Four-digit branch (agência).
    #[serde(rename = "agencia")]
    pub branch: String,
    /// Eight-digit account number.
    #[serde(rename = "conta")]
    pub account: String,
    /// Single account digit.
    #[serde(rename = "digito")]
    pub digit: String,
}

impl std::fmt::Display for BankAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} / {}-{}",
            self.bank, self.branch, self.account, self.digit
        )
    }
}

/// Generate a random bank account.
pub fn generate<R: DigitSource + ?Sized>(rng: &mut R) -> BankAccount {
    let bank = rng.pick(&BANK_CODES).copied().unwrap_or(BANK_CODES[0]);
    BankAccount {
        bank: bank.to_string(),
        branch: render_digits(&rng.digits(4)),
        account: render_digits(&rng.digits(8)),
        digit: render_digits(&[rng.digit()]),
    }
}
