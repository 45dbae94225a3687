//! # Check-Character Schemes
//!
//! A [`Scheme`] turns base digits into a finished unmasked document
//! ("sealing") and knows where the base digits sit inside a finished
//! document. The arithmetic for each scheme lives in its family module;
//! this enum only dispatches.

use docbr_core::{mod11, render_digits, DocumentError};

use crate::families::{card, certidao, cnh, ie, renavam, rg, titulo};

/// Check-character computation for one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Chained weighted mod-11: each weight vector yields one digit computed
    /// over the base plus every digit appended before it (CPF, CNPJ, PIS).
    Mod11Chain(&'static [&'static [u32]]),
    /// RG (SP): one mod-11 character that may be `X`.
    RgSp,
    /// CNH: two digits with a penalty carried from the first into the second.
    Cnh,
    /// Título de Eleitor: base(8) + state(2), two digits.
    Titulo,
    /// RENAVAM: mod-11 over the reversed base.
    Renavam,
    /// Inscrição Estadual (SP): first digit interleaved at position 8.
    IeSp,
    /// Luhn complement digit.
    Luhn,
    /// Certidão: mod-97 field followed by a mod-11 digit.
    Certidao,
}

impl Scheme {
    /// Build the unmasked document for `base`.
    pub fn seal(&self, base: &[u8]) -> String {
        match self {
            Self::Mod11Chain(chain) => {
                let mut digits = base.to_vec();
                for weights in chain.iter() {
                    let next = mod11(&digits, weights);
                    digits.push(next);
                }
                render_digits(&digits)
            }
            Self::RgSp => {
                let mut out = render_digits(base);
                out.push(rg::check_char(base).as_char());
                out
            }
            Self::Cnh => {
                let [d1, d2] = cnh::check_digits(base);
                let mut digits = base.to_vec();
                digits.extend([d1, d2]);
                render_digits(&digits)
            }
            Self::Titulo => {
                let [d1, d2] = titulo::check_digits(base);
                let mut digits = base.to_vec();
                digits.extend([d1, d2]);
                render_digits(&digits)
            }
            Self::Renavam => {
                let mut digits = base.to_vec();
                digits.push(renavam::check_digit(base));
                render_digits(&digits)
            }
            Self::IeSp => render_digits(&ie::seal(base)),
            Self::Luhn => {
                let mut digits = base.to_vec();
                digits.push(card::check_digit(base));
                render_digits(&digits)
            }
            Self::Certidao => {
                let (field, last) = certidao::check_digits(base);
                let mut digits = base.to_vec();
                digits.extend([field / 10, field % 10, last]);
                render_digits(&digits)
            }
        }
    }

    /// Extract the base characters from a cleaned document of full length.
    pub fn base_of(&self, document: &str, base_len: usize) -> Option<String> {
        match self {
            Self::IeSp => ie::base_of(document),
            _ => document.get(..base_len).map(str::to_string),
        }
    }

    /// Reject bases whose structural fields are out of range.
    ///
    /// # Errors
    ///
    /// [`DocumentError::StateCodeOutOfRange`] for a Título de Eleitor whose
    /// state code is not in `01..=28`.
    pub fn check_base(&self, base: &[u8]) -> Result<(), DocumentError> {
        match self {
            Self::Titulo => titulo::check_state_code(base),
            _ => Ok(()),
        }
    }
}
