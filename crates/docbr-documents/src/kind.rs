//! # Document Kinds — Single Catalogue
//!
//! [`DocumentKind`] is the one enum naming every document docbr can produce
//! or check. Front ends select a kind, then call [`DocumentKind::generate`]
//! or [`DocumentKind::validate`]; every `match` on the enum is exhaustive,
//! so adding a kind forces each dispatch site to handle it.
//!
//! Identifiers (`as_str`) are the snake-case names used on the command line
//! and in serialized output. Labels are the Portuguese display names.

use std::str::FromStr;

use docbr_core::{DigitSource, DocumentError};
use serde::{Deserialize, Serialize};

use crate::families::{card, certidao, cnh, cnpj, cpf, ie, pis, renavam, rg, titulo};
use crate::family::Family;
use crate::{bank, plate};

/// Every document kind docbr knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas.
    #[serde(rename = "cpf")]
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica.
    #[serde(rename = "cnpj")]
    Cnpj,
    /// Registro Geral, São Paulo.
    #[serde(rename = "rg_sp")]
    RgSp,
    /// Carteira Nacional de Habilitação.
    #[serde(rename = "cnh")]
    Cnh,
    /// Título de Eleitor.
    #[serde(rename = "titulo")]
    TituloEleitor,
    /// PIS/PASEP.
    #[serde(rename = "pis")]
    Pis,
    /// RENAVAM.
    #[serde(rename = "renavam")]
    Renavam,
    /// Mercosul vehicle plate.
    #[serde(rename = "placa")]
    Placa,
    /// Inscrição Estadual, São Paulo.
    #[serde(rename = "ie_sp")]
    IeSp,
    /// Credit card number (Luhn).
    #[serde(rename = "cartao")]
    CartaoCredito,
    /// Bank account (bank / branch / account-digit).
    #[serde(rename = "conta")]
    ContaBancaria,
    /// Civil-registry certificate number.
    #[serde(rename = "certidao")]
    Certidao,
}

impl DocumentKind {
    /// All kinds in display order.
    pub fn all() -> &'static [DocumentKind] {
        &[
            Self::Cpf,
            Self::Cnpj,
            Self::RgSp,
            Self::Cnh,
            Self::TituloEleitor,
            Self::Pis,
            Self::Renavam,
            Self::Placa,
            Self::IeSp,
            Self::CartaoCredito,
            Self::ContaBancaria,
            Self::Certidao,
        ]
    }

    /// Snake-case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::RgSp => "rg_sp",
            Self::Cnh => "cnh",
            Self::TituloEleitor => "titulo",
            Self::Pis => "pis",
            Self::Renavam => "renavam",
            Self::Placa => "placa",
            Self::IeSp => "ie_sp",
            Self::CartaoCredito => "cartao",
            Self::ContaBancaria => "conta",
            Self::Certidao => "certidao",
        }
    }

    /// Portuguese display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::RgSp => "RG (SP)",
            Self::Cnh => "CNH",
            Self::TituloEleitor => "Título de Eleitor",
            Self::Pis => "PIS/PASEP",
            Self::Renavam => "RENAVAM",
            Self::Placa => "Placa (Mercosul)",
            Self::IeSp => "Inscrição Estadual (SP)",
            Self::CartaoCredito => "Cartão de Crédito",
            Self::ContaBancaria => "Conta Bancária",
            Self::Certidao => "Certidão Civil",
        }
    }

    /// Whether the label takes feminine agreement in Portuguese.
    fn is_feminine(&self) -> bool {
        matches!(
            self,
            Self::Cnh | Self::Placa | Self::IeSp | Self::ContaBancaria | Self::Certidao
        )
    }

    /// Portuguese result message, e.g. `"CPF válido!"` or `"CNH inválida."`.
    pub fn validity_message(&self, valid: bool) -> String {
        let suffix = if self.is_feminine() { "a" } else { "o" };
        if valid {
            format!("{} válid{suffix}!", self.label())
        } else {
            format!("{} inválid{suffix}.", self.label())
        }
    }

    /// Check-digit family record, `None` for kinds without check digits.
    pub fn family(&self) -> Option<&'static Family> {
        match self {
            Self::Cpf => Some(&cpf::FAMILY),
            Self::Cnpj => Some(&cnpj::FAMILY),
            Self::RgSp => Some(&rg::FAMILY),
            Self::Cnh => Some(&cnh::FAMILY),
            Self::TituloEleitor => Some(&titulo::FAMILY),
            Self::Pis => Some(&pis::FAMILY),
            Self::Renavam => Some(&renavam::FAMILY),
            Self::IeSp => Some(&ie::FAMILY),
            Self::CartaoCredito => Some(&card::FAMILY),
            Self::Certidao => Some(&certidao::FAMILY),
            Self::Placa | Self::ContaBancaria => None,
        }
    }

    /// Whether [`DocumentKind::check`] can do anything other than refuse.
    pub fn supports_validation(&self) -> bool {
        !matches!(self, Self::ContaBancaria)
    }

    /// Whether `masked = true` changes the generated output.
    pub fn has_mask(&self) -> bool {
        self.family().is_some_and(|f| f.mask.is_some())
    }

    /// Generate one document of this kind.
    pub fn generate<R: DigitSource + ?Sized>(&self, rng: &mut R, masked: bool) -> String {
        match self {
            Self::Cpf => cpf::FAMILY.generate(rng, masked),
            Self::Cnpj => cnpj::FAMILY.generate(rng, masked),
            Self::RgSp => rg::FAMILY.generate(rng, masked),
            Self::Cnh => cnh::FAMILY.generate(rng, masked),
            Self::TituloEleitor => titulo::FAMILY.generate(rng, masked),
            Self::Pis => pis::FAMILY.generate(rng, masked),
            Self::Renavam => renavam::FAMILY.generate(rng, masked),
            Self::IeSp => ie::FAMILY.generate(rng, masked),
            Self::CartaoCredito => card::FAMILY.generate(rng, masked),
            Self::Certidao => certidao::FAMILY.generate(rng, masked),
            Self::Placa => plate::generate(rng),
            Self::ContaBancaria => bank::generate(rng).to_string(),
        }
    }

    /// Validate `raw` as this kind, reporting the rejection reason.
    ///
    /// # Errors
    ///
    /// The family-specific [`DocumentError`], or
    /// [`DocumentError::Unsupported`] for bank accounts.
    pub fn check(&self, raw: &str) -> Result<(), DocumentError> {
        match self {
            Self::Cpf => cpf::FAMILY.check(raw),
            Self::Cnpj => cnpj::FAMILY.check(raw),
            Self::RgSp => rg::FAMILY.check(raw),
            Self::Cnh => cnh::FAMILY.check(raw),
            Self::TituloEleitor => titulo::FAMILY.check(raw),
            Self::Pis => pis::FAMILY.check(raw),
            Self::Renavam => renavam::FAMILY.check(raw),
            Self::IeSp => ie::FAMILY.check(raw),
            Self::CartaoCredito => card::FAMILY.check(raw),
            Self::Certidao => certidao::FAMILY.check(raw),
            Self::Placa => plate::check(raw),
            Self::ContaBancaria => Err(DocumentError::Unsupported {
                kind: self.as_str(),
                operation: "validation",
            }),
        }
    }

    /// Whether `raw` is a valid document of this kind.
    pub fn validate(&self, raw: &str) -> bool {
        self.check(raw).is_ok()
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    /// Parse an identifier. Matching ignores ASCII case; `rg`, `ie`,
    /// `titulo_eleitor`, `cartao_credito`, `luhn` and `conta_bancaria` are
    /// accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "rg_sp" | "rg" => Ok(Self::RgSp),
            "cnh" => Ok(Self::Cnh),
            "titulo" | "titulo_eleitor" => Ok(Self::TituloEleitor),
            "pis" | "pasep" => Ok(Self::Pis),
            "renavam" => Ok(Self::Renavam),
            "placa" => Ok(Self::Placa),
            "ie_sp" | "ie" => Ok(Self::IeSp),
            "cartao" | "cartao_credito" | "luhn" => Ok(Self::CartaoCredito),
            "conta" | "conta_bancaria" => Ok(Self::ContaBancaria),
            "certidao" => Ok(Self::Certidao),
            _ => Err(DocumentError::UnknownKind(s.to_string())),
        }
    }
}
