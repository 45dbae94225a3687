//! # Composite Records
//!
//! Each record bundles independently generated documents with a name drawn
//! from [`crate::names`]. Nothing ties the fields together: the CPF of a
//! [`Person`] has no relation to the name.

use docbr_core::DigitSource;
use docbr_documents::families::{card, cnpj, cpf, ie, renavam, rg};
use docbr_documents::{bank, plate, BankAccount};
use serde::{Deserialize, Serialize};

use crate::names::{COMPANY_SUFFIXES, FIRST_NAMES, LAST_NAMES};

/// A mock individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Full name.
    #[serde(rename = "nome")]
    pub name: String,
    /// CPF.
    pub cpf: String,
    /// RG (SP).
    pub rg: String,
}

/// A mock company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company name.
    #[serde(rename = "nome")]
    pub name: String,
    /// CNPJ (head-office branch).
    pub cnpj: String,
    /// Inscrição Estadual (SP).
    pub ie: String,
}

/// A mock vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Mercosul plate.
    #[serde(rename = "placa")]
    pub plate: String,
    /// RENAVAM.
    pub renavam: String,
}

/// A mock credit card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Sixteen-digit Luhn-valid number.
    #[serde(rename = "numero")]
    pub number: String,
}

fn pick_name<R: DigitSource + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    rng.pick(pool).copied().unwrap_or_default()
}

/// Generate a person: `"<first> <last>"`, a CPF and an RG.
pub fn generate_person<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> Person {
    let first = pick_name(rng, &FIRST_NAMES);
    let last = pick_name(rng, &LAST_NAMES);
    Person {
        name: format!("{first} {last}"),
        cpf: cpf::generate(rng, masked),
        rg: rg::generate(rng, masked),
    }
}

/// Generate a company: `"<surname> <suffix>"`, a CNPJ and an IE.
pub fn generate_company<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> Company {
    let stem = pick_name(rng, &LAST_NAMES);
    let suffix = pick_name(rng, &COMPANY_SUFFIXES);
    Company {
        name: format!("{stem} {suffix}"),
        cnpj: cnpj::generate(rng, masked),
        ie: ie::generate(rng, masked),
    }
}

/// Generate a vehicle: a Mercosul plate and a RENAVAM.
pub fn generate_vehicle<R: DigitSource + ?Sized>(rng: &mut R) -> Vehicle {
    Vehicle {
        plate: plate::generate(rng),
        renavam: renavam::generate(rng),
    }
}

/// Generate a bank account.
pub fn generate_bank_account<R: DigitSource + ?Sized>(rng: &mut R) -> BankAccount {
    bank::generate(rng)
}

/// Generate a credit card number.
pub fn generate_credit_card<R: DigitSource + ?Sized>(rng: &mut R, masked: bool) -> CreditCard {
    CreditCard {
        number: card::generate(rng, masked),
    }
}
