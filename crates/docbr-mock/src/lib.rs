//! # docbr-mock — Composite Mock Records
//!
//! Assembles fixed-shape records for test fixtures: a [`Person`] (name,
//! CPF, RG), a [`Company`] (name, CNPJ, IE), a [`Vehicle`] (plate,
//! RENAVAM), a [`BankAccount`] and a [`CreditCard`]. Every document inside
//! a record validates on its own; the fields are independent draws.
//!
//! Records serialize with the Portuguese field names used by the rest of
//! the toolbox (`nome`, `placa`, `numero`, `banco`...).

pub mod names;
pub mod records;

pub use docbr_documents::BankAccount;
pub use records::{
    generate_bank_account, generate_company, generate_credit_card, generate_person,
    generate_vehicle, CreditCard, Company, Person, Vehicle,
};
