//! # Mock — `docbr mock <record>`
//!
//! Prints a composite record either as `field: value` lines or, with
//! `--json`, as a pretty-printed JSON object using the Portuguese field
//! names.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;

use docbr_core::DigitSource;
use docbr_mock::{
    generate_bank_account, generate_company, generate_credit_card, generate_person,
    generate_vehicle,
};

use crate::rng_for;

/// Which composite record to build.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockKind {
    /// Name, CPF and RG.
    Person,
    /// Company name, CNPJ and IE.
    Company,
    /// Plate and RENAVAM.
    Vehicle,
    /// Bank code, branch, account and digit.
    BankAccount,
    /// Luhn-valid card number.
    CreditCard,
}

/// Arguments for `docbr mock`.
#[derive(Args, Debug)]
pub struct MockArgs {
    /// Record to generate.
    #[arg(value_enum)]
    pub record: MockKind,

    /// Emit JSON.
    #[arg(long)]
    pub json: bool,

    /// Print bare digits instead of formatted documents.
    #[arg(long)]
    pub no_mask: bool,

    /// Seed for reproducible output.
    #[arg(long, env = "DOCBR_SEED")]
    pub seed: Option<u64>,
}

/// Execute the mock subcommand.
pub fn run_mock(args: &MockArgs) -> Result<u8> {
    let mut rng = rng_for(args.seed);
    let record = build_record(args.record, &mut rng, !args.no_mask)?;
    if args.json {
        let json = serde_json::to_string_pretty(&record).context("failed to serialize record")?;
        println!("{json}");
    } else {
        for line in render_lines(&record) {
            println!("{line}");
        }
    }
    Ok(0)
}

/// Build one record as a JSON value.
///
/// # Errors
///
/// Fails only if serialization of the record fails.
pub fn build_record<R: DigitSource + ?Sized>(
    kind: MockKind,
    rng: &mut R,
    masked: bool,
) -> Result<Value> {
    tracing::info!(?kind, masked, "building mock record");
    let value = match kind {
        MockKind::Person => serde_json::to_value(generate_person(rng, masked)),
        MockKind::Company => serde_json::to_value(generate_company(rng, masked)),
        MockKind::Vehicle => serde_json::to_value(generate_vehicle(rng)),
        MockKind::BankAccount => serde_json::to_value(generate_bank_account(rng)),
        MockKind::CreditCard => serde_json::to_value(generate_credit_card(rng, masked)),
    };
    value.context("failed to convert record")
}

/// `field: value` lines, sorted by field name.
pub fn render_lines(record: &Value) -> Vec<String> {
    match record.as_object() {
        Some(fields) => fields
            .iter()
            .map(|(key, value)| match value.as_str() {
                Some(s) => format!("{key}: {s}"),
                None => format!("{key}: {value}"),
            })
            .collect(),
        None => vec![record.to_string()],
    }
}
