//! # Validate — `docbr validate <kind> <value>`
//!
//! Prints the Portuguese verdict (`CPF válido!`, `CNH inválida.`) and
//! exits `0` for a valid document, `2` for an invalid one. `--reason`
//! adds the rejection reason on a second line.

use anyhow::{bail, Result};
use clap::Args;

use docbr_documents::{DocumentError, DocumentKind};

use crate::EXIT_INVALID;

/// Arguments for `docbr validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document kind.
    pub kind: DocumentKind,

    /// Document to check; separators are ignored.
    pub value: String,

    /// Explain why the document was rejected.
    #[arg(long)]
    pub reason: bool,
}

/// Outcome of checking one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Portuguese result message.
    pub message: String,
    /// Rejection reason, `None` when valid.
    pub reason: Option<DocumentError>,
}

impl Verdict {
    /// Whether the document was accepted.
    pub fn is_valid(&self) -> bool {
        self.reason.is_none()
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let verdict = verdict(args.kind, &args.value)?;
    println!("{}", verdict.message);
    if let (true, Some(reason)) = (args.reason, &verdict.reason) {
        println!("reason: {reason}");
    }
    Ok(if verdict.is_valid() { 0 } else { EXIT_INVALID })
}

/// Check `value` as `kind`.
///
/// # Errors
///
/// Fails for kinds that have no validation rule (bank accounts).
pub fn verdict(kind: DocumentKind, value: &str) -> Result<Verdict> {
    if !kind.supports_validation() {
        bail!("{} documents cannot be validated", kind.label());
    }
    let reason = kind.check(value).err();
    Ok(Verdict {
        message: kind.validity_message(reason.is_none()),
        reason,
    })
}
