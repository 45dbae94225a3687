//! # List — `docbr list`
//!
//! Shows every document kind with its label and what the toolbox can do
//! with it.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use docbr_documents::DocumentKind;

/// Arguments for `docbr list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// One row of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindInfo {
    /// Kind identifier.
    pub kind: DocumentKind,
    /// Portuguese display label.
    pub label: &'static str,
    /// Display template, if the kind has one.
    pub mask: Option<&'static str>,
    /// Whether `docbr validate` accepts this kind.
    pub validates: bool,
}

/// Catalogue rows in display order.
pub fn catalogue() -> Vec<KindInfo> {
    DocumentKind::all()
        .iter()
        .map(|kind| KindInfo {
            kind: *kind,
            label: kind.label(),
            mask: kind.family().and_then(|f| f.mask),
            validates: kind.supports_validation(),
        })
        .collect()
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs) -> Result<u8> {
    let rows = catalogue();
    if args.json {
        let json = serde_json::to_string_pretty(&rows).context("failed to serialize catalogue")?;
        println!("{json}");
        return Ok(0);
    }
    println!("{:<10} {:<26} {:<40} validate", "kind", "label", "mask");
    for row in &rows {
        println!(
            "{:<10} {:<26} {:<40} {}",
            row.kind.as_str(),
            row.label,
            row.mask.unwrap_or("-"),
            if row.validates { "yes" } else { "no" }
        );
    }
    println!();
    println!("Total: {} kinds", rows.len());
    Ok(0)
}
