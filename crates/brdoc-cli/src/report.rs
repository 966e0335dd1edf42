//! # Per-Value Reports
//!
//! Every value handed to a subcommand yields one [`Report`], printed either
//! as a plain line or as a JSON object.

use std::io::Write;

use brdoc_core::{DocumentDomain, DocumentError};
use serde::Serialize;

/// Outcome of checking a single input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Document family the value was checked as.
    pub domain: DocumentDomain,
    /// The value as given on the command line.
    pub input: String,
    /// Whether the value was accepted.
    pub valid: bool,
    /// Canonical (or converted) form, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Error message, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Build a report from the outcome of a core operation.
    pub fn from_result(
        domain: DocumentDomain,
        input: &str,
        result: Result<String, DocumentError>,
    ) -> Self {
        match result {
            Ok(formatted) => Self {
                domain,
                input: input.to_string(),
                valid: true,
                formatted: Some(formatted),
                error: None,
            },
            Err(err) => Self {
                domain,
                input: input.to_string(),
                valid: false,
                formatted: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Write reports to `out`, one per line.
pub fn emit(reports: &[Report], json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    for report in reports {
        if json {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        } else if let Some(formatted) = &report.formatted {
            writeln!(out, "{formatted}")?;
        } else {
            writeln!(
                out,
                "{}: {}",
                report.input,
                report.error.as_deref().unwrap_or("invalid")
            )?;
        }
    }
    Ok(())
}

/// Fail if any report is invalid.
pub fn ensure_all_valid(reports: &[Report]) -> anyhow::Result<()> {
    let invalid = reports.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        anyhow::bail!("{invalid} of {} value(s) invalid", reports.len());
    }
    Ok(())
}
