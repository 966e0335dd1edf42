//! # brdoc-cli — Brazilian Document Command-Line Interface
//!
//! Validates and formats documents from the shell.
//!
//! ## Subcommands
//!
//! - `cpf` — Validate and format CPF numbers
//! - `cnpj` — Validate and format CNPJ numbers
//! - `plate` — Validate and format plates, optionally converting to Mercosul
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from the handlers.
//! - Handlers delegate to `brdoc-core` and return [`report::Report`]s; no
//!   document logic lives here.

pub mod document;
pub mod plate;
pub mod report;
