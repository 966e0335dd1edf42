//! # CPF and CNPJ Subcommands
//!
//! Both subcommands take one or more values, formatted or bare, and report
//! the canonical punctuated form of each valid one.

use brdoc_core::{Cnpj, Cpf, DocumentDomain, MessageResolver};
use clap::Args;

use crate::report::Report;

/// Arguments for the cpf and cnpj subcommands.
#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Values to check, e.g. `206.662.564-70` or `20666256470`.
    #[arg(required = true)]
    pub values: Vec<String>,
}

/// Check each value as a CPF.
pub fn run_cpf(args: &DocumentArgs, resolver: &dyn MessageResolver) -> Vec<Report> {
    args.values
        .iter()
        .map(|value| {
            let result = Cpf::parse_with(value, resolver).map(|cpf| cpf.to_string());
            Report::from_result(DocumentDomain::Cpf, value, result)
        })
        .collect()
}

/// Check each value as a CNPJ.
pub fn run_cnpj(args: &DocumentArgs, resolver: &dyn MessageResolver) -> Vec<Report> {
    args.values
        .iter()
        .map(|value| {
            let result = Cnpj::parse_with(value, resolver).map(|cnpj| cnpj.to_string());
            Report::from_result(DocumentDomain::Cnpj, value, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brdoc_core::{DefaultMessages, MessageCatalog, MessageKey};

    fn args(values: &[&str]) -> DocumentArgs {
        DocumentArgs {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn cpf_reports() {
        let reports = run_cpf(&args(&["20666256470", "206.662.564-71"]), &DefaultMessages);
        assert_eq!(reports[0].formatted.as_deref(), Some("206.662.564-70"));
        assert!(!reports[1].valid);
    }

    #[test]
    fn cnpj_reports() {
        let reports = run_cnpj(&args(&["86551487000116"]), &DefaultMessages);
        assert_eq!(reports[0].domain, DocumentDomain::Cnpj);
        assert_eq!(reports[0].formatted.as_deref(), Some("86.551.487/0001-16"));
    }

    #[test]
    fn catalog_messages_reach_reports() {
        let mut catalog = MessageCatalog::new();
        catalog.insert(DocumentDomain::Cnpj, MessageKey::ImplicitStringOperator, "CNPJ inválido");
        let reports = run_cnpj(&args(&["0"]), &catalog);
        assert_eq!(reports[0].error.as_deref(), Some("invalid cnpj format: CNPJ inválido"));
    }
}
