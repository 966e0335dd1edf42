//! # Plate Subcommand

use brdoc_core::{DocumentDomain, MessageResolver, Plate};
use clap::Args;

use crate::report::Report;

/// Arguments for the plate subcommand.
#[derive(Args, Debug)]
pub struct PlateArgs {
    /// Print the Mercosul form instead of the canonical one.
    #[arg(long)]
    pub mercosul: bool,

    /// Plates to check, e.g. `ABC-1234` or `ABC1D23`.
    #[arg(required = true)]
    pub values: Vec<String>,
}

/// Check each value as a plate.
pub fn run(args: &PlateArgs, resolver: &dyn MessageResolver) -> Vec<Report> {
    args.values
        .iter()
        .map(|value| {
            let result = if args.mercosul {
                Plate::convert_to_mercosul_with(value, resolver)
            } else {
                Plate::parse_with(value, resolver).map(|plate| plate.to_string())
            };
            Report::from_result(DocumentDomain::Plate, value, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brdoc_core::DefaultMessages;

    fn args(mercosul: bool, values: &[&str]) -> PlateArgs {
        PlateArgs {
            mercosul,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn formats_plates() {
        let reports = run(&args(false, &["abc1234", "ABC1D23", "ZZ"]), &DefaultMessages);
        assert_eq!(reports[0].formatted.as_deref(), Some("ABC-1234"));
        assert_eq!(reports[1].formatted.as_deref(), Some("ABC1D23"));
        assert!(!reports[2].valid);
    }

    #[test]
    fn converts_plates() {
        let reports = run(&args(true, &["ABC-1234", "ABC1D23"]), &DefaultMessages);
        assert_eq!(reports[0].formatted.as_deref(), Some("ABC1C34"));
        assert_eq!(reports[1].formatted.as_deref(), Some("ABC1D23"));
    }
}
