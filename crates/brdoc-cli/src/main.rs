//! # brdoc CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use brdoc_cli::{document, plate, report};
use brdoc_core::MessageCatalog;
use clap::Parser;

/// Brazilian document toolkit.
///
/// Validates and formats CPF and CNPJ numbers and vehicle plates, and
/// converts legacy plates to the Mercosul layout.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about)]
struct Cli {
    /// Directory holding cpf.json, cnpj.json and plate.json message catalogs.
    #[arg(long, global = true)]
    messages: Option<PathBuf>,

    /// Print one JSON report per value.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate and format CPF numbers.
    Cpf(document::DocumentArgs),
    /// Validate and format CNPJ numbers.
    Cnpj(document::DocumentArgs),
    /// Validate and format plates.
    Plate(plate::PlateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.messages {
        Some(dir) => {
            let catalog = MessageCatalog::load_dir(dir)?;
            tracing::info!(dir = %dir.display(), entries = catalog.len(), "loaded message catalogs");
            catalog
        }
        None => MessageCatalog::new(),
    };

    let reports = match &cli.command {
        Commands::Cpf(args) => document::run_cpf(args, &catalog),
        Commands::Cnpj(args) => document::run_cnpj(args, &catalog),
        Commands::Plate(args) => plate::run(args, &catalog),
    };

    report::emit(&reports, cli.json, &mut std::io::stdout().lock())?;
    report::ensure_all_valid(&reports)
}
