//! `curio` — operate on a catalog snapshot file from the command line.
//!
//! The snapshot path comes from `--catalog` or `CURIO_CATALOG_PATH`. Commands
//! that change the catalog write the new snapshot back to the same file.

mod commands;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use commands::Command;

pub const CATALOG_PATH_VAR: &str = "CURIO_CATALOG_PATH";

#[derive(Debug, Parser)]
#[command(name = "curio")]
#[command(about = "Curate a company catalog out of a reference product library")]
struct Cli {
    /// Catalog snapshot (JSON) to read and, for mutating commands, rewrite.
    #[arg(long, global = true, env = CATALOG_PATH_VAR)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn catalog_path(&self) -> anyhow::Result<&Path> {
        self.catalog
            .as_deref()
            .with_context(|| format!("no catalog path given (use --catalog or {CATALOG_PATH_VAR})"))
    }
}

fn main() -> anyhow::Result<()> {
    curio_observability::init();

    let cli = Cli::parse();
    let path = cli.catalog_path()?;

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog at {path:?}"))?;
    let snapshot = curio_catalog::CatalogSnapshot::from_json(&raw)
        .with_context(|| format!("invalid catalog at {path:?}"))?;
    let mut catalog = curio_catalog::Catalog::from_snapshot(snapshot)?;

    let outcome = commands::run(&mut catalog, &cli.command)?;

    if outcome.changed {
        let json = catalog.to_snapshot().to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write catalog to {path:?}"))?;
        tracing::info!(path = ?path, "catalog written");
    }

    println!("{}", serde_json::to_string_pretty(&outcome.output)?);
    Ok(())
}
