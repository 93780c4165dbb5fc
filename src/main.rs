//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use mlb_sandbox::{
    catalog::Catalog,
    cli::{CatalogArgs, Commands, MlbSandbox},
    commands::{
        bench::handle_bench, build::handle_build, eligible::handle_eligible,
        matchup::handle_matchup, resolve_catalog_path,
    },
};

fn load_catalog(args: CatalogArgs) -> anyhow::Result<Catalog> {
    let path = resolve_catalog_path(args.catalog)?;
    Catalog::from_path(&path)
        .with_context(|| format!("failed to load catalog from {}", path.display()))
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mlb_sandbox=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app = MlbSandbox::parse();

    match app.command {
        Commands::Eligible { position } => handle_eligible(&position),

        Commands::Build {
            catalog,
            json,
            steps,
        } => {
            let catalog = load_catalog(catalog)?;
            handle_build(&catalog, &steps, json)?
        }

        Commands::Bench {
            catalog,
            team,
            position,
            name,
            json,
        } => {
            let catalog = load_catalog(catalog)?;
            handle_bench(&catalog, team, &position, &name, json)?
        }

        Commands::Matchup {
            catalog,
            left,
            right,
            json,
        } => {
            let catalog = load_catalog(catalog)?;
            handle_matchup(&catalog, &left, &right, json)?
        }
    }

    Ok(())
}
