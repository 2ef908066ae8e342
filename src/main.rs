use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use linemap::catalog::{Catalog, TileSet};
use linemap::config::ResolverConfig;
use linemap::logging::setup_logging;
use linemap::map::document::MapDocument;

#[derive(Parser, Debug)]
#[command(name = "linemap")]
#[command(about = "Resolve robot routes across tile-based competition maps")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the route of a map document and print the annotated document
    Resolve {
        /// Path to the map JSON document
        map: PathBuf,

        /// Tile-type catalog JSON to use instead of the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// List the tile types of a catalog
    Catalog {
        /// Tile-type catalog JSON to use instead of the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the default tile set as JSON
    TileSet,
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("Could not read catalog {}", path.display()))?;
            Catalog::from_json(&json).with_context(|| format!("Invalid catalog {}", path.display()))
        }
        None => Ok(Catalog::seeded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ResolverConfig::load().context("Could not load configuration")?;
    setup_logging(config.log_format);

    match cli.command {
        Command::Resolve { map, catalog, pretty } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let json = fs::read_to_string(&map).with_context(|| format!("Could not read map {}", map.display()))?;
            let mut document = MapDocument::from_json(&json).with_context(|| format!("Invalid map {}", map.display()))?;
            let summary = document
                .resolve(&catalog, &config)
                .with_context(|| format!("Could not resolve {}", map.display()))?;
            info!(map = %document.name, outcome = ?summary.outcome, steps = summary.steps, "Resolved");

            let output = if pretty {
                serde_json::to_string_pretty(&document)?
            } else {
                serde_json::to_string(&document)?
            };
            println!("{output}");
        }
        Command::Catalog { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            for tile_type in catalog.iter() {
                let paths = tile_type
                    .paths
                    .entries()
                    .map(|(entry, exit)| format!("{entry}->{exit}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!(
                    "{:<26} {:<16} {:<10} gaps={} intersections={} seesaw={} {}",
                    tile_type.id,
                    tile_type.image,
                    format!("{:?}", tile_type.role),
                    tile_type.gaps,
                    tile_type.intersections,
                    tile_type.seesaw,
                    paths
                );
            }
        }
        Command::TileSet => {
            let tile_set = TileSet::default_for(&Catalog::seeded());
            println!("{}", serde_json::to_string_pretty(&tile_set)?);
        }
    }

    Ok(())
}
