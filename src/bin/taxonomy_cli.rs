//! Taxonomy Command Line Interface
//!
//! Offline companion to the lookup server.
//!
//! # Usage
//!
//! ```bash
//! # Write the full continent/country/city tree artifact
//! taxonomy_cli generate --out data/full.json
//!
//! # Resolve a path the way /labels does
//! taxonomy_cli resolve --path EU --path DE
//!
//! # List every country
//! taxonomy_cli countries
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use geo_taxonomy::artifact::write_full_tree;
use geo_taxonomy::types::{LabelItems, LabelNode, NotFoundDiagnostic};
use geo_taxonomy::{
    logging, ReferenceTables, ResolveError, TaxonomyConfig, TaxonomyResolver, TreeGenerator,
};

#[derive(Parser)]
#[command(name = "taxonomy_cli")]
#[command(version)]
#[command(about = "Generate and query the continent/country/city taxonomy")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML configuration file
    #[arg(long, global = true, env = "TAXONOMY_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding continents.json, countries.json and cities.json
    #[arg(long, short = 'd', global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten the reference tables into the full tree artifact
    Generate {
        /// Output file (writes stdout if not provided)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Resolve a taxonomy path (0, 1 or 2 segments)
    Resolve {
        /// Path segment: continent code/name, then country code/name
        #[arg(short, long = "path")]
        path: Vec<String>,

        /// Wrap the result as { "items": [...] }
        #[arg(long)]
        wrap: bool,
    },

    /// List every country
    Countries,
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    logging::init(logging::CLI_FILTER);

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    let tables = ReferenceTables::load(&config.data)
        .with_context(|| format!("loading reference tables from {}", config.data.dir.display()))?;

    match cli.command {
        Commands::Generate { out } => {
            let tree = TreeGenerator::new(&tables)
                .generate()
                .context("generating full tree")?;
            match out {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    write_full_tree(&tree, BufWriter::new(file))
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!(
                        path = %path.display(),
                        continents = tree.items.len(),
                        cities = tree.city_count(),
                        "Full tree written"
                    );
                }
                None => write_full_tree(&tree, io::stdout().lock())?,
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Resolve { path, wrap } => {
            let raw_query = path_query(&path);

            match TaxonomyResolver::new(&tables).resolve(path.as_slice(), &raw_query) {
                Ok(labels) => {
                    print_labels(labels, wrap)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(ResolveError::NotFound {
                    raw_query,
                    attempted,
                }) => {
                    let diagnostic = NotFoundDiagnostic::new(raw_query, attempted);
                    eprintln!("{}", serde_json::to_string(&diagnostic)?);
                    Ok(ExitCode::from(2))
                }
            }
        }

        Commands::Countries => {
            print_labels(TaxonomyResolver::new(&tables).all_countries(), false)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(cli: &Cli) -> Result<TaxonomyConfig> {
    let mut config = TaxonomyConfig::load_from(cli.config.as_deref())
        .context("loading configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.data.dir = dir.clone();
    }
    Ok(config)
}

/// Query string `/labels` would receive for `path`, used in diagnostics
fn path_query(path: &[String]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for segment in path {
        query.append_pair("path", segment);
    }
    query.finish()
}

fn print_labels(labels: Vec<LabelNode>, wrap: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if wrap {
        serde_json::to_writer_pretty(&mut stdout, &LabelItems::from(labels))?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, &labels)?;
    }
    writeln!(stdout)?;
    Ok(())
}
