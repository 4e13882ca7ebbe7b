//! Worklist-driven acquisition CLI
//!
//! `harvest lookup` runs the pipeline for one entity; `harvest run` walks a
//! worklist (built-in demo list by default), skipping entities that cannot
//! be resolved and logging service failures without stopping the run.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use wikiharvest::classify::CommonTypes;
use wikiharvest::sparql::{ClientConfig, WikidataClient};
use wikiharvest::{harvest, HarvestOptions};

/// Demo worklist from the original acquisition runs.
const DEMO_WORKLIST: &[(&str, &str)] = &[
    ("Bill Gates", "human"),
    ("Microsoft", "organization"),
    ("Seattle", "city"),
    ("Cristiano Ronaldo", "human"),
    ("Barcelona", "city"),
    ("Apple", "organization"),
    ("New York", "city"),
    ("LVMH", "organization"),
    ("Ronald Reagan", "human"),
    ("UNICEF", "organization"),
];

#[derive(Parser)]
#[command(
    name = "harvest",
    about = "Targeted data acquisition from the Wikidata knowledge graph"
)]
struct Cli {
    /// SPARQL endpoint URL
    #[arg(long, env = "WIKIHARVEST_ENDPOINT")]
    endpoint: Option<String>,

    /// MediaWiki action API base URL
    #[arg(long, env = "WIKIHARVEST_API_BASE")]
    api_base: Option<String>,

    /// User-Agent header (include contact info)
    #[arg(long, env = "WIKIHARVEST_USER_AGENT")]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one entity and print its top attributes
    Lookup {
        /// Entity name to search for
        name: String,

        /// Coarse type label (human, organization, location, business, city)
        #[arg(long = "type")]
        type_label: String,

        /// How many top-ranked attributes to fetch
        #[arg(long, default_value_t = 8)]
        top_n: usize,

        /// Require a direct class match (no subclass fallback)
        #[arg(long)]
        exact_only: bool,
    },

    /// Process a worklist of (name, type) pairs
    Run {
        /// Worklist file, one `name<TAB or ,>type` per line (default: built-in demo list)
        #[arg(long)]
        worklist: Option<PathBuf>,

        /// How many top-ranked attributes to fetch per entity
        #[arg(long, default_value_t = 8)]
        top_n: usize,

        /// Require a direct class match (no subclass fallback)
        #[arg(long)]
        exact_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::default();
    if let Some(endpoint) = cli.endpoint {
        config.sparql_endpoint = endpoint;
    }
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }
    let client = WikidataClient::with_config(config)?;

    match cli.command {
        Command::Lookup {
            name,
            type_label,
            top_n,
            exact_only,
        } => {
            let mut options = HarvestOptions::new().with_top_n(top_n);
            if exact_only {
                options = options.exact_only();
            }
            if !process_item(&client, &name, &type_label, &options).await {
                process::exit(1);
            }
        }
        Command::Run {
            worklist,
            top_n,
            exact_only,
        } => {
            let mut options = HarvestOptions::new().with_top_n(top_n);
            if exact_only {
                options = options.exact_only();
            }

            let items = match worklist {
                Some(path) => read_worklist(&path)?,
                None => DEMO_WORKLIST
                    .iter()
                    .map(|(n, t)| (n.to_string(), t.to_string()))
                    .collect(),
            };

            let mut failures = 0usize;
            for (name, type_label) in &items {
                if !process_item(&client, name, type_label, &options).await {
                    failures += 1;
                }
            }
            println!(
                "\n{} {} processed, {} failed",
                "Done:".cyan().bold(),
                items.len(),
                failures
            );
        }
    }

    Ok(())
}

/// Harvest one entity and print the outcome. Returns false on any failure;
/// both not-found and service errors leave the run alive.
async fn process_item(
    client: &WikidataClient,
    name: &str,
    type_label: &str,
    options: &HarvestOptions,
) -> bool {
    match harvest(client, &CommonTypes, name, type_label, options).await {
        Ok(node) => {
            println!(
                "{} is of type {} and has Q code {}",
                name.green().bold(),
                type_label,
                node.code()
            );
            println!("{}", node.details());
            true
        }
        Err(err) if err.is_not_found() => {
            println!(
                "{} {} of type {}",
                "Could not find".yellow(),
                name,
                type_label
            );
            false
        }
        Err(err) => {
            // anyhow's alternate formatting prints the full cause chain.
            let err = anyhow::Error::from(err);
            tracing::error!(name, error = %format!("{err:#}"), "harvest failed");
            eprintln!("{} {}: {:#}", "ERROR:".red().bold(), name, err);
            false
        }
    }
}

/// Read a worklist file: one entity per line, name and type separated by a
/// tab or the last comma. Blank lines and `#` comments are skipped.
fn read_worklist(path: &PathBuf) -> Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read worklist {}", path.display()))?;

    let mut items = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, type_label) = line
            .split_once('\t')
            .or_else(|| line.rsplit_once(','))
            .with_context(|| {
                format!(
                    "Malformed worklist line {} (expected name<TAB or ,>type): {:?}",
                    lineno + 1,
                    line
                )
            })?;
        items.push((name.trim().to_string(), type_label.trim().to_string()));
    }
    Ok(items)
}
