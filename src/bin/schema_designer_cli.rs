use clap::{Parser, Subcommand};
use log::error;
use schema_designer::{DesignerConfig, Entity, EntityCollection, SchemaExporter};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON file containing an array of entity definitions
    #[arg(short, long)]
    input: PathBuf,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the entity definitions and report every problem found
    Validate,
    /// Generate schema documents and print them to stdout
    Generate,
    /// Generate schema documents and write the export artifact to disk
    Export {
        /// Name for the exported file (sanitized to letters, digits, underscores)
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => DesignerConfig::load(path)?,
        None => DesignerConfig::default(),
    };

    let raw = fs::read_to_string(&cli.input)?;
    let candidates: Vec<Entity> = serde_json::from_str(&raw)?;

    let mut collection = EntityCollection::new();
    let mut failures = 0;
    for candidate in candidates {
        let name = candidate.name.clone();
        if let Err(err) = collection.add(candidate) {
            failures += 1;
            eprintln!("entity '{name}': {err}");
        }
    }
    if failures > 0 {
        return Err(format!("{failures} entity definition(s) failed validation").into());
    }

    match cli.command {
        Commands::Validate => {
            println!("{} entity definition(s) are valid", collection.len());
        }
        Commands::Generate => {
            let documents = collection.generate();
            let rendered = if config.pretty {
                serde_json::to_string_pretty(&documents)?
            } else {
                serde_json::to_string(&documents)?
            };
            println!("{rendered}");
        }
        Commands::Export { name } => {
            let export_name = name.unwrap_or_else(|| config.default_export_name.clone());
            let artifact = collection.export(&export_name)?;
            let path = SchemaExporter::write_artifact(&artifact, &config.output_dir)?;
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
