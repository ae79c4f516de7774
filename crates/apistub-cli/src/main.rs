//! apistub CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use apistub_core::{Catalog, Config};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apistub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate client services for the annotated classes of a catalog
    Generate {
        /// Configuration file (YAML, or TOML with a .toml extension)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Class catalog (JSON or YAML); overrides the configuration
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Directory the services are written to; overrides the configuration
        #[arg(long)]
        target_dir: Option<PathBuf>,
        /// Base URL of the remote API; overrides the configuration
        #[arg(long)]
        endpoint_url: Option<String>,
        /// Class to generate (repeatable); replaces the configured class list
        #[arg(long = "class")]
        classes: Vec<String>,
        /// Module for classes without an explicit mapping in the configuration
        #[arg(long)]
        module: Option<String>,
    },
    /// Print the API descriptor extracted from one class as JSON
    Inspect {
        /// Class catalog (JSON or YAML)
        #[arg(long)]
        catalog: PathBuf,
        /// Class to describe
        #[arg(long = "class")]
        class_name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            config,
            catalog,
            target_dir,
            endpoint_url,
            classes,
            module,
        } => {
            let config = resolve_config(config, catalog, target_dir, endpoint_url, classes, module)
                .await?;
            tracing::info!(
                catalog = %config.catalog_path,
                target_dir = %config.target_dir,
                "generating client services"
            );

            let written = apistub_core::generate(&config)
                .await
                .context("Failed to generate client services")?;

            for path in &written {
                println!("{}", path.display());
            }
            tracing::info!(count = written.len(), "generation finished");
        }
        Commands::Inspect {
            catalog,
            class_name,
        } => {
            let catalog = Catalog::from_file(&catalog)
                .await
                .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
            let descriptor = apistub_core::parse(&class_name, &catalog)
                .with_context(|| format!("Failed to describe class {}", class_name))?;
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
        }
    }
    Ok(())
}

/// Merge the optional configuration file with command-line overrides
async fn resolve_config(
    config_path: Option<PathBuf>,
    catalog: Option<PathBuf>,
    target_dir: Option<PathBuf>,
    endpoint_url: Option<String>,
    classes: Vec<String>,
    module: Option<String>,
) -> anyhow::Result<Config> {
    let mut config = match config_path {
        Some(path) => Config::from_file(&path)
            .await
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => {
            let catalog = catalog
                .as_ref()
                .context("--catalog is required without --config")?;
            let target_dir = target_dir
                .as_ref()
                .context("--target-dir is required without --config")?;
            Config::new(
                catalog.to_string_lossy(),
                target_dir.to_string_lossy(),
                endpoint_url.clone().unwrap_or_default(),
            )
        }
    };

    if let Some(catalog) = catalog {
        config.catalog_path = catalog.to_string_lossy().to_string();
    }
    if let Some(target_dir) = target_dir {
        config.target_dir = target_dir.to_string_lossy().to_string();
    }
    if let Some(endpoint_url) = endpoint_url {
        config.endpoint_url = endpoint_url;
    }
    if let Some(module) = module {
        config.default_module = module;
    }
    if !classes.is_empty() {
        let default_module = config.default_module.clone();
        config.classes = classes
            .into_iter()
            .map(|class| (class, default_module.clone()))
            .collect();
    }
    Ok(config)
}
