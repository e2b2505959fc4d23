//! Stilo Developer Tools
//!
//! Command-line tools for stilo developers:
//! - Generate JSON Schema for configuration files
//! - Generate starter configuration files
//! - Validate configuration setup

mod config_generator;
mod schema_generator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stilo-devtools")]
#[command(about = "Developer tools for stilo", version)]
#[command(author = "Stilo Team")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JSON Schema for configuration file
    GenerateSchema {
        /// Output path for schema file
        #[arg(short, long, default_value = "docs/public/schema/v1.json")]
        output: PathBuf,
    },

    /// Generate a starter configuration file
    GenerateConfig {
        /// Output path for config file
        #[arg(short, long, default_value = ".stilorc.json")]
        output: PathBuf,
    },

    /// Validate schema generation (CI/CD helper)
    Validate,

    /// Generate all artifacts (schema + starter configs)
    GenerateAll {
        /// Base directory for output
        #[arg(short, long, default_value = "docs")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false);

    if cli.verbose {
        subscriber.with_max_level(tracing::Level::DEBUG).init();
    } else {
        subscriber.with_max_level(tracing::Level::INFO).init();
    }

    match cli.command {
        Commands::GenerateSchema { output } => {
            schema_generator::SchemaGenerator::generate(&output)?;
        }

        Commands::GenerateConfig { output } => {
            config_generator::ConfigGenerator::generate_default(&output)?;
        }

        Commands::Validate => {
            println!("Validating schema generation...");
            schema_generator::SchemaGenerator::validate()?;
            println!("✓ All validations passed");
        }

        Commands::GenerateAll { output_dir } => {
            println!("Generating all development artifacts...\n");

            let schema_path = output_dir.join("public/schema/v1.json");
            schema_generator::SchemaGenerator::generate(&schema_path)?;

            let starter_json = output_dir.join("examples/.stilorc.json");
            config_generator::ConfigGenerator::generate_default(&starter_json)?;

            let starter_yaml = output_dir.join("examples/stilo.yaml");
            config_generator::ConfigGenerator::generate_default(&starter_yaml)?;

            println!("\nGenerated files:");
            println!("  Schema:         {}", schema_path.display());
            println!("  Starter (JSON): {}", starter_json.display());
            println!("  Starter (YAML): {}", starter_yaml.display());
        }
    }

    Ok(())
}
