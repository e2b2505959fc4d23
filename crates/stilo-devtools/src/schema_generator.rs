//! JSON Schema generator for stilo configuration
//!
//! Generates JSON Schema from the Rust configuration types using schemars.

use anyhow::Result;
use schemars::schema_for;
use serde_json::json;
use std::fs;
use std::path::Path;
use stilo_config::StiloConfiguration;

/// Schema generator for configuration files
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Generate JSON Schema and write to file
    ///
    /// Generates a complete JSON Schema from the `StiloConfiguration` type
    /// with metadata and writes it to the specified path.
    pub fn generate(output_path: &Path) -> Result<()> {
        tracing::info!("Generating JSON Schema for stilo configuration...");

        // Generate schema from Rust types using schemars
        let schema = schema_for!(StiloConfiguration);

        // Convert to JSON value for manipulation
        let mut schema_json = serde_json::to_value(schema)?;

        // Add metadata
        schema_json["$id"] = json!("https://stilo.dev/schema/v1.json");
        schema_json["$schema"] = json!("http://json-schema.org/draft-07/schema#");
        schema_json["title"] = json!("Stilo Configuration");
        schema_json["description"] =
            json!("Configuration file schema for stilo - validates .stilorc.json and stilo.json files");

        // Ensure parent directory exists
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to file with pretty formatting
        let output = serde_json::to_string_pretty(&schema_json)?;
        fs::write(output_path, output)?;

        println!("✓ Generated JSON Schema: {}", output_path.display());
        tracing::info!("Schema generation completed successfully");

        Ok(())
    }

    /// Validate that the schema can be generated without errors
    ///
    /// Useful for CI/CD to ensure schema generation doesn't break
    pub fn validate() -> Result<()> {
        tracing::info!("Validating schema generation...");

        let schema = schema_for!(StiloConfiguration);
        let _schema_json = serde_json::to_value(schema)?;

        println!("✓ Schema validation passed");
        Ok(())
    }
}
