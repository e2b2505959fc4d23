//! Starter configuration generator
//!
//! Generates stilo configuration files from the built-in recommended record.

use anyhow::Result;
use std::fs;
use std::path::Path;
use stilo_config::StiloConfiguration;

/// Configuration file generator
pub struct ConfigGenerator;

impl ConfigGenerator {
    /// Generate a starter configuration file
    ///
    /// Writes the recommended record, ready to use: YAML when the output
    /// path ends in `.yaml`/`.yml`, pretty JSON otherwise. TOML is not
    /// offered here: it cannot express the `null` that disables a rule.
    pub fn generate_default(output_path: &Path) -> Result<()> {
        tracing::info!("Generating starter configuration file...");

        let config = StiloConfiguration::recommended();

        let content = match output_path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::to_string(&config)?,
            _ => {
                let mut json = serde_json::to_string_pretty(&config)?;
                json.push('\n');
                json
            }
        };

        // Ensure parent directory exists
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(output_path, content)?;

        println!("✓ Generated config: {}", output_path.display());
        tracing::info!("Configuration generation completed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_default_json() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join(".stilorc.json");

        ConfigGenerator::generate_default(&output_path).unwrap();

        assert!(output_path.exists());

        // The starter file parses back into the recommended record
        let content = fs::read_to_string(&output_path).unwrap();
        let config = StiloConfiguration::from_json(&content).unwrap();
        assert_eq!(config, StiloConfiguration::recommended());

        // The disable sentinel survives as a real null
        assert!(content.contains("\"no-empty-source\": null"));
    }

    #[test]
    fn test_generate_default_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("stilo.yaml");

        ConfigGenerator::generate_default(&output_path).unwrap();

        assert!(output_path.exists());

        let content = fs::read_to_string(&output_path).unwrap();
        let config = StiloConfiguration::from_yaml(&content).unwrap();
        assert_eq!(config, StiloConfiguration::recommended());
    }
}
