//! The configuration record
//!
//! `StiloConfiguration` corresponds to a `.stilorc` file: which processor and
//! plugin modules the linter loads, which base rule set the record extends,
//! and per-rule overrides. The record is plain data — it is produced once,
//! handed whole to the linter at startup, and never mutated afterwards.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::rules::{RuleMap, RuleOverride};

/// A stilo configuration record
///
/// Every field is optional: an absent field defers to the linter's defaults.
///
/// ```json
/// {
///   "processors": ["html-processor"],
///   "extends": "standard-config",
///   "plugins": ["scss-plugin"],
///   "rules": {
///     "rule-empty-line-before": "never-multi-line",
///     "no-empty-source": null
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StiloConfiguration {
    /// Schema URL for editor completion and validation
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "JSON Schema URL for this config file")]
    pub schema: Option<String>,

    /// Processor modules applied to input files before and after rules run
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Processor modules, applied in order")]
    pub processors: Option<Vec<String>>,

    /// Base rule set this record inherits defaults from
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Name or relative path of the base rule set to extend")]
    pub extends: Option<String>,

    /// Additional rule-providing modules
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Plugin modules providing extra rules, loaded in order")]
    pub plugins: Option<Vec<String>>,

    /// Per-rule overrides: a behavior keyword, or null to disable the rule
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Rule overrides keyed by rule name")]
    pub rules: Option<RuleMap>,
}

impl StiloConfiguration {
    /// Load a record from a config file
    ///
    /// The format is chosen by extension: JSON (also used for extensionless
    /// dotfiles), JSONC, YAML, or TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") | None => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
            Some("jsonc") => json5::from_str(&content).map_err(|e| parse_error(e.to_string())),
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
            Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            Some(_) => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parse a record from a JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a record from a YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// The recommended starter record
    ///
    /// Extends the standard base rule set, runs the HTML processor so style
    /// blocks embedded in markup are linted, loads the SCSS plugin, and
    /// overrides two rules: blank lines are rejected before single-line
    /// rules, and the empty-source check is switched off.
    pub fn recommended() -> Self {
        let mut rules = RuleMap::new();
        rules.insert(
            "rule-empty-line-before".to_string(),
            RuleOverride::keyword("never-multi-line"),
        );
        rules.insert("no-empty-source".to_string(), RuleOverride::Disabled);

        Self {
            schema: None,
            processors: Some(vec!["html-processor".to_string()]),
            extends: Some("standard-config".to_string()),
            plugins: Some(vec!["scss-plugin".to_string()]),
            rules: Some(rules),
        }
    }

    /// Processor modules, in load order (empty when the field is absent)
    pub fn processors(&self) -> &[String] {
        self.processors.as_deref().unwrap_or_default()
    }

    /// Plugin modules, in load order (empty when the field is absent)
    pub fn plugins(&self) -> &[String] {
        self.plugins.as_deref().unwrap_or_default()
    }

    /// Look up the override for a rule, if one is configured
    pub fn rule(&self, name: &str) -> Option<&RuleOverride> {
        self.rules.as_ref().and_then(|rules| rules.get(name))
    }

    /// Whether a rule is explicitly disabled
    ///
    /// Returns false for rules the record does not mention: those defer to
    /// the base rule set, which is not the same as being switched off.
    pub fn is_rule_disabled(&self, name: &str) -> bool {
        matches!(self.rule(name), Some(setting) if setting.is_disabled())
    }

    /// Validate the record, collecting every violation
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Some(ref extends) = self.extends {
            if extends.trim().is_empty() {
                errors.push("extends must name a base rule set".to_string());
            }
        }

        if let Some(ref processors) = self.processors {
            validate_module_list("processors", processors, &mut errors);
        }

        if let Some(ref plugins) = self.plugins {
            validate_module_list("plugins", plugins, &mut errors);
        }

        if let Some(ref rules) = self.rules {
            for name in rules.keys() {
                if name.trim().is_empty() {
                    errors.push("rule name cannot be empty".to_string());
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validate, folding violations into a [`ConfigError`]
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate().map_err(ConfigError::Validation)
    }
}

/// A module list must be non-empty, duplicate-free, and free of blank names
fn validate_module_list(field: &str, modules: &[String], errors: &mut Vec<String>) {
    if modules.is_empty() {
        errors.push(format!("{field} must list at least one module"));
    }

    for (index, name) in modules.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(format!("{field} contains an empty module name"));
        }
        if modules[..index].contains(name) {
            errors.push(format!("duplicate entry in {field}: {name}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_all_absent() {
        let config = StiloConfiguration::default();
        assert!(config.processors.is_none());
        assert!(config.extends.is_none());
        assert!(config.plugins.is_none());
        assert!(config.rules.is_none());

        // Absent fields are skipped entirely on serialization
        assert_eq!(serde_json::to_string(&config).unwrap(), "{}");
    }

    #[test]
    fn test_recommended_record_leaf_values() {
        let config = StiloConfiguration::recommended();

        assert_eq!(config.processors(), ["html-processor"]);
        assert_eq!(config.extends.as_deref(), Some("standard-config"));
        assert_eq!(config.plugins(), ["scss-plugin"]);

        assert_eq!(
            config.rule("rule-empty-line-before"),
            Some(&RuleOverride::keyword("never-multi-line"))
        );
        assert!(config.is_rule_disabled("no-empty-source"));

        config.validate().expect("recommended record should be valid");
    }

    #[test]
    fn test_serializes_documented_fields_in_order() {
        let config = StiloConfiguration::recommended();
        let value = serde_json::to_value(&config).unwrap();
        let fields: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

        assert_eq!(fields, vec!["processors", "extends", "plugins", "rules"]);
    }

    #[test]
    fn test_disabled_rule_is_not_absent() {
        let config = StiloConfiguration::recommended();

        // Explicitly disabled: the key is present with the null sentinel
        assert!(config.rule("no-empty-source").is_some());
        assert!(config.is_rule_disabled("no-empty-source"));

        // Unmentioned rule: defers to defaults, reported as neither
        assert!(config.rule("color-no-invalid-hex").is_none());
        assert!(!config.is_rule_disabled("color-no-invalid-hex"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let config = StiloConfiguration::from_json(
            r#"{
                "processors": ["html-processor"],
                "extends": "standard-config",
                "plugins": ["scss-plugin"],
                "rules": {
                    "rule-empty-line-before": "never-multi-line",
                    "no-empty-source": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config, StiloConfiguration::recommended());
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let config = StiloConfiguration::from_yaml(
            r#"
processors:
  - html-processor
extends: standard-config
plugins:
  - scss-plugin
rules:
  rule-empty-line-before: never-multi-line
  no-empty-source: null
"#,
        )
        .unwrap();

        assert_eq!(config, StiloConfiguration::recommended());
    }

    #[test]
    fn test_schema_field_round_trips_but_stays_optional() {
        let config = StiloConfiguration::from_json(
            r#"{"$schema": "https://stilo.dev/schema/v1.json", "extends": "standard-config"}"#,
        )
        .unwrap();

        assert_eq!(
            config.schema.as_deref(),
            Some("https://stilo.dev/schema/v1.json")
        );

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["$schema"], "https://stilo.dev/schema/v1.json");
    }

    #[test]
    fn test_validate_rejects_empty_extends() {
        let config = StiloConfiguration {
            extends: Some(String::new()),
            ..Default::default()
        };

        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("extends")));
    }

    #[test]
    fn test_validate_rejects_duplicate_processors() {
        let config = StiloConfiguration {
            processors: Some(vec![
                "html-processor".to_string(),
                "html-processor".to_string(),
            ]),
            ..Default::default()
        };

        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("duplicate")));
    }

    #[test]
    fn test_validate_rejects_empty_plugin_list() {
        let config = StiloConfiguration {
            plugins: Some(Vec::new()),
            ..Default::default()
        };

        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("plugins")));
    }

    #[test]
    fn test_validate_rejects_blank_rule_name() {
        let mut rules = RuleMap::new();
        rules.insert(String::new(), RuleOverride::Disabled);

        let config = StiloConfiguration {
            rules: Some(rules),
            ..Default::default()
        };

        assert!(config.validate().is_err());
        assert!(matches!(
            config.ensure_valid(),
            Err(ConfigError::Validation(_))
        ));
    }
}
