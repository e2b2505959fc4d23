//! Configuration system for the stilo stylesheet linter
//!
//! This crate provides the configuration record the linter reads at startup:
//! - Strong typing with serde and JSON Schema generation via schemars
//! - JSON/JSONC/YAML/TOML configuration file support
//! - Auto-discovery by traversing up directories
//! - Configuration inheritance (`extends` field)
//!
//! ## Configuration Files
//!
//! Discovery probes, in priority order: `.stilorc.json`, `.stilorc.jsonc`,
//! `.stilorc.toml`, `stilo.yaml`, `stilo.yml`, `stilo.json`.
//!
//! ## Configuration Inheritance
//!
//! A record can extend a base rule set. Path-like targets are resolved
//! relative to the extending file and merged underneath it; bare names are
//! either looked up in a [`BaseRuleSets`] registry or passed through to the
//! linter's module system.
//!
//! ## Example Configuration
//!
//! ```jsonc
//! {
//!   // lint style blocks embedded in markup
//!   "processors": ["html-processor"],
//!   "extends": "standard-config",
//!   "plugins": ["scss-plugin"],
//!   "rules": {
//!     "rule-empty-line-before": "never-multi-line",
//!     // null switches a rule off entirely
//!     "no-empty-source": null
//!   }
//! }
//! ```

mod error;
mod loader;
mod merge;
mod record;
mod rules;

// Re-export main types
pub use error::{ConfigError, Result};
pub use loader::{BaseRuleSets, ConfigLoader};
pub use record::StiloConfiguration;
pub use rules::{RuleMap, RuleOverride};
