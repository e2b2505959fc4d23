//! Configuration file discovery, loading, and `extends` resolution

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::record::StiloConfiguration;

/// Candidate config file names, dotfiles first
const CONFIG_FILE_NAMES: &[&str] = &[
    ".stilorc.json",
    ".stilorc.jsonc",
    ".stilorc.toml",
    "stilo.yaml",
    "stilo.yml",
    "stilo.json",
];

/// Named base rule sets available during `extends` resolution
///
/// Ecosystem names are owned by the linter's module system; embedders that
/// want a name resolved in-process register the base record here. Registered
/// records are merged as-is.
#[derive(Debug, Clone, Default)]
pub struct BaseRuleSets {
    sets: HashMap<String, StiloConfiguration>,
}

impl BaseRuleSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base record under a name usable in `extends`
    pub fn register(&mut self, name: impl Into<String>, config: StiloConfiguration) {
        self.sets.insert(name.into(), config);
    }

    /// Look up a registered base record
    pub fn get(&self, name: &str) -> Option<&StiloConfiguration> {
        self.sets.get(name)
    }
}

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from `start_path`
    ///
    /// Each directory is probed for the candidate names in priority order:
    /// 1. `.stilorc.json`
    /// 2. `.stilorc.jsonc`
    /// 3. `.stilorc.toml`
    /// 4. `stilo.yaml`
    /// 5. `stilo.yml`
    /// 6. `stilo.json`
    ///
    /// Starts from the given directory and moves up the directory tree until
    /// a config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path.canonicalize().map_err(|source| ConfigError::Io {
            path: start_path.to_path_buf(),
            source,
        })?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Load a configuration record from a specific file
    ///
    /// Supports JSON (`.json`, extensionless dotfiles), JSONC (`.jsonc`),
    /// YAML (`.yaml`, `.yml`), and TOML (`.toml`).
    pub fn load_from_file(path: &Path) -> Result<StiloConfiguration> {
        StiloConfiguration::from_file(path)
    }

    /// Load a record from an explicit path, or auto-discover one
    ///
    /// If a custom path is provided, it must exist. Otherwise discovery runs
    /// from `start_dir` (or the current directory).
    pub fn load(
        custom_path: Option<&Path>,
        start_dir: Option<&Path>,
    ) -> Result<StiloConfiguration> {
        let config_path = if let Some(path) = custom_path {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            path.to_path_buf()
        } else {
            let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
            Self::auto_discover(search_dir)?.ok_or_else(|| ConfigError::NotFound {
                message: format!(
                    "no config file found (looked for {})",
                    CONFIG_FILE_NAMES.join(", ")
                ),
            })?
        };

        Self::load_from_file(&config_path)
    }

    /// Load a record and resolve its `extends` chain
    ///
    /// Equivalent to [`ConfigLoader::resolve_with`] with no registered base
    /// rule sets: only path-like `extends` targets are resolved.
    pub fn resolve(path: &Path) -> Result<StiloConfiguration> {
        Self::resolve_with(path, &BaseRuleSets::default())
    }

    /// Load a record and resolve its `extends` chain against a registry
    ///
    /// A path-like target (`./`, `../`, or a recognized config extension) is
    /// loaded relative to the extending file and merged underneath it,
    /// recursively. A bare name is looked up in `bases`; unregistered names
    /// are left in place for the linter's own module system to resolve.
    pub fn resolve_with(path: &Path, bases: &BaseRuleSets) -> Result<StiloConfiguration> {
        let mut chain = Vec::new();
        Self::resolve_inner(path, bases, &mut chain)
    }

    fn resolve_inner(
        path: &Path,
        bases: &BaseRuleSets,
        chain: &mut Vec<PathBuf>,
    ) -> Result<StiloConfiguration> {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if chain.contains(&key) {
            let mut names: Vec<String> = chain.iter().map(|p| p.display().to_string()).collect();
            names.push(key.display().to_string());
            return Err(ConfigError::CircularExtends {
                chain: names.join(" -> "),
            });
        }
        chain.push(key);

        let mut config = Self::load_from_file(path)?;

        if let Some(extends) = config.extends.clone() {
            if is_path_reference(&extends) {
                let base_path = path
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join(&extends);
                let base = Self::resolve_inner(&base_path, bases, chain)?;
                config.merge_with(base);
            } else if let Some(base) = bases.get(&extends) {
                config.merge_with(base.clone());
            } else {
                tracing::debug!("Leaving base rule set '{extends}' for the linter to resolve");
            }
        }

        Ok(config)
    }
}

/// Whether an `extends` target points at a file rather than naming a module
fn is_path_reference(extends: &str) -> bool {
    if extends.starts_with("./") || extends.starts_with("../") {
        return true;
    }

    matches!(
        Path::new(extends).extension().and_then(|e| e.to_str()),
        Some("json" | "jsonc" | "yaml" | "yml" | "toml")
    )
}
