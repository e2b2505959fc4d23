//! Configuration inheritance
//!
//! `merge_with` folds a base record (the target of `extends`) underneath an
//! extending record. The extending record always wins; base entries fill the
//! gaps.

use crate::record::StiloConfiguration;

impl StiloConfiguration {
    /// Merge a base record into this one (this record takes precedence)
    ///
    /// When merging:
    /// - `$schema` and `extends` are file-specific and are not merged
    /// - `processors` and `plugins` keep this record's entries first, then
    ///   append base entries not already present
    /// - `rules` keep this record's overrides; base-only rules are added.
    ///   An explicit `null` here still shadows any base setting.
    pub fn merge_with(&mut self, base: StiloConfiguration) {
        if let Some(base_processors) = base.processors {
            merge_module_list(&mut self.processors, base_processors);
        }

        if let Some(base_plugins) = base.plugins {
            merge_module_list(&mut self.plugins, base_plugins);
        }

        if let Some(base_rules) = base.rules {
            if let Some(ref mut rules) = self.rules {
                for (name, setting) in base_rules {
                    rules.entry(name).or_insert(setting);
                }
            } else {
                self.rules = Some(base_rules);
            }
        }
    }
}

/// Append base module names not already present
fn merge_module_list(target: &mut Option<Vec<String>>, base: Vec<String>) {
    if let Some(modules) = target {
        for name in base {
            if !modules.contains(&name) {
                modules.push(name);
            }
        }
    } else {
        *target = Some(base);
    }
}
