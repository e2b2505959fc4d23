//! Rule override values
//!
//! The `rules` section of a configuration maps rule names to overrides. An
//! override is either a keyword selecting the rule's behavior or an explicit
//! `null`, which disables the rule. A disabled rule is not the same as an
//! absent one: an absent rule defers to the base rule set and the linter's
//! defaults.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered mapping from rule name to override
///
/// Insertion order is preserved so a record re-serializes with its rules in
/// the order they were written.
pub type RuleMap = IndexMap<String, RuleOverride>;

/// Override for a single named lint rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOverride {
    /// Explicitly disables the rule (serialized as `null`)
    Disabled,
    /// Keyword selecting the rule's behavior (e.g. `"never-multi-line"`)
    Keyword(String),
}

impl RuleOverride {
    /// Build a keyword override
    pub fn keyword(value: impl Into<String>) -> Self {
        RuleOverride::Keyword(value.into())
    }

    /// Whether this override switches the rule off
    pub fn is_disabled(&self) -> bool {
        matches!(self, RuleOverride::Disabled)
    }

    /// The behavior keyword, if the rule is not disabled
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            RuleOverride::Keyword(keyword) => Some(keyword),
            RuleOverride::Disabled => None,
        }
    }
}

impl fmt::Display for RuleOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleOverride::Disabled => f.write_str("null"),
            RuleOverride::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

impl Serialize for RuleOverride {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RuleOverride::Disabled => serializer.serialize_none(),
            RuleOverride::Keyword(keyword) => serializer.serialize_str(keyword),
        }
    }
}

struct RuleOverrideVisitor;

impl<'de> Visitor<'de> for RuleOverrideVisitor {
    type Value = RuleOverride;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a behavior keyword or null")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RuleOverride::Keyword(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RuleOverride::Keyword(value))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RuleOverride::Disabled)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RuleOverride::Disabled)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RuleOverrideVisitor)
    }
}

impl<'de> Deserialize<'de> for RuleOverride {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RuleOverrideVisitor)
    }
}

impl JsonSchema for RuleOverride {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("RuleOverride")
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Behavior keyword for the rule, or null to disable it",
            "type": ["string", "null"]
        })
    }
}
