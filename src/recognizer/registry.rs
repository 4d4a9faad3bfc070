//! Pattern library for entity recognition

use crate::domain::EntityKind;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this kind
    pub patterns: Vec<String>,
    /// Entity kind label
    pub kind: String,
}

/// Compiled pattern with its kind
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// Entity kind this pattern detects
    pub kind: EntityKind,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Registry of compiled patterns, grouped by entity kind.
#[derive(Debug)]
pub struct PatternRegistry {
    by_kind: BTreeMap<EntityKind, Vec<CompiledPattern>>,
}

impl PatternRegistry {
    /// Create a registry from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a registry from TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut by_kind: BTreeMap<EntityKind, Vec<CompiledPattern>> = BTreeMap::new();

        for (name, def) in library.patterns {
            let kind = Self::parse_kind(&def.kind)
                .with_context(|| format!("Invalid kind in pattern '{}': {}", name, def.kind))?;

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str)
                    .with_context(|| format!("Invalid regex in pattern '{name}': {pattern_str}"))?;

                by_kind
                    .entry(kind)
                    .or_default()
                    .push(CompiledPattern { regex, kind });
            }
        }

        Ok(Self { by_kind })
    }

    /// Create a registry with the built-in Polish patterns.
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Patterns registered for one kind (empty slice if none).
    pub fn patterns_for(&self, kind: EntityKind) -> &[CompiledPattern] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of compiled patterns.
    pub fn len(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }

    /// Whether the registry holds no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }

    /// Parse a kind label into the closed [`EntityKind`] set.
    fn parse_kind(s: &str) -> Result<EntityKind> {
        match s.to_uppercase().as_str() {
            "PERSON" => Ok(EntityKind::Person),
            "NATIONAL_ID" => Ok(EntityKind::NationalId),
            "PHONE_NUMBER" => Ok(EntityKind::PhoneNumber),
            "EMAIL" => Ok(EntityKind::Email),
            "ID_CARD" => Ok(EntityKind::IdCard),
            "PASSPORT_NUMBER" => Ok(EntityKind::PassportNumber),
            "BANK_ACCOUNT" => Ok(EntityKind::BankAccount),
            "STREET_ADDRESS" => Ok(EntityKind::StreetAddress),
            "POSTAL_ADDRESS" => Ok(EntityKind::PostalAddress),
            "TAX_ID" => Ok(EntityKind::TaxId),
            "SOCIAL_PROFILE_URL" => Ok(EntityKind::SocialProfileUrl),
            "JOB_TITLE" => Ok(EntityKind::JobTitle),
            "DRIVERS_LICENSE" => Ok(EntityKind::DriversLicense),
            _ => anyhow::bail!("Unknown entity kind: {s}"),
        }
    }
}
