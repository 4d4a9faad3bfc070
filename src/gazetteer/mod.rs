//! Gazetteer tables for person-name recognition and value fabrication
//!
//! A [`Gazetteer`] holds the locale's static reference sets: first names by
//! gender, surnames, cities, and street names. The tables are immutable after
//! load and are shared by reference (`Arc`) across all pipeline invocations;
//! concurrent reads need no synchronization.

use anyhow::{Context, Result};
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Name tables from TOML
#[derive(Debug, Deserialize)]
struct NamesSection {
    male: Vec<String>,
    female: Vec<String>,
    surnames: Vec<String>,
}

/// Place tables from TOML
#[derive(Debug, Deserialize)]
struct PlacesSection {
    cities: Vec<String>,
    streets: Vec<String>,
}

/// Gazetteer library container
#[derive(Debug, Deserialize)]
struct GazetteerLibrary {
    names: NamesSection,
    places: PlacesSection,
}

/// Immutable reference tables for one locale.
///
/// First-name membership checks drive the person detector's acceptance gate;
/// the list forms back the fabrication strategy's random draws.
#[derive(Debug)]
pub struct Gazetteer {
    male_first_names: Vec<String>,
    female_first_names: Vec<String>,
    surnames: Vec<String>,
    cities: Vec<String>,
    streets: Vec<String>,
    male_lookup: HashSet<String>,
    female_lookup: HashSet<String>,
}

impl Gazetteer {
    /// Load a gazetteer from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read gazetteer: {}", path.as_ref().display())
        })?;

        Self::from_toml(&content)
    }

    /// Load a gazetteer from TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: GazetteerLibrary =
            toml::from_str(content).context("Failed to parse gazetteer TOML")?;

        let gazetteer = Self {
            male_lookup: library.names.male.iter().cloned().collect(),
            female_lookup: library.names.female.iter().cloned().collect(),
            male_first_names: library.names.male,
            female_first_names: library.names.female,
            surnames: library.names.surnames,
            cities: library.places.cities,
            streets: library.places.streets,
        };

        gazetteer.validate()?;
        Ok(gazetteer)
    }

    /// Built-in Polish gazetteer.
    pub fn default_polish() -> Result<Self> {
        let default_toml = include_str!("../../gazetteers/pl.toml");
        Self::from_toml(default_toml)
    }

    fn validate(&self) -> Result<()> {
        if self.male_first_names.is_empty() || self.female_first_names.is_empty() {
            anyhow::bail!("Gazetteer first-name tables must not be empty");
        }
        if self.surnames.is_empty() {
            anyhow::bail!("Gazetteer surname table must not be empty");
        }
        if self.cities.is_empty() || self.streets.is_empty() {
            anyhow::bail!("Gazetteer place tables must not be empty");
        }
        Ok(())
    }

    /// Whether `name` is a known first name of either gender.
    pub fn is_first_name(&self, name: &str) -> bool {
        self.male_lookup.contains(name) || self.female_lookup.contains(name)
    }

    /// Whether `name` is a known male first name.
    pub fn is_male_first_name(&self, name: &str) -> bool {
        self.male_lookup.contains(name)
    }

    /// Draw a random first name from the gender bucket implied by
    /// `original`: the male bucket when `original` is a known male name, the
    /// female bucket otherwise.
    pub fn random_first_name_like<R: Rng>(&self, original: &str, rng: &mut R) -> &str {
        let bucket = if self.is_male_first_name(original) {
            &self.male_first_names
        } else {
            &self.female_first_names
        };
        &bucket[rng.gen_range(0..bucket.len())]
    }

    /// Draw a random surname.
    pub fn random_surname<R: Rng>(&self, rng: &mut R) -> &str {
        &self.surnames[rng.gen_range(0..self.surnames.len())]
    }

    /// Draw a random city name.
    pub fn random_city<R: Rng>(&self, rng: &mut R) -> &str {
        &self.cities[rng.gen_range(0..self.cities.len())]
    }

    /// Draw a random street name.
    pub fn random_street<R: Rng>(&self, rng: &mut R) -> &str {
        &self.streets[rng.gen_range(0..self.streets.len())]
    }
}
