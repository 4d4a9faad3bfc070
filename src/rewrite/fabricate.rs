//! Fabrication replacement strategy

use super::ReplacementStrategy;
use crate::domain::{EntityKind, FoundEntity, PersonProfile};
use crate::gazetteer::Gazetteer;
use anyhow::Result;
use rand::Rng;

/// Placeholder identity used when a person entity reaches fabrication
/// without a generated replacement.
const FALLBACK_IDENTITY: &str = "Zastępcza Osoba";

/// Replaces entities with plausible fake values.
///
/// Person entities reuse the replacement identity stored on their profile,
/// so every occurrence of one person fabricates to the same name within a
/// run. Every other value is generated fresh per occurrence; two mentions of
/// the same phone number yield two different fabricated numbers.
pub struct FabricateStrategy<'a, R: Rng> {
    gazetteer: &'a Gazetteer,
    rng: &'a mut R,
}

impl<'a, R: Rng> FabricateStrategy<'a, R> {
    /// Create a fabrication strategy over the shared gazetteer and the
    /// invocation's generator.
    pub fn new(gazetteer: &'a Gazetteer, rng: &'a mut R) -> Self {
        Self { gazetteer, rng }
    }

    fn random_digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }

    fn random_uppercase(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'A' + self.rng.gen_range(0..26u8)))
            .collect()
    }

    fn random_lowercase(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'a' + self.rng.gen_range(0..26u8)))
            .collect()
    }

    /// Synthetic value for one non-person entity kind.
    fn generate(&mut self, kind: EntityKind) -> String {
        match kind {
            EntityKind::NationalId => self.random_digits(11),
            EntityKind::PhoneNumber => format!(
                "{}-{}-{}",
                self.random_digits(3),
                self.random_digits(3),
                self.random_digits(3)
            ),
            EntityKind::Email => format!("{}@example.com", self.random_lowercase(5)),
            EntityKind::IdCard => {
                format!("{}{}", self.random_uppercase(3), self.random_digits(6))
            }
            EntityKind::PassportNumber => {
                format!("{}{}", self.random_uppercase(2), self.random_digits(7))
            }
            EntityKind::BankAccount => {
                let mut account = format!("PL{}", self.random_digits(2));
                for _ in 0..6 {
                    account.push(' ');
                    account.push_str(&self.random_digits(4));
                }
                account
            }
            EntityKind::StreetAddress => {
                let number = self.rng.gen_range(1..=150);
                format!("ul. {} {}", self.gazetteer.random_street(self.rng), number)
            }
            EntityKind::PostalAddress => format!(
                "{}-{} {}",
                self.random_digits(2),
                self.random_digits(3),
                self.gazetteer.random_city(self.rng)
            ),
            EntityKind::TaxId => format!(
                "{}-{}-{}-{}",
                self.random_digits(3),
                self.random_digits(3),
                self.random_digits(2),
                self.random_digits(2)
            ),
            EntityKind::SocialProfileUrl => "linkedin.com/in/private-profile".to_string(),
            // No dedicated generator: bracketed kind label
            EntityKind::Person | EntityKind::JobTitle | EntityKind::DriversLicense => {
                format!("[{}]", kind.label().replace('_', " "))
            }
        }
    }
}

impl<R: Rng> ReplacementStrategy for FabricateStrategy<'_, R> {
    fn replacement(
        &mut self,
        entity: &FoundEntity,
        profile: Option<&PersonProfile>,
    ) -> Result<String> {
        if entity.is_person() {
            if let Some(profile) = profile {
                return Ok(profile
                    .replacement_identity
                    .clone()
                    .unwrap_or_else(|| FALLBACK_IDENTITY.to_string()));
            }
        }

        Ok(self.generate(entity.kind))
    }
}
