//! Entity kinds and recognized occurrences

use serde::{Deserialize, Serialize};

/// Closed enumeration of the PII kinds the pipeline recognizes.
///
/// Adding a kind is a compile-time-checked, single-point change: every
/// dispatch site (pattern registry parsing, replacement selection, synthetic
/// value generation) matches exhaustively on this enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    /// Full person name (first name + surname)
    Person,
    /// 11-digit PESEL-style national identification number
    NationalId,
    /// Telephone number, optionally prefixed with a contextual label
    PhoneNumber,
    /// Email address
    Email,
    /// Identity card number (3 letters + 6 digits)
    IdCard,
    /// Passport number (2 letters + 7 digits)
    PassportNumber,
    /// Bank account number (optional country code + 26 digits)
    BankAccount,
    /// Street-level address (street-type keyword + name + house number)
    StreetAddress,
    /// Postal address (postal code + city)
    PostalAddress,
    /// NIP-style tax identifier
    TaxId,
    /// Social profile URL
    SocialProfileUrl,
    /// Job title phrase from a closed list
    JobTitle,
    /// Driver's licence number anchored to its contextual label
    DriversLicense,
}

impl EntityKind {
    /// Non-person kinds in the order their patterns are applied.
    ///
    /// The order is part of the recognizer contract: matches are discovered
    /// kind by kind in this sequence, and the stable start-offset sort keeps
    /// that discovery order for entities sharing a start position.
    pub const PATTERN_SCAN_ORDER: [EntityKind; 12] = [
        EntityKind::NationalId,
        EntityKind::PhoneNumber,
        EntityKind::Email,
        EntityKind::IdCard,
        EntityKind::PassportNumber,
        EntityKind::BankAccount,
        EntityKind::StreetAddress,
        EntityKind::PostalAddress,
        EntityKind::TaxId,
        EntityKind::SocialProfileUrl,
        EntityKind::JobTitle,
        EntityKind::DriversLicense,
    ];

    /// Stable label used in bracketed tags and audit records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::NationalId => "NATIONAL_ID",
            Self::PhoneNumber => "PHONE_NUMBER",
            Self::Email => "EMAIL",
            Self::IdCard => "ID_CARD",
            Self::PassportNumber => "PASSPORT_NUMBER",
            Self::BankAccount => "BANK_ACCOUNT",
            Self::StreetAddress => "STREET_ADDRESS",
            Self::PostalAddress => "POSTAL_ADDRESS",
            Self::TaxId => "TAX_ID",
            Self::SocialProfileUrl => "SOCIAL_PROFILE_URL",
            Self::JobTitle => "JOB_TITLE",
            Self::DriversLicense => "DRIVERS_LICENSE",
        }
    }

    /// Bracketed form of the label, e.g. `[PHONE_NUMBER]`.
    pub fn bracketed_label(&self) -> String {
        format!("[{}]", self.label())
    }
}

/// One recognized PII occurrence in the input text.
///
/// `start`/`end` are half-open byte offsets into the original text, always on
/// `char` boundaries, with `start < end`. `text` is the exact matched
/// substring, so `text == &input[start..end]` holds for every entity the
/// recognizer emits. Entities are immutable after recognition except for
/// `person_id`, which linking may set exactly once.
///
/// Overlapping or duplicate spans are possible when more than one pattern
/// matches the same digits; the pipeline keeps all of them (see the
/// rewriter's splice contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundEntity {
    /// Kind of PII recognized
    pub kind: EntityKind,
    /// Exact matched substring
    pub text: String,
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// Owning person profile, set by linking
    pub person_id: Option<u32>,
}

impl FoundEntity {
    /// Create an unlinked entity for a recognized span.
    pub fn new(kind: EntityKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
            person_id: None,
        }
    }

    /// Whether this is a person-name occurrence.
    pub fn is_person(&self) -> bool {
        self.kind == EntityKind::Person
    }

    /// Whether the span lies fully inside `[start, end)`.
    pub fn within(&self, start: usize, end: usize) -> bool {
        self.start >= start && self.end <= end
    }
}
