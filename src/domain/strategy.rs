//! Anonymization strategies

use crate::domain::errors::AnonimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anonymization strategy selected per pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Replace every entity with its profile tag or bracketed kind label
    Tag,
    /// Replace every entity with a fabricated substitute value
    Replace,
    /// Delete every entity span
    Remove,
}

impl Strategy {
    /// Wire form of the strategy value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Replace => "replace",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = AnonimError;

    /// Parse a wire value. Anything outside the closed set fails fast with a
    /// descriptive error; there is no silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag" => Ok(Self::Tag),
            "replace" => Ok(Self::Replace),
            "remove" => Ok(Self::Remove),
            other => Err(AnonimError::InvalidStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("tag", Strategy::Tag)]
    #[test_case("replace", Strategy::Replace)]
    #[test_case("remove", Strategy::Remove)]
    fn test_parse_valid(input: &str, expected: Strategy) {
        assert_eq!(input.parse::<Strategy>().unwrap(), expected);
    }

    #[test_case("")]
    #[test_case("TAG")]
    #[test_case("redact")]
    fn test_parse_invalid_fails_fast(input: &str) {
        let err = input.parse::<Strategy>().unwrap_err();
        assert!(matches!(err, AnonimError::InvalidStrategy(_)));
        assert!(err.to_string().contains("strategy"));
    }

    #[test]
    fn test_serde_wire_form() {
        assert_eq!(serde_json::to_string(&Strategy::Replace).unwrap(), "\"replace\"");
        let s: Strategy = serde_json::from_str("\"remove\"").unwrap();
        assert_eq!(s, Strategy::Remove);
    }
}
