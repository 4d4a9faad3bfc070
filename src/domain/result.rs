//! Crate-wide result alias

use crate::domain::errors::AnonimError;

/// Result alias used by APIs that surface domain errors.
pub type Result<T> = std::result::Result<T, AnonimError>;
