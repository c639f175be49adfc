//! Errors surfaced by registry operations.

use thiserror::Error;

use crate::components::HouseholdId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No household has this id. Nothing was mutated.
    #[error("household {0} not found")]
    HouseholdNotFound(HouseholdId),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
