use census::RegistryError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Anything a single command can fail with. None of these end the session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("unknown group '{0}' (expected males, females, 0-5, 30+ or total)")]
    UnknownBucket(String),
    #[error("invalid page '{0}'")]
    InvalidPage(String),
    #[error("invalid person id '{0}'")]
    InvalidPersonId(String),
    #[error("person {0} not found")]
    PersonNotFound(u64),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
