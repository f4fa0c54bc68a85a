use thiserror::Error;

use super::models::PuppyId;

#[derive(Error, Debug)]
pub enum PuppyError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("No puppy with id {0}")]
    NotFound(PuppyId),

    #[error("Duplicate puppy id {0}")]
    DuplicateId(PuppyId),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Route {0} needs a puppy attached to it")]
    MissingRouteState(String),

    #[error("PuppyError: {0}")]
    Custom(String),
}

impl PuppyError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        PuppyError::Validation { field, reason: reason.into() }
    }
}

impl From<std::io::Error> for PuppyError {
    fn from(error: std::io::Error) -> Self {
        PuppyError::Io(Box::new(error))
    }
}
