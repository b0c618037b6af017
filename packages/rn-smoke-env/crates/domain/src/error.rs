use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Couldn't find \"{0}\" configuration")]
    ConfigurationNotFound(String),

    #[error("Received object is incorrect")]
    IncorrectVersionManifest,

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}
