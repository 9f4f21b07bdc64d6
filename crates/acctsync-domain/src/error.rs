use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("unknown cloud type: {0}")]
    UnknownCloudType(String),

    #[error("malformed entity id: {0}")]
    MalformedEntityId(String),
}
