use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote service has no account under the given identity. Not a
    /// failure for read/delete flows; the reconciler decides.
    #[error("account not found")]
    NotFound,

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("response decode error: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound)
    }
}
