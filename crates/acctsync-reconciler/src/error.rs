use acctsync_client::ClientError;
use acctsync_domain::CloudType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("config error: {0}")]
    Config(#[from] acctsync_config::ConfigError),

    #[error("domain error: {0}")]
    Domain(#[from] acctsync_domain::DomainError),

    #[error("create failed: {0}")]
    CreateFailed(#[source] ClientError),

    /// Create succeeded but the post-create name lookup failed: the account
    /// may now exist remotely while untracked here. Surfaced, never cleaned
    /// up automatically — deleting by name could hit a legitimate account
    /// that collided on it.
    #[error("post-create identify failed: {0}")]
    IdentifyFailed(#[source] ClientError),

    #[error("read failed: {0}")]
    ReadFailed(#[source] ClientError),

    #[error("update failed: {0}")]
    UpdateFailed(#[source] ClientError),

    #[error("delete failed: {0}")]
    DeleteFailed(#[source] ClientError),

    /// The desired state selects a different variant than the tracked id
    /// carries. Switching variants is delete+create, driven by the host.
    #[error("account variant may not change on update: tracked {tracked}, desired {desired}")]
    VariantChanged {
        tracked: CloudType,
        desired: CloudType,
    },
}
