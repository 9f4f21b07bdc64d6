use async_trait::async_trait;

use acctsync_domain::{Account, CloudType};

use crate::error::ClientError;

/// Contract with the remote account-management service.
///
/// Every call may block on the network; timeout and cancellation policy
/// belong to the caller's runtime, and a collaborator-reported timeout
/// surfaces as an ordinary error. Implementations never retry.
#[async_trait]
pub trait AccountClient: Send + Sync {
    /// Register a new account. The service assigns the remote id internally;
    /// it is not returned here and must be resolved via [`identify`].
    ///
    /// [`identify`]: AccountClient::identify
    async fn create(&self, account: &Account) -> Result<(), ClientError>;

    /// Resolve the remote id of an account by its unique name.
    async fn identify(&self, cloud: CloudType, name: &str) -> Result<String, ClientError>;

    /// Fetch the current remote record. `NotFound` means the account no
    /// longer exists, which read flows treat as absence rather than failure.
    async fn get(&self, cloud: CloudType, remote_id: &str) -> Result<Account, ClientError>;

    /// Replace the remote record. The record carries its remote id.
    async fn update(&self, account: &Account) -> Result<(), ClientError>;

    /// Remove the account. `NotFound` means it was already gone.
    async fn delete(&self, cloud: CloudType, remote_id: &str) -> Result<(), ClientError>;
}
