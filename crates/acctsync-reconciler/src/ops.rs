//! The four lifecycle operations over one cloud account.
//!
//! Each operation is stateless between invocations; the only state the host
//! driver carries across calls is the tracked [`EntityId`]. Create and update
//! both finish with a read so the projected state mirrors the service's view
//! rather than echoing the input.

use acctsync_client::{AccountClient, ClientError};
use acctsync_config::{decode_account, project_account, FlatAccount};
use acctsync_domain::EntityId;
use tracing::{debug, info};

use crate::error::ReconcileError;

/// Outcome of a successful create/read/update: the tracked identifier and
/// the projected state as the remote service reports it.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub id: EntityId,
    pub state: FlatAccount,
}

/// Register the desired account and resolve its tracked identifier.
///
/// The create call does not return the remote id; it is resolved by a
/// post-create name lookup, then the full state is read back.
pub async fn create(
    client: &dyn AccountClient,
    desired: &FlatAccount,
) -> Result<Reconciled, ReconcileError> {
    let (cloud, name, account) = decode_account(desired, "")?;
    info!(cloud = %cloud, name = %name, "creating cloud account");

    client
        .create(&account)
        .await
        .map_err(ReconcileError::CreateFailed)?;

    let remote_id = client
        .identify(cloud, &name)
        .await
        .map_err(ReconcileError::IdentifyFailed)?;

    let id = EntityId::join(cloud, &remote_id);
    debug!(id = %id, "account created");

    // Vanishing between identify and this read is an inconsistency, not the
    // self-healing absence of an ordinary read.
    read(client, &id)
        .await?
        .ok_or(ReconcileError::ReadFailed(ClientError::NotFound))
}

/// Project the current remote state of a tracked account.
///
/// `Ok(None)` means the account no longer exists remotely; the caller clears
/// its tracked identifier (self-healing for out-of-band deletion).
pub async fn read(
    client: &dyn AccountClient,
    id: &EntityId,
) -> Result<Option<Reconciled>, ReconcileError> {
    let (cloud, remote_id) = id.split()?;

    match client.get(cloud, remote_id).await {
        Ok(account) => Ok(Some(Reconciled {
            id: id.clone(),
            state: project_account(&account),
        })),
        Err(e) if e.is_not_found() => {
            info!(id = %id, "remote account gone; treating as deleted");
            Ok(None)
        }
        Err(e) => Err(ReconcileError::ReadFailed(e)),
    }
}

/// Push the desired state to the tracked account, then re-project.
///
/// The variant may not change under a tracked id; switching shapes is a
/// delete+create driven by the host.
pub async fn update(
    client: &dyn AccountClient,
    id: &EntityId,
    desired: &FlatAccount,
) -> Result<Reconciled, ReconcileError> {
    let (tracked_cloud, remote_id) = id.split()?;
    let (desired_cloud, name, account) = decode_account(desired, remote_id)?;

    if desired_cloud != tracked_cloud {
        return Err(ReconcileError::VariantChanged {
            tracked: tracked_cloud,
            desired: desired_cloud,
        });
    }

    info!(id = %id, name = %name, "updating cloud account");
    client
        .update(&account)
        .await
        .map_err(ReconcileError::UpdateFailed)?;

    read(client, id)
        .await?
        .ok_or(ReconcileError::ReadFailed(ClientError::NotFound))
}

/// Remove the tracked account. An already-absent account is success: the
/// desired absence holds either way.
pub async fn delete(client: &dyn AccountClient, id: &EntityId) -> Result<(), ReconcileError> {
    let (cloud, remote_id) = id.split()?;
    info!(id = %id, "deleting cloud account");

    match client.delete(cloud, remote_id).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_not_found() => {
            debug!(id = %id, "remote account already absent");
            Ok(())
        }
        Err(e) => Err(ReconcileError::DeleteFailed(e)),
    }
}
