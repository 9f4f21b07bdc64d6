//! Entity identifier codec.
//!
//! The tracked identifier is the only state the host driver persists, so it
//! has to carry both halves of the composite key: the cloud-type tag and the
//! remote id assigned by the service. The two are joined with [`ID_SEPARATOR`],
//! which never appears in a tag; the remote id may contain the separator, so
//! decoding splits on the first occurrence only.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::types::CloudType;

pub const ID_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(s: impl Into<String>) -> Self {
        EntityId(s.into())
    }

    /// Join the composite key into the opaque tracked identifier.
    pub fn join(cloud: CloudType, remote_id: &str) -> Self {
        EntityId(format!("{}{}{}", cloud.as_str(), ID_SEPARATOR, remote_id))
    }

    /// Recover the composite key. Fails on ids not produced by [`join`],
    /// which can happen when the persisted state was edited externally.
    ///
    /// [`join`]: EntityId::join
    pub fn split(&self) -> Result<(CloudType, &str), DomainError> {
        let (tag, remote_id) = self
            .0
            .split_once(ID_SEPARATOR)
            .ok_or_else(|| DomainError::MalformedEntityId(self.0.clone()))?;
        let cloud = CloudType::from_str(tag)
            .map_err(|_| DomainError::MalformedEntityId(self.0.clone()))?;
        Ok((cloud, remote_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
