use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use acctsync_domain::{Account, CloudType};

use crate::client::AccountClient;
use crate::error::ClientError;

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<(CloudType, String), Account>,
    next_id: u64,
    fail_create: bool,
    fail_identify: bool,
    fail_update: bool,
    vanish_on_get: bool,
}

/// In-memory implementation of [`AccountClient`].
///
/// Simulates the remote service: create assigns a sequential remote id
/// ("1", "2", ...) resolvable through `identify`, names are unique per cloud,
/// and per-operation failures can be injected for error-path tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClient {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account under an explicit remote id, bypassing create.
    pub async fn insert(&self, remote_id: &str, account: Account) {
        let mut guard = self.inner.write().await;
        let key = (account.cloud_type(), remote_id.to_string());
        guard
            .accounts
            .insert(key, account.with_account_id(remote_id));
    }

    pub async fn fail_create(&self, fail: bool) {
        self.inner.write().await.fail_create = fail;
    }

    pub async fn fail_identify(&self, fail: bool) {
        self.inner.write().await.fail_identify = fail;
    }

    pub async fn fail_update(&self, fail: bool) {
        self.inner.write().await.fail_update = fail;
    }

    /// Make `get` report `NotFound` while the stored accounts stay intact.
    /// Simulates an account vanishing between a mutation and its read-back.
    pub async fn vanish_on_get(&self, vanish: bool) {
        self.inner.write().await.vanish_on_get = vanish;
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.accounts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.accounts.is_empty()
    }
}

fn injected_failure(op: &str) -> ClientError {
    ClientError::Api {
        status: 500,
        message: format!("injected {} failure", op),
    }
}

#[async_trait]
impl AccountClient for InMemoryClient {
    async fn create(&self, account: &Account) -> Result<(), ClientError> {
        let mut guard = self.inner.write().await;
        if guard.fail_create {
            return Err(injected_failure("create"));
        }

        let cloud = account.cloud_type();
        if guard
            .accounts
            .iter()
            .any(|((c, _), a)| *c == cloud && a.name() == account.name())
        {
            return Err(ClientError::Api {
                status: 409,
                message: format!("account name '{}' already exists", account.name()),
            });
        }

        guard.next_id += 1;
        let remote_id = guard.next_id.to_string();
        guard.accounts.insert(
            (cloud, remote_id.clone()),
            account.clone().with_account_id(remote_id),
        );
        Ok(())
    }

    async fn identify(&self, cloud: CloudType, name: &str) -> Result<String, ClientError> {
        let guard = self.inner.read().await;
        if guard.fail_identify {
            return Err(injected_failure("identify"));
        }
        guard
            .accounts
            .iter()
            .find(|((c, _), a)| *c == cloud && a.name() == name)
            .map(|((_, id), _)| id.clone())
            .ok_or(ClientError::NotFound)
    }

    async fn get(&self, cloud: CloudType, remote_id: &str) -> Result<Account, ClientError> {
        let guard = self.inner.read().await;
        if guard.vanish_on_get {
            return Err(ClientError::NotFound);
        }
        guard
            .accounts
            .get(&(cloud, remote_id.to_string()))
            .cloned()
            .ok_or(ClientError::NotFound)
    }

    async fn update(&self, account: &Account) -> Result<(), ClientError> {
        let mut guard = self.inner.write().await;
        if guard.fail_update {
            return Err(injected_failure("update"));
        }
        let key = (account.cloud_type(), account.account_id().to_string());
        match guard.accounts.get_mut(&key) {
            Some(existing) => {
                *existing = account.clone();
                Ok(())
            }
            None => Err(ClientError::NotFound),
        }
    }

    async fn delete(&self, cloud: CloudType, remote_id: &str) -> Result<(), ClientError> {
        let mut guard = self.inner.write().await;
        guard
            .accounts
            .remove(&(cloud, remote_id.to_string()))
            .map(|_| ())
            .ok_or(ClientError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acctsync_domain::AwsAccount;

    fn aws(name: &str) -> Account {
        Account::Aws(AwsAccount {
            account_id: String::new(),
            enabled: true,
            external_id: "ext".into(),
            group_ids: vec!["g1".into()],
            name: name.to_string(),
            role_arn: "arn:aws:iam::1:role/r".into(),
        })
    }

    #[tokio::test]
    async fn create_then_identify_then_get() {
        let client = InMemoryClient::new();
        client.create(&aws("a")).await.unwrap();

        let id = client.identify(CloudType::Aws, "a").await.unwrap();
        assert_eq!(id, "1");

        let got = client.get(CloudType::Aws, &id).await.unwrap();
        assert_eq!(got.account_id(), "1");
        assert_eq!(got.name(), "a");
    }

    #[tokio::test]
    async fn duplicate_name_rejected() {
        let client = InMemoryClient::new();
        client.create(&aws("a")).await.unwrap();
        let err = client.create(&aws("a")).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 409, .. }));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let client = InMemoryClient::new();
        let err = client.get(CloudType::Gcp, "404").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let client = InMemoryClient::new();
        let err = client
            .update(&aws("a").with_account_id("77"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_and_reports_absence() {
        let client = InMemoryClient::new();
        client.create(&aws("a")).await.unwrap();
        client.delete(CloudType::Aws, "1").await.unwrap();
        let err = client.delete(CloudType::Aws, "1").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(client.is_empty().await);
    }
}
