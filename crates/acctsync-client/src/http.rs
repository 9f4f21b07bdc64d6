use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use acctsync_domain::{Account, AlibabaAccount, AwsAccount, AzureAccount, CloudType, GcpAccount};

use crate::client::AccountClient;
use crate::error::ClientError;

// ── Token provider ────────────────────────────────────────────────────────────

/// Abstraction over bearer-token acquisition — enables test injection and
/// keeps session/refresh concerns out of this crate.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String, ClientError>;
}

/// Token provider returning a fixed string without any network call.
pub struct StaticToken(pub String);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String, ClientError> {
        Ok(self.0.clone())
    }
}

// ── HttpAccountClient ─────────────────────────────────────────────────────────

/// REST client for the remote account-management service.
///
/// Endpoint layout (the shape is inferred from the path, never from a body
/// tag):
/// ```text
/// POST   /cloud/{type}        create
/// GET    /cloud/{type}        list id+name pairs (identify)
/// GET    /cloud/{type}/{id}   get
/// PUT    /cloud/{type}/{id}   update
/// DELETE /cloud/{type}/{id}   delete
/// ```
pub struct HttpAccountClient {
    base: String,
    client: reqwest::Client,
    token: Box<dyn TokenProvider>,
}

/// Entry in the list endpoint's response, enough to resolve an id by name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListedAccount {
    #[serde(default)]
    account_id: String,
    name: String,
}

impl HttpAccountClient {
    pub fn new(base_url: impl Into<String>, token: Box<dyn TokenProvider>) -> Self {
        Self {
            base: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            token,
        }
    }

    /// Convenience constructor with a fixed bearer token.
    pub fn with_token(base_url: impl Into<String>, token: &str) -> Self {
        Self::new(base_url, Box::new(StaticToken(token.to_string())))
    }

    fn collection_url(&self, cloud: CloudType) -> String {
        format!("{}/cloud/{}", self.base, cloud.as_str())
    }

    fn item_url(&self, cloud: CloudType, remote_id: &str) -> String {
        format!("{}/cloud/{}/{}", self.base, cloud.as_str(), remote_id)
    }

    async fn bearer(&self) -> Result<String, ClientError> {
        self.token.token().await
    }

    /// Map a non-2xx response to `NotFound` or `Api`, extracting the
    /// service's error envelope message when one is present.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v["message"].as_str().map(String::from))
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp)
    }
}

#[async_trait]
impl AccountClient for HttpAccountClient {
    async fn create(&self, account: &Account) -> Result<(), ClientError> {
        let cloud = account.cloud_type();
        debug!(cloud = %cloud, name = %account.name(), "create account");

        let resp = self
            .client
            .post(self.collection_url(cloud))
            .bearer_auth(self.bearer().await?)
            .json(account)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn identify(&self, cloud: CloudType, name: &str) -> Result<String, ClientError> {
        debug!(cloud = %cloud, name = %name, "identify account by name");

        let resp = self
            .client
            .get(self.collection_url(cloud))
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        let listed: Vec<ListedAccount> = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        listed
            .into_iter()
            .find(|a| a.name == name)
            .map(|a| a.account_id)
            .ok_or(ClientError::NotFound)
    }

    async fn get(&self, cloud: CloudType, remote_id: &str) -> Result<Account, ClientError> {
        debug!(cloud = %cloud, remote_id = %remote_id, "get account");

        let resp = self
            .client
            .get(self.item_url(cloud, remote_id))
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;
        let resp = Self::check(resp).await?;

        // The shape is known from the request path, so each variant decodes
        // its concrete record; no tag is expected in the body.
        let account = match cloud {
            CloudType::Aws => Account::Aws(
                resp.json::<AwsAccount>()
                    .await
                    .map_err(|e| ClientError::Decode(e.to_string()))?,
            ),
            CloudType::Azure => Account::Azure(
                resp.json::<AzureAccount>()
                    .await
                    .map_err(|e| ClientError::Decode(e.to_string()))?,
            ),
            CloudType::Gcp => Account::Gcp(
                resp.json::<GcpAccount>()
                    .await
                    .map_err(|e| ClientError::Decode(e.to_string()))?,
            ),
            CloudType::Alibaba => Account::Alibaba(
                resp.json::<AlibabaAccount>()
                    .await
                    .map_err(|e| ClientError::Decode(e.to_string()))?,
            ),
        };
        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<(), ClientError> {
        let cloud = account.cloud_type();
        debug!(cloud = %cloud, remote_id = %account.account_id(), "update account");

        let resp = self
            .client
            .put(self.item_url(cloud, account.account_id()))
            .bearer_auth(self.bearer().await?)
            .json(account)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn delete(&self, cloud: CloudType, remote_id: &str) -> Result<(), ClientError> {
        debug!(cloud = %cloud, remote_id = %remote_id, "delete account");

        let resp = self
            .client
            .delete(self.item_url(cloud, remote_id))
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}
