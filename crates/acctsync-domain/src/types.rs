use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::creds::GcpCredentials;
use crate::error::DomainError;

// ── Cloud type tag ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudType {
    Aws,
    Azure,
    Gcp,
    Alibaba,
}

impl CloudType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudType::Aws => "aws",
            CloudType::Azure => "azure",
            CloudType::Gcp => "gcp",
            CloudType::Alibaba => "alibaba_cloud",
        }
    }
}

impl std::fmt::Display for CloudType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CloudType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws" => Ok(CloudType::Aws),
            "azure" => Ok(CloudType::Azure),
            "gcp" => Ok(CloudType::Gcp),
            "alibaba_cloud" => Ok(CloudType::Alibaba),
            other => Err(DomainError::UnknownCloudType(other.to_string())),
        }
    }
}

// ── Account records ───────────────────────────────────────────────────────────

/// Fields shared by the Azure and GCP account shapes. The AWS and Alibaba
/// shapes inline their subset of these directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudAccount {
    /// Remote identity. Empty until assigned by the service at create time,
    /// never mutated afterward.
    #[serde(default)]
    pub account_id: String,
    pub enabled: bool,
    pub group_ids: Vec<String>,
    /// Unique per account on the remote service, used for post-create lookup.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsAccount {
    #[serde(default)]
    pub account_id: String,
    pub enabled: bool,
    pub external_id: String,
    pub group_ids: Vec<String>,
    pub name: String,
    pub role_arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureAccount {
    #[serde(rename = "cloudAccount")]
    pub account: CloudAccount,
    pub client_id: String,
    pub key: String,
    pub monitor_flow_logs: bool,
    pub tenant_id: String,
    pub service_principal_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcpAccount {
    #[serde(rename = "cloudAccount")]
    pub account: CloudAccount,
    pub compression_enabled: bool,
    pub dataflow_enabled_project: String,
    pub flow_log_storage_bucket: String,
    pub credentials: GcpCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlibabaAccount {
    #[serde(default)]
    pub account_id: String,
    pub group_ids: Vec<String>,
    pub name: String,
    pub ram_arn: String,
}

/// One cloud account, exactly one shape at a time.
///
/// Serializes as the bare record; the remote API infers the shape from the
/// request path, so no tag is carried on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Account {
    Aws(AwsAccount),
    Azure(AzureAccount),
    Gcp(GcpAccount),
    Alibaba(AlibabaAccount),
}

impl Account {
    pub fn cloud_type(&self) -> CloudType {
        match self {
            Account::Aws(_) => CloudType::Aws,
            Account::Azure(_) => CloudType::Azure,
            Account::Gcp(_) => CloudType::Gcp,
            Account::Alibaba(_) => CloudType::Alibaba,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Account::Aws(a) => &a.name,
            Account::Azure(a) => &a.account.name,
            Account::Gcp(a) => &a.account.name,
            Account::Alibaba(a) => &a.name,
        }
    }

    pub fn account_id(&self) -> &str {
        match self {
            Account::Aws(a) => &a.account_id,
            Account::Azure(a) => &a.account.account_id,
            Account::Gcp(a) => &a.account.account_id,
            Account::Alibaba(a) => &a.account_id,
        }
    }

    pub fn group_ids(&self) -> &[String] {
        match self {
            Account::Aws(a) => &a.group_ids,
            Account::Azure(a) => &a.account.group_ids,
            Account::Gcp(a) => &a.account.group_ids,
            Account::Alibaba(a) => &a.group_ids,
        }
    }

    /// Returns the record with the remote identity set. Used when the service
    /// assigns an id at create time and the record must carry it afterward.
    pub fn with_account_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        match &mut self {
            Account::Aws(a) => a.account_id = id,
            Account::Azure(a) => a.account.account_id = id,
            Account::Gcp(a) => a.account.account_id = id,
            Account::Alibaba(a) => a.account_id = id,
        }
        self
    }
}
