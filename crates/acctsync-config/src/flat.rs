use serde::{Deserialize, Serialize};

/// Flat desired-state representation of one cloud account.
///
/// At most one of the four slots is populated; the host driver's schema
/// enforces the mutual exclusion upstream. Which slot is populated selects
/// the account shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzureBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<GcpBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alibaba: Option<AlibabaBlock>,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsBlock {
    /// Remote identity, empty until assigned by the service.
    #[serde(default)]
    pub account_id: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub external_id: String,
    pub group_ids: Vec<String>,
    pub name: String,
    pub role_arn: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzureBlock {
    #[serde(default)]
    pub account_id: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub group_ids: Vec<String>,
    pub name: String,
    pub client_id: String,
    pub key: String,
    #[serde(default)]
    pub monitor_flow_logs: bool,
    pub tenant_id: String,
    pub service_principal_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcpBlock {
    #[serde(default)]
    pub account_id: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub group_ids: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub compression_enabled: bool,
    #[serde(default)]
    pub dataflow_enabled_project: String,
    #[serde(default)]
    pub flow_log_storage_bucket: String,
    /// Raw service-account JSON document. Kept as text because the host
    /// driver's config surface has no nested-document type; compared through
    /// the credential equivalence check, never byte-for-byte.
    pub credentials_json: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlibabaBlock {
    #[serde(default)]
    pub account_id: String,
    pub group_ids: Vec<String>,
    pub name: String,
    pub ram_arn: String,
}
