//! GCP service-account credential model.
//!
//! The credential travels through the desired state as a raw JSON text blob.
//! Re-serialization does not keep key order stable, so comparing the raw text
//! byte-for-byte would report a change on every reconciliation pass. The
//! equivalence check here parses both sides and compares the ten semantic
//! fields instead; everything else in the document is ignored.

use serde::{Deserialize, Serialize};

/// Parsed view of a service-account JSON credential document. Unknown keys
/// are dropped; absent keys default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcpCredentials {
    #[serde(rename = "type", default)]
    pub credential_type: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub auth_uri: String,
    #[serde(default)]
    pub token_uri: String,
    #[serde(rename = "auth_provider_x509_cert_url", default)]
    pub provider_cert_url: String,
    #[serde(rename = "client_x509_cert_url", default)]
    pub client_cert_url: String,
}

/// Whether two JSON-encoded credential blobs represent the same credential.
///
/// Either side failing to parse means "changed": an update attempt against
/// the service is preferred over silently accepting unparsable input.
pub fn gcp_credentials_match(old: &str, new: &str) -> bool {
    let prev: GcpCredentials = match serde_json::from_str(old) {
        Ok(c) => c,
        Err(_) => return false,
    };
    let cur: GcpCredentials = match serde_json::from_str(new) {
        Ok(c) => c,
        Err(_) => return false,
    };
    prev == cur
}
