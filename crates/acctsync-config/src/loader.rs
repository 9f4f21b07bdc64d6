use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::flat::FlatAccount;

/// Load one flat desired-state file.
///
/// Expected file shape, one top-level slot per account type:
/// ```text
/// gcp:
///   name: acct1
///   group_ids: [g1]
///   credentials_json: '{"type":"service_account",...}'
/// ```
pub fn load_account(path: &Path) -> Result<FlatAccount, ConfigError> {
    debug!("Loading desired account state from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
        path: path.display().to_string(),
        source: e,
    })
}
