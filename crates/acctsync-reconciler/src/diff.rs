//! Change detection over flat desired states.
//!
//! The GCP credential blob is the one field where textual inequality does
//! not imply a real change: re-serialization shuffles JSON key order, so the
//! host driver must suppress the diff when the parsed credentials are equal.
//! Everything else compares field-for-field.

use acctsync_config::{FlatAccount, GcpBlock};
use acctsync_domain::gcp_credentials_match;

/// Whether the remote account needs an update to reach `desired`.
///
/// Applies the credential diff-suppression rule: a byte-different but
/// semantically equal `credentials_json` does not count as a change.
pub fn needs_update(current: &FlatAccount, desired: &FlatAccount) -> bool {
    match (&current.gcp, &desired.gcp) {
        (Some(cur), Some(des)) => {
            current.aws != desired.aws
                || current.azure != desired.azure
                || current.alibaba != desired.alibaba
                || gcp_block_changed(cur, des)
        }
        _ => current != desired,
    }
}

fn gcp_block_changed(cur: &GcpBlock, des: &GcpBlock) -> bool {
    cur.account_id != des.account_id
        || cur.enabled != des.enabled
        || cur.group_ids != des.group_ids
        || cur.name != des.name
        || cur.compression_enabled != des.compression_enabled
        || cur.dataflow_enabled_project != des.dataflow_enabled_project
        || cur.flow_log_storage_bucket != des.flow_log_storage_bucket
        || credentials_changed(&cur.credentials_json, &des.credentials_json)
}

fn credentials_changed(cur: &str, des: &str) -> bool {
    // Byte-equal text is never a change, even when both sides are
    // unparsable; otherwise fall back to semantic equivalence.
    cur != des && !gcp_credentials_match(cur, des)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gcp(creds: &str) -> FlatAccount {
        FlatAccount {
            gcp: Some(GcpBlock {
                account_id: "p1".into(),
                enabled: true,
                group_ids: vec!["g1".into()],
                name: "acct1".into(),
                compression_enabled: false,
                dataflow_enabled_project: String::new(),
                flow_log_storage_bucket: String::new(),
                credentials_json: creds.into(),
            }),
            ..FlatAccount::default()
        }
    }

    #[test]
    fn identical_states_need_no_update() {
        let a = gcp(r#"{"type":"service_account","project_id":"p1"}"#);
        assert!(!needs_update(&a, &a.clone()));
    }

    #[test]
    fn reordered_credential_keys_are_suppressed() {
        let cur = gcp(r#"{"type":"service_account","project_id":"p1"}"#);
        let des = gcp(r#"{ "project_id": "p1", "type": "service_account" }"#);
        assert!(!needs_update(&cur, &des));
    }

    #[test]
    fn rotated_credential_is_a_change() {
        let cur = gcp(r#"{"type":"service_account","private_key_id":"kid"}"#);
        let des = gcp(r#"{"type":"service_account","private_key_id":"kid-2"}"#);
        assert!(needs_update(&cur, &des));
    }

    #[test]
    fn unparsable_but_byte_equal_credentials_are_not_a_change() {
        let a = gcp("{not json");
        assert!(!needs_update(&a, &a.clone()));
    }

    #[test]
    fn non_credential_gcp_field_change_is_detected() {
        let cur = gcp(r#"{"type":"service_account"}"#);
        let mut des = cur.clone();
        des.gcp.as_mut().unwrap().flow_log_storage_bucket = "bucket".into();
        assert!(needs_update(&cur, &des));
    }

    #[test]
    fn variant_switch_is_a_change() {
        let cur = gcp(r#"{"type":"service_account"}"#);
        let des = FlatAccount::default();
        assert!(needs_update(&cur, &des));
    }
}
