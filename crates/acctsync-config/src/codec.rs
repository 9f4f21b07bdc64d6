//! Variant codec: flat desired state ⇄ typed account record.
//!
//! `decode_account` picks the populated slot and builds the typed record;
//! `project_account` is the inverse, writing exactly one slot back and
//! clearing the rest so stale data from a shape change never lingers.

use acctsync_domain::{
    Account, AlibabaAccount, AwsAccount, AzureAccount, CloudAccount, CloudType, GcpAccount,
    GcpCredentials,
};
use tracing::warn;

use crate::error::ConfigError;
use crate::flat::{AlibabaBlock, AwsBlock, AzureBlock, FlatAccount, GcpBlock};

/// Decode the flat state into `(cloud type, name, record)`, injecting
/// `remote_id` as the record's identity (empty on create, the tracked id on
/// update).
///
/// Slots are inspected in a fixed priority order: aws, azure, gcp, alibaba.
/// The schema forbids more than one populated slot, so the order is only a
/// defensive tie-break if that invariant is ever violated upstream.
pub fn decode_account(
    flat: &FlatAccount,
    remote_id: &str,
) -> Result<(CloudType, String, Account), ConfigError> {
    if let Some(x) = &flat.aws {
        return Ok((CloudType::Aws, x.name.clone(), decode_aws(x, remote_id)));
    }
    if let Some(x) = &flat.azure {
        return Ok((CloudType::Azure, x.name.clone(), decode_azure(x, remote_id)));
    }
    if let Some(x) = &flat.gcp {
        return Ok((CloudType::Gcp, x.name.clone(), decode_gcp(x, remote_id)));
    }
    if let Some(x) = &flat.alibaba {
        return Ok((
            CloudType::Alibaba,
            x.name.clone(),
            decode_alibaba(x, remote_id),
        ));
    }
    Err(ConfigError::NoVariantSelected)
}

fn decode_aws(x: &AwsBlock, remote_id: &str) -> Account {
    Account::Aws(AwsAccount {
        account_id: remote_id.to_string(),
        enabled: x.enabled,
        external_id: x.external_id.clone(),
        group_ids: x.group_ids.clone(),
        name: x.name.clone(),
        role_arn: x.role_arn.clone(),
    })
}

fn decode_azure(x: &AzureBlock, remote_id: &str) -> Account {
    Account::Azure(AzureAccount {
        account: CloudAccount {
            account_id: remote_id.to_string(),
            enabled: x.enabled,
            group_ids: x.group_ids.clone(),
            name: x.name.clone(),
        },
        client_id: x.client_id.clone(),
        key: x.key.clone(),
        monitor_flow_logs: x.monitor_flow_logs,
        tenant_id: x.tenant_id.clone(),
        service_principal_id: x.service_principal_id.clone(),
    })
}

fn decode_gcp(x: &GcpBlock, remote_id: &str) -> Account {
    // An unparsable credential document is tolerated here: the record is
    // sent with zero-valued credentials and the remote service rejects it
    // with a proper validation error.
    let credentials = match serde_json::from_str::<GcpCredentials>(&x.credentials_json) {
        Ok(c) => c,
        Err(e) => {
            warn!(name = %x.name, error = %e, "credentials_json did not parse");
            GcpCredentials::default()
        }
    };

    Account::Gcp(GcpAccount {
        account: CloudAccount {
            account_id: remote_id.to_string(),
            enabled: x.enabled,
            group_ids: x.group_ids.clone(),
            name: x.name.clone(),
        },
        compression_enabled: x.compression_enabled,
        dataflow_enabled_project: x.dataflow_enabled_project.clone(),
        flow_log_storage_bucket: x.flow_log_storage_bucket.clone(),
        credentials,
    })
}

fn decode_alibaba(x: &AlibabaBlock, remote_id: &str) -> Account {
    Account::Alibaba(AlibabaAccount {
        account_id: remote_id.to_string(),
        group_ids: x.group_ids.clone(),
        name: x.name.clone(),
        ram_arn: x.ram_arn.clone(),
    })
}

/// Project a typed record back into the flat representation.
///
/// Exactly the record's own slot is populated; every other slot is cleared,
/// even though at most one should ever be set, so a shape change can never
/// leave stale data in the projected state.
pub fn project_account(account: &Account) -> FlatAccount {
    match account {
        Account::Aws(v) => FlatAccount {
            aws: Some(AwsBlock {
                account_id: v.account_id.clone(),
                enabled: v.enabled,
                external_id: v.external_id.clone(),
                group_ids: v.group_ids.clone(),
                name: v.name.clone(),
                role_arn: v.role_arn.clone(),
            }),
            ..FlatAccount::default()
        },
        Account::Azure(v) => FlatAccount {
            azure: Some(AzureBlock {
                account_id: v.account.account_id.clone(),
                enabled: v.account.enabled,
                group_ids: v.account.group_ids.clone(),
                name: v.account.name.clone(),
                client_id: v.client_id.clone(),
                key: v.key.clone(),
                monitor_flow_logs: v.monitor_flow_logs,
                tenant_id: v.tenant_id.clone(),
                service_principal_id: v.service_principal_id.clone(),
            }),
            ..FlatAccount::default()
        },
        Account::Gcp(v) => FlatAccount {
            gcp: Some(GcpBlock {
                account_id: v.account.account_id.clone(),
                enabled: v.account.enabled,
                group_ids: v.account.group_ids.clone(),
                name: v.account.name.clone(),
                compression_enabled: v.compression_enabled,
                dataflow_enabled_project: v.dataflow_enabled_project.clone(),
                flow_log_storage_bucket: v.flow_log_storage_bucket.clone(),
                // String-only struct, serialization cannot fail.
                credentials_json: serde_json::to_string(&v.credentials).unwrap_or_default(),
            }),
            ..FlatAccount::default()
        },
        Account::Alibaba(v) => FlatAccount {
            alibaba: Some(AlibabaBlock {
                account_id: v.account_id.clone(),
                group_ids: v.group_ids.clone(),
                name: v.name.clone(),
                ram_arn: v.ram_arn.clone(),
            }),
            ..FlatAccount::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aws_flat() -> FlatAccount {
        FlatAccount {
            aws: Some(AwsBlock {
                account_id: String::new(),
                enabled: true,
                external_id: "ext-1".into(),
                group_ids: vec!["g1".into(), "g2".into()],
                name: "aws-1".into(),
                role_arn: "arn:aws:iam::123:role/r".into(),
            }),
            ..FlatAccount::default()
        }
    }

    fn azure_flat() -> FlatAccount {
        FlatAccount {
            azure: Some(AzureBlock {
                account_id: String::new(),
                enabled: false,
                group_ids: vec!["g1".into()],
                name: "az-1".into(),
                client_id: "cid".into(),
                key: "k".into(),
                monitor_flow_logs: true,
                tenant_id: "tid".into(),
                service_principal_id: "spid".into(),
            }),
            ..FlatAccount::default()
        }
    }

    fn gcp_flat() -> FlatAccount {
        FlatAccount {
            gcp: Some(GcpBlock {
                account_id: "p1".into(),
                enabled: true,
                group_ids: vec!["g1".into()],
                name: "acct1".into(),
                compression_enabled: true,
                dataflow_enabled_project: "p1".into(),
                flow_log_storage_bucket: "bucket".into(),
                credentials_json: r#"{"type":"service_account","project_id":"p1"}"#.into(),
            }),
            ..FlatAccount::default()
        }
    }

    fn alibaba_flat() -> FlatAccount {
        FlatAccount {
            alibaba: Some(AlibabaBlock {
                account_id: String::new(),
                group_ids: vec!["g1".into()],
                name: "ali-1".into(),
                ram_arn: "acs:ram::123:role/r".into(),
            }),
            ..FlatAccount::default()
        }
    }

    #[test]
    fn aws_round_trips() {
        let (cloud, name, account) = decode_account(&aws_flat(), "111").unwrap();
        assert_eq!(cloud, CloudType::Aws);
        assert_eq!(name, "aws-1");
        assert_eq!(account.account_id(), "111");

        let projected = project_account(&account);
        let block = projected.aws.as_ref().unwrap();
        assert_eq!(block.account_id, "111");
        assert_eq!(block.group_ids, vec!["g1".to_string(), "g2".to_string()]);
        assert!(projected.azure.is_none());
        assert!(projected.gcp.is_none());
        assert!(projected.alibaba.is_none());
    }

    #[test]
    fn azure_round_trips() {
        let (cloud, name, account) = decode_account(&azure_flat(), "222").unwrap();
        assert_eq!(cloud, CloudType::Azure);
        assert_eq!(name, "az-1");

        let projected = project_account(&account);
        let block = projected.azure.as_ref().unwrap();
        assert_eq!(block.account_id, "222");
        assert!(!block.enabled);
        assert!(block.monitor_flow_logs);
        assert_eq!(block.service_principal_id, "spid");
        assert!(projected.aws.is_none());
    }

    #[test]
    fn gcp_round_trips_with_parsed_credentials() {
        let (cloud, name, account) = decode_account(&gcp_flat(), "333").unwrap();
        assert_eq!(cloud, CloudType::Gcp);
        assert_eq!(name, "acct1");
        match &account {
            Account::Gcp(g) => {
                assert_eq!(g.credentials.credential_type, "service_account");
                assert_eq!(g.credentials.project_id, "p1");
            }
            other => panic!("expected gcp record, got {:?}", other),
        }

        let projected = project_account(&account);
        let block = projected.gcp.as_ref().unwrap();
        assert_eq!(block.account_id, "333");
        // Re-serialized credentials stay semantically equal to the input.
        assert!(acctsync_domain::gcp_credentials_match(
            &gcp_flat().gcp.unwrap().credentials_json,
            &block.credentials_json,
        ));
    }

    #[test]
    fn alibaba_round_trips() {
        let (cloud, _, account) = decode_account(&alibaba_flat(), "444").unwrap();
        assert_eq!(cloud, CloudType::Alibaba);
        let projected = project_account(&account);
        assert_eq!(projected.alibaba.as_ref().unwrap().account_id, "444");
        assert!(projected.gcp.is_none());
    }

    #[test]
    fn unparsable_credentials_yield_zero_valued_record() {
        let mut flat = gcp_flat();
        flat.gcp.as_mut().unwrap().credentials_json = "{not json".into();
        let (_, _, account) = decode_account(&flat, "").unwrap();
        match account {
            Account::Gcp(g) => assert_eq!(g.credentials, GcpCredentials::default()),
            other => panic!("expected gcp record, got {:?}", other),
        }
    }

    #[test]
    fn empty_flat_state_is_a_config_error() {
        let err = decode_account(&FlatAccount::default(), "").unwrap_err();
        assert!(matches!(err, ConfigError::NoVariantSelected));
    }

    #[test]
    fn aws_wins_when_two_slots_are_populated() {
        let flat = FlatAccount {
            aws: aws_flat().aws,
            azure: azure_flat().azure,
            ..FlatAccount::default()
        };
        let (cloud, name, _) = decode_account(&flat, "").unwrap();
        assert_eq!(cloud, CloudType::Aws);
        assert_eq!(name, "aws-1");
    }

    #[test]
    fn projection_clears_previously_selected_slot() {
        // A shape change from azure to aws must not leave azure data behind.
        let (_, _, account) = decode_account(&aws_flat(), "111").unwrap();
        let projected = project_account(&account);
        assert!(projected.azure.is_none());
        assert!(projected.aws.is_some());
    }
}
