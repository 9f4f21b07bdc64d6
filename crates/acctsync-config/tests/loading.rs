use std::path::Path;

use acctsync_config::{decode_account, load_account};
use acctsync_domain::CloudType;

#[test]
fn load_gcp_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gcp.yml");
    let flat = load_account(&path).expect("should load without error");

    let gcp = flat.gcp.as_ref().expect("gcp slot should be populated");
    assert_eq!(gcp.name, "acct1");
    assert!(gcp.enabled, "enabled should default to true");
    assert!(gcp.compression_enabled);
    assert!(flat.aws.is_none());

    let (cloud, name, _) = decode_account(&flat, "").unwrap();
    assert_eq!(cloud, CloudType::Gcp);
    assert_eq!(name, "acct1");
}

#[test]
fn load_aws_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/aws.yml");
    let flat = load_account(&path).expect("should load without error");

    let aws = flat.aws.as_ref().expect("aws slot should be populated");
    assert_eq!(aws.group_ids, vec!["g1".to_string(), "g2".to_string()]);
    assert!(aws.enabled);
    assert_eq!(aws.account_id, "", "remote id is empty before create");
}

#[test]
fn missing_file_returns_io_error() {
    let path = Path::new("/nonexistent/path/account.yml");
    assert!(load_account(path).is_err());
}
