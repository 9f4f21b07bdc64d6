pub mod creds;
pub mod error;
pub mod id;
pub mod types;

mod tests;

pub use creds::{gcp_credentials_match, GcpCredentials};
pub use error::DomainError;
pub use id::{EntityId, ID_SEPARATOR};
pub use types::{
    Account, AlibabaAccount, AwsAccount, AzureAccount, CloudAccount, CloudType, GcpAccount,
};
