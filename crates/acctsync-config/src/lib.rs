pub mod codec;
pub mod error;
pub mod flat;
pub mod loader;

pub use codec::{decode_account, project_account};
pub use error::ConfigError;
pub use flat::{AlibabaBlock, AwsBlock, AzureBlock, FlatAccount, GcpBlock};
pub use loader::load_account;
