pub mod client;
pub mod error;
pub mod http;
pub mod memory;

pub use client::AccountClient;
pub use error::ClientError;
pub use http::{HttpAccountClient, StaticToken, TokenProvider};
pub use memory::InMemoryClient;
