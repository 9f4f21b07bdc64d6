pub mod diff;
pub mod error;
pub mod ops;

pub use diff::needs_update;
pub use error::ReconcileError;
pub use ops::{create, delete, read, update, Reconciled};
