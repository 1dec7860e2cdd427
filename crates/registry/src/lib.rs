//! Registry crate: the persisted set of users who have started the bot.
//!
//! ## Modules
//!
//! - [`error`] – Registry error types
//! - [`models`] – UserRecord and the on-disk record shape
//! - [`registry`] – Registry (ordered id → record mapping)
//! - [`growth`] – Cumulative registrations per calendar date
//! - [`store`] – RegistryStore (JSON file, full read-modify-write)

mod error;
mod growth;
mod models;
mod registry;
mod store;

pub use error::RegistryError;
pub use growth::{cumulative_growth, GrowthPoint};
pub use models::{UserRecord, JOINED_AT_FORMAT};
pub use registry::{Registration, Registry};
pub use store::RegistryStore;
