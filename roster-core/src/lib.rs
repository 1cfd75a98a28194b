//! Roster core library: domain types, the seed set, the in-memory store and its operations.
//!
//! Public API surface:
//! - [`types`]: newtypes and domain structs
//! - [`error`]: [`RosterError`]
//! - [`seed`]: built-in activities and YAML seed files
//! - [`store`]: [`RosterStore`]
//! - [`manager`]: [`RosterManager`] (list / enroll / unenroll)

pub mod error;
pub mod manager;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{ErrorKind, RosterError};
pub use manager::RosterManager;
pub use store::RosterStore;
pub use types::{Activity, ActivityName, ActivityView, CapacityPolicy, Catalog, Email};
