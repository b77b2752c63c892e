//! CareGate Store — the shared key-value store adapter and the
//! repository implementations over it.
//!
//! This crate provides:
//! - The persistence port and its backends ([`StoreBackend`],
//!   [`MemoryStore`], [`FileStore`])
//! - The typed facade the repositories share ([`Store`])
//! - Store-backed implementations of the `caregate-core` repository
//!   traits
//! - The fixed key names of the portal's external interface ([`keys`])

pub mod error;
pub mod keys;
pub mod repository;
pub mod store;

pub use error::StoreError;
pub use store::{FileStore, MemoryStore, Store, StoreBackend, StoreConfig};
