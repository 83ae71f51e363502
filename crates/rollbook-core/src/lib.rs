//! rollbook-core — student records, the in-memory store, and configuration.
//!
//! The store performs no console I/O; callers render records and errors
//! themselves.

pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use config::{load_config_from, seed_store, ListingStyle, RollbookConfig};
pub use error::StoreError;
pub use model::{format_marks, Grade, StudentRecord};
pub use store::RecordStore;
