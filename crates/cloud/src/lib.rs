//! Object-storage read access for the mailbridge pipeline.
//!
//! Provides the [`ObjectStore`] trait — the single seam between the handler
//! and AWS — and its S3-backed implementation.

pub mod store;

pub use store::{create_client, ObjectStore, S3ObjectStore, StoreError};
