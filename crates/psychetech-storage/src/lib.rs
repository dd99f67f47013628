//! psychetech-storage
//!
//! The persistence boundary. The engines hand finished records to an
//! opaque key-value capability; whatever actually stores them (the
//! browser's storage in the reference deployment) sits behind the
//! [`KeyValueStore`] trait.

pub mod error;
pub mod memory;
pub mod records;

use error::StorageError;

/// An opaque key-value capability for completed records.
pub trait KeyValueStore {
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// `Ok(None)` for an absent key; errors are reserved for backend
    /// failures.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
}
