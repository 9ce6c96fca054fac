//! Local key/value persistence.
//!
//! # Keys
//!
//! - `admin_products` - ordered list of [`Product`](crate::Product)
//! - `admin_orders` - ordered list of [`Order`](crate::Order)
//! - `latestOrder` - snapshot of the most recently placed order
//! - `cart` - the shopper's cart lines
//!
//! Values are JSON documents. [`LocalStorage`] is deliberately as thin as
//! browser local storage (get/set/remove of strings); [`read_json`] and
//! [`write_json`] layer typed access on top.
//!
//! # Implementations
//!
//! - [`MemoryStorage`] - lives as long as the value, used by tests and
//!   throwaway sessions
//! - [`FileStorage`] - one JSON file per key inside a data directory

mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key holding the admin product collection.
pub const ADMIN_PRODUCTS_KEY: &str = "admin_products";
/// Key holding the admin order collection.
pub const ADMIN_ORDERS_KEY: &str = "admin_orders";
/// Key holding the last order placed through checkout.
pub const LATEST_ORDER_KEY: &str = "latestOrder";
/// Key holding the persisted cart.
pub const CART_KEY: &str = "cart";

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored value is not valid JSON for the expected type.
    #[error("stored value for {key} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be encoded.
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key is not a plain identifier.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// String key/value storage with local-storage semantics.
///
/// Writers take `&mut self`: a store has exactly one writer at a time.
pub trait LocalStorage {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: LocalStorage + ?Sized> LocalStorage for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Read and decode the JSON value under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if the stored value does not decode as
/// `T`, or the backend's error if it cannot be read.
pub fn read_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: LocalStorage + ?Sized,
{
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Corrupt {
            key: key.to_owned(),
            source,
        })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if the value cannot be encoded, or the
/// backend's error if it cannot be written.
pub fn write_json<T, S>(storage: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: LocalStorage + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_owned(),
        source,
    })?;
    storage.set_item(key, &raw)?;
    tracing::debug!(key, bytes = raw.len(), "Stored value");
    Ok(())
}

/// Whether `key` is a plain identifier safe to use as a file name.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}
