use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::KeyValueStore;
use crate::error::StorageError;

/// Save a record as pretty-printed JSON under `key`.
pub fn save_record<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, body)?;
    info!(record.key = key, "record saved");
    Ok(())
}

/// Load a JSON record from `key`. Returns `Ok(None)` if nothing is
/// stored there.
pub fn load_record<S, T>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}
