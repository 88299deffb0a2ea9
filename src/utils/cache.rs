//! Session cache for fetched record sets.
//!
//! Backed by sessionStorage, so it is cleared when the tab is closed:
//! fresh data on every visit, no refetch while moving between routes.
//!
//! Entries carry [`CACHE_VERSION`]; an entry written under another version,
//! or one that no longer parses, is a miss and is removed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::dom;
use crate::config::CACHE_VERSION;

/// Cache operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize cache entry: {0}")]
    SerializationFailed(String),
    #[error("failed to write cache entry")]
    WriteFailed,
}

/// Stored form of one record set.
#[derive(Serialize, Deserialize)]
struct CachedRecords<I> {
    version: u32,
    items: I,
}

/// Records stored under `key`, if present and current.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<Vec<T>> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    let records = decode(&json);
    if records.is_none() {
        tracing::debug!(key, "dropping stale session cache entry");
        let _ = storage.remove_item(key);
    }
    records
}

/// Store `items` under `key`, replacing any previous entry.
pub fn store<T: Serialize>(key: &str, items: &[T]) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = encode(items)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}

pub fn encode<T: Serialize>(items: &[T]) -> Result<String, CacheError> {
    serde_json::to_string(&CachedRecords {
        version: CACHE_VERSION,
        items,
    })
    .map_err(|e| CacheError::SerializationFailed(e.to_string()))
}

/// `None` unless `json` is an entry of the current version.
pub fn decode<T: DeserializeOwned>(json: &str) -> Option<Vec<T>> {
    let entry: CachedRecords<Vec<T>> = serde_json::from_str(json).ok()?;
    (entry.version == CACHE_VERSION).then_some(entry.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_entry_decodes() {
        let json = encode(&["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(decode::<String>(&json), Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_other_version_is_a_miss() {
        let json = format!(r#"{{"version":{},"items":[1,2]}}"#, CACHE_VERSION + 1);
        assert_eq!(decode::<u32>(&json), None);
    }

    #[test]
    fn test_unversioned_array_is_a_miss() {
        assert_eq!(decode::<u32>("[1,2,3]"), None);
    }

    #[test]
    fn test_mismatched_records_are_a_miss() {
        let json = format!(r#"{{"version":{CACHE_VERSION},"items":[{{"id":"a"}}]}}"#);
        assert_eq!(decode::<u32>(&json), None);
    }
}
