//! Versioned envelope for persisted lists.
//!
//! Snapshots written by this crate carry a format version and a timestamp.
//! Older data written as a bare JSON array is still accepted on load.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{NamerError, Result};

/// Current on-disk format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub version: u32,
    pub saved_at: String,
    pub items: Vec<T>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredForm<T> {
    Versioned(Snapshot<T>),
    Legacy(Vec<T>),
}

impl<T> Snapshot<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: chrono::Utc::now().to_rfc3339(),
            items,
        }
    }
}

impl<T: Serialize> Snapshot<T> {
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> Snapshot<T> {
    /// Decode either a versioned snapshot or a legacy bare array.
    pub fn decode(raw: &str) -> Result<Vec<T>> {
        match serde_json::from_str::<StoredForm<T>>(raw) {
            Ok(StoredForm::Versioned(snapshot)) => {
                if snapshot.version > SNAPSHOT_VERSION {
                    return Err(NamerError::Serialization(format!(
                        "snapshot version {} is newer than supported version {}",
                        snapshot.version, SNAPSHOT_VERSION
                    )));
                }
                Ok(snapshot.items)
            }
            Ok(StoredForm::Legacy(items)) => Ok(items),
            Err(e) => Err(e.into()),
        }
    }
}
