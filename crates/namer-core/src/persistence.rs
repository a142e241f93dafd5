//! Persistence mirror for the two session lists.
//!
//! Each list lives under its own key as a versioned [`Snapshot`]. Both are
//! read once when the session starts and rewritten after every mutation.
//! A key whose data could not be read is never written again until
//! [`SnapshotStore::clear`] removes it, so unreadable data (e.g. from a newer
//! format version) is not silently replaced.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use namer_types::{
    Result,
    config::StorageConfig,
    snapshot::Snapshot,
    turn::ChatTurn,
};
use crate::ports::StoragePort;

pub struct SnapshotStore {
    storage: Rc<dyn StoragePort>,
    chat_key: String,
    shortlist_key: String,
    /// Keys whose stored data failed to load
    held: RefCell<HashSet<String>>,
}

impl SnapshotStore {
    pub fn new(storage: Rc<dyn StoragePort>, config: &StorageConfig) -> Self {
        Self {
            storage,
            chat_key: config.chat_key.clone(),
            shortlist_key: config.shortlist_key.clone(),
            held: RefCell::new(HashSet::new()),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.storage.backend_name()
    }

    pub fn load_turns(&self) -> Result<Vec<ChatTurn>> {
        self.load(&self.chat_key)
    }

    pub fn save_turns(&self, turns: &[ChatTurn]) -> Result<()> {
        self.save(&self.chat_key, turns)
    }

    pub fn load_shortlist(&self) -> Result<Vec<String>> {
        self.load(&self.shortlist_key)
    }

    pub fn save_shortlist(&self, shortlist: &[String]) -> Result<()> {
        self.save(&self.shortlist_key, shortlist)
    }

    /// Whether writes to `key` are suspended because its data was unreadable
    pub fn is_held(&self, key: &str) -> bool {
        self.held.borrow().contains(key)
    }

    /// Remove both snapshots. Both removals are attempted even if the first fails.
    /// A key that is removed successfully becomes writable again.
    pub fn clear(&self) -> Result<()> {
        let chat = self.remove(&self.chat_key);
        let shortlist = self.remove(&self.shortlist_key);
        chat.and(shortlist)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove(key)?;
        self.held.borrow_mut().remove(key);
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let loaded = match self.storage.load(key) {
            Ok(Some(raw)) => Snapshot::decode(&raw),
            Ok(None) => Ok(Vec::new()),
            Err(e) => Err(e),
        };
        if loaded.is_err() {
            self.held.borrow_mut().insert(key.to_string());
        }
        loaded
    }

    fn save<T: Serialize + Clone>(&self, key: &str, items: &[T]) -> Result<()> {
        if self.is_held(key) {
            log::debug!("Snapshot '{}' is unreadable; left untouched until history is cleared", key);
            return Ok(());
        }
        let encoded = Snapshot::new(items.to_vec()).encode()?;
        self.storage.save(key, &encoded)
    }
}
