//! Pick the storage backend named by the config.
//!
//! `Auto` prefers localStorage and falls back to memory.

use std::rc::Rc;
use namer_core::ports::StoragePort;
use namer_types::config::{StorageBackendType, StorageConfig};
use super::{LocalStorage, MemoryStorage};

/// Open the configured backend.
/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_storage(config: &StorageConfig) -> Rc<dyn StoragePort> {
    match config.backend {
        StorageBackendType::Memory => {
            log::info!("Storage backend: memory (configured)");
            Rc::new(MemoryStorage::new())
        }
        StorageBackendType::Auto | StorageBackendType::LocalStorage => match LocalStorage::open() {
            Ok(local) => {
                log::info!("Storage backend: localStorage");
                Rc::new(local)
            }
            Err(e) => {
                log::warn!("localStorage unavailable ({}), falling back to memory", e);
                Rc::new(MemoryStorage::new())
            }
        },
    }
}
