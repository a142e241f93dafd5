//! Browser-only tests for the localStorage backend.
//!
//! Run with `wasm-pack test --headless --firefox` (or `--chrome`).

use wasm_bindgen_test::*;

use namer_core::event_bus::EventBus;
use namer_core::ports::StoragePort;
use namer_core::session::ChatSession;
use namer_platform::storage::{auto_detect_storage, LocalStorage};
use namer_types::config::{NamerConfig, StorageConfig};
use std::rc::Rc;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh(prefix: &str) -> (LocalStorage, StorageConfig) {
    let storage = LocalStorage::open().unwrap();
    let config = StorageConfig {
        chat_key: format!("{}:chatMessages", prefix),
        shortlist_key: format!("{}:shortlist", prefix),
        ..StorageConfig::default()
    };
    storage.remove(&config.chat_key).unwrap();
    storage.remove(&config.shortlist_key).unwrap();
    (storage, config)
}

#[wasm_bindgen_test]
fn local_storage_backend_name() {
    let storage = LocalStorage::open().unwrap();
    assert_eq!(storage.backend_name(), "localstorage");
}

#[wasm_bindgen_test]
fn local_storage_save_load_remove() {
    let (storage, config) = fresh("test-basic");
    storage.save(&config.chat_key, "[]").unwrap();
    assert_eq!(storage.load(&config.chat_key).unwrap().as_deref(), Some("[]"));
    storage.remove(&config.chat_key).unwrap();
    assert!(storage.load(&config.chat_key).unwrap().is_none());
}

#[wasm_bindgen_test]
fn auto_detect_prefers_local_storage() {
    let storage = auto_detect_storage(&StorageConfig::default());
    assert_eq!(storage.backend_name(), "localstorage");
}

#[wasm_bindgen_test]
fn session_survives_reload() {
    let (_, storage_config) = fresh("test-reload");
    let config = NamerConfig {
        storage: storage_config,
        ..NamerConfig::default()
    };

    {
        let storage: Rc<dyn StoragePort> = Rc::new(LocalStorage::open().unwrap());
        let mut session = ChatSession::new(config.clone(), storage, EventBus::new());
        session.add_to_shortlist("Acme");
        session.add_to_shortlist("Nova");
    }

    let storage: Rc<dyn StoragePort> = Rc::new(LocalStorage::open().unwrap());
    let mut session = ChatSession::new(config.clone(), storage.clone(), EventBus::new());
    assert_eq!(session.shortlist(), &["Acme", "Nova"]);

    session.reset_history();
    assert!(storage.load(&config.storage.shortlist_key).unwrap().is_none());
}
