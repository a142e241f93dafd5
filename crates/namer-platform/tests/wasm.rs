//! WASM-target tests for namer-platform (Node.js runtime).
//!
//! Tests MemoryStorage, backend auto-detection, and the timer under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage tests require a browser and live in browser.rs.

use wasm_bindgen_test::*;

use namer_core::ports::{StoragePort, TimerPort};
use namer_platform::storage::{auto_detect_storage, MemoryStorage};
use namer_platform::timer::BrowserTimer;
use namer_types::config::StorageConfig;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    assert!(storage.load("nonexistent").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.save("key", "v1").unwrap();
    storage.save("key", "v2").unwrap();
    assert_eq!(storage.load("key").unwrap().as_deref(), Some("v2"));
}

#[wasm_bindgen_test]
fn memory_storage_remove() {
    let storage = MemoryStorage::new();
    storage.save("key", "val").unwrap();
    storage.remove("key").unwrap();
    assert!(storage.load("key").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_storage_unicode_value() {
    let storage = MemoryStorage::new();
    storage.save("shortlist", r#"["Café Lumière","東京"]"#).unwrap();
    assert_eq!(
        storage.load("shortlist").unwrap().as_deref(),
        Some(r#"["Café Lumière","東京"]"#)
    );
}

// ─── Auto-detect Tests ───────────────────────────────────

// Node has no window, so Auto must degrade to memory
#[wasm_bindgen_test]
fn auto_detect_falls_back_to_memory_without_window() {
    let storage = auto_detect_storage(&StorageConfig::default());
    assert_eq!(storage.backend_name(), "memory");
}

// ─── Timer Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
async fn browser_timer_resolves() {
    BrowserTimer.sleep(5).await;
}
