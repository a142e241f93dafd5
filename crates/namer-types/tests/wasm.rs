//! WASM-target tests for namer-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use namer_types::turn::*;
use namer_types::event::*;
use namer_types::config::*;
use namer_types::snapshot::*;
use namer_types::error::*;

// ─── ChatTurn Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn turn_user() {
    let turn = ChatTurn::user("Organic dog treats");
    assert_eq!(turn.sender, Sender::User);
    assert_eq!(turn.text, "Organic dog treats");
}

#[wasm_bindgen_test]
fn turn_names_and_lines() {
    let turn = ChatTurn::names(&["Acme", "Nova", "Zenith"]);
    assert_eq!(turn.text, "Acme\nNova\nZenith");
    assert_eq!(turn.lines().collect::<Vec<_>>(), vec!["Acme", "Nova", "Zenith"]);
}

// ─── Snapshot Tests ──────────────────────────────────────

// chrono's wasmbind feature supplies the clock here
#[wasm_bindgen_test]
fn snapshot_timestamp_under_wasm() {
    let snapshot = Snapshot::new(vec![ChatTurn::user("x")]);
    assert!(snapshot.saved_at.contains('T'));
}

#[wasm_bindgen_test]
fn snapshot_versioned_and_legacy() {
    let raw = Snapshot::new(vec!["Acme".to_string()]).encode().unwrap();
    let items: Vec<String> = Snapshot::decode(&raw).unwrap();
    assert_eq!(items, vec!["Acme"]);

    let legacy: Vec<String> = Snapshot::decode(r#"["Nova"]"#).unwrap();
    assert_eq!(legacy, vec!["Nova"]);
}

// ─── Event / Config / Error Tests ────────────────────────

#[wasm_bindgen_test]
fn session_event_roundtrip() {
    let event = SessionEvent::Copied { text: "Acme".to_string() };
    let json = serde_json::to_string(&event).unwrap();
    let back: SessionEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[wasm_bindgen_test]
fn default_config() {
    let config = NamerConfig::default();
    assert_eq!(config.copied_indicator_ms, 2000);
    assert_eq!(config.storage.chat_key, "chatMessages");
}

#[wasm_bindgen_test]
fn error_display() {
    let err = NamerError::Network("connection refused".to_string());
    assert_eq!(err.to_string(), "Network error: connection refused");
}
