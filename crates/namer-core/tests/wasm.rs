//! WASM-target tests for namer-core.
//!
//! Runs the session, dispatch drivers, and event bus under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use namer_core::dispatch;
use namer_core::event_bus::EventBus;
use namer_core::ports::*;
use namer_core::session::{ChatSession, GENERIC_ERROR, NO_VALID_RESPONSE};
use namer_types::config::NamerConfig;
use namer_types::event::SessionEvent;
use namer_types::turn::ChatTurn;
use namer_types::{NamerError, Result};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use async_trait::async_trait;
use serde_json::{json, Value};

#[derive(Default)]
struct MapStorage {
    data: RefCell<HashMap<String, String>>,
}

impl StoragePort for MapStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.data.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "map"
    }
}

struct FixedNaming(Result<Value>);

#[async_trait(?Send)]
impl NamingPort for FixedNaming {
    async fn suggest(&self, _req: &NamingRequest) -> Result<Value> {
        self.0.clone()
    }
}

struct OkClipboard;

#[async_trait(?Send)]
impl ClipboardPort for OkClipboard {
    async fn write_text(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

struct InstantTimer;

#[async_trait(?Send)]
impl TimerPort for InstantTimer {
    async fn sleep(&self, _ms: u64) {}
}

fn session_with(storage: Rc<MapStorage>) -> RefCell<ChatSession> {
    RefCell::new(ChatSession::new(NamerConfig::default(), storage, EventBus::new()))
}

// ─── Submit ──────────────────────────────────────────────

#[wasm_bindgen_test]
async fn submit_names() {
    let session = session_with(Rc::new(MapStorage::default()));
    session.borrow_mut().draft = "tea house".to_string();
    let naming = FixedNaming(Ok(json!(["Leaf", "Steep"])));

    assert!(dispatch::submit(&session, &naming).await);
    assert_eq!(session.borrow().turns()[1], ChatTurn::bot("Leaf\nSteep"));
}

#[wasm_bindgen_test]
async fn submit_malformed_and_failed() {
    let session = session_with(Rc::new(MapStorage::default()));

    session.borrow_mut().draft = "one".to_string();
    dispatch::submit(&session, &FixedNaming(Ok(json!({ "error": "x" })))).await;

    session.borrow_mut().draft = "two".to_string();
    dispatch::submit(&session, &FixedNaming(Err(NamerError::Network("refused".to_string())))).await;

    let s = session.borrow();
    assert_eq!(s.turns()[1].text, NO_VALID_RESPONSE);
    assert_eq!(s.turns()[3].text, GENERIC_ERROR);
}

#[wasm_bindgen_test]
async fn submit_blank_is_noop() {
    let session = session_with(Rc::new(MapStorage::default()));
    session.borrow_mut().draft = "  ".to_string();
    assert!(!dispatch::submit(&session, &FixedNaming(Ok(json!(["A"])))).await);
    assert!(session.borrow().turns().is_empty());
}

// ─── Persistence ─────────────────────────────────────────

#[wasm_bindgen_test]
async fn reload_restores_state() {
    let storage = Rc::new(MapStorage::default());
    {
        let session = session_with(storage.clone());
        session.borrow_mut().draft = "bike repair".to_string();
        dispatch::submit(&session, &FixedNaming(Ok(json!(["Spoke"])))).await;
        session.borrow_mut().add_to_shortlist("Spoke");
    }
    let reloaded = session_with(storage);
    assert_eq!(reloaded.borrow().turns().len(), 2);
    assert_eq!(reloaded.borrow().shortlist(), &["Spoke"]);
}

#[wasm_bindgen_test]
fn reset_clears_everything() {
    let storage = Rc::new(MapStorage::default());
    let session = session_with(storage.clone());
    session.borrow_mut().add_to_shortlist("Spoke");
    session.borrow_mut().reset_history();
    assert!(storage.data.borrow().is_empty());
}

// ─── Copy ────────────────────────────────────────────────

#[wasm_bindgen_test]
async fn copy_expires_indicator() {
    let bus = EventBus::new();
    let session = RefCell::new(ChatSession::new(
        NamerConfig::default(),
        Rc::new(MapStorage::default()),
        bus.clone(),
    ));
    dispatch::copy(&session, &OkClipboard, &InstantTimer, "Acme").await;
    assert!(!session.borrow().is_copied_active());
    assert_eq!(
        bus.drain(),
        vec![
            SessionEvent::Copied { text: "Acme".to_string() },
            SessionEvent::CopiedExpired,
        ]
    );
}
