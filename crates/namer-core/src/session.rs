//! Chat session manager — the conversation log, the shortlist, and the
//! small state machine around one outstanding naming request.
//!
//! Idle → Submitting when a non-blank draft is taken by [`ChatSession::begin_submit`],
//! Submitting → Idle when [`ChatSession::finish_submit`] appends the bot turn.
//! Every committed mutation of a list is mirrored to storage straight away.

use std::rc::Rc;
use serde_json::Value;
use futures::future::AbortRegistration;
use namer_types::{
    NamerError, Result,
    config::NamerConfig,
    event::{SessionEvent, SubmitOutcome},
    turn::{ChatTurn, NAME_SEPARATOR},
};
use crate::copy_indicator::CopyIndicator;
use crate::event_bus::EventBus;
use crate::persistence::SnapshotStore;
use crate::ports::{NamingRequest, StoragePort};

/// Bot reply when the service answered with something other than names
pub const NO_VALID_RESPONSE: &str = "No valid response received.";

/// Bot reply when the request did not complete
pub const GENERIC_ERROR: &str = "An error occurred, please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

pub struct ChatSession {
    config: NamerConfig,
    store: SnapshotStore,
    event_bus: EventBus,
    turns: Vec<ChatTurn>,
    shortlist: Vec<String>,
    /// Text currently in the input field
    pub draft: String,
    state: SubmitState,
    copied: CopyIndicator,
    reset_modal_open: bool,
}

impl ChatSession {
    /// Create a session and restore both lists from storage.
    ///
    /// A snapshot that cannot be read is reported and treated as empty; the
    /// session always starts.
    pub fn new(config: NamerConfig, storage: Rc<dyn StoragePort>, event_bus: EventBus) -> Self {
        let store = SnapshotStore::new(storage, &config.storage);

        let turns = store.load_turns().unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable chat snapshot until history is cleared: {}", e);
            event_bus.emit(SessionEvent::StorageFailed { message: e.to_string() });
            Vec::new()
        });
        let shortlist = store.load_shortlist().unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable shortlist snapshot until history is cleared: {}", e);
            event_bus.emit(SessionEvent::StorageFailed { message: e.to_string() });
            Vec::new()
        });

        log::info!(
            "Session restored from {}: {} turns, {} shortlisted",
            store.backend_name(),
            turns.len(),
            shortlist.len()
        );

        Self {
            config,
            store,
            event_bus,
            turns,
            shortlist,
            draft: String::new(),
            state: SubmitState::Idle,
            copied: CopyIndicator::new(),
            reset_modal_open: false,
        }
    }

    // ─── Accessors ───────────────────────────────────────────

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn config(&self) -> &NamerConfig {
        &self.config
    }

    /// Replace the config. Storage keys are fixed for the session's lifetime.
    pub fn set_config(&mut self, config: NamerConfig) {
        self.config = config;
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn shortlist(&self) -> &[String] {
        &self.shortlist
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Whether the send action should be offered
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.reset_modal_open && !self.draft.trim().is_empty()
    }

    pub fn is_copied_active(&self) -> bool {
        self.copied.is_active()
    }

    pub fn copied_text(&self) -> Option<&str> {
        self.copied.text()
    }

    pub fn is_reset_modal_open(&self) -> bool {
        self.reset_modal_open
    }

    // ─── Submission ──────────────────────────────────────────

    /// Take the draft and move to Submitting.
    ///
    /// Returns the request to send. Returns `Ok(None)` without touching any
    /// state when the draft is blank or the reset confirmation is open, and
    /// [`NamerError::Busy`] while a request is already outstanding.
    pub fn begin_submit(&mut self) -> Result<Option<NamingRequest>> {
        if self.is_submitting() {
            return Err(NamerError::Busy);
        }
        if self.reset_modal_open || self.draft.trim().is_empty() {
            return Ok(None);
        }

        // Whitespace only decides blankness; the draft is sent as typed
        let message = std::mem::take(&mut self.draft);
        self.state = SubmitState::Submitting;
        self.push_turn(ChatTurn::user(message.clone()));
        self.event_bus.emit(SessionEvent::SubmitStarted {
            message: message.clone(),
        });

        Ok(Some(NamingRequest {
            id: self.config.naming.request_id.clone(),
            message,
        }))
    }

    /// Settle the outstanding request with exactly one bot turn.
    ///
    /// Does nothing when no request is outstanding.
    pub fn finish_submit(&mut self, result: Result<Value>) -> SubmitOutcome {
        let (turn, outcome) = match result {
            Ok(body) => match parse_names(&body) {
                Some(names) => {
                    let count = names.len();
                    (ChatTurn::names(&names), SubmitOutcome::Names(count))
                }
                None => {
                    log::warn!("Naming service returned an unexpected shape: {}", body);
                    (ChatTurn::bot(NO_VALID_RESPONSE), SubmitOutcome::Malformed)
                }
            },
            Err(e) => {
                log::error!("Naming request failed: {}", e);
                (ChatTurn::bot(GENERIC_ERROR), SubmitOutcome::Failed)
            }
        };

        if !self.is_submitting() {
            log::warn!("Naming result arrived with no request outstanding; dropped");
            return outcome;
        }

        self.push_turn(turn);
        self.state = SubmitState::Idle;
        self.event_bus.emit(SessionEvent::SubmitFinished { outcome });
        outcome
    }

    fn push_turn(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
        if let Err(e) = self.store.save_turns(&self.turns) {
            self.report_storage_error(e);
        }
    }

    // ─── Shortlist ───────────────────────────────────────────

    /// Append a name. Duplicates are kept.
    pub fn add_to_shortlist(&mut self, name: impl Into<String>) {
        self.shortlist.push(name.into());
        self.shortlist_changed();
    }

    /// Remove every exact occurrence of `name`. Returns how many were removed.
    pub fn remove_from_shortlist(&mut self, name: &str) -> usize {
        let before = self.shortlist.len();
        self.shortlist.retain(|entry| entry != name);
        let removed = before - self.shortlist.len();
        if removed > 0 {
            self.shortlist_changed();
        }
        removed
    }

    pub fn is_shortlisted(&self, name: &str) -> bool {
        self.shortlist.iter().any(|entry| entry == name)
    }

    /// Add `name` if absent, otherwise remove it. Returns whether it is now shortlisted.
    pub fn toggle_shortlist(&mut self, name: &str) -> bool {
        if self.is_shortlisted(name) {
            self.remove_from_shortlist(name);
            false
        } else {
            self.add_to_shortlist(name);
            true
        }
    }

    fn shortlist_changed(&mut self) {
        if let Err(e) = self.store.save_shortlist(&self.shortlist) {
            self.report_storage_error(e);
        }
        self.event_bus.emit(SessionEvent::ShortlistChanged {
            len: self.shortlist.len(),
        });
    }

    // ─── Copied indicator ────────────────────────────────────

    /// Turn the copied indicator on, superseding any earlier copy
    pub fn arm_copied(&mut self, text: &str) -> (u64, AbortRegistration) {
        let armed = self.copied.arm(text);
        self.event_bus.emit(SessionEvent::Copied {
            text: text.to_string(),
        });
        armed
    }

    pub fn expire_copied(&mut self, generation: u64) {
        if self.copied.expire(generation) {
            self.event_bus.emit(SessionEvent::CopiedExpired);
        }
    }

    pub fn copied_indicator_ms(&self) -> u64 {
        self.config.copied_indicator_ms
    }

    // ─── Reset ───────────────────────────────────────────────

    pub fn open_reset_modal(&mut self) {
        self.reset_modal_open = true;
    }

    pub fn cancel_reset(&mut self) {
        self.reset_modal_open = false;
    }

    pub fn confirm_reset(&mut self) {
        self.reset_history();
    }

    /// Clear turns, shortlist, and both snapshots, and close the modal.
    ///
    /// An outstanding request is not cancelled; its reply still lands as a
    /// single bot turn in the fresh log.
    pub fn reset_history(&mut self) {
        self.turns.clear();
        self.shortlist.clear();
        self.copied.cancel();
        self.reset_modal_open = false;
        if let Err(e) = self.store.clear() {
            self.report_storage_error(e);
        }
        log::info!("Chat history and shortlist cleared");
        self.event_bus.emit(SessionEvent::HistoryReset);
    }

    fn report_storage_error(&self, e: NamerError) {
        log::error!("Failed to persist session: {}", e);
        self.event_bus.emit(SessionEvent::StorageFailed {
            message: e.to_string(),
        });
    }
}

/// Names from a naming service reply, or `None` if the reply is not a
/// non-empty array of strings that each fit on one non-blank line.
pub fn parse_names(body: &Value) -> Option<Vec<String>> {
    let items = body.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| {
            let name = item.as_str()?;
            if name.trim().is_empty() || name.contains(NAME_SEPARATOR) {
                return None;
            }
            Some(name.to_string())
        })
        .collect()
}

/// Whether a turn's lines are generated names that can be shortlisted or copied
pub fn offers_name_actions(turn: &ChatTurn) -> bool {
    turn.is_bot()
        && !turn.text.is_empty()
        && turn.text != NO_VALID_RESPONSE
        && turn.text != GENERIC_ERROR
}
