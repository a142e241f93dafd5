//! Async drivers for the two actions that suspend: submitting a draft and
//! copying to the clipboard.
//!
//! The session is held in a `RefCell` shared with the UI, so no borrow is
//! kept across an `.await`. Both drivers must be spawned via
//! `wasm_bindgen_futures::spawn_local`; neither returns an error.

use std::cell::RefCell;
use futures::future::Abortable;
use namer_types::event::SessionEvent;
use crate::ports::{ClipboardPort, NamingPort, TimerPort};
use crate::session::ChatSession;

/// Submit the current draft and wait for the bot turn.
///
/// Returns `false` if nothing was submitted (blank draft or a request
/// already outstanding).
pub async fn submit(session: &RefCell<ChatSession>, naming: &dyn NamingPort) -> bool {
    let request = match session.borrow_mut().begin_submit() {
        Ok(Some(request)) => request,
        Ok(None) => return false,
        Err(e) => {
            log::debug!("Submit ignored: {}", e);
            return false;
        }
    };

    log::debug!("Requesting names for: {}", request.message);
    let result = naming.suggest(&request).await;

    session.borrow_mut().finish_submit(result);
    true
}

/// Copy `text` and keep the copied indicator on for the configured window.
///
/// A clipboard failure is logged and reported on the event bus only.
pub async fn copy(
    session: &RefCell<ChatSession>,
    clipboard: &dyn ClipboardPort,
    timer: &dyn TimerPort,
    text: &str,
) {
    if let Err(e) = clipboard.write_text(text).await {
        log::warn!("Copy to clipboard failed: {}", e);
        session
            .borrow()
            .event_bus()
            .emit(SessionEvent::ClipboardFailed { message: e.to_string() });
        return;
    }

    let (generation, registration, delay_ms) = {
        let mut s = session.borrow_mut();
        let (generation, registration) = s.arm_copied(text);
        (generation, registration, s.copied_indicator_ms())
    };

    // Aborted when a later copy supersedes this one
    if Abortable::new(timer.sleep(delay_ms), registration).await.is_ok() {
        session.borrow_mut().expire_copied(generation);
    }
}
