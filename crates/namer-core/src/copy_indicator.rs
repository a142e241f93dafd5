//! Transient "copied" indicator.
//!
//! Each successful copy arms the indicator and schedules its own
//! deactivation. Arming again aborts the previous pending deactivation, so
//! only the most recent copy ever switches the indicator off.

use futures::future::{AbortHandle, AbortRegistration};

#[derive(Default)]
pub struct CopyIndicator {
    text: Option<String>,
    pending: Option<AbortHandle>,
    generation: u64,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the indicator on for `text`.
    ///
    /// Returns the generation to pass to [`CopyIndicator::expire`] and the
    /// registration the caller wraps its delay in.
    pub fn arm(&mut self, text: impl Into<String>) -> (u64, AbortRegistration) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        let (handle, registration) = AbortHandle::new_pair();
        self.pending = Some(handle);
        self.generation += 1;
        self.text = Some(text.into());
        (self.generation, registration)
    }

    /// Turn the indicator off if `generation` is still the latest arm.
    /// Returns whether anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.text.is_none() {
            return false;
        }
        self.text = None;
        self.pending = None;
        true
    }

    /// Switch off immediately and abort any pending deactivation
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        self.text = None;
    }

    pub fn is_active(&self) -> bool {
        self.text.is_some()
    }

    /// Text of the most recent successful copy while the indicator is on
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
