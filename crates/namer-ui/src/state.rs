//! UI-level state that drives rendering.
//! The session owns the conversation; this only holds presentation state,
//! updated each frame by draining the EventBus.

use namer_types::event::{SessionEvent, SubmitOutcome};

/// State visible to UI panels
pub struct UiState {
    /// Status line text
    pub status_text: String,
    /// Whether the last status reflects a problem
    pub status_is_error: bool,
    /// Whether the shortlist side panel is open
    pub show_shortlist: bool,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Result of the last settings save
    pub save_feedback: Option<SaveFeedback>,
}

/// Save feedback passed in from the app layer
#[derive(Clone, Debug, PartialEq)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

pub const READY: &str = "Ready";

impl UiState {
    pub fn new() -> Self {
        Self {
            status_text: READY.to_string(),
            status_is_error: false,
            show_shortlist: true,
            show_settings: false,
            save_feedback: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::SubmitStarted { .. } => {
                    self.set_status("Generating names...", false);
                }
                SessionEvent::SubmitFinished { outcome } => match outcome {
                    SubmitOutcome::Names(1) => self.set_status("1 name generated", false),
                    SubmitOutcome::Names(n) => {
                        self.set_status(&format!("{} names generated", n), false)
                    }
                    SubmitOutcome::Malformed => self.set_status("No valid response", true),
                    SubmitOutcome::Failed => self.set_status("Request failed", true),
                },
                SessionEvent::ShortlistChanged { len } => {
                    self.set_status(&format!("{} shortlisted", len), false);
                }
                SessionEvent::Copied { text } => {
                    self.set_status(&format!("Copied \"{}\"", text), false);
                }
                SessionEvent::CopiedExpired => {
                    self.set_status(READY, false);
                }
                SessionEvent::HistoryReset => {
                    self.set_status("History cleared", false);
                }
                SessionEvent::StorageFailed { message } => {
                    self.set_status(&format!("Storage error: {}", message), true);
                }
                // Clipboard failures stay out of the UI
                SessionEvent::ClipboardFailed { .. } => {}
            }
        }
    }

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status_text = text.to_string();
        self.status_is_error = is_error;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
