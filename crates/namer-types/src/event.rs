use serde::{Deserialize, Serialize};

/// Events emitted by the chat session.
/// The UI drains these each frame to update its status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A user turn was appended and the naming request is in flight
    SubmitStarted { message: String },

    /// The bot turn for the outstanding request was appended
    SubmitFinished { outcome: SubmitOutcome },

    /// The shortlist was mutated
    ShortlistChanged { len: usize },

    /// Text reached the clipboard and the copied indicator is on
    Copied { text: String },

    /// The copied indicator switched itself off
    CopiedExpired,

    /// Turns and shortlist were cleared along with their snapshots
    HistoryReset,

    /// Reading or writing a snapshot failed
    StorageFailed { message: String },

    /// The clipboard rejected a write
    ClipboardFailed { message: String },
}

/// How a naming request settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The service returned this many names
    Names(usize),
    /// The service answered with something other than a list of names
    Malformed,
    /// The request did not complete
    Failed,
}
