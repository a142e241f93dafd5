use serde::{Deserialize, Serialize};

/// Author of a turn in the conversation log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single entry in the conversation log.
///
/// Turns are appended in chronological order and never edited afterwards.
/// A bot turn carrying generated names stores them newline-separated; the UI
/// splits them back into lines so every name gets its own actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub sender: Sender,
    pub text: String,
}

/// Separator between names inside a single bot turn
pub const NAME_SEPARATOR: &str = "\n";

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    /// Bot turn listing each name on its own line
    pub fn names<S: AsRef<str>>(names: &[S]) -> Self {
        let joined = names
            .iter()
            .map(|n| n.as_ref())
            .collect::<Vec<_>>()
            .join(NAME_SEPARATOR);
        Self::bot(joined)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Lines of the turn, each one independently actionable in the UI
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split(NAME_SEPARATOR)
    }
}
