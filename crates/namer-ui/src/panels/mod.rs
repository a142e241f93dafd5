pub mod chat;
pub mod shortlist;
pub mod reset;
pub mod settings;

/// Something a panel asks the app to do with the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Submit the current draft
    Submit,
    AddToShortlist(String),
    RemoveFromShortlist(String),
    Copy(String),
    OpenResetModal,
}
