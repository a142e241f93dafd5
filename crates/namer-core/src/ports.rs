//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `namer-core` (pure Rust).
//! Implementations live in `namer-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use namer_types::Result;

// ─── Naming Port ─────────────────────────────────────────────

/// Body POSTed to the naming service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingRequest {
    pub id: String,
    pub message: String,
}

#[async_trait(?Send)]
pub trait NamingPort {
    /// Send one request and return the decoded JSON body.
    ///
    /// Only transport concerns live here: a non-success status or an
    /// unreadable body is an error. Whether the body actually holds names
    /// is decided by the session.
    async fn suggest(&self, req: &NamingRequest) -> Result<Value>;
}

// ─── Storage Port ────────────────────────────────────────────

/// String-keyed persistence. Synchronous, like the browser's `localStorage`.
pub trait StoragePort {
    /// Get a value by key
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value
    fn remove(&self, key: &str) -> Result<()>;

    /// Check if a key exists
    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.load(key)?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Clipboard Port ──────────────────────────────────────────

#[async_trait(?Send)]
pub trait ClipboardPort {
    async fn write_text(&self, text: &str) -> Result<()>;
}

// ─── Timer Port ──────────────────────────────────────────────

#[async_trait(?Send)]
pub trait TimerPort {
    /// Resolve after `ms` milliseconds without blocking the UI thread
    async fn sleep(&self, ms: u64);
}
