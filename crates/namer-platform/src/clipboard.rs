//! System clipboard via `navigator.clipboard.writeText`.

use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;

use namer_core::ports::ClipboardPort;
use namer_types::{NamerError, Result};
use crate::js::error_message;

pub struct BrowserClipboard;

impl BrowserClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ClipboardPort for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| NamerError::Clipboard("No window object".to_string()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map_err(|e| NamerError::Clipboard(error_message(e)))?;
        Ok(())
    }
}
