use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamerConfig {
    pub naming: NamingConfig,
    pub storage: StorageConfig,
    /// How long the "copied" indicator stays on after a successful copy
    #[serde(default = "default_copied_indicator_ms")]
    pub copied_indicator_ms: u64,
}

impl Default for NamerConfig {
    fn default() -> Self {
        Self {
            naming: NamingConfig::default(),
            storage: StorageConfig::default(),
            copied_indicator_ms: default_copied_indicator_ms(),
        }
    }
}

fn default_copied_indicator_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Full URL the naming request is POSTed to
    pub endpoint: String,
    /// Value sent in the `id` field of every request
    pub request_id: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_NAMING_ENDPOINT.to_string(),
            request_id: "1".to_string(),
        }
    }
}

impl NamingConfig {
    pub fn validate(&self) -> crate::Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(crate::NamerError::Config(
                "naming endpoint is empty".to_string(),
            ));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(crate::NamerError::Config(format!(
                "naming endpoint must be an http(s) URL: {}",
                endpoint
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
    /// Key holding the conversation snapshot
    pub chat_key: String,
    /// Key holding the shortlist snapshot
    pub shortlist_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
            chat_key: "chatMessages".to_string(),
            shortlist_key: "shortlist".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    Auto,
    Memory,
    LocalStorage,
}

impl StorageBackendType {
    pub fn all() -> &'static [StorageBackendType] {
        &[
            StorageBackendType::Auto,
            StorageBackendType::LocalStorage,
            StorageBackendType::Memory,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            StorageBackendType::Auto => "Auto",
            StorageBackendType::Memory => "Memory (not persisted)",
            StorageBackendType::LocalStorage => "Local storage",
        }
    }
}

/// Storage key the config itself is saved under
pub const CONFIG_STORAGE_KEY: &str = "namer:config";

const DEFAULT_NAMING_ENDPOINT: &str = "http://localhost:8000/generate/names";
