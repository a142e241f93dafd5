#[cfg(test)]
mod tests {
    use crate::naming::HttpNamingService;
    use crate::storage::{auto_detect_storage, MemoryStorage};
    use namer_core::ports::StoragePort;
    use namer_types::config::{NamingConfig, StorageBackendType, StorageConfig};

    // ─── MemoryStorage Tests ─────────────────────────────────

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.load("chatMessages").unwrap(), None);

        storage.save("chatMessages", "[]").unwrap();
        assert_eq!(storage.load("chatMessages").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.len(), 1);

        storage.save("chatMessages", "[1]").unwrap();
        assert_eq!(storage.load("chatMessages").unwrap().as_deref(), Some("[1]"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_memory_storage_remove() {
        let storage = MemoryStorage::new();
        storage.save("shortlist", r#"["Acme"]"#).unwrap();
        assert!(storage.exists("shortlist").unwrap());
        storage.remove("shortlist").unwrap();
        assert!(!storage.exists("shortlist").unwrap());
        storage.remove("shortlist").unwrap();
    }

    #[test]
    fn test_memory_storage_backend_name() {
        assert_eq!(MemoryStorage::new().backend_name(), "memory");
    }

    #[test]
    fn test_auto_detect_configured_memory() {
        let config = StorageConfig {
            backend: StorageBackendType::Memory,
            ..StorageConfig::default()
        };
        let storage = auto_detect_storage(&config);
        assert_eq!(storage.backend_name(), "memory");
    }

    // ─── HttpNamingService Tests ─────────────────────────────

    #[test]
    fn test_naming_service_trims_endpoint() {
        let config = NamingConfig {
            endpoint: "  https://names.example/generate/names \n".to_string(),
            request_id: "1".to_string(),
        };
        let service = HttpNamingService::new(&config);
        assert_eq!(service.endpoint(), "https://names.example/generate/names");
    }
}
