//! Naming service adapter.
//!
//! POSTs `{ "id": ..., "message": ... }` as JSON to the configured endpoint.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use namer_core::ports::{NamingPort, NamingRequest};
use namer_types::{
    NamerError, Result,
    config::NamingConfig,
};

pub struct HttpNamingService {
    endpoint: String,
}

impl HttpNamingService {
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim().to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl NamingPort for HttpNamingService {
    async fn suggest(&self, req: &NamingRequest) -> Result<Value> {
        log::debug!("POST {} id={}", self.endpoint, req.id);

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| NamerError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| NamerError::Network(e.to_string()))?;

        // Any non-2xx status is a failure; the body is not inspected
        if !response.ok() {
            return Err(NamerError::Naming(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| NamerError::Serialization(e.to_string()))?;

        log::debug!("Naming service replied: {}", body);
        Ok(body)
    }
}
