//! HTTP adapter for the indexing/query backend.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.
//! One request per call; status and body are handed to `response` for
//! decoding.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::json;

use docchat_core::ports::{BackendPort, IndexAck};
use docchat_types::{
    ClientError, Result,
    config::BackendConfig,
    document::Document,
};
use super::{multipart, response};

/// Backend reached over HTTP at the configured base URL
pub struct HttpBackend {
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn index_document(&self, document: &Document) -> Result<IndexAck> {
        let url = self.config.index_url();
        let form = multipart::document_form(&self.config.upload_field, document)?;

        log::debug!("POST {} ({})", url, document.name());
        let reply = Request::post(&url)
            .body(form)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let (ok, status, body) = read_reply(reply).await?;
        response::parse_index_reply(ok, status, &body)
    }

    async fn ask_question(&self, question: &str) -> Result<String> {
        let url = self.config.chat_url();

        log::debug!("POST {}", url);
        let reply = Request::post(&url)
            .json(&json!({ "query": question }))
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let (ok, status, body) = read_reply(reply).await?;
        response::parse_answer_reply(ok, status, &body)
    }

    fn backend_name(&self) -> &str {
        &self.config.base_url
    }
}

async fn read_reply(reply: Response) -> Result<(bool, u16, String)> {
    let ok = reply.ok();
    let status = reply.status();
    let body = reply
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    Ok((ok, status, body))
}
