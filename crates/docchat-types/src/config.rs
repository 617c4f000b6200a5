use serde::{Deserialize, Serialize};
use crate::{ClientError, Result};

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub backend: BackendConfig,
    /// File name extensions the front end accepts for upload
    pub accepted_extensions: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            accepted_extensions: vec![".pdf".to_string()],
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        self.backend.validate()
    }

    /// Accepted extensions without the leading dot, as file dialogs expect
    pub fn dialog_extensions(&self) -> Vec<String> {
        self.accepted_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect()
    }
}

/// Where the indexing and query endpoints live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub index_path: String,
    pub chat_path: String,
    /// Multipart field name carrying the uploaded file
    pub upload_field: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            index_path: "/api/index".to_string(),
            chat_path: "/api/chat".to_string(),
            upload_field: "file".to_string(),
        }
    }
}

impl BackendConfig {
    pub fn index_url(&self) -> String {
        join_url(&self.base_url, &self.index_path)
    }

    pub fn chat_url(&self) -> String {
        join_url(&self.base_url, &self.chat_path)
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "backend URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.upload_field.trim().is_empty() {
            return Err(ClientError::Config("upload field name is empty".to_string()));
        }
        Ok(())
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        path.trim().trim_start_matches('/')
    )
}

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
