//! Decoding of backend replies.
//!
//! Both endpoints answer with a JSON object. Failures carry their
//! user-facing text under `error`; index success may carry `message`,
//! query success carries `answer`. Kept free of browser types so it can be
//! tested natively.

use serde::Deserialize;
use docchat_core::ports::IndexAck;
use docchat_types::{
    ClientError, Result,
    error::{INDEX_FAILED_MESSAGE, QUERY_FAILED_MESSAGE},
};

#[derive(Debug, Default, Deserialize)]
struct ReplyBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    answer: Option<serde_json::Value>,
}

impl ReplyBody {
    fn error_text(&self) -> Option<String> {
        text_field(&self.error)
    }
}

fn text_field(value: &Option<serde_json::Value>) -> Option<String> {
    value
        .as_ref()
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

fn parse_body(body: &str) -> Result<ReplyBody> {
    Ok(serde_json::from_str(body)?)
}

/// Decode the reply of the index endpoint
pub fn parse_index_reply(ok: bool, status: u16, body: &str) -> Result<IndexAck> {
    let reply = parse_body(body)?;

    if !ok {
        log::debug!("Index endpoint answered HTTP {}", status);
        return Err(ClientError::Backend(
            reply
                .error_text()
                .unwrap_or_else(|| INDEX_FAILED_MESSAGE.to_string()),
        ));
    }

    Ok(IndexAck {
        message: text_field(&reply.message),
    })
}

/// Decode the reply of the query endpoint into the answer text
pub fn parse_answer_reply(ok: bool, status: u16, body: &str) -> Result<String> {
    let reply = parse_body(body)?;

    if !ok {
        log::debug!("Chat endpoint answered HTTP {}", status);
        return Err(ClientError::Backend(
            reply
                .error_text()
                .unwrap_or_else(|| QUERY_FAILED_MESSAGE.to_string()),
        ));
    }

    text_field(&reply.answer).ok_or_else(|| {
        ClientError::Serialization(format!("HTTP {} reply has no 'answer' string", status))
    })
}
