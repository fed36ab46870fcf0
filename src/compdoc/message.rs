//! Messages exchanged with the presentation layer.
//!
//! Inbound (panel → core), each tagged by `type`:
//! - `{ "type": "request-metadata" }`
//! - `{ "type": "copy-guide", "payload": "<text>" }`
//!
//! Outbound (core → panel):
//! - `{ "type": "metadata", "payload": { "data": {...} } | { "error": "..." } }`
//! - `{ "type": "copy-result", "payload": { "success": bool, "message": "..." } }`

use crate::commands::copy::CopyResult;
use crate::commands::metadata::ExtractError;
use crate::record::ComponentMetadata;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InboundMessage {
    RequestMetadata,
    CopyGuide {
        #[serde(default, deserialize_with = "text_or_empty")]
        payload: String,
    },
}

impl InboundMessage {
    /// Parse a raw panel message. Returns `None` for messages without a
    /// `type` field and for types the core does not handle.
    pub fn parse(raw: &Value) -> Option<Self> {
        raw.get("type")?.as_str()?;
        serde_json::from_value(raw.clone()).ok()
    }
}

/// Non-text payloads are coerced to an empty string.
fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        _ => String::new(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum OutboundMessage {
    Metadata(MetadataPayload),
    CopyResult(CopyResult),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataPayload {
    Data { data: Box<ComponentMetadata> },
    Error { error: String },
}

impl From<Result<ComponentMetadata, ExtractError>> for MetadataPayload {
    fn from(result: Result<ComponentMetadata, ExtractError>) -> Self {
        match result {
            Ok(metadata) => MetadataPayload::Data {
                data: Box::new(metadata),
            },
            Err(e) => MetadataPayload::Error {
                error: e.to_string(),
            },
        }
    }
}
