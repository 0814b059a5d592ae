//! Google Gemini `generateContent` adapter.
//!
//! - Request: `contents[0].parts` holds the prompt text and, for vision
//!   requests, an `inline_data` part with base64 bytes.
//! - `generationConfig` carries the sampling parameters.
//! - Response text is the concatenation of `candidates[0].content.parts[*].text`.
//! - The API key travels in the `x-goog-api-key` header, never in the URL.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use super::{GenerationConfig, GenerationRequest, GenerativeModel};
use crate::error_code::StandardErrorCode;
use crate::transport::{resolve_api_key, HttpReply, HttpTransport};
use crate::{Error, ErrorContext, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Keyring user under which the Gemini key may be stored.
pub const KEYRING_USER: &str = "gemini";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiModel {
    transport: HttpTransport,
    model: String,
    api_key: String,
    text_config: GenerationConfig,
    vision_config: GenerationConfig,
}

impl GeminiModel {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::configuration_with_context(
                "Gemini API key is empty",
                ErrorContext::new()
                    .with_field_path("model.api_key")
                    .with_source("gemini"),
            ));
        }
        Ok(Self {
            transport: HttpTransport::new(base_url, timeout)?,
            model: model.into(),
            api_key,
            text_config: GenerationConfig::text(),
            vision_config: GenerationConfig::vision(),
        })
    }

    /// Build from configuration, resolving the key from config, keyring or env.
    pub fn from_config(config: &crate::config::ModelConfig) -> Result<Self> {
        let api_key = resolve_api_key(config.api_key.as_deref(), KEYRING_USER, API_KEY_ENV)
            .ok_or_else(|| {
                Error::configuration_with_context(
                    format!(
                        "No Gemini API key: set model.api_key, store one in the keyring, or export {}",
                        API_KEY_ENV
                    ),
                    ErrorContext::new()
                        .with_field_path("model.api_key")
                        .with_source("gemini"),
                )
            })?;
        Ok(Self::new(
            &config.base_url,
            config.model.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        )?
        .with_generation(config.text, config.vision))
    }

    pub fn with_generation(mut self, text: GenerationConfig, vision: GenerationConfig) -> Self {
        self.text_config = text;
        self.vision_config = vision;
        self
    }

    fn generate_url(&self) -> Result<url::Url> {
        let path = format!("models/{}:generateContent", self.model);
        self.transport.endpoint(&path, &[])
    }

    fn build_body(&self, request: &GenerationRequest) -> Value {
        let mut parts = vec![json!({ "text": request.prompt })];
        if let Some(media) = &request.media {
            parts.push(json!({
                "inline_data": {
                    "mime_type": media.mime_type,
                    "data": BASE64.encode(&media.bytes),
                }
            }));
        }
        let config = if request.is_vision() {
            self.vision_config
        } else {
            self.text_config
        };
        json!({
            "contents": [{ "parts": parts }],
            "generationConfig": config,
        })
    }
}

/// Concatenated text of the first candidate.
fn parse_text(body: &Value) -> Result<String> {
    let parts = body
        .pointer("/candidates/0/content/parts")
        .and_then(|p| p.as_array())
        .ok_or_else(|| {
            let reason = body
                .pointer("/promptFeedback/blockReason")
                .and_then(|r| r.as_str())
                .unwrap_or("no candidates");
            Error::runtime_with_context(
                "Model returned no content",
                ErrorContext::new().with_details(reason).with_source("gemini"),
            )
        })?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();
    if text.trim().is_empty() {
        return Err(Error::runtime_with_context(
            "Model returned empty text",
            ErrorContext::new().with_source("gemini"),
        ));
    }
    Ok(text)
}

/// Map a non-2xx reply to an error whose `retryable` tag marks rate and quota
/// rejections.
fn classify_failure(reply: &HttpReply) -> Error {
    let body: Value = serde_json::from_str(&reply.body).unwrap_or(Value::Null);
    let provider_status = body.pointer("/error/status").and_then(|s| s.as_str());
    let message = body
        .pointer("/error/message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| reply.body.chars().take(200).collect());

    let code = if reply.status == 429 {
        StandardErrorCode::RateLimited
    } else if message.to_ascii_lowercase().contains("quota") {
        StandardErrorCode::QuotaExhausted
    } else {
        match provider_status.map(StandardErrorCode::from_provider_status) {
            Some(code) if code != StandardErrorCode::Unknown => code,
            _ => StandardErrorCode::from_http_status(reply.status),
        }
    };
    Error::remote(code, reply.status, message)
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let request_id = uuid::Uuid::new_v4();
        let url = self.generate_url()?;
        let body = self.build_body(request);

        debug!(
            %request_id,
            model = %self.model,
            shape = %request.response_shape,
            vision = request.is_vision(),
            "Sending generation request"
        );
        let reply = self
            .transport
            .post_json(url, &[(API_KEY_HEADER, self.api_key.as_str())], &body)
            .await?;

        if !reply.is_success() {
            let err = classify_failure(&reply);
            warn!(%request_id, status = reply.status, transient = err.is_transient(), "Generation failed: {}", err);
            return Err(err);
        }

        let json: Value = serde_json::from_str(&reply.body)?;
        parse_text(&json)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
