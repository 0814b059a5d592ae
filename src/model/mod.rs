//! Generative model boundary.
//!
//! The advisor talks to the model through [`GenerativeModel`]. The adapter
//! owns wire formats and failure classification: a rate or quota rejection
//! comes back as a transient [`Error::Remote`](crate::Error::Remote), anything
//! else as fatal.

pub mod gemini;

pub use gemini::GeminiModel;

use crate::localization::Locale;
use crate::structured::ResponseShape;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Binary input for vision requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAttachment {
    pub bytes: Bytes,
    pub mime_type: String,
}

impl MediaAttachment {
    pub fn new(bytes: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Read an image from disk, guessing the MIME type from its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mime_type = guess_image_mime(path).ok_or_else(|| {
            Error::validation_with_context(
                "Unsupported image type",
                ErrorContext::new()
                    .with_details(path.display().to_string())
                    .with_source("media_attachment"),
            )
        })?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(bytes, mime_type))
    }
}

fn guess_image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// One prompt to the model.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_shape: ResponseShape,
    pub locale: Locale,
    pub media: Option<MediaAttachment>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, response_shape: ResponseShape, locale: Locale) -> Self {
        Self {
            prompt: prompt.into(),
            response_shape,
            locale,
            media: None,
        }
    }

    pub fn with_media(mut self, media: MediaAttachment) -> Self {
        self.media = Some(media);
        self
    }

    pub fn is_vision(&self) -> bool {
        self.media.is_some()
    }
}

/// Sampling parameters sent with each request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub fn text() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 1024,
        }
    }

    /// Lower temperature and a longer budget for image diagnosis.
    pub fn vision() -> Self {
        Self {
            temperature: 0.4,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::text()
    }
}

/// A text (or text + image) generation backend.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Produce the raw reply text for one request.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Model identifier, for logs.
    fn name(&self) -> &str;
}
