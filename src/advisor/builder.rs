use super::service::AdvisorService;
use crate::cache::ResponseCache;
use crate::config::{AdvisorConfig, TtlConfig};
use crate::model::{GeminiModel, GenerativeModel};
use crate::resilience::{ResilientInvoker, RetryPolicy};
use crate::Result;
use std::sync::Arc;

/// Builder for [`AdvisorService`].
///
/// Only the text model is required. The vision model defaults to the text
/// model, the cache to a private in-memory one.
pub struct AdvisorServiceBuilder {
    text_model: Arc<dyn GenerativeModel>,
    vision_model: Option<Arc<dyn GenerativeModel>>,
    cache: Option<Arc<ResponseCache>>,
    retry_policy: RetryPolicy,
    ttl: TtlConfig,
}

impl AdvisorServiceBuilder {
    pub fn new(text_model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            text_model,
            vision_model: None,
            cache: None,
            retry_policy: RetryPolicy::default(),
            ttl: TtlConfig::default(),
        }
    }

    /// Separate model for image diagnosis.
    pub fn vision_model(mut self, model: Arc<dyn GenerativeModel>) -> Self {
        self.vision_model = Some(model);
        self
    }

    /// Share a cache between services (or inspect it from tests).
    pub fn cache(mut self, cache: Arc<ResponseCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn ttl(mut self, ttl: TtlConfig) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> AdvisorService {
        let vision_model = self
            .vision_model
            .unwrap_or_else(|| Arc::clone(&self.text_model));
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(ResponseCache::in_memory()));
        AdvisorService::from_parts(
            self.text_model,
            vision_model,
            cache,
            ResilientInvoker::new(self.retry_policy),
            self.ttl,
        )
    }
}

impl AdvisorService {
    pub fn builder(text_model: Arc<dyn GenerativeModel>) -> AdvisorServiceBuilder {
        AdvisorServiceBuilder::new(text_model)
    }

    /// Gemini-backed service configured from `config`.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        let model: Arc<dyn GenerativeModel> = Arc::new(GeminiModel::from_config(&config.model)?);
        let cache = ResponseCache::from_config(
            crate::cache::CacheConfig::new().with_enabled(config.cache.enabled),
        );
        Ok(Self::builder(model)
            .cache(Arc::new(cache))
            .retry_policy(config.retry.policy()?)
            .ttl(config.cache.ttl)
            .build())
    }
}
