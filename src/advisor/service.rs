use super::operation::{self as op, OperationSpec, QuickAction};
use super::prompts;
use super::types::*;
use super::{FallbackReason, Resolved};
use crate::cache::{CacheKey, ResponseCache};
use crate::config::TtlConfig;
use crate::localization::{localized_prompt, Locale};
use crate::model::{GenerationRequest, GenerativeModel, MediaAttachment};
use crate::resilience::ResilientInvoker;
use std::sync::Arc;
use tracing::{debug, warn};

/// Farming-assistant operations over a generative model.
///
/// Every operation resolves to a value: live model output, a cached copy of an
/// earlier live result, or the operation's static fallback.
pub struct AdvisorService {
    text_model: Arc<dyn GenerativeModel>,
    vision_model: Arc<dyn GenerativeModel>,
    cache: Arc<ResponseCache>,
    invoker: ResilientInvoker,
    ttl: TtlConfig,
}

/// Inputs to one operation run.
struct Call<'a> {
    params: &'a [&'a str],
    subject: &'a str,
    locale: Locale,
    prompt: String,
    media: Option<MediaAttachment>,
}

impl<'a> Call<'a> {
    fn new(locale: Locale, prompt: String) -> Self {
        Self {
            params: &[],
            subject: "",
            locale,
            prompt,
            media: None,
        }
    }

    fn params(mut self, params: &'a [&'a str]) -> Self {
        self.params = params;
        self
    }

    fn subject(mut self, subject: &'a str) -> Self {
        self.subject = subject;
        self
    }

    fn media(mut self, media: MediaAttachment) -> Self {
        self.media = Some(media);
        self
    }
}

impl AdvisorService {
    pub(crate) fn from_parts(
        text_model: Arc<dyn GenerativeModel>,
        vision_model: Arc<dyn GenerativeModel>,
        cache: Arc<ResponseCache>,
        invoker: ResilientInvoker,
        ttl: TtlConfig,
    ) -> Self {
        Self {
            text_model,
            vision_model,
            cache,
            invoker,
            ttl,
        }
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    pub fn invoker(&self) -> &ResilientInvoker {
        &self.invoker
    }

    /// Cache key an operation would use, or `None` for uncached operations.
    pub fn cache_key<T>(spec: &OperationSpec<T>, params: &[&str], locale: Locale) -> Option<CacheKey> {
        spec.ttl
            .map(|_| CacheKey::for_request(spec.name, params, locale.code()))
    }

    async fn run<T: Payload>(&self, spec: &OperationSpec<T>, call: Call<'_>) -> Resolved<T> {
        let locale = call.locale;
        let key = Self::cache_key(spec, call.params, locale);

        if let Some(key) = &key {
            match self.cache.get::<T>(key).await {
                Ok(Some(value)) => return Resolved::cached(value),
                Ok(None) => {}
                Err(e) => warn!(operation = spec.name, key = %key, "cache read failed: {}", e),
            }
        }

        let mut request = GenerationRequest::new(
            localized_prompt(locale, &call.prompt),
            spec.shape,
            locale,
        );
        if let Some(media) = call.media {
            request = request.with_media(media);
        }
        let model = if request.is_vision() {
            &self.vision_model
        } else {
            &self.text_model
        };

        debug!(operation = spec.name, model = model.name(), locale = %locale, "calling model");
        let raw = match self.invoker.invoke(|| model.generate(&request)).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(operation = spec.name, locale = %locale, error = %e, "model call failed, serving fallback");
                let reason = FallbackReason::RemoteFailure {
                    transient: e.is_transient(),
                    message: e.to_string(),
                };
                return Resolved::fallback((spec.unavailable)(locale, call.subject), reason);
            }
        };

        let value = match T::from_reply(&raw, spec.shape) {
            Ok(value) => value,
            Err(e) => {
                warn!(operation = spec.name, locale = %locale, error = %e, "unparseable reply, serving fallback");
                let reason = FallbackReason::ParseFailure {
                    message: e.to_string(),
                };
                return Resolved::fallback((spec.degraded)(locale, call.subject), reason);
            }
        };

        if let (Some(key), Some(class)) = (&key, spec.ttl) {
            if let Err(e) = self.cache.put(key, &value, self.ttl.ttl(class)).await {
                warn!(operation = spec.name, key = %key, "cache write failed: {}", e);
            }
        }
        Resolved::live(value)
    }

    /// Three seasonal alerts.
    pub async fn real_time_alerts(&self, locale: Locale) -> Resolved<Vec<Alert>> {
        self.run(&op::ALERTS, Call::new(locale, prompts::alerts())).await
    }

    /// Current prices for major crops.
    pub async fn market_data(&self, locale: Locale) -> Resolved<Vec<MarketPrice>> {
        self.run(&op::MARKET, Call::new(locale, prompts::market())).await
    }

    /// Current government schemes for farmers.
    pub async fn schemes(&self, locale: Locale) -> Resolved<Vec<Scheme>> {
        self.run(&op::SCHEMES, Call::new(locale, prompts::schemes())).await
    }

    /// Market analysis for one crop. Cached per lowercased crop name.
    pub async fn crop_analysis(&self, crop: &str, locale: Locale) -> Resolved<String> {
        let lowered = crop.to_lowercase();
        let params = [lowered.as_str()];
        let call = Call::new(locale, prompts::crop_analysis(crop))
            .params(&params)
            .subject(crop);
        self.run(&op::CROP_ANALYSIS, call).await
    }

    /// Disease and pest diagnosis from a photo. Never cached.
    pub async fn diagnose_crop_image(&self, media: MediaAttachment, locale: Locale) -> Resolved<String> {
        let call = Call::new(locale, prompts::image_diagnosis()).media(media);
        self.run(&op::IMAGE_DIAGNOSIS, call).await
    }

    pub async fn market_analysis(&self, locale: Locale) -> Resolved<String> {
        self.run(&op::MARKET_ANALYSIS, Call::new(locale, prompts::market_analysis()))
            .await
    }

    pub async fn scheme_information(&self, locale: Locale) -> Resolved<String> {
        self.run(&op::SCHEME_INFORMATION, Call::new(locale, prompts::scheme_information()))
            .await
    }

    /// Free-form farmer question. Never cached.
    pub async fn voice_query(&self, query: &str, locale: Locale) -> Resolved<String> {
        self.run(&op::VOICE_QUERY, Call::new(locale, prompts::voice_query(query)))
            .await
    }

    pub async fn weather_forecast(&self, locale: Locale) -> Resolved<WeatherForecast> {
        self.run(&op::WEATHER, Call::new(locale, prompts::weather())).await
    }

    pub async fn crop_recommendations(&self, season: &str, locale: Locale) -> Resolved<Vec<CropRecommendation>> {
        let params = [season];
        let call = Call::new(locale, prompts::crop_recommendations(season))
            .params(&params)
            .subject(season);
        self.run(&op::CROP_RECOMMENDATIONS, call).await
    }

    pub async fn farming_tips(&self, category: &str, locale: Locale) -> Resolved<Vec<FarmingTip>> {
        let params = [category];
        let call = Call::new(locale, prompts::farming_tips(category))
            .params(&params)
            .subject(category);
        self.run(&op::FARMING_TIPS, call).await
    }

    pub async fn farm_analytics(&self, period: &str, locale: Locale) -> Resolved<FarmAnalytics> {
        let params = [period];
        let call = Call::new(locale, prompts::farm_analytics(period))
            .params(&params)
            .subject(period);
        self.run(&op::FARM_ANALYTICS, call).await
    }

    /// Dashboard shortcut. Unknown actions get a generic prompt. Never cached.
    pub async fn quick_action(&self, action: impl Into<QuickAction>, locale: Locale) -> Resolved<String> {
        let action = action.into();
        let call = Call::new(locale, prompts::quick_action(&action)).subject(action.key());
        self.run(&op::QUICK_ACTION, call).await
    }
}
