//! Advisor operations end to end against a scripted model.

use agri_advisor::advisor::operation as op;
use agri_advisor::advisor::{FallbackReason, Source};
use agri_advisor::error_code::StandardErrorCode;
use agri_advisor::model::{GenerationRequest, GenerativeModel};
use agri_advisor::{AdvisorService, CacheKey, Error, Locale, ResponseCache};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct ScriptedModel {
    replies: Mutex<VecDeque<agri_advisor::Result<String>>>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn new(replies: Vec<agri_advisor::Result<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, _request: &GenerationRequest) -> agri_advisor::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::remote(StandardErrorCode::ServerError, 500, "no more replies")))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

const PRICES: &str = r#"आज के भाव:
[{"crop": "गेहूं", "price": "₹2,150/quintal", "change": "+2.5%", "trend": "up"},
 {"crop": "चावल", "price": "₹3,200/quintal", "change": "-1.2%", "trend": "down"}]
धन्यवाद"#;

#[tokio::test(start_paused = true)]
async fn market_data_survives_rate_limits_and_is_cached() {
    let model = ScriptedModel::new(vec![
        Err(Error::rate_limited("slow down")),
        Err(Error::rate_limited("slow down")),
        Ok(PRICES.to_string()),
    ]);
    let cache = Arc::new(ResponseCache::in_memory());
    let advisor = AdvisorService::builder(model.clone())
        .cache(cache.clone())
        .build();

    let first = advisor.market_data(Locale::Hi).await;
    assert_eq!(first.source, Source::Live);
    assert_eq!(first.value.len(), 2);
    assert_eq!(first.value[0].crop, "गेहूं");
    assert_eq!(first.value[1].trend, "down");
    assert_eq!(model.calls(), 3);

    let key = CacheKey::for_request("market", &[], "hi");
    assert_eq!(key.as_str(), "market_hi");
    let stored: Option<serde_json::Value> = cache.get(&key).await.unwrap();
    assert!(stored.is_some());

    tokio::time::advance(Duration::from_secs(3600)).await;
    let second = advisor.market_data(Locale::Hi).await;
    assert_eq!(second.source, Source::Cached);
    assert_eq!(second.value, first.value);
    assert_eq!(model.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn market_entry_expires_after_six_hours() {
    let model = ScriptedModel::new(vec![Ok(PRICES.to_string()), Ok(PRICES.to_string())]);
    let advisor = AdvisorService::builder(model.clone()).build();

    advisor.market_data(Locale::Hi).await;
    tokio::time::advance(Duration::from_secs(6 * 3600)).await;
    let again = advisor.market_data(Locale::Hi).await;
    assert_eq!(again.source, Source::Live);
    assert_eq!(model.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn exhausted_retries_serve_localized_fallback() {
    let model = ScriptedModel::new((0..4).map(|_| Err(Error::rate_limited("busy"))).collect());
    let advisor = AdvisorService::builder(model.clone()).build();

    let alerts = advisor.real_time_alerts(Locale::Hi).await;
    assert_eq!(model.calls(), 4);
    assert!(matches!(
        alerts.source,
        Source::Fallback(FallbackReason::RemoteFailure { transient: true, .. })
    ));
    assert!(!alerts.value.is_empty());
    assert!(alerts.value.iter().all(|a| !a.message.is_empty()));
    assert_eq!(advisor.cache().len().await.unwrap(), 0);
}

#[tokio::test]
async fn prose_without_brackets_degrades() {
    let model = ScriptedModel::new(vec![Ok("Sorry, prices are unavailable today.".into())]);
    let advisor = AdvisorService::builder(model).build();

    let prices = advisor.market_data(Locale::En).await;
    assert!(matches!(
        prices.source,
        Source::Fallback(FallbackReason::ParseFailure { .. })
    ));
    assert!(!prices.value.is_empty());
}

#[tokio::test]
async fn free_text_is_stripped_of_markdown() {
    let reply = "## Outlook\n\n**Wheat** is firm.\n* Hold stock\n1. Sell in March";
    let model = ScriptedModel::new(vec![Ok(reply.into())]);
    let advisor = AdvisorService::builder(model).build();

    let text = advisor.market_analysis(Locale::En).await;
    assert!(text.is_live());
    assert!(!text.value.contains("**"));
    assert!(!text.value.contains('#'));
    assert!(text.value.contains("Wheat is firm."));
}

#[tokio::test]
async fn locales_do_not_share_entries() {
    let model = ScriptedModel::new(vec![Ok(PRICES.to_string()), Ok(PRICES.to_string())]);
    let advisor = AdvisorService::builder(model.clone()).build();

    advisor.market_data(Locale::Hi).await;
    advisor.market_data(Locale::Mr).await;
    assert_eq!(model.calls(), 2);
    assert_eq!(advisor.cache().len().await.unwrap(), 2);
}

#[test]
fn operation_keys_are_deterministic() {
    let a = AdvisorService::cache_key(&op::CROP_ANALYSIS, &["onion"], Locale::Gu);
    let b = AdvisorService::cache_key(&op::CROP_ANALYSIS, &["onion"], Locale::Gu);
    assert_eq!(a, b);
    assert_ne!(a, AdvisorService::cache_key(&op::CROP_ANALYSIS, &["potato"], Locale::Gu));
    assert_ne!(a, AdvisorService::cache_key(&op::CROP_ANALYSIS, &["onion"], Locale::Pa));
    assert!(AdvisorService::cache_key(&op::VOICE_QUERY, &[], Locale::En).is_none());
}
