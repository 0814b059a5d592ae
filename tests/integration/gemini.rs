//! Gemini adapter against a mock server.

use super::mock_server::{gemini_reply, MockServerFixture};
use agri_advisor::advisor::{FallbackReason, Source};
use agri_advisor::error_code::StandardErrorCode;
use agri_advisor::model::GeminiModel;
use agri_advisor::{
    AdvisorService, GenerationRequest, GenerativeModel, Locale, MediaAttachment, ResponseShape, RetryPolicy,
};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const PATH: &str = "/models/gemini-test:generateContent";

fn model(fixture: &MockServerFixture) -> GeminiModel {
    GeminiModel::new(&fixture.base_url, "gemini-test", "test-key", Duration::from_secs(5)).unwrap()
}

fn fast_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::from_millis(5), Duration::ZERO).unwrap()
}

#[tokio::test]
async fn generate_returns_candidate_text() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_with_header(PATH, ("x-goog-api-key", "test-key"), 200, &gemini_reply("Sow wheat in November."))
        .await;

    let req = GenerationRequest::new("When to sow wheat?", ResponseShape::FreeText, Locale::En);
    let text = model(&fixture).generate(&req).await.unwrap();
    assert_eq!(text, "Sow wheat in November.");
    mock.assert_async().await;
}

#[tokio::test]
async fn rate_limit_is_transient() {
    let fixture = MockServerFixture::new().await;
    let body = json!({"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}});
    let _mock = fixture.mock_json(PATH, &[], 429, &body.to_string(), 1).await;

    let req = GenerationRequest::new("Prices?", ResponseShape::JsonArray, Locale::Hi);
    let err = model(&fixture).generate(&req).await.unwrap_err();
    assert!(err.is_transient());
    assert_eq!(err.code(), Some(StandardErrorCode::RateLimited));
}

#[tokio::test]
async fn quota_message_is_transient() {
    let fixture = MockServerFixture::new().await;
    let body = json!({"error": {"code": 403, "message": "Quota exceeded for quota metric", "status": "PERMISSION_DENIED"}});
    let _mock = fixture.mock_json(PATH, &[], 403, &body.to_string(), 1).await;

    let req = GenerationRequest::new("Prices?", ResponseShape::JsonArray, Locale::Hi);
    let err = model(&fixture).generate(&req).await.unwrap_err();
    assert!(err.is_transient());
    assert_eq!(err.code(), Some(StandardErrorCode::QuotaExhausted));
}

#[tokio::test]
async fn advisor_retries_rate_limits_then_falls_back() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(PATH, &[], 429, r#"{"error":{"code":429,"message":"slow down"}}"#, 3)
        .await;

    let advisor = AdvisorService::builder(Arc::new(model(&fixture)))
        .retry_policy(fast_retry(3))
        .build();
    let schemes = advisor.schemes(Locale::Mr).await;
    assert!(matches!(
        schemes.source,
        Source::Fallback(FallbackReason::RemoteFailure { transient: true, .. })
    ));
    assert!(!schemes.value.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_key_is_not_retried() {
    let fixture = MockServerFixture::new().await;
    let body = json!({"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}});
    let mock = fixture
        .mock_json(PATH, &[], 400, &body.to_string(), 1)
        .await;

    let advisor = AdvisorService::builder(Arc::new(model(&fixture)))
        .retry_policy(fast_retry(5))
        .build();
    let analysis = advisor.market_analysis(Locale::En).await;
    assert!(matches!(
        analysis.source,
        Source::Fallback(FallbackReason::RemoteFailure { transient: false, .. })
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn advisor_parses_live_market_data() {
    let fixture = MockServerFixture::new().await;
    let text = "Here you go:\n```json\n[{\"crop\":\"Cotton\",\"price\":\"₹6,800/quintal\",\"change\":\"+1.1%\",\"trend\":\"up\"}]\n```";
    let mock = fixture
        .mock_json_with_header(PATH, ("x-goog-api-key", "test-key"), 200, &gemini_reply(text))
        .await;

    let advisor = AdvisorService::builder(Arc::new(model(&fixture))).build();
    let first = advisor.market_data(Locale::Gu).await;
    assert!(first.is_live());
    assert_eq!(first.value[0].crop, "Cotton");
    let second = advisor.market_data(Locale::Gu).await;
    assert_eq!(second.source, Source::Cached);
    mock.assert_async().await;
}

#[tokio::test]
async fn image_diagnosis_sends_inline_data() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({ "generationConfig": { "maxOutputTokens": 2048 } })),
                Matcher::Regex(r#""inline_data":\{"data":"/9j/","mime_type":"image/jpeg"\}"#.to_string()),
            ]))
            .with_status(200)
            .with_body(gemini_reply("**Leaf rust** detected. Spray *propiconazole*."))
            .create_async()
            .await
    };

    let advisor = AdvisorService::builder(Arc::new(model(&fixture))).build();
    let media = MediaAttachment::new(vec![0xFFu8, 0xD8, 0xFF], "image/jpeg");
    let diagnosis = advisor.diagnose_crop_image(media, Locale::Pa).await;
    assert!(diagnosis.is_live());
    assert_eq!(diagnosis.value, "Leaf rust detected. Spray propiconazole.");
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_endpoint_keeps_key_out_of_fallback_reason() {
    let model = GeminiModel::new("http://127.0.0.1:1/v1beta", "m", "SUPERSECRETKEY", Duration::from_secs(2)).unwrap();
    let advisor = AdvisorService::builder(Arc::new(model))
        .retry_policy(RetryPolicy::no_retry())
        .build();

    let prices = advisor.market_data(Locale::En).await;
    let Source::Fallback(FallbackReason::RemoteFailure { transient, message }) = &prices.source else {
        panic!("expected remote failure, got {:?}", prices.source);
    };
    assert!(!transient);
    assert!(!message.contains("SUPERSECRETKEY"));
    assert!(!serde_json::to_string(&prices).unwrap().contains("SUPERSECRETKEY"));
}
