//! Retry and cache behaviour under paused time.

use agri_advisor::cache::{CacheKey, CacheStats, ResponseCache};
use agri_advisor::error_code::StandardErrorCode;
use agri_advisor::{Error, ResilientInvoker, RetryPolicy};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::Instant;

fn policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::from_millis(1000), Duration::from_millis(1000)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn succeeds_on_last_allowed_attempt() {
    for n in 1..=5u32 {
        let invoker = ResilientInvoker::new(policy(n));
        let calls = AtomicU32::new(0);
        let out = invoker
            .invoke(|| {
                let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if call < n {
                        Err(Error::rate_limited("429"))
                    } else {
                        Ok(call)
                    }
                }
            })
            .await
            .unwrap();
        assert_eq!(out, n);
        assert_eq!(calls.load(Ordering::SeqCst), n);
    }
}

#[tokio::test(start_paused = true)]
async fn backoff_doubles_between_attempts() {
    let invoker = ResilientInvoker::new(RetryPolicy::new(4, Duration::from_millis(1000), Duration::ZERO).unwrap());
    let start = Instant::now();
    let stamps = std::sync::Mutex::new(Vec::new());
    let result: agri_advisor::Result<()> = invoker
        .invoke(|| {
            stamps.lock().unwrap().push(start.elapsed());
            async { Err(Error::rate_limited("429")) }
        })
        .await;
    assert!(result.unwrap_err().is_transient());
    let stamps = stamps.into_inner().unwrap();
    let secs: Vec<u64> = stamps.iter().map(|d| d.as_secs()).collect();
    assert_eq!(secs, vec![0, 1, 3, 7]);
}

#[tokio::test(start_paused = true)]
async fn jitter_stays_within_bound() {
    let p = policy(4);
    for attempt in 0..3 {
        let delay = p.backoff(attempt);
        let base = p.base_backoff(attempt);
        assert!(delay >= base);
        assert!(delay <= base + Duration::from_millis(1000));
    }
}

#[tokio::test(start_paused = true)]
async fn fatal_error_is_not_retried() {
    for code in [
        StandardErrorCode::Authentication,
        StandardErrorCode::InvalidRequest,
        StandardErrorCode::ServerError,
    ] {
        let invoker = ResilientInvoker::new(policy(10));
        let calls = AtomicU32::new(0);
        let start = Instant::now();
        let result: agri_advisor::Result<()> = invoker
            .invoke(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(Error::remote(code, 400, "nope")) }
            })
            .await;
        assert!(!result.unwrap_err().is_transient());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

#[tokio::test(start_paused = true)]
async fn cache_entry_expires_at_ttl() {
    let cache = ResponseCache::in_memory();
    let key = CacheKey::for_request("alerts", &[], "en");
    let ttl = Duration::from_secs(24 * 3600);
    cache.put(&key, &"frost warning", ttl).await.unwrap();

    tokio::time::advance(ttl - Duration::from_secs(1)).await;
    let hit: Option<String> = cache.get(&key).await.unwrap();
    assert_eq!(hit.as_deref(), Some("frost warning"));

    tokio::time::advance(Duration::from_secs(1)).await;
    let miss: Option<String> = cache.get(&key).await.unwrap();
    assert_eq!(miss, None);
    let still: Option<String> = cache.get(&key).await.unwrap();
    assert_eq!(still, None);
    assert_eq!(cache.len().await.unwrap(), 0);

    assert_eq!(
        cache.stats(),
        CacheStats {
            hits: 1,
            misses: 2,
            sets: 1,
            errors: 0,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn overwrite_restarts_ttl() {
    let cache = ResponseCache::in_memory();
    let key = CacheKey::for_request("schemes", &[], "pa");
    let ttl = Duration::from_secs(60);
    cache.put(&key, &1u32, ttl).await.unwrap();
    tokio::time::advance(Duration::from_secs(50)).await;
    cache.put(&key, &2u32, ttl).await.unwrap();
    tokio::time::advance(Duration::from_secs(50)).await;
    assert_eq!(cache.get::<u32>(&key).await.unwrap(), Some(2));
}
