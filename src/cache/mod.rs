//! Response caching for advisor operations.
//!
//! # Response Cache
//!
//! Model calls are slow and rate limited, so every cacheable advisor operation
//! checks a [`ResponseCache`] first. Keys are built deterministically from
//! `(operation, parameters, locale)`; each entry carries its own TTL chosen
//! by the operation class (alerts and schemes live for a day, market data and
//! analyses for six hours).
//!
//! Expiry is lazy: an entry whose age has reached its TTL is never returned,
//! and is removed on the read that discovers it. There is no size bound and
//! no LRU eviction.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ResponseCache`] | Typed get/put with statistics and an on/off switch |
//! | [`CacheBackend`] | Trait for storage backends |
//! | [`MemoryCache`] | Unbounded in-memory backend |
//! | [`NullCache`] | No-op backend for disabling caching |
//! | [`CacheKey`] | Request fingerprint |
//!
//! ## Example
//!
//! ```rust
//! use agri_advisor::cache::{CacheKey, ResponseCache};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> agri_advisor::Result<()> {
//! let cache = ResponseCache::in_memory();
//! let key = CacheKey::for_request("market", &[], "hi");
//! assert_eq!(key.as_str(), "market_hi");
//!
//! cache.put(&key, &vec!["₹25/kg"], Duration::from_secs(6 * 3600)).await?;
//! let hit: Option<Vec<String>> = cache.get(&key).await?;
//! assert_eq!(hit, Some(vec!["₹25/kg".to_string()]));
//! # Ok(())
//! # }
//! ```

mod backend;
mod key;
mod manager;

pub use backend::{CacheBackend, MemoryCache, NullCache};
pub use key::{CacheKey, CacheKeyBuilder};
pub use manager::{CacheConfig, CacheStats, ResponseCache};
