//! Cache key generation.

use serde::{Deserialize, Serialize};

/// Fingerprint of one advisor request: operation, parameters and locale joined
/// with `_` (for example `market_hi` or `crop_search_tomato_hi`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    key: String,
}

impl CacheKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Key for `operation` with the given parameters and locale.
    pub fn for_request(operation: &str, params: &[&str], locale: &str) -> Self {
        params
            .iter()
            .fold(CacheKeyBuilder::new(operation), |b, p| b.param(p))
            .locale(locale)
            .build()
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Incremental builder for [`CacheKey`].
///
/// Parameter and locale segments are escaped so an underscore inside a value
/// can never be confused with the separator: `["a_b"]` and `["a", "b"]` give
/// different keys.
///
/// The operation segment is kept verbatim so keys stay readable
/// (`crop_search_tomato_hi`) and may itself contain `_`. Operation names must
/// therefore be prefix-free over `_`: no name may equal another name followed
/// by `_` and more text, or `("a_b", [])` and `("a", ["b"])` would share a key.
#[derive(Debug, Clone)]
pub struct CacheKeyBuilder {
    segments: Vec<String>,
    locale: Option<String>,
}

impl CacheKeyBuilder {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            segments: vec![operation.into()],
            locale: None,
        }
    }

    pub fn param(mut self, value: &str) -> Self {
        self.segments.push(escape(value));
        self
    }

    pub fn locale(mut self, code: &str) -> Self {
        self.locale = Some(escape(code));
        self
    }

    pub fn build(self) -> CacheKey {
        let mut segments = self.segments;
        segments.extend(self.locale);
        CacheKey::new(segments.join("_"))
    }
}

fn escape(segment: &str) -> String {
    segment.replace('%', "%25").replace('_', "%5F")
}
