use crate::{Error, ErrorContext, Result};
use keyring::Entry;
use reqwest::Proxy;
use std::env;
use std::time::Duration;
use url::Url;

/// Keyring service name under which API keys may be stored.
pub const KEYRING_SERVICE: &str = "agri-advisor";

/// Thin JSON-over-HTTP transport shared by the model and identity adapters.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

/// Raw outcome of one HTTP exchange. Classification is left to the caller.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Url::join drops the last segment unless the base ends with '/'.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_details(base_url)
                    .with_source("http_transport"),
            )
        })?;

        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(
                env::var("AGRI_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(8),
            )
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Ok(proxy_url) = env::var("AGRI_PROXY_URL") {
            if let Ok(proxy) = Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL and append query parameters.
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/')).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid endpoint path: {}", e),
                ErrorContext::new()
                    .with_details(path)
                    .with_source("http_transport"),
            )
        })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// POST a JSON body. Non-2xx statuses are returned, not raised. Errors
    /// never carry the request URL, so credentials in it cannot reach logs.
    pub async fn post_json(
        &self,
        url: Url,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<HttpReply> {
        let mut req = self.client.post(url).json(body);
        for (k, v) in headers {
            req = req.header(*k, *v);
        }
        // reqwest errors embed the request URL; keep it out of messages.
        let response = req
            .send()
            .await
            .map_err(|e| TransportError::Http(e.without_url()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Http(e.without_url()))?;
        Ok(HttpReply { status, body })
    }
}

/// Resolve an API key: explicit value, then OS keyring, then environment.
pub fn resolve_api_key(explicit: Option<&str>, keyring_user: &str, env_var: &str) -> Option<String> {
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        return Some(key.to_string());
    }

    if let Ok(entry) = Entry::new(KEYRING_SERVICE, keyring_user) {
        if let Ok(key) = entry.get_password() {
            return Some(key);
        }
    }

    env::var(env_var).ok().filter(|k| !k.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
