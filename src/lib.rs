//! # agri-advisor
//!
//! Resilient generative-model core for a multilingual farming assistant.
//!
//! ## Overview
//!
//! Farmers ask for market prices, alerts, schemes, weather and crop advice in
//! their own language. Every answer comes from a generative model that is
//! rate-limited, sometimes down, and not always well-formed. This crate puts
//! three mechanisms between the caller and the model:
//!
//! - **Response cache**: results are kept per (operation, parameters, locale)
//!   with an operation-specific TTL; expired entries are never served.
//! - **Resilient invoker**: rate and quota rejections are retried with
//!   exponential backoff and jitter; every other failure ends the call at once.
//! - **Output normalization**: markdown is stripped from free text and JSON is
//!   extracted from prose-wrapped replies.
//!
//! When all of that still fails, the operation returns a static localized
//! fallback, so callers always get something to show.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agri_advisor::{AdvisorConfig, AdvisorService, Locale};
//!
//! #[tokio::main]
//! async fn main() -> agri_advisor::Result<()> {
//!     let config = AdvisorConfig::from_env()?;
//!     let advisor = AdvisorService::from_config(&config)?;
//!
//!     let prices = advisor.market_data(Locale::Hi).await;
//!     for p in &prices.value {
//!         println!("{} {} ({})", p.crop, p.price, p.change);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`advisor`] | Farming operations, payload types, fallbacks |
//! | [`cache`] | TTL response cache with pluggable backends |
//! | [`resilience`] | Retry policy and invoker |
//! | [`structured`] | Markdown stripping and JSON extraction |
//! | [`model`] | Generative model boundary and the Gemini adapter |
//! | [`localization`] | Locales, string table, prompt language suffixes |
//! | [`auth`] | Identity provider boundary and session events |
//! | [`speech`] | Transcript filtering, speech output, voice assistant |
//! | [`config`] | YAML and environment configuration |

pub mod advisor;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error_code;
pub mod localization;
pub mod model;
pub mod resilience;
pub mod speech;
pub mod structured;
pub mod transport;

pub use advisor::{AdvisorService, AdvisorServiceBuilder, FallbackReason, Resolved, Source};
pub use cache::{CacheKey, ResponseCache};
pub use config::AdvisorConfig;
pub use localization::{localize, Locale};
pub use model::{GenerationRequest, GenerativeModel, MediaAttachment};
pub use resilience::{ResilientInvoker, RetryPolicy};
pub use structured::{extract_json, normalize, ResponseShape};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
