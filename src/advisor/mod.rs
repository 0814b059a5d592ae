//! Farming-assistant operations.
//!
//! Each operation follows the same path:
//!
//! ```text
//! cache key ─▶ ResponseCache ─hit─▶ Cached
//!                 │ miss
//!                 ▼
//!        localized prompt ─▶ ResilientInvoker ─▶ model
//!                 │ ok                 │ err
//!                 ▼                    ▼
//!        normalize / extract    unavailable fallback
//!         │ ok        │ err
//!         ▼           ▼
//!   cache + Live   degraded fallback
//! ```
//!
//! Operations never fail: the caller always receives a [`Resolved`] value and
//! can inspect its [`Source`]. Fallback payloads are not cached, so the next
//! call tries the model again.

mod builder;
pub mod fallback;
pub mod operation;
pub mod prompts;
mod service;
pub mod types;

pub use builder::AdvisorServiceBuilder;
pub use operation::{OperationSpec, QuickAction, TtlClass};
pub use service::AdvisorService;
pub use types::{
    Alert, CropRecommendation, CurrentWeather, FarmAnalytics, FarmingTip, MarketPrice, Payload,
    Scheme, WeatherForecast,
};

use serde::Serialize;

/// Why a fallback payload was served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FallbackReason {
    /// The model call failed (after retries, when transient).
    RemoteFailure { transient: bool, message: String },
    /// The model answered but the reply did not have the expected structure.
    ParseFailure { message: String },
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Live,
    Cached,
    Fallback(FallbackReason),
}

/// An operation's outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Resolved<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            source: Source::Live,
        }
    }

    pub fn cached(value: T) -> Self {
        Self {
            value,
            source: Source::Cached,
        }
    }

    pub fn fallback(value: T, reason: FallbackReason) -> Self {
        Self {
            value,
            source: Source::Fallback(reason),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.source, Source::Live)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, Source::Fallback(_))
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            source: self.source,
        }
    }
}
