//! Operation table: name, reply shape, cache lifetime and fallbacks for each
//! advisor call.

use super::fallback;
use super::types::*;
use crate::localization::Locale;
use crate::structured::ResponseShape;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cache lifetime class. Durations come from [`TtlConfig`](crate::config::TtlConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtlClass {
    Alerts,
    Schemes,
    Market,
    Analysis,
    CropSearch,
}

/// Builds a fallback payload from the locale and the operation's subject.
pub type FallbackFn<T> = fn(Locale, &str) -> T;

/// Static description of one advisor operation.
pub struct OperationSpec<T> {
    /// Leading cache-key segment, also used in logs.
    pub name: &'static str,
    pub shape: ResponseShape,
    /// `None` for operations that are never cached.
    pub ttl: Option<TtlClass>,
    pub degraded: FallbackFn<T>,
    pub unavailable: FallbackFn<T>,
}

impl<T> OperationSpec<T> {
    pub fn is_cached(&self) -> bool {
        self.ttl.is_some()
    }
}

impl<T> fmt::Debug for OperationSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationSpec")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("ttl", &self.ttl)
            .finish()
    }
}

pub const ALERTS: OperationSpec<Vec<Alert>> = OperationSpec {
    name: "alerts",
    shape: ResponseShape::JsonArray,
    ttl: Some(TtlClass::Alerts),
    degraded: fallback::alerts_degraded,
    unavailable: fallback::alerts_unavailable,
};

pub const MARKET: OperationSpec<Vec<MarketPrice>> = OperationSpec {
    name: "market",
    shape: ResponseShape::JsonArray,
    ttl: Some(TtlClass::Market),
    degraded: fallback::market_degraded,
    unavailable: fallback::market_unavailable,
};

pub const SCHEMES: OperationSpec<Vec<Scheme>> = OperationSpec {
    name: "schemes",
    shape: ResponseShape::JsonArray,
    ttl: Some(TtlClass::Schemes),
    degraded: fallback::schemes_degraded,
    unavailable: fallback::schemes_unavailable,
};

pub const CROP_ANALYSIS: OperationSpec<String> = OperationSpec {
    name: "crop_search",
    shape: ResponseShape::FreeText,
    ttl: Some(TtlClass::CropSearch),
    degraded: fallback::crop_analysis_unavailable,
    unavailable: fallback::crop_analysis_unavailable,
};

pub const IMAGE_DIAGNOSIS: OperationSpec<String> = OperationSpec {
    name: "image_diagnosis",
    shape: ResponseShape::FreeText,
    ttl: None,
    degraded: fallback::image_analysis_unavailable,
    unavailable: fallback::image_analysis_unavailable,
};

pub const MARKET_ANALYSIS: OperationSpec<String> = OperationSpec {
    name: "analysis_market",
    shape: ResponseShape::FreeText,
    ttl: Some(TtlClass::Analysis),
    degraded: fallback::market_analysis_unavailable,
    unavailable: fallback::market_analysis_unavailable,
};

pub const SCHEME_INFORMATION: OperationSpec<String> = OperationSpec {
    name: "analysis_schemes",
    shape: ResponseShape::FreeText,
    ttl: Some(TtlClass::Analysis),
    degraded: fallback::scheme_information_unavailable,
    unavailable: fallback::scheme_information_unavailable,
};

pub const VOICE_QUERY: OperationSpec<String> = OperationSpec {
    name: "voice_query",
    shape: ResponseShape::FreeText,
    ttl: None,
    degraded: fallback::voice_query_unavailable,
    unavailable: fallback::voice_query_unavailable,
};

pub const WEATHER: OperationSpec<WeatherForecast> = OperationSpec {
    name: "weather",
    shape: ResponseShape::JsonObject,
    ttl: Some(TtlClass::Analysis),
    degraded: fallback::weather_degraded,
    unavailable: fallback::weather_unavailable,
};

pub const CROP_RECOMMENDATIONS: OperationSpec<Vec<CropRecommendation>> = OperationSpec {
    name: "crop_recommendations",
    shape: ResponseShape::JsonArray,
    ttl: Some(TtlClass::Analysis),
    degraded: fallback::crop_recommendations_degraded,
    unavailable: fallback::crop_recommendations_unavailable,
};

pub const FARMING_TIPS: OperationSpec<Vec<FarmingTip>> = OperationSpec {
    name: "farming_tips",
    shape: ResponseShape::JsonArray,
    ttl: Some(TtlClass::Analysis),
    degraded: fallback::farming_tips_degraded,
    unavailable: fallback::farming_tips_unavailable,
};

pub const FARM_ANALYTICS: OperationSpec<FarmAnalytics> = OperationSpec {
    name: "farm_analytics",
    shape: ResponseShape::JsonObject,
    ttl: Some(TtlClass::Analysis),
    degraded: fallback::farm_analytics_degraded,
    unavailable: fallback::farm_analytics_unavailable,
};

pub const QUICK_ACTION: OperationSpec<String> = OperationSpec {
    name: "quick_action",
    shape: ResponseShape::FreeText,
    ttl: None,
    degraded: fallback::quick_action_unavailable,
    unavailable: fallback::quick_action_unavailable,
};

/// Dashboard shortcut buttons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuickAction {
    Weather,
    Price,
    Scheme,
    Pest,
    /// Any other key; answered with a generic prompt.
    Other(String),
}

impl QuickAction {
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "weather" => Self::Weather,
            "price" => Self::Price,
            "scheme" => Self::Scheme,
            "pest" => Self::Pest,
            _ => Self::Other(key.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Weather => "weather",
            Self::Price => "price",
            Self::Scheme => "scheme",
            Self::Pest => "pest",
            Self::Other(key) => key,
        }
    }
}

impl From<&str> for QuickAction {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}
