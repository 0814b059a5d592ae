//! Payloads returned by advisor operations.
//!
//! Field names follow the camelCase keys the model is asked to produce.
//! Secondary fields default to empty so a reply that omits them still parses.

use crate::structured::{extract_as, normalize, ParseError, ResponseShape};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Something an operation can produce from a raw model reply.
pub trait Payload: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Parse the raw (pre-strip) reply.
    fn from_reply(raw: &str, shape: ResponseShape) -> Result<Self, ParseError> {
        extract_as::<Self>(raw, shape).map(Self::tidy)
    }

    /// Post-processing of text fields after a successful parse.
    fn tidy(self) -> Self {
        self
    }
}

impl Payload for String {
    fn from_reply(raw: &str, _shape: ResponseShape) -> Result<Self, ParseError> {
        let text = normalize(raw);
        if text.is_empty() {
            Err(ParseError::Empty)
        } else {
            Ok(text)
        }
    }
}

impl<T> Payload for Vec<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static + Tidy,
{
    fn tidy(self) -> Self {
        self.into_iter().map(Tidy::tidy).collect()
    }
}

/// Per-item cleanup for list payloads.
pub trait Tidy {
    fn tidy(self) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default)]
    pub id: u32,
    /// `warning`, `info` or `success`.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub time: String,
    /// `high`, `medium` or `low`.
    #[serde(default)]
    pub severity: String,
}

impl Tidy for Alert {
    fn tidy(mut self) -> Self {
        self.message = normalize(&self.message);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub crop: String,
    pub price: String,
    #[serde(default)]
    pub change: String,
    /// `up` or `down`.
    #[serde(default)]
    pub trend: String,
}

impl Tidy for MarketPrice {
    fn tidy(mut self) -> Self {
        self.crop = normalize(&self.crop);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
}

impl Tidy for Scheme {
    fn tidy(mut self) -> Self {
        self.name = normalize(&self.name);
        self.description = normalize(&self.description);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub humidity: String,
    #[serde(default)]
    pub wind_speed: String,
    #[serde(default)]
    pub visibility: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub current: CurrentWeather,
    #[serde(default)]
    pub farming_advice: String,
}

impl Payload for WeatherForecast {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub name: String,
    #[serde(default)]
    pub profitability: String,
    #[serde(default)]
    pub growth_time: String,
    #[serde(default)]
    pub water_requirement: String,
    #[serde(default)]
    pub tips: String,
}

impl Tidy for CropRecommendation {
    fn tidy(self) -> Self {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmingTip {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub benefits: String,
}

impl Tidy for FarmingTip {
    fn tidy(self) -> Self {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmAnalytics {
    pub revenue: String,
    pub expenses: String,
    pub profit: String,
    #[serde(default)]
    pub profit_margin: String,
    #[serde(default)]
    pub revenue_change: String,
    #[serde(default)]
    pub expenses_change: String,
    #[serde(default)]
    pub profit_change: String,
    #[serde(default)]
    pub margin_change: String,
    #[serde(default)]
    pub recommendations: String,
}

impl Payload for FarmAnalytics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_parse_and_tidy() {
        let raw = r#"Alerts: [{"id": 1, "type": "warning", "message": "**Heavy rain** expected", "time": "2 hours ago", "severity": "high"}]"#;
        let alerts = Vec::<Alert>::from_reply(raw, ResponseShape::JsonArray).unwrap();
        assert_eq!(alerts[0].message, "Heavy rain expected");
        assert_eq!(alerts[0].kind, "warning");
    }

    #[test]
    fn missing_secondary_fields_default() {
        let raw = r#"[{"crop": "Onion", "price": "₹18/kg"}]"#;
        let prices = Vec::<MarketPrice>::from_reply(raw, ResponseShape::JsonArray).unwrap();
        assert_eq!(prices[0].trend, "");
    }

    #[test]
    fn missing_required_field_is_mismatch() {
        let err = Vec::<MarketPrice>::from_reply(r#"[{"price": "₹18/kg"}]"#, ResponseShape::JsonArray)
            .unwrap_err();
        assert!(matches!(err, ParseError::Mismatch { .. }));
    }

    #[test]
    fn weather_uses_camel_case() {
        let raw = r#"{"current": {"temperature": "31°C", "windSpeed": "8 km/h"}, "farmingAdvice": "Irrigate at dusk"}"#;
        let w = WeatherForecast::from_reply(raw, ResponseShape::JsonObject).unwrap();
        assert_eq!(w.current.wind_speed, "8 km/h");
        assert_eq!(w.farming_advice, "Irrigate at dusk");
    }

    #[test]
    fn free_text_is_normalized() {
        let s = String::from_reply("## Tips\n\n- **Water** early", ResponseShape::FreeText).unwrap();
        assert_eq!(s, "Tips\n\nWater early");
        assert!(matches!(
            String::from_reply("```\n```", ResponseShape::FreeText),
            Err(ParseError::Empty)
        ));
    }
}
