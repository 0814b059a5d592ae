//! Static payloads served when live data cannot be produced.
//!
//! Every operation has a `degraded` payload (the model answered but the reply
//! could not be parsed) and an `unavailable` payload (the remote call failed).
//! English text for `en`, Hindi for every other locale. The second argument is
//! the operation's subject (crop name, season, ...) or `""`.

use super::types::*;
use crate::localization::Locale;

fn pick(locale: Locale, en: &str, hi: &str) -> String {
    let text = if locale.is_english() { en } else { hi };
    text.to_string()
}

fn s(text: &str) -> String {
    text.to_string()
}

pub fn alerts_degraded(l: Locale, _: &str) -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            kind: s("warning"),
            message: pick(l, "Weather alert: Heavy rain expected", "मौसम चेतावनी: भारी बारिश की संभावना"),
            time: pick(l, "2 hours ago", "2 घंटे पहले"),
            severity: s("high"),
        },
        Alert {
            id: 2,
            kind: s("info"),
            message: pick(l, "Market prices updated", "बाजार भाव अपडेट"),
            time: pick(l, "1 hour ago", "1 घंटे पहले"),
            severity: s("medium"),
        },
    ]
}

pub fn alerts_unavailable(l: Locale, _: &str) -> Vec<Alert> {
    vec![Alert {
        id: 1,
        kind: s("info"),
        message: pick(l, "Service temporarily unavailable", "सेवा अस्थायी रूप से अनुपलब्ध"),
        time: pick(l, "Now", "अभी"),
        severity: s("low"),
    }]
}

fn price(crop: String, price: &str, change: &str, trend: &str) -> MarketPrice {
    MarketPrice {
        crop,
        price: s(price),
        change: s(change),
        trend: s(trend),
    }
}

pub fn market_degraded(l: Locale, _: &str) -> Vec<MarketPrice> {
    vec![
        price(pick(l, "Rice", "चावल"), "₹25/kg", "+2%", "up"),
        price(pick(l, "Wheat", "गेहूं"), "₹22/kg", "-1%", "down"),
        price(pick(l, "Tomato", "टमाटर"), "₹30/kg", "+5%", "up"),
    ]
}

pub fn market_unavailable(l: Locale, _: &str) -> Vec<MarketPrice> {
    vec![price(pick(l, "Data unavailable", "डेटा अनुपलब्ध"), "---", "0%", "up")]
}

pub fn schemes_degraded(l: Locale, _: &str) -> Vec<Scheme> {
    vec![
        Scheme {
            name: pick(l, "PM-Kisan Scheme", "पीएम-किसान योजना"),
            amount: s("₹6,000/year"),
            status: s("Active"),
            description: pick(l, "Direct income support to farmers", "किसानों को प्रत्यक्ष आय सहायता"),
        },
        Scheme {
            name: pick(l, "Crop Insurance", "फसल बीमा"),
            amount: pick(l, "Up to ₹2 lakh", "₹2 लाख तक"),
            status: s("Available"),
            description: pick(l, "Protection against crop loss", "फसल नुकसान से सुरक्षा"),
        },
    ]
}

pub fn schemes_unavailable(l: Locale, _: &str) -> Vec<Scheme> {
    vec![Scheme {
        name: pick(l, "Service unavailable", "सेवा अनुपलब्ध"),
        amount: s("---"),
        status: s("Pending"),
        description: pick(l, "Please try again later", "कृपया बाद में पुनः प्रयास करें"),
    }]
}

pub fn weather_degraded(l: Locale, _: &str) -> WeatherForecast {
    WeatherForecast {
        current: CurrentWeather {
            temperature: s("25°C"),
            condition: pick(l, "Partly Cloudy", "आंशिक बादल"),
            humidity: s("65%"),
            wind_speed: s("12 km/h"),
            visibility: s("10 km"),
        },
        farming_advice: pick(
            l,
            "Good weather for irrigation. Consider watering crops in the evening.",
            "सिंचाई के लिए अच्छा मौसम। शाम को फसलों को पानी देने पर विचार करें।",
        ),
    }
}

pub fn weather_unavailable(l: Locale, _: &str) -> WeatherForecast {
    WeatherForecast {
        current: CurrentWeather {
            temperature: s("---"),
            condition: pick(l, "Data unavailable", "डेटा अनुपलब्ध"),
            humidity: s("---"),
            wind_speed: s("---"),
            visibility: s("---"),
        },
        farming_advice: pick(
            l,
            "Weather forecast is temporarily unavailable. Please try again later.",
            "मौसम पूर्वानुमान अस्थायी रूप से अनुपलब्ध है। कृपया बाद में पुनः प्रयास करें।",
        ),
    }
}

pub fn crop_recommendations_degraded(l: Locale, _: &str) -> Vec<CropRecommendation> {
    vec![
        CropRecommendation {
            name: pick(l, "Wheat", "गेहूं"),
            profitability: pick(l, "High", "उच्च"),
            growth_time: pick(l, "4-5 months", "4-5 महीने"),
            water_requirement: pick(l, "Medium", "मध्यम"),
            tips: pick(l, "Plant in November for best results", "सर्वोत्तम परिणामों के लिए नवंबर में बोएं"),
        },
        CropRecommendation {
            name: pick(l, "Rice", "चावल"),
            profitability: pick(l, "Medium", "मध्यम"),
            growth_time: pick(l, "3-4 months", "3-4 महीने"),
            water_requirement: pick(l, "High", "उच्च"),
            tips: pick(l, "Ensure proper water management", "उचित जल प्रबंधन सुनिश्चित करें"),
        },
    ]
}

pub fn crop_recommendations_unavailable(l: Locale, _: &str) -> Vec<CropRecommendation> {
    vec![CropRecommendation {
        name: pick(l, "Service unavailable", "सेवा अनुपलब्ध"),
        profitability: s("---"),
        growth_time: s("---"),
        water_requirement: s("---"),
        tips: pick(l, "Please try again later", "कृपया बाद में पुनः प्रयास करें"),
    }]
}

pub fn farming_tips_degraded(l: Locale, _: &str) -> Vec<FarmingTip> {
    vec![
        FarmingTip {
            title: pick(l, "Soil Testing", "मिट्टी परीक्षण"),
            description: pick(
                l,
                "Test your soil pH and nutrients regularly",
                "नियमित रूप से अपनी मिट्टी का pH और पोषक तत्व परीक्षण करें",
            ),
            difficulty: pick(l, "Easy", "आसान"),
            benefits: pick(l, "Better crop yield and soil health", "बेहतर फसल उत्पादन और मिट्टी का स्वास्थ्य"),
        },
        FarmingTip {
            title: pick(l, "Crop Rotation", "फसल चक्र"),
            description: pick(
                l,
                "Rotate different crops to maintain soil fertility",
                "मिट्टी की उर्वरता बनाए रखने के लिए विभिन्न फसलों का चक्र करें",
            ),
            difficulty: pick(l, "Medium", "मध्यम"),
            benefits: pick(l, "Improved soil health and pest control", "बेहतर मिट्टी स्वास्थ्य और कीट नियंत्रण"),
        },
    ]
}

pub fn farming_tips_unavailable(l: Locale, _: &str) -> Vec<FarmingTip> {
    vec![FarmingTip {
        title: pick(l, "Service unavailable", "सेवा अनुपलब्ध"),
        description: pick(l, "Please try again later", "कृपया बाद में पुनः प्रयास करें"),
        difficulty: s("---"),
        benefits: s("---"),
    }]
}

pub fn farm_analytics_degraded(l: Locale, _: &str) -> FarmAnalytics {
    FarmAnalytics {
        revenue: s("₹45,000"),
        expenses: s("₹28,000"),
        profit: s("₹17,000"),
        profit_margin: s("38%"),
        revenue_change: s("+12%"),
        expenses_change: s("+5%"),
        profit_change: s("+18%"),
        margin_change: s("+3%"),
        recommendations: pick(
            l,
            "Consider reducing fertilizer costs and exploring organic alternatives for better profit margins.",
            "बेहतर लाभ मार्जिन के लिए उर्वरक लागत कम करने और जैविक विकल्पों की खोज करने पर विचार करें।",
        ),
    }
}

pub fn farm_analytics_unavailable(l: Locale, _: &str) -> FarmAnalytics {
    FarmAnalytics {
        revenue: s("---"),
        expenses: s("---"),
        profit: s("---"),
        profit_margin: s("---"),
        revenue_change: s("0%"),
        expenses_change: s("0%"),
        profit_change: s("0%"),
        margin_change: s("0%"),
        recommendations: pick(
            l,
            "Farm analytics are temporarily unavailable. Please try again later.",
            "फार्म विश्लेषण अस्थायी रूप से अनुपलब्ध है। कृपया बाद में पुनः प्रयास करें।",
        ),
    }
}

pub fn crop_analysis_unavailable(l: Locale, crop: &str) -> String {
    if l.is_english() {
        format!(
            "Market analysis for {} is temporarily unavailable. Please try again later.",
            crop
        )
    } else {
        format!(
            "{} के लिए बाजार विश्लेषण अस्थायी रूप से अनुपलब्ध है। कृपया बाद में पुनः प्रयास करें।",
            crop
        )
    }
}

pub fn image_analysis_unavailable(l: Locale, _: &str) -> String {
    pick(
        l,
        "Image analysis is temporarily unavailable. Please try again later.",
        "छवि विश्लेषण अस्थायी रूप से अनुपलब्ध है। कृपया बाद में पुनः प्रयास करें।",
    )
}

pub fn market_analysis_unavailable(l: Locale, _: &str) -> String {
    pick(
        l,
        "Market analysis is temporarily unavailable. Please try again later.",
        "बाजार विश्लेषण अस्थायी रूप से अनुपलब्ध है। कृपया बाद में पुनः प्रयास करें।",
    )
}

pub fn scheme_information_unavailable(l: Locale, _: &str) -> String {
    pick(
        l,
        "Scheme information is temporarily unavailable. Please try again later.",
        "योजना की जानकारी अस्थायी रूप से अनुपलब्ध है। कृपया बाद में पुनः प्रयास करें।",
    )
}

pub fn voice_query_unavailable(l: Locale, _: &str) -> String {
    pick(
        l,
        "Voice assistant is temporarily unavailable. Please try again later.",
        "वॉइस असिस्टेंट अस्थायी रूप से अनुपलब्ध है। कृपया बाद में पुनः प्रयास करें।",
    )
}

pub fn quick_action_unavailable(l: Locale, _: &str) -> String {
    pick(
        l,
        "Quick action is temporarily unavailable. Please try again later.",
        "त्वरित कार्रवाई अस्थायी रूप से अनुपलब्ध है। कृपया बाद में पुनः प्रयास करें।",
    )
}
