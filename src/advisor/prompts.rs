//! Prompt text for each operation. The locale's reply instruction is appended
//! by the service.

use super::operation::QuickAction;

const PLAIN: &str = "Use plain text only, no markdown formatting.";
const PLAIN_STRICT: &str =
    "Use plain text only, no markdown formatting, no bold text, no special characters.";

pub fn alerts() -> String {
    format!(
        "Generate 3 realistic agricultural alerts for Indian farmers based on current season and common farming issues. \
Return as JSON array with format: [{{\"id\": number, \"type\": \"warning|info|success\", \"message\": \"alert text\", \"time\": \"relative time\", \"severity\": \"high|medium|low\"}}]. \
Make alerts relevant to current farming conditions in India. {}",
        PLAIN
    )
}

pub fn market() -> String {
    format!(
        "Generate current market prices for 4 major crops in India (rice, wheat, tomato, onion, potato). \
Return as JSON array with format: [{{\"crop\": \"crop name\", \"price\": \"₹XX/kg or ₹XX/quintal\", \"change\": \"+/-X%\", \"trend\": \"up|down\"}}]. \
Use realistic current market prices for Indian agricultural markets. {}",
        PLAIN
    )
}

pub fn schemes() -> String {
    format!(
        "Generate information about 3 current government schemes for Indian farmers. \
Return as JSON array with format: [{{\"name\": \"scheme name\", \"amount\": \"benefit amount\", \"status\": \"Active|Available|Apply Now\", \"description\": \"brief description\"}}]. \
Include schemes like PM-Kisan, crop insurance, irrigation subsidies etc. {}",
        PLAIN
    )
}

pub fn crop_analysis(crop: &str) -> String {
    format!(
        "You are an agricultural market expert. Provide detailed market analysis for \"{crop}\" crop in India:\n\
1. Current market price and recent price trends\n\
2. Best markets/mandis where this crop gets good prices\n\
3. Seasonal price patterns for this crop\n\
4. Quality factors that affect pricing\n\
5. Storage and transportation tips\n\
6. Best time to sell for maximum profit\n\
7. Market demand forecast for next month\n\
8. Comparison with similar crops\n\n\
Please provide practical, actionable information that will help farmers make informed decisions about selling their {crop} crop. {plain}",
        crop = crop,
        plain = PLAIN_STRICT
    )
}

pub fn image_diagnosis() -> String {
    format!(
        "You are an agricultural expert. Analyze this crop image and provide:\n\
1. Is there any disease or pest problem visible?\n\
2. If yes, what is the name of the disease/pest?\n\
3. What is the treatment? (Suggest affordable local remedies)\n\
4. What are the prevention measures for the future?\n\n\
Please respond in simple language that a farmer can easily understand. {}",
        PLAIN_STRICT
    )
}

pub fn market_analysis() -> String {
    format!(
        "You are an agricultural market expert. Provide current Indian agricultural market analysis:\n\
1. Price trends for major crops (rice, wheat, tomato, onion, potato)\n\
2. Which crops would be profitable to sell this week?\n\
3. What price changes are expected in the coming month?\n\
4. Suggestions for farmers\n\n\
Please provide practical and useful information based on current market conditions. {}",
        PLAIN_STRICT
    )
}

pub fn scheme_information() -> String {
    format!(
        "You are a government scheme advisor. Provide information about major government schemes for Indian farmers:\n\
1. Detailed information about PM-Kisan scheme\n\
2. How to get drip irrigation subsidy?\n\
3. Application process for Kisan Credit Card\n\
4. Benefits of crop insurance scheme\n\
5. Required documents for applications\n\n\
Please provide step-by-step information in simple language. {}",
        PLAIN_STRICT
    )
}

pub fn voice_query(query: &str) -> String {
    format!(
        "You are an AI agricultural assistant. Farmer's question: \"{}\"\n\n\
Please answer this question and if necessary:\n\
1. Provide practical suggestions\n\
2. Suggest local solutions\n\
3. Explain in simple language\n\
4. If technical information is needed, explain with examples\n\n\
Your main goal is to help the farmer with accurate, practical information. {}",
        query, PLAIN_STRICT
    )
}

pub fn weather() -> String {
    format!(
        "Generate current weather forecast for farming in Punjab, India. \
Return as JSON with format: {{\"current\": {{\"temperature\": \"25°C\", \"condition\": \"Partly Cloudy\", \"humidity\": \"65%\", \"windSpeed\": \"12 km/h\", \"visibility\": \"10 km\"}}, \"farmingAdvice\": \"Brief farming advice based on current weather\"}}. \
Use realistic weather data for Punjab region. {}",
        PLAIN
    )
}

pub fn crop_recommendations(season: &str) -> String {
    format!(
        "Generate crop recommendations for {} season in Punjab, India. \
Return as JSON array with format: [{{\"name\": \"crop name\", \"profitability\": \"High/Medium/Low\", \"growthTime\": \"X months\", \"waterRequirement\": \"High/Medium/Low\", \"tips\": \"brief growing tip\"}}]. \
Include 4-5 suitable crops for the season. {}",
        season, PLAIN
    )
}

pub fn farming_tips(category: &str) -> String {
    format!(
        "Generate farming tips for {} category. \
Return as JSON array with format: [{{\"title\": \"tip title\", \"description\": \"detailed description\", \"difficulty\": \"Easy/Medium/Hard\", \"benefits\": \"expected benefits\"}}]. \
Include 4-5 practical tips. {}",
        category, PLAIN
    )
}

pub fn farm_analytics(period: &str) -> String {
    format!(
        "Generate farm analytics data for {} period. \
Return as JSON with format: {{\"revenue\": \"₹45,000\", \"expenses\": \"₹28,000\", \"profit\": \"₹17,000\", \"profitMargin\": \"38%\", \"revenueChange\": \"+12%\", \"expensesChange\": \"+5%\", \"profitChange\": \"+18%\", \"marginChange\": \"+3%\", \"recommendations\": \"brief recommendations for improvement\"}}. \
Use realistic Indian farming financial data. {}",
        period, PLAIN
    )
}

pub fn quick_action(action: &QuickAction) -> String {
    let task = match action {
        QuickAction::Weather => "Provide today's weather information and crop suggestions based on current weather conditions in India",
        QuickAction::Price => "Provide current prices for rice and other major crops in Indian markets",
        QuickAction::Scheme => "Provide information about new government schemes for farmers",
        QuickAction::Pest => "Provide information about common pest problems and their solutions for Indian crops",
        QuickAction::Other(_) => "Answer the farmer's question",
    };
    format!(
        "You are an AI agricultural assistant. {}. Please provide practical and useful information. {}",
        task, PLAIN_STRICT
    )
}
