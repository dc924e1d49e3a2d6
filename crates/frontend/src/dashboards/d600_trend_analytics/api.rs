use contracts::dashboards::d600_trend_analytics::dto::TrendAnalyticsResponse;

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn get_trends(lang: &str) -> Result<TrendAnalyticsResponse, String> {
    api::get_json(&with_lang("/api/analytics/trends", lang)).await
}
