use contracts::usecases::u604_color_trend_image::request::ColorTrendImageInput;
use contracts::usecases::u604_color_trend_image::response::ColorTrendImageOutput;

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn generate(input: &ColorTrendImageInput, lang: &str) -> Result<ColorTrendImageOutput, String> {
    api::post_json(&with_lang("/api/trend-image", lang), input).await
}
