use axum::{
    extract::{Json, Query},
    http::StatusCode,
};
use contracts::shared::i18n::LocaleParams;
use contracts::usecases::u604_color_trend_image::request::ColorTrendImageInput;
use contracts::usecases::u604_color_trend_image::response::ColorTrendImageOutput;

use super::{llm_provider, localized_error, request_locale, ApiError};
use crate::system::auth::extractor::CurrentUser;
use crate::usecases::u604_color_trend_image::{self, ColorImageError};

/// POST /api/trend-image
pub async fn generate(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
    Json(input): Json<ColorTrendImageInput>,
) -> Result<Json<ColorTrendImageOutput>, ApiError> {
    let locale = request_locale(&claims, &params).await;
    let provider = llm_provider(locale)?;

    u604_color_trend_image::generate(provider.as_ref(), &input, locale)
        .await
        .map(Json)
        .map_err(|e| match e {
            ColorImageError::InvalidInput(message) => localized_error(StatusCode::BAD_REQUEST, message),
            ColorImageError::Generation(message) => localized_error(StatusCode::BAD_GATEWAY, message),
        })
}
