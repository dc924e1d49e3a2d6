use axum::{
    extract::{Json, Query},
    http::StatusCode,
};
use contracts::shared::i18n::LocaleParams;
use contracts::usecases::u606_assistant_command::request::AssistantCommandRequest;
use contracts::usecases::u606_assistant_command::response::AssistantReply;

use super::forecast::forecast_error;
use super::{internal_error, llm_provider, localized_error, request_locale, ApiError};
use crate::shared::data::db::get_connection;
use crate::shared::data::sources::{MockSalesDataSource, MockSkuCatalog};
use crate::system::auth::extractor::CurrentUser;
use crate::usecases::u606_assistant_command::{self, AssistantContext, AssistantError};

/// POST /api/assistant
pub async fn command(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
    Json(request): Json<AssistantCommandRequest>,
) -> Result<Json<AssistantReply>, ApiError> {
    let locale = request_locale(&claims, &params).await;
    let provider = llm_provider(locale)?;
    let sales = MockSalesDataSource::default();
    let ctx = AssistantContext {
        conn: get_connection(),
        provider: provider.as_ref(),
        catalog: &MockSkuCatalog,
        sales: &sales,
    };

    u606_assistant_command::handle(&ctx, &claims.sub, &request, locale)
        .await
        .map(Json)
        .map_err(|e| match e {
            AssistantError::Validation(message) => localized_error(StatusCode::BAD_REQUEST, message),
            AssistantError::Forecast(e) => forecast_error(e, locale),
            AssistantError::Report(e) => internal_error("Assistant report failed", e),
        })
}
