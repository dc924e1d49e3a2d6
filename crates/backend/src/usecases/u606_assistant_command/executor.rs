use super::intent::{interpret, Intent};
use crate::shared::data::sources::{SalesDataSource, SkuCatalog};
use crate::shared::i18n::{t, Localized};
use crate::shared::llm::LlmProvider;
use crate::usecases::{u601_forecast_sku_stock, u605_sales_report};
use contracts::shared::i18n::Locale;
use contracts::usecases::u601_forecast_sku_stock::request::{
    ForecastSkuRequest, MIN_HORIZON_MONTHS,
};
use contracts::usecases::u605_sales_report::request::GenerateSalesReportRequest;
use contracts::usecases::u606_assistant_command::request::AssistantCommandRequest;
use contracts::usecases::u606_assistant_command::response::AssistantReply;
use sea_orm::DatabaseConnection;
use thiserror::Error;
use u601_forecast_sku_stock::executor::{ForecastError, SKU_MISSING_KEY};

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("{0}")]
    Validation(Localized),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Report(#[from] anyhow::Error),
}

/// Зависимости, с которыми работает ассистент
pub struct AssistantContext<'a> {
    pub conn: &'a DatabaseConnection,
    pub provider: &'a dyn LlmProvider,
    pub catalog: &'a dyn SkuCatalog,
    pub sales: &'a dyn SalesDataSource,
}

pub async fn handle(
    ctx: &AssistantContext<'_>,
    owner_id: &str,
    request: &AssistantCommandRequest,
    locale: Locale,
) -> Result<AssistantReply, AssistantError> {
    let intent = interpret(&request.message);
    tracing::debug!("Assistant intent: {:?}", intent);

    match intent {
        Intent::Forecast { user_prompt } => {
            let sku = request
                .sku
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    AssistantError::Validation(Localized::new(locale, SKU_MISSING_KEY, &[]))
                })?;
            let forecast_request = ForecastSkuRequest {
                sku: sku.to_string(),
                horizon_months: request.horizon_months.unwrap_or(MIN_HORIZON_MONTHS),
                user_prompt: Some(user_prompt).filter(|p| !p.is_empty()),
            };
            let response = u601_forecast_sku_stock::forecast_sku(
                ctx.provider,
                ctx.catalog,
                &forecast_request,
                locale,
            )
            .await?;
            Ok(AssistantReply::Forecast(response))
        }
        Intent::SalesReport => {
            let response = u605_sales_report::generate(
                ctx.conn,
                ctx.sales,
                owner_id,
                &GenerateSalesReportRequest::default(),
            )
            .await?;
            Ok(AssistantReply::SalesReport(response))
        }
        Intent::SmartregiConnect => Ok(AssistantReply::Message {
            title: t(locale, "chatbot.title"),
            text: t(locale, "chatbot.smartregiConnectResponse"),
        }),
        Intent::NotRecognized => Ok(AssistantReply::Message {
            title: t(locale, "forecastPage.toast.actionNotRecognizedTitle"),
            text: t(locale, "forecastPage.toast.actionNotRecognizedDescription"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;
    use crate::shared::data::sources::{MockSalesDataSource, MockSkuCatalog};
    use crate::shared::llm::testing::RecordingProvider;

    fn command(message: &str, sku: Option<&str>) -> AssistantCommandRequest {
        AssistantCommandRequest {
            message: message.into(),
            sku: sku.map(str::to_string),
            horizon_months: None,
        }
    }

    #[tokio::test]
    async fn forecast_without_sku_is_rejected() {
        let conn = test_connection().await;
        let provider = RecordingProvider::default();
        let ctx = AssistantContext {
            conn: &conn,
            provider: &provider,
            catalog: &MockSkuCatalog,
            sales: &MockSalesDataSource::default(),
        };
        let err = handle(&ctx, "u1", &command("help me to forecast", None), Locale::En)
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::Validation(ref m) if m.key == SKU_MISSING_KEY));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn forecast_uses_default_horizon_and_extra_context() {
        let conn = test_connection().await;
        let provider = RecordingProvider::with_replies(vec![
            r#"{"sku_name":"Scarf","current_stock":500,
                "forecast_data":[{"period":"Jun","forecasted_stock":420}],
                "reasoning":"r","recommendations":"rec"}"#,
        ]);
        let ctx = AssistantContext {
            conn: &conn,
            provider: &provider,
            catalog: &MockSkuCatalog,
            sales: &MockSalesDataSource::default(),
        };
        let reply = handle(
            &ctx,
            "u1",
            &command("Help me to forecast, a campaign starts in June", Some("SKU005")),
            Locale::En,
        )
        .await
        .unwrap();

        let AssistantReply::Forecast(response) = reply else {
            panic!("expected a forecast reply");
        };
        assert_eq!(response.chart[1].sales, 80);
        let prompt = &provider.calls()[0][1].content;
        assert!(prompt.contains("next 3 months"));
        assert!(prompt.contains(", a campaign starts in June"));
    }

    #[tokio::test]
    async fn report_intent_stores_report() {
        let conn = test_connection().await;
        let provider = RecordingProvider::default();
        let ctx = AssistantContext {
            conn: &conn,
            provider: &provider,
            catalog: &MockSkuCatalog,
            sales: &MockSalesDataSource::default(),
        };
        let reply = handle(&ctx, "u1", &command("help me to generate reports", None), Locale::En)
            .await
            .unwrap();
        assert!(matches!(reply, AssistantReply::SalesReport(ref r) if r.report_id.is_some()));
    }

    #[tokio::test]
    async fn other_messages_get_canned_replies() {
        let conn = test_connection().await;
        let provider = RecordingProvider::default();
        let ctx = AssistantContext {
            conn: &conn,
            provider: &provider,
            catalog: &MockSkuCatalog,
            sales: &MockSalesDataSource::default(),
        };
        let reply = handle(&ctx, "u1", &command("what's up", None), Locale::En)
            .await
            .unwrap();
        let AssistantReply::Message { text, .. } = reply else {
            panic!("expected a message reply");
        };
        assert_eq!(
            text,
            t(Locale::En, "forecastPage.toast.actionNotRecognizedDescription")
        );
        assert!(provider.calls().is_empty());
    }
}
