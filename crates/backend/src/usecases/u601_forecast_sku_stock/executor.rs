use super::flow::ForecastSalesFlow;
use crate::shared::data::sources::SkuCatalog;
use crate::shared::i18n::{t, tr, Localized};
use crate::shared::llm::{run_flow, FlowError, LlmProvider};
use contracts::shared::i18n::Locale;
use contracts::usecases::u601_forecast_sku_stock::request::{
    ForecastSalesInput, ForecastSkuRequest, MAX_HORIZON_MONTHS, MIN_HORIZON_MONTHS,
};
use contracts::usecases::u601_forecast_sku_stock::response::{
    ForecastChartPoint, ForecastSalesOutput, ForecastSkuResponse, SkuItem,
};
use thiserror::Error;

pub const SKU_MISSING_KEY: &str = "forecastPage.toast.skuMissingDescription";
pub const HORIZON_RANGE_KEY: &str = "forecastPage.horizonOutOfRange";

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("{0}")]
    Validation(Localized),

    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Каталог SKU с локализованными названиями
pub fn list_skus(catalog: &dyn SkuCatalog, locale: Locale) -> Vec<SkuItem> {
    catalog
        .skus()
        .into_iter()
        .map(|sku| SkuItem {
            label: t(locale, &sku.label_key),
            value: sku.value,
            label_key: sku.label_key,
            current_stock: sku.current_stock,
        })
        .collect()
}

pub fn horizon_text(months: u32) -> String {
    format!("next {} months", months)
}

/// Собрать вход потока из выбора на странице
pub fn build_input(
    catalog: &dyn SkuCatalog,
    request: &ForecastSkuRequest,
    locale: Locale,
) -> Result<ForecastSalesInput, ForecastError> {
    let sku = catalog
        .find(request.sku.trim())
        .ok_or_else(|| ForecastError::Validation(Localized::new(locale, SKU_MISSING_KEY, &[])))?;

    if !(MIN_HORIZON_MONTHS..=MAX_HORIZON_MONTHS).contains(&request.horizon_months) {
        let min = MIN_HORIZON_MONTHS.to_string();
        let max = MAX_HORIZON_MONTHS.to_string();
        return Err(ForecastError::Validation(Localized::new(
            locale,
            HORIZON_RANGE_KEY,
            &[("min", &min), ("max", &max)],
        )));
    }

    Ok(ForecastSalesInput {
        sku_name: t(locale, &sku.label_key),
        current_stock: sku.current_stock,
        forecast_horizon: horizon_text(request.horizon_months),
        target_language: locale,
        user_prompt: request
            .user_prompt
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

/// Точки графика: начальный остаток, затем продажи как падение остатка за период
pub fn build_chart(output: &ForecastSalesOutput, initial_label: &str) -> Vec<ForecastChartPoint> {
    let mut chart = Vec::with_capacity(output.forecast_data.len() + 1);
    chart.push(ForecastChartPoint {
        period: initial_label.to_string(),
        sales: 0,
        stock: output.current_stock,
    });

    let mut previous_stock = output.current_stock;
    for point in &output.forecast_data {
        chart.push(ForecastChartPoint {
            period: point.period.clone(),
            sales: previous_stock.saturating_sub(point.forecasted_stock),
            stock: point.forecasted_stock,
        });
        previous_stock = point.forecasted_stock;
    }
    chart
}

pub async fn forecast_sku(
    provider: &dyn LlmProvider,
    catalog: &dyn SkuCatalog,
    request: &ForecastSkuRequest,
    locale: Locale,
) -> Result<ForecastSkuResponse, ForecastError> {
    let input = build_input(catalog, request, locale)?;
    let forecast = run_flow::<ForecastSalesFlow>(provider, &input).await?;
    let chart = build_chart(&forecast, &t(locale, "forecastPage.chart.initialPeriodLabel"));
    let title = tr(
        locale,
        "forecastPage.forecastTitle",
        &[("skuName", &forecast.sku_name)],
    );

    Ok(ForecastSkuResponse {
        forecast,
        chart,
        title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::sources::MockSkuCatalog;
    use crate::shared::llm::testing::RecordingProvider;
    use crate::shared::llm::LlmError;
    use contracts::usecases::u601_forecast_sku_stock::response::ForecastDataPoint;

    fn request(sku: &str, months: u32) -> ForecastSkuRequest {
        ForecastSkuRequest {
            sku: sku.into(),
            horizon_months: months,
            user_prompt: Some("  holiday promo planned ".into()),
        }
    }

    const REPLY: &str = r#"```json
{"sku_name":"Classic White T-Shirt","current_stock":999,
 "forecast_data":[{"period":"Month 1","forecasted_stock":1000},
                  {"period":"Month 2","forecasted_stock":1050},
                  {"period":"Month 3","forecasted_stock":700}],
 "reasoning":"steady demand","recommendations":"reorder in month 3"}
```"#;

    #[tokio::test]
    async fn stock_comes_from_catalog_not_model() {
        let provider = RecordingProvider::with_replies(vec![REPLY]);
        let response = forecast_sku(&provider, &MockSkuCatalog, &request("SKU001", 3), Locale::En)
            .await
            .unwrap();

        assert_eq!(response.forecast.current_stock, 1200);
        assert_eq!(response.chart[0].stock, 1200);
        assert_eq!(response.chart[0].period, "Initial");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        let prompt = &calls[0][1].content;
        assert!(prompt.contains("Current stock: 1200 units."));
        assert!(prompt.contains("next 3 months"));
        assert!(prompt.contains("holiday promo planned"));
    }

    #[tokio::test]
    async fn odd_model_stock_values_are_replaced_by_catalog_stock() {
        let body = r#""forecast_data":[{"period":"M1","forecasted_stock":1100.4},{"period":"M2","forecasted_stock":-5}],"reasoning":"r","recommendations":"c""#;
        let replies = [
            format!(r#"{{"sku_name":"T","current_stock":1199.5,{}}}"#, body),
            format!(r#"{{"sku_name":"T","current_stock":-1,{}}}"#, body),
            format!(r#"{{"sku_name":"T",{}}}"#, body),
        ];

        for reply in &replies {
            let provider = RecordingProvider::with_replies(vec![reply.as_str()]);
            let response =
                forecast_sku(&provider, &MockSkuCatalog, &request("SKU001", 3), Locale::En)
                    .await
                    .unwrap();
            assert_eq!(response.forecast.current_stock, 1200, "reply: {}", reply);
            assert_eq!(response.forecast.forecast_data[0].forecasted_stock, 1100);
            assert_eq!(response.forecast.forecast_data[1].forecasted_stock, 0);
            assert_eq!(response.chart[0].stock, 1200);
        }
    }

    #[test]
    fn chart_sales_never_negative() {
        let output = ForecastSalesOutput {
            sku_name: "x".into(),
            current_stock: 1200,
            forecast_data: vec![
                ForecastDataPoint {
                    period: "M1".into(),
                    forecasted_stock: 1000,
                },
                ForecastDataPoint {
                    period: "M2".into(),
                    forecasted_stock: 1050,
                },
                ForecastDataPoint {
                    period: "M3".into(),
                    forecasted_stock: 700,
                },
            ],
            reasoning: String::new(),
            recommendations: String::new(),
        };
        let chart = build_chart(&output, "Initial");
        let sales: Vec<u32> = chart.iter().map(|p| p.sales).collect();
        assert_eq!(sales, vec![0, 200, 0, 350]);
        assert_eq!(chart.len(), 4);
    }

    #[tokio::test]
    async fn unknown_sku_is_rejected_before_llm() {
        let provider = RecordingProvider::with_replies(vec![REPLY]);
        let err = forecast_sku(&provider, &MockSkuCatalog, &request("SKU999", 3), Locale::En)
            .await
            .unwrap_err();
        match err {
            ForecastError::Validation(message) => assert_eq!(message.key, SKU_MISSING_KEY),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn horizon_must_be_in_range() {
        for months in [2, 13] {
            let err = build_input(&MockSkuCatalog, &request("SKU002", months), Locale::En).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Forecast horizon must be between 3 and 12 months."
            );
            assert!(matches!(err, ForecastError::Validation(ref m) if m.key == HORIZON_RANGE_KEY));
        }
        let input = build_input(&MockSkuCatalog, &request("SKU002", 12), Locale::Ja).unwrap();
        assert_eq!(input.forecast_horizon, "next 12 months");
        assert_eq!(input.target_language, Locale::Ja);
        assert_eq!(input.user_prompt.as_deref(), Some("holiday promo planned"));
    }

    #[tokio::test]
    async fn empty_forecast_is_rejected() {
        let provider = RecordingProvider::with_replies(vec![
            r#"{"sku_name":"x","current_stock":1200,"forecast_data":[],"reasoning":"","recommendations":""}"#,
        ]);
        let err = forecast_sku(&provider, &MockSkuCatalog, &request("SKU001", 3), Locale::En)
            .await
            .unwrap_err();
        assert!(matches!(err, ForecastError::Flow(FlowError::InvalidOutput(_))));
    }

    #[tokio::test]
    async fn provider_failure_surfaces() {
        let provider = RecordingProvider::failing(LlmError::NetworkError("down".into()));
        let err = forecast_sku(&provider, &MockSkuCatalog, &request("SKU001", 3), Locale::En)
            .await
            .unwrap_err();
        assert!(matches!(err, ForecastError::Flow(FlowError::Provider(_))));
    }

    #[test]
    fn catalog_labels_are_localized() {
        let items = list_skus(&MockSkuCatalog, Locale::En);
        assert_eq!(items.len(), 5);
        assert_eq!(items[4].current_stock, 500);
        assert_ne!(items[0].label, items[0].label_key);
    }
}
