use crate::shared::llm::{require_text, PromptFlow};
use contracts::usecases::u602_forecast_market::request::MarketForecastInput;
use contracts::usecases::u602_forecast_market::response::MarketForecastOutput;
use serde_json::{json, Value};

/// Прогноз продаж по трендовому отчёту, истории продаж и рыночной ситуации
pub struct MarketForecastFlow;

impl PromptFlow for MarketForecastFlow {
    const NAME: &'static str = "marketForecastFlow";

    type Input = MarketForecastInput;
    type Output = MarketForecastOutput;

    fn render_prompt(input: &MarketForecastInput) -> String {
        format!(
            "You provide sales forecasts for a B2B apparel business based on trend analysis.\n\
             Analyze the trend analysis report, past sales data and market conditions below.\n\n\
             Trend Analysis Report: {}\n\
             Past Sales Data: {}\n\
             Market Conditions: {}\n\n\
             Provide an overall forecast summary, detailed forecasts per product category or segment, \
             clear reasoning and recommended actions. The reasoning must explain how each trend relates \
             to the forecast and how relevant it was judged to be.",
            input.trend_analysis_report.trim(),
            input.past_sales_data.trim(),
            input.market_conditions.trim(),
        )
    }

    fn output_schema() -> Value {
        json!({
            "type": "object",
            "required": ["overall_forecast", "detailed_forecast", "reasoning", "recommendations"],
            "properties": {
                "overall_forecast": {"type": "string"},
                "detailed_forecast": {
                    "type": "object",
                    "additionalProperties": {"type": "string"}
                },
                "reasoning": {"type": "string"},
                "recommendations": {"type": "string"}
            }
        })
    }

    fn validate_input(input: &MarketForecastInput) -> Result<(), String> {
        require_text("trend_analysis_report", &input.trend_analysis_report)?;
        require_text("past_sales_data", &input.past_sales_data)?;
        require_text("market_conditions", &input.market_conditions)
    }

    fn validate_output(output: &MarketForecastOutput) -> Result<(), String> {
        require_text("overall_forecast", &output.overall_forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::run_flow;
    use crate::shared::llm::testing::RecordingProvider;

    fn input() -> MarketForecastInput {
        MarketForecastInput {
            trend_analysis_report: "Oversized silhouettes keep growing".into(),
            past_sales_data: "Outerwear +12% YoY".into(),
            market_conditions: "Cautious spending".into(),
        }
    }

    #[tokio::test]
    async fn detailed_forecast_is_a_map() {
        let provider = RecordingProvider::with_replies(vec![
            r#"{"overall_forecast":"Moderate growth",
                "detailed_forecast":{"Outerwear":"+8%","Dresses":"flat"},
                "reasoning":"r","recommendations":"rec"}"#,
        ]);
        let out = run_flow::<MarketForecastFlow>(&provider, &input()).await.unwrap();
        assert_eq!(out.detailed_forecast.len(), 2);
        assert_eq!(out.detailed_forecast["Outerwear"], "+8%");

        let prompt = &provider.calls()[0][1].content;
        assert!(prompt.contains("Market Conditions: Cautious spending"));
    }

    #[tokio::test]
    async fn blank_fields_are_validation_errors() {
        let provider = RecordingProvider::default();
        let mut bad = input();
        bad.market_conditions = "  ".into();
        let err = run_flow::<MarketForecastFlow>(&provider, &bad).await.unwrap_err();
        assert!(err.is_validation());
        assert!(provider.calls().is_empty());
    }
}
