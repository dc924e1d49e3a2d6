use crate::shared::llm::{require_text, PromptFlow};
use contracts::usecases::u601_forecast_sku_stock::request::ForecastSalesInput;
use contracts::usecases::u601_forecast_sku_stock::response::ForecastSalesOutput;
use serde_json::{json, Value};

/// Прогноз остатков одного SKU на заданный горизонт
pub struct ForecastSalesFlow;

impl PromptFlow for ForecastSalesFlow {
    const NAME: &'static str = "forecastSalesFlow";

    type Input = ForecastSalesInput;
    type Output = ForecastSalesOutput;

    fn render_prompt(input: &ForecastSalesInput) -> String {
        let mut prompt = format!(
            "You are a demand planner for a B2B apparel brand.\n\
             Forecast the remaining stock of the product \"{}\" for the {}.\n\
             Current stock: {} units.\n\
             Give one data point per period (month) with the projected stock level at the end of that period. \
             Stock can only go down, and never below zero.\n\
             Explain your reasoning and give concrete replenishment recommendations.\n\
             Write the period labels, the reasoning and the recommendations in {}.",
            input.sku_name,
            input.forecast_horizon,
            input.current_stock,
            input.target_language.language_name(),
        );
        if let Some(extra) = input
            .user_prompt
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            prompt.push_str("\nAdditional context from the user: ");
            prompt.push_str(extra);
        }
        prompt
    }

    fn output_schema() -> Value {
        json!({
            "type": "object",
            "required": ["sku_name", "current_stock", "forecast_data", "reasoning", "recommendations"],
            "properties": {
                "sku_name": {"type": "string"},
                "current_stock": {"type": "integer", "minimum": 0},
                "forecast_data": {
                    "type": "array",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "required": ["period", "forecasted_stock"],
                        "properties": {
                            "period": {"type": "string"},
                            "forecasted_stock": {"type": "integer", "minimum": 0}
                        }
                    }
                },
                "reasoning": {"type": "string"},
                "recommendations": {"type": "string"}
            }
        })
    }

    fn validate_input(input: &ForecastSalesInput) -> Result<(), String> {
        require_text("sku_name", &input.sku_name)?;
        require_text("forecast_horizon", &input.forecast_horizon)
    }

    fn validate_output(output: &ForecastSalesOutput) -> Result<(), String> {
        if output.forecast_data.is_empty() {
            return Err("forecast_data must contain at least one period".into());
        }
        Ok(())
    }

    /// Остаток всегда берётся из входа, а не из ответа модели
    fn finalize(input: &ForecastSalesInput, mut output: ForecastSalesOutput) -> ForecastSalesOutput {
        if output.current_stock != input.current_stock {
            tracing::warn!(
                "Model changed current stock for {}: {} -> {}, restoring input value",
                input.sku_name,
                input.current_stock,
                output.current_stock
            );
            output.current_stock = input.current_stock;
        }
        output
    }
}
