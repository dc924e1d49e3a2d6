use crate::shared::llm::{require_text, PromptFlow};
use contracts::usecases::u603_trend_report::request::TrendReportInput;
use contracts::usecases::u603_trend_report::response::TrendReportOutput;
use serde_json::{json, Value};

pub struct TrendReportFlow;

impl PromptFlow for TrendReportFlow {
    const NAME: &'static str = "generateTrendReportFlow";

    type Input = TrendReportInput;
    type Output = TrendReportOutput;

    fn render_prompt(input: &TrendReportInput) -> String {
        format!(
            "You are a trend analyst specializing in B2B apparel markets.\n\
             Generate a trend report based on the following request: {}\n\
             The report must cover silhouette, color, pattern, fabric, seasonal relevance and consumer sentiment, \
             and focus on actionable insights for business decisions.",
            input.prompt.trim()
        )
    }

    fn output_schema() -> Value {
        json!({
            "type": "object",
            "required": ["report"],
            "properties": {"report": {"type": "string"}}
        })
    }

    fn validate_input(input: &TrendReportInput) -> Result<(), String> {
        require_text("prompt", &input.prompt)
    }

    fn validate_output(output: &TrendReportOutput) -> Result<(), String> {
        require_text("report", &output.report)
    }
}
