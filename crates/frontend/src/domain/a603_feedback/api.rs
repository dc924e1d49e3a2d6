use contracts::domain::a603_feedback::aggregate::{Feedback, SubmitFeedbackDto};

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn submit(dto: &SubmitFeedbackDto, lang: &str) -> Result<Feedback, String> {
    api::post_json(&with_lang("/api/feedback", lang), dto).await
}
