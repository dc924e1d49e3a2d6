use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// ID отзыва
    FeedbackId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Satisfaction {
    VerySatisfied,
    Satisfied,
    Neutral,
    Dissatisfied,
    VeryDissatisfied,
}

impl Satisfaction {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "very-satisfied" => Ok(Satisfaction::VerySatisfied),
            "satisfied" => Ok(Satisfaction::Satisfied),
            "neutral" => Ok(Satisfaction::Neutral),
            "dissatisfied" => Ok(Satisfaction::Dissatisfied),
            "very-dissatisfied" => Ok(Satisfaction::VeryDissatisfied),
            _ => Err(format!("Unknown satisfaction: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Satisfaction::VerySatisfied => "very-satisfied",
            Satisfaction::Satisfied => "satisfied",
            Satisfaction::Neutral => "neutral",
            Satisfaction::Dissatisfied => "dissatisfied",
            Satisfaction::VeryDissatisfied => "very-dissatisfied",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub user_id: String,
    pub satisfaction: Option<Satisfaction>,
    pub comments: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFeedbackDto {
    pub satisfaction: Option<Satisfaction>,
    #[serde(default)]
    pub comments: String,
}

impl SubmitFeedbackDto {
    /// Пустой отзыв (ни оценки, ни комментария) не принимается
    pub fn is_empty(&self) -> bool {
        self.satisfaction.is_none() && self.comments.trim().is_empty()
    }
}
