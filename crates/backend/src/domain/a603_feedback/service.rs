use super::repository;
use contracts::domain::a603_feedback::aggregate::{
    Feedback, FeedbackId, Satisfaction, SubmitFeedbackDto,
};
use sea_orm::DatabaseConnection;
use thiserror::Error;

/// Ключ перевода для пустого отзыва
pub const EMPTY_FEEDBACK_KEY: &str = "feedbackPage.toast.errorDescriptionEmpty";

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Feedback is empty")]
    Empty,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Оценка для лога
fn rating_label(satisfaction: Option<Satisfaction>) -> &'static str {
    satisfaction.map(|s| s.as_str()).unwrap_or("no rating")
}

pub async fn submit(
    conn: &DatabaseConnection,
    user_id: &str,
    dto: SubmitFeedbackDto,
) -> Result<Feedback, FeedbackError> {
    if dto.is_empty() {
        return Err(FeedbackError::Empty);
    }

    let feedback = Feedback {
        id: FeedbackId::new_v4(),
        user_id: user_id.to_string(),
        satisfaction: dto.satisfaction,
        comments: dto.comments.trim().to_string(),
        created_at: chrono::Utc::now(),
    };
    repository::insert(conn, &feedback).await?;
    tracing::info!(
        "Feedback from {}: {}",
        user_id,
        rating_label(feedback.satisfaction)
    );
    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[test]
    fn rating_label_outlives_the_rating() {
        let label = rating_label(Some(Satisfaction::VeryDissatisfied));
        assert_eq!(label, "very-dissatisfied");
        assert_eq!(rating_label(None), "no rating");
    }

    #[tokio::test]
    async fn empty_feedback_is_rejected() {
        let conn = test_connection().await;
        let dto = SubmitFeedbackDto {
            satisfaction: None,
            comments: "   ".into(),
        };
        assert!(matches!(
            submit(&conn, "u1", dto).await,
            Err(FeedbackError::Empty)
        ));
        assert!(repository::list_by_user(&conn, "u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rating_or_comment_is_enough() {
        let conn = test_connection().await;
        submit(
            &conn,
            "u1",
            SubmitFeedbackDto {
                satisfaction: Some(Satisfaction::VerySatisfied),
                comments: String::new(),
            },
        )
        .await
        .unwrap();
        submit(
            &conn,
            "u1",
            SubmitFeedbackDto {
                satisfaction: None,
                comments: " Great forecasts ".into(),
            },
        )
        .await
        .unwrap();

        let stored = repository::list_by_user(&conn, "u1").await.unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().any(|f| f.satisfaction == Some(Satisfaction::VerySatisfied)));
        assert!(stored.iter().any(|f| f.comments == "Great forecasts"));
    }
}
