use contracts::domain::a603_feedback::aggregate::{Feedback, FeedbackId, Satisfaction};
use contracts::domain::common::AggregateId;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a603_feedback")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub satisfaction: Option<String>,
    pub comments: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Feedback {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Feedback {
            id: FeedbackId::from_string(&m.id).map_err(|e| anyhow::anyhow!(e))?,
            user_id: m.user_id,
            satisfaction: m
                .satisfaction
                .as_deref()
                .map(Satisfaction::from_str)
                .transpose()
                .map_err(|e| anyhow::anyhow!(e))?,
            comments: m.comments,
            created_at: chrono::DateTime::parse_from_rfc3339(&m.created_at)?
                .with_timezone(&chrono::Utc),
        })
    }
}

pub async fn insert(conn: &DatabaseConnection, feedback: &Feedback) -> anyhow::Result<FeedbackId> {
    let active = ActiveModel {
        id: Set(feedback.id.as_string()),
        user_id: Set(feedback.user_id.clone()),
        satisfaction: Set(feedback.satisfaction.map(|s| s.as_str().to_string())),
        comments: Set(feedback.comments.clone()),
        created_at: Set(feedback.created_at.to_rfc3339()),
    };
    active.insert(conn).await?;
    Ok(feedback.id)
}

#[cfg(test)]
pub async fn list_by_user(conn: &DatabaseConnection, user_id: &str) -> anyhow::Result<Vec<Feedback>> {
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_desc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Feedback::try_from)
        .collect()
}
