use chrono::{DateTime, Utc};
use contracts::domain::a602_task::aggregate::{Task, TaskId, TaskStatus};
use contracts::domain::common::AggregateId;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a602_task")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub i18n_key: Option<String>,
    pub status: String,
    pub created_at: String,
    pub completed_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn parse_time(value: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

impl TryFrom<Model> for Task {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Task {
            id: TaskId::from_string(&m.id).map_err(|e| anyhow::anyhow!(e))?,
            name: m.name,
            description: m.description,
            i18n_key: m.i18n_key,
            status: TaskStatus::from_str(&m.status).map_err(|e| anyhow::anyhow!(e))?,
            created_at: parse_time(&m.created_at)?,
            completed_at: m.completed_at.as_deref().map(parse_time).transpose()?,
        })
    }
}

fn to_active(task: &Task) -> ActiveModel {
    ActiveModel {
        id: Set(task.id.as_string()),
        name: Set(task.name.clone()),
        description: Set(task.description.clone()),
        i18n_key: Set(task.i18n_key.clone()),
        status: Set(task.status.as_str().to_string()),
        created_at: Set(task.created_at.to_rfc3339()),
        completed_at: Set(task.completed_at.map(|t| t.to_rfc3339())),
    }
}

pub async fn insert(conn: &DatabaseConnection, task: &Task) -> anyhow::Result<TaskId> {
    to_active(task).insert(conn).await?;
    Ok(task.id)
}

pub async fn update(conn: &DatabaseConnection, task: &Task) -> anyhow::Result<()> {
    to_active(task).update(conn).await?;
    Ok(())
}

/// Все задачи, новые первыми
pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Task>> {
    Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Task::try_from)
        .collect()
}

pub async fn get_by_id(conn: &DatabaseConnection, id: TaskId) -> anyhow::Result<Option<Task>> {
    Entity::find_by_id(id.as_string())
        .one(conn)
        .await?
        .map(Task::try_from)
        .transpose()
}

pub async fn count(conn: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn).await?)
}
