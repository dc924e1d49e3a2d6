use super::repository;
use crate::shared::i18n;
use chrono::{TimeZone, Utc};
use contracts::domain::a602_task::aggregate::{Task, TaskId, TaskStatus, TaskView};
use contracts::shared::i18n::Locale;
use sea_orm::DatabaseConnection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found")]
    NotFound,

    #[error("{0}")]
    InvalidTransition(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// (ключ каталога, статус, создана, завершена), время в UTC
const CATALOG: [(&str, TaskStatus, (i32, u32, u32, u32, u32), Option<(i32, u32, u32, u32, u32)>); 4] = [
    (
        "q3TrendReport",
        TaskStatus::Completed,
        (2023, 11, 15, 9, 30),
        Some((2023, 11, 15, 14, 0)),
    ),
    ("q4Sales", TaskStatus::InProgress, (2023, 12, 1, 10, 0), None),
    ("consumerSentiment", TaskStatus::Pending, (2023, 12, 5, 11, 15), None),
    (
        "competitorAnalysis",
        TaskStatus::Failed,
        (2023, 11, 20, 14, 0),
        Some((2023, 11, 20, 16, 30)),
    ),
];

fn utc((y, mo, d, h, mi): (i32, u32, u32, u32, u32)) -> anyhow::Result<chrono::DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("Invalid seed date {}-{}-{}", y, mo, d))
}

/// Заполнить таблицу задач стартовым каталогом, если она пуста
pub async fn seed_catalog_tasks(conn: &DatabaseConnection) -> anyhow::Result<usize> {
    if repository::count(conn).await? > 0 {
        return Ok(0);
    }

    for (key, status, created, completed) in CATALOG {
        let task = Task {
            id: TaskId::new_v4(),
            name: i18n::t(Locale::En, &format!("tasksPage.tasks.{}.name", key)),
            description: i18n::t(Locale::En, &format!("tasksPage.tasks.{}.description", key)),
            i18n_key: Some(key.to_string()),
            status,
            created_at: utc(created)?,
            completed_at: completed.map(utc).transpose()?,
        };
        repository::insert(conn, &task).await?;
    }
    tracing::info!("Seeded {} catalog tasks", CATALOG.len());
    Ok(CATALOG.len())
}

pub fn to_view(task: Task, locale: Locale) -> TaskView {
    let (name, description) = match &task.i18n_key {
        Some(key) => (
            i18n::t(locale, &format!("tasksPage.tasks.{}.name", key)),
            i18n::t(locale, &format!("tasksPage.tasks.{}.description", key)),
        ),
        None => (task.name.clone(), task.description.clone()),
    };
    TaskView {
        id: task.id,
        name,
        description,
        status: task.status,
        status_label: i18n::t(locale, task.status.label_key()),
        created_at: task.created_at,
        completed_at: task.completed_at,
    }
}

pub async fn list_views(conn: &DatabaseConnection, locale: Locale) -> anyhow::Result<Vec<TaskView>> {
    Ok(repository::list_all(conn)
        .await?
        .into_iter()
        .map(|task| to_view(task, locale))
        .collect())
}

pub async fn get_view(
    conn: &DatabaseConnection,
    id: TaskId,
    locale: Locale,
) -> anyhow::Result<Option<TaskView>> {
    Ok(repository::get_by_id(conn, id)
        .await?
        .map(|task| to_view(task, locale)))
}

/// Сменить статус задачи
pub async fn update_status(
    conn: &DatabaseConnection,
    id: TaskId,
    status: TaskStatus,
) -> Result<Task, TaskError> {
    let mut task = repository::get_by_id(conn, id)
        .await?
        .ok_or(TaskError::NotFound)?;

    task.transition_to(status, Utc::now())
        .map_err(TaskError::InvalidTransition)?;
    repository::update(conn, &task).await?;

    tracing::info!("Task {} -> {}", task.id.0, task.status.as_str());
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[tokio::test]
    async fn seeding_happens_once_and_lists_newest_first() {
        let conn = test_connection().await;
        assert_eq!(seed_catalog_tasks(&conn).await.unwrap(), 4);
        assert_eq!(seed_catalog_tasks(&conn).await.unwrap(), 0);

        let views = list_views(&conn, Locale::En).await.unwrap();
        let names: Vec<&str> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Analyze Consumer Sentiment - New Collection",
                "Forecast Q4 Sales",
                "Generate Competitor Analysis Report",
                "Generate Q3 Trend Report",
            ]
        );
        assert_eq!(views[1].status, TaskStatus::InProgress);
        assert!(views[3].completed_at.is_some());
    }

    #[tokio::test]
    async fn status_changes_persist_and_terminal_is_final() {
        let conn = test_connection().await;
        seed_catalog_tasks(&conn).await.unwrap();
        let pending = list_views(&conn, Locale::En)
            .await
            .unwrap()
            .into_iter()
            .find(|v| v.status == TaskStatus::Pending)
            .unwrap();

        let task = update_status(&conn, pending.id, TaskStatus::Completed)
            .await
            .unwrap();
        assert!(task.completed_at.is_some());

        let stored = get_view(&conn, pending.id, Locale::En).await.unwrap().unwrap();
        assert_eq!(stored.status, TaskStatus::Completed);
        assert_eq!(stored.completed_at, task.completed_at);

        let err = update_status(&conn, pending.id, TaskStatus::InProgress)
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::InvalidTransition(_)));

        let missing = update_status(&conn, TaskId::new_v4(), TaskStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(missing, TaskError::NotFound));
    }
}
