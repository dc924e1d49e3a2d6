use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// ID задачи
    TaskId
);

/// Статус AI-задачи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "failed" => Ok(TaskStatus::Failed),
            _ => Err(format!("Unknown task status: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }

    /// Ключ перевода для отображения статуса
    pub fn label_key(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "tasksPage.status.pending",
            TaskStatus::InProgress => "tasksPage.status.inProgress",
            TaskStatus::Completed => "tasksPage.status.completed",
            TaskStatus::Failed => "tasksPage.status.failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    /// Префикс ключей перевода (`tasksPage.tasks.<key>`), если задача из каталога
    pub i18n_key: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new_for_insert(name: String, description: String) -> Self {
        Self {
            id: TaskId::new_v4(),
            name,
            description,
            i18n_key: None,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Перевести задачу в новый статус.
    ///
    /// Completed и Failed являются конечными состояниями.
    pub fn transition_to(&mut self, status: TaskStatus, now: DateTime<Utc>) -> Result<(), String> {
        if self.status.is_terminal() && self.status != status {
            return Err(format!(
                "Task is already {} and cannot change status",
                self.status.as_str()
            ));
        }
        self.status = status;
        self.completed_at = if status.is_terminal() {
            self.completed_at.or(Some(now))
        } else {
            None
        };
        Ok(())
    }
}

/// Задача в виде для страницы задач (локализованные поля)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskView {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub status_label: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskStatusDto {
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, 0, 0).unwrap()
    }

    #[test]
    fn completing_stamps_completed_at() {
        let mut task = Task::new_for_insert("n".into(), "d".into());
        task.transition_to(TaskStatus::InProgress, at(9)).unwrap();
        assert!(task.completed_at.is_none());
        task.transition_to(TaskStatus::Completed, at(10)).unwrap();
        assert_eq!(task.completed_at, Some(at(10)));
    }

    #[test]
    fn terminal_status_is_final() {
        let mut task = Task::new_for_insert("n".into(), "d".into());
        task.transition_to(TaskStatus::Failed, at(9)).unwrap();
        assert!(task.transition_to(TaskStatus::Pending, at(10)).is_err());
        // повторная установка того же статуса не ошибка и не сдвигает отметку
        task.transition_to(TaskStatus::Failed, at(11)).unwrap();
        assert_eq!(task.completed_at, Some(at(9)));
    }

    #[test]
    fn status_uses_display_names_on_the_wire() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
