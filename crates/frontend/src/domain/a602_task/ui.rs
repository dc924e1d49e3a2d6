use contracts::domain::a602_task::aggregate::{TaskStatus, TaskView};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::i18n::use_i18n;
use crate::shared::toast::use_toasts;

const STATUSES: [TaskStatus; 4] = [
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::Completed,
    TaskStatus::Failed,
];

pub fn short_date(value: &chrono::DateTime<chrono::Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Заменить задачу в списке обновлённой версией
pub fn replace_task(tasks: &mut [TaskView], updated: TaskView) {
    if let Some(slot) = tasks.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let (tasks, set_tasks) = signal(Vec::<TaskView>::new());
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let locale = i18n.locale.get();
        spawn_local(async move {
            match api::list(locale.as_str()).await {
                Ok(items) => {
                    set_error.set(None);
                    set_tasks.set(items);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let row = move |task: TaskView| {
        let id = task.id;
        let current = task.status;
        let on_status = move |ev| {
            let Some(status) = STATUSES
                .into_iter()
                .find(|s| s.as_str() == event_target_value(&ev))
            else {
                return;
            };
            spawn_local(async move {
                match api::update_status(id, status, i18n.lang()).await {
                    Ok(updated) => set_tasks.update(|items| replace_task(items, updated)),
                    Err(e) => toasts.error(i18n.t("errors.generic"), e),
                }
            });
        };
        let options = STATUSES
            .into_iter()
            .map(|status| {
                view! {
                    <option value=status.as_str() selected={status == current}>
                        {move || i18n.t(status.label_key())}
                    </option>
                }
            })
            .collect_view();
        let completed = task
            .completed_at
            .as_ref()
            .map(short_date);

        view! {
            <tr>
                <td>{task.name}</td>
                <td>{task.description}</td>
                <td>
                    <select on:change=on_status disabled=current.is_terminal()>
                        {options}
                    </select>
                </td>
                <td>{short_date(&task.created_at)}</td>
                <td>{move || completed.clone().unwrap_or_else(|| i18n.t("tasksPage.notApplicable"))}</td>
            </tr>
        }
    };

    view! {
        <h1>{move || i18n.t("tasksPage.title")}</h1>
        <p class="description">{move || i18n.t("tasksPage.description")}</p>
        {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

        <div class="card">
            <Show
                when=move || !tasks.get().is_empty()
                fallback=move || view! { <p>{move || i18n.t("tasksPage.noTasks")}</p> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>{move || i18n.t("tasksPage.tableHeaders.taskName")}</th>
                            <th>{move || i18n.t("tasksPage.tableHeaders.description")}</th>
                            <th>{move || i18n.t("tasksPage.tableHeaders.status")}</th>
                            <th>{move || i18n.t("tasksPage.tableHeaders.createdAt")}</th>
                            <th>{move || i18n.t("tasksPage.tableHeaders.completedAt")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        // Ключ включает статус, чтобы строка перерисовалась после смены
                        <For
                            each=move || tasks.get()
                            key=|t| (t.id, t.status.as_str())
                            children=row
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a602_task::aggregate::TaskId;

    fn task(status: TaskStatus) -> TaskView {
        TaskView {
            id: TaskId::new_v4(),
            name: "Forecast Q4 Sales".into(),
            description: String::new(),
            status,
            status_label: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn updated_task_replaces_old_row() {
        let mut tasks = vec![task(TaskStatus::Pending), task(TaskStatus::Pending)];
        let mut updated = tasks[1].clone();
        updated.status = TaskStatus::Completed;

        replace_task(&mut tasks, updated);
        assert_eq!(tasks[0].status, TaskStatus::Pending);
        assert_eq!(tasks[1].status, TaskStatus::Completed);
    }

    #[test]
    fn dates_show_minutes() {
        assert_eq!(short_date(&task(TaskStatus::Pending).created_at), "2024-03-01 09:30");
    }
}
