use contracts::domain::a603_feedback::aggregate::{Satisfaction, SubmitFeedbackDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::i18n::use_i18n;
use crate::shared::toast::use_toasts;

const OPTIONS: [(Satisfaction, &str); 5] = [
    (Satisfaction::VerySatisfied, "feedbackPage.options.verySatisfied"),
    (Satisfaction::Satisfied, "feedbackPage.options.satisfied"),
    (Satisfaction::Neutral, "feedbackPage.options.neutral"),
    (Satisfaction::Dissatisfied, "feedbackPage.options.dissatisfied"),
    (Satisfaction::VeryDissatisfied, "feedbackPage.options.veryDissatisfied"),
];

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let (satisfaction, set_satisfaction) = signal(None::<Satisfaction>);
    let (comments, set_comments) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = SubmitFeedbackDto {
            satisfaction: satisfaction.get(),
            comments: comments.get(),
        };
        // Сервер проверит то же самое, но без лишнего запроса
        if dto.is_empty() {
            toasts.error(
                i18n.t("feedbackPage.toast.errorTitle"),
                i18n.t("feedbackPage.toast.errorDescriptionEmpty"),
            );
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            match api::submit(&dto, i18n.lang()).await {
                Ok(_) => {
                    toasts.success(
                        i18n.t("feedbackPage.toast.successTitle"),
                        i18n.t("feedbackPage.toast.successDescription"),
                    );
                    set_satisfaction.set(None);
                    set_comments.set(String::new());
                }
                Err(e) => toasts.error(i18n.t("feedbackPage.toast.errorTitle"), e),
            }
            set_is_submitting.set(false);
        });
    };

    let options = OPTIONS
        .into_iter()
        .map(|(value, key)| {
            view! {
                <label style="display: block;">
                    <input
                        type="radio"
                        name="satisfaction"
                        prop:checked=move || satisfaction.get() == Some(value)
                        on:change=move |_| set_satisfaction.set(Some(value))
                    />
                    " " {move || i18n.t(key)}
                </label>
            }
        })
        .collect_view();

    view! {
        <h1>{move || i18n.t("feedbackPage.title")}</h1>
        <p class="description">{move || i18n.t("feedbackPage.description")}</p>

        <form class="card" on:submit=on_submit>
            <div class="form-group">
                <span>{move || i18n.t("feedbackPage.satisfactionLabel")}</span>
                {options}
            </div>
            <div class="form-group">
                <label for="comments">{move || i18n.t("feedbackPage.commentsLabel")}</label>
                <textarea
                    id="comments"
                    rows="4"
                    placeholder=move || i18n.t("feedbackPage.commentsPlaceholder")
                    prop:value=move || comments.get()
                    on:input=move |ev| set_comments.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn-primary" disabled=move || is_submitting.get()>
                {move || if is_submitting.get() {
                    i18n.t("common.submitting")
                } else {
                    i18n.t("feedbackPage.submitButton")
                }}
            </button>
        </form>
    }
}
