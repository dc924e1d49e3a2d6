use contracts::usecases::u603_trend_report::request::TrendReportRequest;
use contracts::usecases::u603_trend_report::response::TrendReportResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::use_i18n;
use crate::shared::toast::use_toasts;

#[component]
pub fn TrendReportPanel() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let (prompt, set_prompt) = signal(String::new());
    let (save, set_save) = signal(true);
    let (result, set_result) = signal(None::<TrendReportResponse>);
    let (is_loading, set_is_loading) = signal(false);

    let on_generate = move |_| {
        let request = TrendReportRequest {
            prompt: prompt.get(),
            save_as_report: save.get(),
        };
        if request.prompt.trim().is_empty() {
            return;
        }
        set_is_loading.set(true);
        spawn_local(async move {
            match super::api::generate(&request, i18n.lang()).await {
                Ok(response) => set_result.set(Some(response)),
                Err(e) => toasts.error(i18n.t("analyticsPage.trendReport.errorTitle"), e),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h3>{move || i18n.t("analyticsPage.trendReport.title")}</h3>
            <div class="form-group">
                <label for="trend-prompt">{move || i18n.t("analyticsPage.trendReport.promptLabel")}</label>
                <textarea
                    id="trend-prompt"
                    rows="3"
                    placeholder=move || i18n.t("analyticsPage.trendReport.promptPlaceholder")
                    prop:value=move || prompt.get()
                    on:input=move |ev| set_prompt.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-group">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || save.get()
                        on:change=move |ev| set_save.set(event_target_checked(&ev))
                    />
                    " " {move || i18n.t("analyticsPage.trendReport.saveLabel")}
                </label>
            </div>
            <button
                class="btn-primary"
                on:click=on_generate
                disabled=move || is_loading.get() || prompt.get().trim().is_empty()
            >
                {move || if is_loading.get() {
                    i18n.t("analyticsPage.trendReport.generatingButton")
                } else {
                    i18n.t("analyticsPage.trendReport.generateButton")
                }}
            </button>

            {move || result.get().map(|r| {
                let saved = r.report_id.is_some();
                view! {
                    <div class="chat-assistant" style="margin-top: 12px;">{r.report}</div>
                    <Show when=move || saved>
                        <p class="description">{move || i18n.t("analyticsPage.trendReport.savedNotice")}</p>
                    </Show>
                }
            })}
        </div>
    }
}
