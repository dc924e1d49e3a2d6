use contracts::usecases::u601_forecast_sku_stock::response::ForecastSkuResponse;
use contracts::usecases::u606_assistant_command::request::AssistantCommandRequest;
use contracts::usecases::u606_assistant_command::response::AssistantReply;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::download::download_csv;
use crate::shared::i18n::{interpolate, use_i18n};
use crate::shared::toast::use_toasts;

#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub from_user: bool,
    pub text: String,
}

/// Текст ответа ассистента в чате. `report_template` содержит `{{fileName}}`.
pub fn reply_text(reply: &AssistantReply, report_template: &str) -> String {
    match reply {
        AssistantReply::Forecast(forecast) => forecast.title.clone(),
        AssistantReply::SalesReport(report) => {
            interpolate(report_template, &[("fileName", &report.file_name)])
        }
        AssistantReply::Message { title, text } => format!("{}\n{}", title, text),
    }
}

/// Чат страницы прогноза: "help me to forecast" / "help me to generate report"
#[component]
pub fn AssistantChat(
    sku: ReadSignal<Option<String>>,
    horizon: ReadSignal<u32>,
    set_forecast: WriteSignal<Option<ForecastSkuResponse>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let (entries, set_entries) = signal(Vec::<ChatEntry>::new());
    let (message, set_message) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let push = move |from_user: bool, text: String| {
        set_entries.update(|e| e.push(ChatEntry { from_user, text }));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = message.get();
        if text.trim().is_empty() {
            return;
        }
        push(true, text.clone());
        set_message.set(String::new());
        set_is_loading.set(true);

        let request = AssistantCommandRequest {
            message: text,
            sku: sku.get(),
            horizon_months: Some(horizon.get()),
        };
        spawn_local(async move {
            match super::api::send(&request, i18n.lang()).await {
                Ok(reply) => {
                    push(false, reply_text(&reply, &i18n.t("forecastPage.toast.reportSuccessDescription")));
                    match reply {
                        AssistantReply::Forecast(forecast) => set_forecast.set(Some(forecast)),
                        AssistantReply::SalesReport(report) => {
                            if let Err(e) = download_csv(&report.csv_data, &report.file_name) {
                                log::error!("CSV download failed: {}", e);
                            }
                            toasts.success(
                                i18n.t("forecastPage.toast.reportSuccessTitle"),
                                i18n.tr(
                                    "forecastPage.toast.reportSuccessDescription",
                                    &[("fileName", &report.file_name)],
                                ),
                            );
                        }
                        AssistantReply::Message { .. } => {}
                    }
                }
                Err(e) => {
                    push(false, e.clone());
                    toasts.error(i18n.t("forecastPage.toast.errorTitle"), e);
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h3>{move || i18n.t("forecastPage.chatTitle")}</h3>
            <div class="chat-log">
                {move || entries.get().into_iter().map(|entry| {
                    let class = if entry.from_user { "chat-user" } else { "chat-assistant" };
                    view! { <div class=class>{entry.text}</div> }
                }).collect_view()}
                <Show when=move || is_loading.get()>
                    <div class="chat-assistant">{move || i18n.t("forecastPage.aiProcessing.description")}</div>
                </Show>
            </div>
            <form on:submit=on_submit style="display: flex; gap: 8px;">
                <input
                    type="text"
                    style="flex: 1;"
                    placeholder=move || i18n.t("forecastPage.chatInputPlaceholder")
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() {
                        i18n.t("forecastPage.processingButton")
                    } else {
                        i18n.t("forecastPage.sendButton")
                    }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u605_sales_report::response::GenerateSalesReportResponse;

    #[test]
    fn replies_become_chat_text() {
        let report = AssistantReply::SalesReport(GenerateSalesReportResponse {
            csv_data: "a,b".into(),
            file_name: "sales_report_2024-03-01.csv".into(),
            report_id: None,
        });
        assert_eq!(
            reply_text(&report, "Sales report {{fileName}} is ready."),
            "Sales report sales_report_2024-03-01.csv is ready."
        );

        let message = AssistantReply::Message {
            title: "Action Not Recognized".into(),
            text: "Try again".into(),
        };
        assert_eq!(reply_text(&message, ""), "Action Not Recognized\nTry again");
    }
}
