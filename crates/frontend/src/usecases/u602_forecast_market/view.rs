use contracts::usecases::u602_forecast_market::request::MarketForecastInput;
use contracts::usecases::u602_forecast_market::response::MarketForecastOutput;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::use_i18n;
use crate::shared::toast::use_toasts;

#[component]
pub fn MarketForecastPanel() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let (trend, set_trend) = signal(String::new());
    let (sales, set_sales) = signal(String::new());
    let (conditions, set_conditions) = signal(String::new());
    let (result, set_result) = signal(None::<MarketForecastOutput>);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |_| {
        let input = MarketForecastInput {
            trend_analysis_report: trend.get(),
            past_sales_data: sales.get(),
            market_conditions: conditions.get(),
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match super::api::forecast(&input, i18n.lang()).await {
                Ok(output) => set_result.set(Some(output)),
                Err(e) => toasts.error(i18n.t("forecastPage.market.errorTitle"), e),
            }
            set_is_loading.set(false);
        });
    };

    let area = move |id: &'static str, label: &'static str, value: ReadSignal<String>, set_value: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{move || i18n.t(label)}</label>
                <textarea
                    id=id
                    rows="3"
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                ></textarea>
            </div>
        }
    };

    view! {
        <div class="card">
            <h3>{move || i18n.t("forecastPage.market.title")}</h3>
            {area("market-trend", "forecastPage.market.trendLabel", trend, set_trend)}
            {area("market-sales", "forecastPage.market.salesLabel", sales, set_sales)}
            {area("market-conditions", "forecastPage.market.conditionsLabel", conditions, set_conditions)}
            <button class="btn-primary" on:click=on_submit disabled=move || is_loading.get()>
                {move || if is_loading.get() {
                    i18n.t("forecastPage.market.generatingButton")
                } else {
                    i18n.t("forecastPage.market.generateButton")
                }}
            </button>

            {move || result.get().map(|r| {
                let segments = r
                    .detailed_forecast
                    .into_iter()
                    .map(|(segment, text)| view! { <li><strong>{segment}</strong> ": " {text}</li> })
                    .collect_view();
                view! {
                    <h4>{move || i18n.t("forecastPage.market.overallTitle")}</h4>
                    <p>{r.overall_forecast}</p>
                    <h4>{move || i18n.t("forecastPage.market.detailedTitle")}</h4>
                    <ul>{segments}</ul>
                    <h4>{move || i18n.t("forecastPage.reasoningTitle")}</h4>
                    <p>{r.reasoning}</p>
                    <h4>{move || i18n.t("forecastPage.recommendationsTitle")}</h4>
                    <p>{r.recommendations}</p>
                }
            })}
        </div>
    }
}
