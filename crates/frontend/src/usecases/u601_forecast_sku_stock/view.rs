use contracts::usecases::u601_forecast_sku_stock::request::{
    ForecastSkuRequest, MAX_HORIZON_MONTHS, MIN_HORIZON_MONTHS,
};
use contracts::usecases::u601_forecast_sku_stock::response::{ForecastSkuResponse, SkuItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::charts::{LineChart, Series};
use crate::shared::i18n::use_i18n;
use crate::shared::number_format::format_int;
use crate::shared::toast::use_toasts;
use crate::usecases::u602_forecast_market::MarketForecastPanel;
use crate::usecases::u606_assistant_command::AssistantChat;

const DEFAULT_HORIZON_MONTHS: u32 = 6;

/// Значение ползунка в допустимых пределах
pub fn clamp_horizon(value: &str) -> u32 {
    value
        .trim()
        .parse::<u32>()
        .unwrap_or(DEFAULT_HORIZON_MONTHS)
        .clamp(MIN_HORIZON_MONTHS, MAX_HORIZON_MONTHS)
}

/// Подписи периодов и серии "продажи / остаток" для графика
pub fn chart_series(response: &ForecastSkuResponse, sales_label: String, stock_label: String) -> (Vec<String>, Vec<Series>) {
    let labels = response.chart.iter().map(|p| p.period.clone()).collect();
    let series = vec![
        Series {
            label: sales_label,
            values: response.chart.iter().map(|p| p.sales as f64).collect(),
        },
        Series {
            label: stock_label,
            values: response.chart.iter().map(|p| p.stock as f64).collect(),
        },
    ];
    (labels, series)
}

fn forecast_result(response: ForecastSkuResponse) -> impl IntoView {
    let i18n = use_i18n();
    let (labels, series) = chart_series(
        &response,
        i18n.t("forecastPage.chart.salesLabel"),
        i18n.t("forecastPage.chart.stockLabel"),
    );
    let forecast = response.forecast;

    view! {
        <div class="card">
            <h2>{response.title}</h2>
            <p>
                {move || i18n.t("forecastPage.currentStockValueLabel")} ": "
                <strong>{format_int(forecast.current_stock as u64)}</strong>
            </p>
            <h3>{move || i18n.t("forecastPage.chart.demandTitle")}</h3>
            <LineChart labels=labels series=series />
            <h3>{move || i18n.t("forecastPage.reasoningTitle")}</h3>
            <p>{forecast.reasoning}</p>
            <h3>{move || i18n.t("forecastPage.recommendationsTitle")}</h3>
            <p>{forecast.recommendations}</p>
        </div>
    }
}

#[component]
pub fn ForecastPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let (skus, set_skus) = signal(Vec::<SkuItem>::new());
    let (sku, set_sku) = signal(None::<String>);
    let (horizon, set_horizon) = signal(DEFAULT_HORIZON_MONTHS);
    let (user_prompt, set_user_prompt) = signal(String::new());
    let (result, set_result) = signal(None::<ForecastSkuResponse>);
    let (error, set_error) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);

    Effect::new(move |_| {
        let locale = i18n.locale.get();
        spawn_local(async move {
            match super::api::list_skus(locale.as_str()).await {
                Ok(items) => set_skus.set(items),
                Err(e) => log::error!("Failed to load SKUs: {}", e),
            }
        });
    });

    let selected = move || {
        let value = sku.get()?;
        skus.get().into_iter().find(|s| s.value == value)
    };

    let on_generate = move |_| {
        let Some(sku_value) = sku.get() else {
            toasts.error(
                i18n.t("forecastPage.toast.skuMissingTitle"),
                i18n.t("forecastPage.toast.skuMissingDescription"),
            );
            return;
        };
        let prompt = user_prompt.get();
        let request = ForecastSkuRequest {
            sku: sku_value,
            horizon_months: horizon.get(),
            user_prompt: (!prompt.trim().is_empty()).then_some(prompt),
        };

        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match super::api::forecast(&request, i18n.lang()).await {
                Ok(response) => {
                    toasts.success(
                        i18n.t("forecastPage.toast.successTitle"),
                        i18n.tr(
                            "forecastPage.toast.successDescription",
                            &[("skuName", &response.forecast.sku_name)],
                        ),
                    );
                    set_result.set(Some(response));
                }
                Err(e) => {
                    toasts.error(i18n.t("forecastPage.toast.errorTitle"), e.clone());
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <h1>{move || i18n.t("forecastPage.selectSkuTitle")}</h1>
        <p class="description">{move || i18n.t("forecastPage.selectSkuDescription")}</p>

        <div class="card">
            <div class="form-group">
                <label for="sku">{move || i18n.t("forecastPage.skuLabel")}</label>
                <select
                    id="sku"
                    prop:value=move || sku.get().unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_sku.set((!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">{move || i18n.t("forecastPage.selectSkuPlaceholder")}</option>
                    {move || skus.get().into_iter().map(|item| {
                        view! { <option value=item.value>{item.label}</option> }
                    }).collect_view()}
                </select>
            </div>

            {move || selected().map(|item| view! {
                <p>
                    {move || i18n.t("forecastPage.currentStockLabel")} ": "
                    <strong>{format_int(item.current_stock as u64)}</strong>
                </p>
            })}

            <div class="form-group">
                <label for="horizon">
                    {move || i18n.t("forecastPage.forecastHorizonLabel")} ": "
                    {move || i18n.tr(
                        "forecastPage.forecastHorizonValueDisplay",
                        &[("count", &horizon.get().to_string())],
                    )}
                </label>
                <input
                    type="range"
                    id="horizon"
                    min=MIN_HORIZON_MONTHS.to_string()
                    max=MAX_HORIZON_MONTHS.to_string()
                    prop:value=move || horizon.get().to_string()
                    on:input=move |ev| set_horizon.set(clamp_horizon(&event_target_value(&ev)))
                />
            </div>

            <div class="form-group">
                <label for="ground-voice">{move || i18n.t("forecastPage.groundVoiceLabel")}</label>
                <textarea
                    id="ground-voice"
                    rows="3"
                    placeholder=move || i18n.t("forecastPage.yourVoiceCountPlaceholder")
                    prop:value=move || user_prompt.get()
                    on:input=move |ev| set_user_prompt.set(event_target_value(&ev))
                ></textarea>
                <small class="description">{move || i18n.t("forecastPage.yourVoiceCountDescription")}</small>
            </div>

            <button class="btn-primary" on:click=on_generate disabled=move || is_loading.get()>
                {move || if is_loading.get() {
                    i18n.t("forecastPage.generatingButton")
                } else {
                    i18n.t("forecastPage.generateButton")
                }}
            </button>
        </div>

        {move || error.get().map(|e| view! {
            <div class="error-message">
                <strong>{move || i18n.t("forecastPage.errorAlertTitle")}</strong> " " {e}
            </div>
        })}
        {move || result.get().map(forecast_result)}

        <AssistantChat sku=sku horizon=horizon set_forecast=set_result />
        <MarketForecastPanel />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u601_forecast_sku_stock::response::{
        ForecastChartPoint, ForecastSalesOutput,
    };

    #[test]
    fn horizon_stays_in_range() {
        assert_eq!(clamp_horizon("1"), MIN_HORIZON_MONTHS);
        assert_eq!(clamp_horizon("99"), MAX_HORIZON_MONTHS);
        assert_eq!(clamp_horizon(" 9 "), 9);
        assert_eq!(clamp_horizon("x"), DEFAULT_HORIZON_MONTHS);
    }

    #[test]
    fn chart_has_sales_and_stock() {
        let response = ForecastSkuResponse {
            forecast: ForecastSalesOutput {
                sku_name: "Hoodie".into(),
                current_stock: 1200,
                forecast_data: Vec::new(),
                reasoning: String::new(),
                recommendations: String::new(),
            },
            chart: vec![
                ForecastChartPoint { period: "Initial".into(), sales: 0, stock: 1200 },
                ForecastChartPoint { period: "Month 1".into(), sales: 100, stock: 1100 },
            ],
            title: "Forecast".into(),
        };

        let (labels, series) = chart_series(&response, "Sales".into(), "Stock".into());
        assert_eq!(labels, vec!["Initial", "Month 1"]);
        assert_eq!(series[0].values, vec![0.0, 100.0]);
        assert_eq!(series[1].label, "Stock");
        assert_eq!(series[1].values, vec![1200.0, 1100.0]);
    }
}
