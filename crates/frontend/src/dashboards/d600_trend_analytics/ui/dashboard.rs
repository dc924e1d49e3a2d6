use contracts::dashboards::d600_trend_analytics::dto::{
    PatternPoint, SilhouettePoint, TrendAnalyticsResponse,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

use crate::dashboards::d600_trend_analytics::api;
use crate::shared::charts::{BarChart, LineChart, Series};
use crate::shared::i18n::use_i18n;
use crate::usecases::u603_trend_report::TrendReportPanel;
use crate::usecases::u604_color_trend_image::ColorImageButton;

type Column<T> = (&'static str, fn(&T) -> u32);

const SILHOUETTE_COLUMNS: [Column<SilhouettePoint>; 5] = [
    ("a_line", |p| p.a_line),
    ("sheath", |p| p.sheath),
    ("oversized", |p| p.oversized),
    ("bodycon", |p| p.bodycon),
    ("asymmetrical", |p| p.asymmetrical),
];

const PATTERN_COLUMNS: [Column<PatternPoint>; 5] = [
    ("floral", |p| p.floral),
    ("geometric", |p| p.geometric),
    ("stripes", |p| p.stripes),
    ("animal_prints", |p| p.animal_prints),
    ("abstract", |p| p.r#abstract),
];

/// Серии графика по колонкам; подпись из словаря ответа, иначе имя поля
pub fn to_series<T>(points: &[T], columns: &[Column<T>], labels: &BTreeMap<String, String>) -> Vec<Series> {
    columns
        .iter()
        .map(|(field, value)| Series {
            label: labels.get(*field).cloned().unwrap_or_else(|| field.to_string()),
            values: points.iter().map(|p| value(p) as f64).collect(),
        })
        .collect()
}

fn trend_content(data: TrendAnalyticsResponse) -> impl IntoView {
    let i18n = use_i18n();

    let silhouette_months: Vec<String> = data.silhouettes.iter().map(|p| p.month_year.clone()).collect();
    let silhouettes = to_series(&data.silhouettes, &SILHOUETTE_COLUMNS, &data.silhouette_labels);
    let pattern_months: Vec<String> = data.patterns.iter().map(|p| p.month_year.clone()).collect();
    let patterns = to_series(&data.patterns, &PATTERN_COLUMNS, &data.pattern_labels);

    let color_labels: Vec<String> = data.colors.iter().map(|c| c.label.clone()).collect();
    let color_series = vec![Series {
        label: i18n.t("analyticsPage.colorPopularity"),
        values: data.colors.iter().map(|c| c.popularity as f64).collect(),
    }];

    let paragraphs = data
        .article
        .paragraphs
        .into_iter()
        .map(|p| view! { <p>{p}</p> })
        .collect_view();

    let color_cards = data
        .colors
        .into_iter()
        .map(|color| {
            let description = i18n.t(&color.description_key);
            view! {
                <div class="card">
                    <strong>{color.label.clone()}</strong>
                    <p class="description">{description.clone()}</p>
                    <p>{move || i18n.t("analyticsPage.popularity")} ": " {color.popularity}</p>
                    <ColorImageButton color_name=color.name.clone() color_description=description />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card">
            <h2>{data.latest_trend_title}</h2>
            <p class="description">{data.latest_trend_description}</p>
            <h3>{data.article.title}</h3>
            {paragraphs}
        </div>

        <div class="card-grid">
            <div class="card">
                <h3>{move || i18n.t("analyticsPage.silhouettePopularityTitle")}</h3>
                <LineChart labels=silhouette_months series=silhouettes />
            </div>
            <div class="card">
                <h3>{move || i18n.t("analyticsPage.patternTrendsTitle")}</h3>
                <LineChart labels=pattern_months series=patterns />
            </div>
        </div>

        <div class="card">
            <h3>{move || i18n.t("analyticsPage.colorTrendsTitle")}</h3>
            <BarChart labels=color_labels series=color_series />
        </div>
        <div class="card-grid">{color_cards}</div>
    }
}

/// Дашборд трендов: статья, графики силуэтов и принтов, цвета
#[component]
pub fn TrendAnalyticsDashboard() -> impl IntoView {
    let i18n = use_i18n();

    let (data, set_data) = signal(None::<TrendAnalyticsResponse>);
    let (error, set_error) = signal(None::<String>);

    // Перезагрузка при смене языка
    Effect::new(move |_| {
        let locale = i18n.locale.get();
        set_error.set(None);
        spawn_local(async move {
            match api::get_trends(locale.as_str()).await {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    view! {
        <h1>{move || i18n.t("nav.analytics")}</h1>
        {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
        {move || data.get().map(trend_content)}
        <TrendReportPanel />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, a_line: u32) -> SilhouettePoint {
        SilhouettePoint {
            month_year: month.into(),
            a_line,
            sheath: 1,
            oversized: 2,
            bodycon: 3,
            asymmetrical: 4,
        }
    }

    #[test]
    fn series_follow_columns_and_labels() {
        let points = vec![point("Jan 2024", 10), point("Feb 2024", 20)];
        let labels = BTreeMap::from([("a_line".to_string(), "A-Line".to_string())]);

        let series = to_series(&points, &SILHOUETTE_COLUMNS, &labels);
        assert_eq!(series.len(), 5);
        assert_eq!(series[0].label, "A-Line");
        assert_eq!(series[0].values, vec![10.0, 20.0]);
        assert_eq!(series[4].label, "asymmetrical");
        assert_eq!(series[4].values, vec![4.0, 4.0]);
    }
}
