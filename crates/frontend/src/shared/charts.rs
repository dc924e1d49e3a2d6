//! SVG-графики без JS-зависимостей.
//!
//! Геометрия считается чистыми функциями, компоненты только рисуют.

use leptos::prelude::*;

pub const WIDTH: f64 = 640.0;
pub const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;

pub const PALETTE: [&str; 6] = ["#4f46e5", "#16a34a", "#f59e0b", "#dc2626", "#0891b2", "#9333ea"];

/// Серия линейного или столбчатого графика
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// Верхняя граница оси: 1, 2 или 5, умноженные на степень десяти
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

fn plot_width() -> f64 {
    WIDTH - PAD_LEFT - PAD_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - PAD_TOP - PAD_BOTTOM
}

/// Y в координатах SVG для значения при заданной верхней границе
pub fn y_for(value: f64, y_max: f64) -> f64 {
    let ratio = (value / y_max).clamp(0.0, 1.0);
    PAD_TOP + plot_height() * (1.0 - ratio)
}

/// Центр категории `index` из `count` по оси X
pub fn x_for(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return PAD_LEFT + plot_width() / 2.0;
    }
    PAD_LEFT + plot_width() * index as f64 / (count - 1) as f64
}

/// Атрибут `points` для `<polyline>`
pub fn polyline_points(values: &[f64], y_max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_for(i, values.len()), y_for(*v, y_max)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Прямоугольники столбцов: группа на категорию, столбец на серию
pub fn bar_rects(series_count: usize, category: usize, categories: usize, values: &[f64], y_max: f64) -> Vec<BarRect> {
    if categories == 0 || series_count == 0 {
        return Vec::new();
    }
    let group_width = plot_width() / categories as f64;
    let bar_width = group_width * 0.8 / series_count as f64;
    let group_left = PAD_LEFT + group_width * category as f64 + group_width * 0.1;
    values
        .iter()
        .take(series_count)
        .enumerate()
        .map(|(s, v)| {
            let y = y_for(*v, y_max);
            BarRect {
                x: group_left + bar_width * s as f64,
                y,
                width: bar_width,
                height: PAD_TOP + plot_height() - y,
            }
        })
        .collect()
}

/// Координата для атрибута SVG
fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

fn series_max(series: &[Series]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f64::max)
}

fn axis(labels: Vec<String>, y_max: f64, centered: bool) -> impl IntoView {
    let count = labels.len();
    let ticks = (0..=4)
        .map(|i| {
            let value = y_max * i as f64 / 4.0;
            let y = y_for(value, y_max);
            view! {
                <line x1=coord(PAD_LEFT) y1=coord(y) x2=coord(WIDTH - PAD_RIGHT) y2=coord(y) stroke="#e5e7eb" />
                <text x=coord(PAD_LEFT - 6.0) y=coord(y + 4.0) text-anchor="end" font-size="11" fill="#6b7280">
                    {format!("{}", value.round())}
                </text>
            }
        })
        .collect_view();
    let x_labels = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let x = if centered {
                PAD_LEFT + plot_width() / count as f64 * (i as f64 + 0.5)
            } else {
                x_for(i, count)
            };
            view! {
                <text x=coord(x) y=coord(HEIGHT - 10.0) text-anchor="middle" font-size="11" fill="#6b7280">
                    {label}
                </text>
            }
        })
        .collect_view();
    view! { <g>{ticks}{x_labels}</g> }
}

fn legend(series: &[Series]) -> impl IntoView {
    series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let style = format!("--swatch: {}", PALETTE[i % PALETTE.len()]);
            view! { <span style=style>{s.label.clone()}</span> }
        })
        .collect_view()
}

#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<Series>) -> impl IntoView {
    let y_max = nice_max(series_max(&series));
    let lines = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let points = polyline_points(&s.values, y_max);
            view! {
                <polyline points=points fill="none" stroke=PALETTE[i % PALETTE.len()] stroke-width="2" />
            }
        })
        .collect_view();
    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);

    view! {
        <div class="chart">
            <div class="legend">{legend(&series)}</div>
            <svg viewBox=view_box>
                {axis(labels, y_max, false)}
                {lines}
            </svg>
        </div>
    }
}

#[component]
pub fn BarChart(labels: Vec<String>, series: Vec<Series>) -> impl IntoView {
    let y_max = nice_max(series_max(&series));
    let categories = labels.len();
    let bars = (0..categories)
        .flat_map(|c| {
            let values: Vec<f64> = series
                .iter()
                .map(|s| s.values.get(c).copied().unwrap_or(0.0))
                .collect();
            bar_rects(series.len(), c, categories, &values, y_max)
                .into_iter()
                .enumerate()
                .map(|(s, rect)| {
                    view! {
                        <rect
                            x=coord(rect.x)
                            y=coord(rect.y)
                            width=coord(rect.width)
                            height=coord(rect.height)
                            fill=PALETTE[s % PALETTE.len()]
                        />
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect_view();
    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);

    view! {
        <div class="chart">
            <div class="legend">{legend(&series)}</div>
            <svg viewBox=view_box>
                {axis(labels, y_max, true)}
                {bars}
            </svg>
        </div>
    }
}
