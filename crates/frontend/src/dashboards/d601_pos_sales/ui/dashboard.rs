use contracts::dashboards::d601_pos_sales::dto::PosSalesOverviewResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d601_pos_sales::api;
use crate::shared::charts::{BarChart, LineChart, Series};
use crate::shared::i18n::use_i18n;
use crate::shared::number_format::{format_change, format_int, format_money};

fn overview(data: PosSalesOverviewResponse) -> AnyView {
    let i18n = use_i18n();

    if data.details.is_empty() {
        return view! { <p>{move || i18n.t("posSalesPage.noData")}</p> }.into_any();
    }

    let summary = data.summary;
    let change = summary.revenue_change_pct.map(|pct| {
        view! {
            <p class="description">
                {format_change(pct)} " " {move || i18n.t("posSalesPage.comparison.fromLastMonth")}
            </p>
        }
    });

    let months: Vec<String> = data.monthly.iter().map(|m| m.month_year.clone()).collect();
    let revenue = vec![Series {
        label: i18n.t("posSalesPage.chart.salesLabel"),
        values: data.monthly.iter().map(|m| m.revenue as f64).collect(),
    }];
    let units = vec![Series {
        label: i18n.t("posSalesPage.chart.unitsLabel"),
        values: data.monthly.iter().map(|m| m.units as f64).collect(),
    }];
    let categories: Vec<String> = data.by_category.iter().map(|c| c.label.clone()).collect();
    let by_category = vec![Series {
        label: i18n.t("posSalesPage.chart.categorySalesLabel"),
        values: data.by_category.iter().map(|c| c.revenue as f64).collect(),
    }];

    let rows = data
        .details
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.month_year}</td>
                    <td>{row.product_name}</td>
                    <td>{row.category}</td>
                    <td>{row.sku}</td>
                    <td>{format_int(row.units_sold as u64)}</td>
                    <td>{format_int(row.revenue)}</td>
                    <td>{row.pos_name}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="card-grid">
            <div class="card">
                <div class="description">{move || i18n.t("posSalesPage.totalRevenue")}</div>
                <div class="stat-value">{summary.total_revenue_display}</div>
                {change}
            </div>
            <div class="card">
                <div class="description">{move || i18n.t("posSalesPage.totalUnitsSold")}</div>
                <div class="stat-value">{summary.total_units_display}</div>
            </div>
            <div class="card">
                <div class="description">{move || i18n.t("posSalesPage.averageOrderValue")}</div>
                <div class="stat-value">{format_money(summary.average_order_value)}</div>
            </div>
        </div>

        <div class="card">
            <h3>{move || i18n.t("posSalesPage.monthlySalesPerformance")}</h3>
            <LineChart labels=months.clone() series=revenue />
            <BarChart labels=months series=units />
        </div>

        <div class="card">
            <h3>{move || i18n.t("posSalesPage.salesByCategory")}</h3>
            <BarChart labels=categories series=by_category />
        </div>

        <div class="card">
            <h3>{move || i18n.t("posSalesPage.detailedSalesData")}</h3>
            <table>
                <thead>
                    <tr>
                        <th>{move || i18n.t("posSalesPage.tableHeaders.monthYear")}</th>
                        <th>{move || i18n.t("posSalesPage.tableHeaders.productName")}</th>
                        <th>{move || i18n.t("posSalesPage.tableHeaders.category")}</th>
                        <th>{move || i18n.t("posSalesPage.tableHeaders.sku")}</th>
                        <th>{move || i18n.t("posSalesPage.tableHeaders.unitsSold")}</th>
                        <th>{move || i18n.t("posSalesPage.tableHeaders.revenue")}</th>
                        <th>{move || i18n.t("posSalesPage.tableHeaders.posName")}</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}

/// POS-продажи: сводка, помесячная динамика, категории, детализация
#[component]
pub fn PosSalesDashboard() -> impl IntoView {
    let i18n = use_i18n();

    let (data, set_data) = signal(None::<PosSalesOverviewResponse>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let locale = i18n.locale.get();
        spawn_local(async move {
            match api::get_overview(locale.as_str()).await {
                Ok(response) => {
                    set_error.set(None);
                    set_data.set(Some(response));
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    view! {
        <h1>{move || i18n.t("posSalesPage.title")}</h1>
        <p class="description">{move || i18n.t("posSalesPage.description")}</p>
        {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
        {move || data.get().map(overview)}
    }
}
