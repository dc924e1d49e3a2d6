use contracts::domain::a601_stored_report::aggregate::{ReportType, StoredReportListItem};
use contracts::usecases::u605_sales_report::request::GenerateSalesReportRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::download::download_csv;
use crate::shared::i18n::use_i18n;
use crate::shared::toast::use_toasts;
use crate::usecases::u605_sales_report;

pub fn type_key(report_type: ReportType) -> &'static str {
    match report_type {
        ReportType::SalesReport => "reportsPage.reportTypes.sales",
        ReportType::TrendAnalysis => "reportsPage.reportTypes.trend",
    }
}

/// "2024-03-01T10:15:00+00:00" -> "2024-03-01 10:15"
pub fn display_date(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| rfc3339.to_string())
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let (reports, set_reports) = signal(Vec::<StoredReportListItem>::new());
    let (error, set_error) = signal(None::<String>);
    let (is_generating, set_is_generating) = signal(false);

    let reload = move || {
        spawn_local(async move {
            match api::list().await {
                Ok(items) => {
                    set_error.set(None);
                    set_reports.set(items);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| reload());

    let on_generate = move |_| {
        set_is_generating.set(true);
        spawn_local(async move {
            let request = GenerateSalesReportRequest::default();
            match u605_sales_report::api::generate(&request, i18n.lang()).await {
                Ok(report) => {
                    toasts.success(
                        i18n.t("forecastPage.toast.reportSuccessTitle"),
                        i18n.tr(
                            "forecastPage.toast.reportSuccessDescription",
                            &[("fileName", &report.file_name)],
                        ),
                    );
                    reload();
                }
                Err(e) => toasts.error(i18n.t("forecastPage.toast.reportErrorTitle"), e),
            }
            set_is_generating.set(false);
        });
    };

    let row = move |item: StoredReportListItem| {
        let id = item.id;
        let name = item.name.clone();
        let on_download = move |_| {
            let name = name.clone();
            spawn_local(async move {
                let result = match api::download(id).await {
                    Ok(csv) => download_csv(&csv, &name),
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    toasts.error(i18n.t("reportsPage.toast.downloadErrorTitle"), e);
                }
            });
        };
        let on_delete = move |_| {
            spawn_local(async move {
                match api::delete(id).await {
                    Ok(()) => set_reports.update(|items| items.retain(|r| r.id != id)),
                    Err(e) => toasts.error(i18n.t("reportsPage.toast.deleteErrorTitle"), e),
                }
            });
        };
        let report_type = item.report_type;

        view! {
            <tr>
                <td>{item.name}</td>
                <td>{move || i18n.t(type_key(report_type))}</td>
                <td>{display_date(&item.date_generated)}</td>
                <td>
                    <button class="btn-link" on:click=on_download>
                        {move || i18n.t("reportsPage.buttons.downloadCsv")}
                    </button>
                    " "
                    <button class="btn-link" on:click=on_delete>
                        {move || i18n.t("reportsPage.buttons.delete")}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <h1>{move || i18n.t("reportsPage.title")}</h1>
        <p class="description">{move || i18n.t("reportsPage.description")}</p>

        <button class="btn-primary" on:click=on_generate disabled=move || is_generating.get()>
            {move || i18n.t("reportsPage.buttons.generateSales")}
        </button>

        {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

        <div class="card" style="margin-top: 16px;">
            <Show
                when=move || !reports.get().is_empty()
                fallback=move || view! {
                    <p>{move || i18n.t("reportsPage.noReports")}</p>
                    <p class="description">{move || i18n.t("reportsPage.generateInstruction")}</p>
                }
            >
                <table>
                    <thead>
                        <tr>
                            <th>{move || i18n.t("reportsPage.tableHeaders.name")}</th>
                            <th>{move || i18n.t("reportsPage.tableHeaders.type")}</th>
                            <th>{move || i18n.t("reportsPage.tableHeaders.dateGenerated")}</th>
                            <th>{move || i18n.t("reportsPage.tableHeaders.actions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || reports.get() key=|r| r.id children=row />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_shortened() {
        assert_eq!(display_date("2024-03-01T10:15:42+00:00"), "2024-03-01 10:15");
        assert_eq!(display_date("not a date"), "not a date");
    }

    #[test]
    fn report_types_have_labels() {
        assert_eq!(type_key(ReportType::SalesReport), "reportsPage.reportTypes.sales");
        assert_eq!(type_key(ReportType::TrendAnalysis), "reportsPage.reportTypes.trend");
    }
}
