//! CSV отчёт о продажах POS.

use crate::shared::data::sources::SalesDataSource;
use chrono::NaiveDate;
use contracts::dashboards::d601_pos_sales::dto::PosSalesEntry;
use contracts::usecases::u605_sales_report::response::GenerateSalesReportOutput;

pub const HEADERS: [&str; 8] = [
    "Month/Year",
    "Product Name",
    "Category",
    "SKU",
    "Units Sold",
    "Revenue",
    "Store Location",
    "POS Name",
];

/// Строки через `\n`, без завершающего перевода строки.
/// Поля в кавычках только при необходимости, `"` удваивается.
pub fn entries_to_csv(entries: &[PosSalesEntry]) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for entry in entries {
        let units_sold = entry.units_sold.to_string();
        let revenue = entry.revenue.to_string();
        writer.write_record([
            entry.month_year.as_str(),
            entry.product_name.as_str(),
            entry.category.as_str(),
            entry.sku.as_str(),
            units_sold.as_str(),
            revenue.as_str(),
            entry.store_location.as_str(),
            entry.pos_name.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;
    let mut csv_data = String::from_utf8(bytes)?;
    if csv_data.ends_with('\n') {
        csv_data.pop();
    }
    Ok(csv_data)
}

pub fn build_sales_report(
    source: &dyn SalesDataSource,
    date: NaiveDate,
) -> anyhow::Result<GenerateSalesReportOutput> {
    let day = date.format("%Y-%m-%d");
    let entries = source.sales_entries();

    if entries.is_empty() {
        return Ok(GenerateSalesReportOutput {
            csv_data: String::new(),
            file_name: format!("empty_sales_report_{}.csv", day),
        });
    }

    Ok(GenerateSalesReportOutput {
        csv_data: entries_to_csv(&entries)?,
        file_name: format!("sales_report_{}.csv", day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::sources::{MockSalesDataSource, PRODUCTS};

    struct Fixed(Vec<PosSalesEntry>);

    impl SalesDataSource for Fixed {
        fn sales_entries(&self) -> Vec<PosSalesEntry> {
            self.0.clone()
        }
    }

    fn entry(name: &str) -> PosSalesEntry {
        PosSalesEntry {
            month: "2024-03-01".into(),
            month_year: "Mar 2024".into(),
            product_name: name.into(),
            category: "Tops".into(),
            sku: "SKUSB002".into(),
            units_sold: 12,
            revenue: 1440,
            store_location: "Osaka".into(),
            pos_name: "Smartregi".into(),
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn header_plus_one_line_per_entry() {
        let source = MockSalesDataSource::default();
        let report = build_sales_report(&source, day()).unwrap();
        assert_eq!(report.file_name, "sales_report_2025-05-20.csv");
        assert!(!report.csv_data.ends_with('\n'));

        let lines: Vec<&str> = report.csv_data.split('\n').collect();
        assert_eq!(lines.len(), 1 + 29 * PRODUCTS.len());
        assert_eq!(
            lines[0],
            "Month/Year,Product Name,Category,SKU,Units Sold,Revenue,Store Location,POS Name"
        );
        // запятых в данных нет, поэтому каждая строка ровно из 8 полей
        assert!(lines.iter().all(|l| l.split(',').count() == 8));
        assert!(lines[1].starts_with("Jan 2023,Men's Wool Overcoat,Outerwear,SKUWC001,"));
    }

    #[test]
    fn quotes_are_doubled() {
        let csv = entries_to_csv(&[entry("The \"Icon\" Blouse"), entry("Plain, Blouse")]).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(
            lines[1],
            "Mar 2024,\"The \"\"Icon\"\" Blouse\",Tops,SKUSB002,12,1440,Osaka,Smartregi"
        );
        assert_eq!(
            lines[2],
            "Mar 2024,\"Plain, Blouse\",Tops,SKUSB002,12,1440,Osaka,Smartregi"
        );
    }

    #[test]
    fn empty_source_gives_empty_report() {
        let report = build_sales_report(&Fixed(Vec::new()), day()).unwrap();
        assert_eq!(report.csv_data, "");
        assert_eq!(report.file_name, "empty_sales_report_2025-05-20.csv");
    }
}
