pub mod u601_forecast_sku_stock;
pub mod u602_forecast_market;
pub mod u603_trend_report;
pub mod u604_color_trend_image;
pub mod u605_sales_report;
pub mod u606_assistant_command;
