pub mod d600_trend_analytics;
pub mod d601_pos_sales;

pub use d600_trend_analytics::ui::TrendAnalyticsDashboard;
pub use d601_pos_sales::ui::PosSalesDashboard;
