pub mod d600_trend_analytics;
pub mod d601_pos_sales;
