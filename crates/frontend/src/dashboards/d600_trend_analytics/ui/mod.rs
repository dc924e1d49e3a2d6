mod dashboard;

pub use dashboard::TrendAnalyticsDashboard;
