mod dashboard;

pub use dashboard::PosSalesDashboard;
