pub mod builder;
pub mod executor;

pub use builder::build_sales_report;
pub use executor::generate;
