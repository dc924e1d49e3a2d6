pub mod executor;
pub mod flow;

pub use executor::{generate, TrendReportError};
