pub mod executor;
pub mod flow;

pub use executor::{forecast_sku, list_skus, ForecastError};
