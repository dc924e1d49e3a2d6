pub mod flow;

pub use flow::MarketForecastFlow;
