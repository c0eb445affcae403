pub mod predict;
pub mod regression;
pub mod trend;

pub use predict::{predict_future_performance, DECLINE_FACTOR, GROWTH_FACTOR, MIN_HISTORY_POINTS};
pub use regression::{linear_regression, Regression};
pub use trend::{historical_trend, historical_trend_for_campaign};
