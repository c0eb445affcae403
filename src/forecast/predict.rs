use tracing::debug;

use crate::forecast::linear_regression;
use crate::{FuturePrediction, HistoricalDataPoint};

pub const MIN_HISTORY_POINTS: usize = 5;
pub const GROWTH_FACTOR: f64 = 1.1;
pub const DECLINE_FACTOR: f64 = 0.9;

const GROWTH_RECOMMENDATION: &str =
    "Positive growth trend expected. Consider investing more in this campaign.";
const DECLINE_RECOMMENDATION: &str =
    "Downward trend detected. Review targeting and creatives before performance drops further.";
const STABLE_RECOMMENDATION: &str =
    "Performance is expected to remain stable. Keep the current strategy and monitor results.";

// The x axis is the bucket index, not elapsed days.
pub fn predict_future_performance(history: &[HistoricalDataPoint]) -> Option<FuturePrediction> {
    if history.len() < MIN_HISTORY_POINTS {
        debug!(points = history.len(), "not enough history to forecast");
        return None;
    }

    let spend_points: Vec<(f64, f64)> = history
        .iter()
        .enumerate()
        .map(|(index, point)| (index as f64, point.spend))
        .collect();
    let click_points: Vec<(f64, f64)> = history
        .iter()
        .enumerate()
        .map(|(index, point)| (index as f64, point.clicks as f64))
        .collect();

    let next = history.len() as f64;
    let predicted_spend = floor_at_zero(linear_regression(&spend_points).predict(next));
    let predicted_clicks = floor_at_zero(linear_regression(&click_points).predict(next));

    let last_clicks = history.last().map(|point| point.clicks as f64).unwrap_or(0.0);
    let recommendation = if predicted_clicks > last_clicks * GROWTH_FACTOR {
        GROWTH_RECOMMENDATION
    } else if predicted_clicks < last_clicks * DECLINE_FACTOR {
        DECLINE_RECOMMENDATION
    } else {
        STABLE_RECOMMENDATION
    };

    Some(FuturePrediction {
        predicted_clicks,
        predicted_spend,
        recommendation: recommendation.to_string(),
    })
}

fn floor_at_zero(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, f64::MAX)
}
