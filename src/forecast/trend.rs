use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use crate::numeric::saturating_sum;
use crate::{HistoricalDataPoint, InsightRecord};

pub fn historical_trend(insights: &[InsightRecord]) -> Vec<HistoricalDataPoint> {
    bucket_by_date(insights.iter())
}

pub fn historical_trend_for_campaign(
    insights: &[InsightRecord],
    campaign_id: &str,
) -> Vec<HistoricalDataPoint> {
    bucket_by_date(
        insights
            .iter()
            .filter(|insight| insight.campaign_id == campaign_id),
    )
}

fn bucket_by_date<'a, I>(insights: I) -> Vec<HistoricalDataPoint>
where
    I: Iterator<Item = &'a InsightRecord>,
{
    let mut buckets: HashMap<&str, (f64, i64)> = HashMap::new();
    for insight in insights {
        let bucket = buckets.entry(insight.date_start.as_str()).or_insert((0.0, 0));
        bucket.0 = saturating_sum(bucket.0, insight.spend());
        bucket.1 = bucket.1.saturating_add(insight.clicks());
    }

    let mut points: Vec<HistoricalDataPoint> = buckets
        .into_iter()
        .map(|(date, (spend, clicks))| HistoricalDataPoint {
            date: date.to_string(),
            spend,
            clicks,
        })
        .collect();

    points.sort_by(|a, b| compare_dates(&a.date, &b.date));

    debug!(buckets = points.len(), "bucketed insights by date");
    points
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

// Unparseable dates sort after valid ones, by raw text.
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(left), Some(right)) => left.cmp(&right).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
