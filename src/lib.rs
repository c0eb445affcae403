pub mod aggregate;
pub mod config;
pub mod error;
pub mod forecast;
pub mod input;
pub mod numeric;
pub mod report;
pub mod scoring;

use serde::{Deserialize, Serialize};

use crate::numeric::{float_or_zero, int_or_zero, lenient_string};

pub use crate::aggregate::{aggregate_campaigns, CampaignTotals};
pub use crate::error::AnalyzerError;
pub use crate::forecast::{
    historical_trend, historical_trend_for_campaign, linear_regression, predict_future_performance,
    Regression,
};
pub use crate::report::{
    build_forecast, build_report, AccountSummary, AnalysisReport, ForecastReport, ReportOptions,
};
pub use crate::scoring::{analyze_campaigns, score_campaigns, ScoreWeights};

pub const PURCHASE_ACTION: &str = "purchase";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Campaign {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEntry {
    pub action_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: Option<String>,
}

impl ActionEntry {
    pub fn new(action_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightRecord {
    #[serde(default)]
    pub campaign_id: String,
    #[serde(default)]
    pub date_start: String,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub spend: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub clicks: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub impressions: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub reach: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub actions: Vec<ActionEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action_values: Vec<ActionEntry>,
}

impl InsightRecord {
    pub fn spend(&self) -> f64 {
        float_or_zero(self.spend.as_deref())
    }

    pub fn clicks(&self) -> i64 {
        int_or_zero(self.clicks.as_deref())
    }

    pub fn impressions(&self) -> i64 {
        int_or_zero(self.impressions.as_deref())
    }

    pub fn reach(&self) -> i64 {
        int_or_zero(self.reach.as_deref())
    }

    pub fn action_count(&self, action_type: &str) -> i64 {
        int_or_zero(find_action(&self.actions, action_type))
    }

    pub fn action_value(&self, action_type: &str) -> f64 {
        float_or_zero(find_action(&self.action_values, action_type))
    }
}

fn find_action<'a>(entries: &'a [ActionEntry], action_type: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.action_type == action_type)
        .and_then(|entry| entry.value.as_deref())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ActionEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<ActionEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    #[serde(rename = "Top Performer")]
    TopPerformer,
    Stable,
    Underperformer,
    #[serde(rename = "No Data")]
    NoData,
}

impl CampaignStatus {
    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::TopPerformer => "Top Performer",
            CampaignStatus::Stable => "Stable",
            CampaignStatus::Underperformer => "Underperformer",
            CampaignStatus::NoData => "No Data",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAnalysis {
    pub id: String,
    pub name: String,
    pub spend: f64,
    pub clicks: i64,
    pub impressions: i64,
    pub reach: i64,
    pub purchases: i64,
    pub purchase_value: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub performance_score: f64,
    pub status: CampaignStatus,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDataPoint {
    pub date: String,
    pub spend: f64,
    pub clicks: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturePrediction {
    pub predicted_clicks: f64,
    pub predicted_spend: f64,
    pub recommendation: String,
}

pub fn format_number(value: f64) -> String {
    let rounded = value.round() as i64;
    let mut chars: Vec<char> = rounded.unsigned_abs().to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }
    if rounded < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

// Expects percent units, not a fraction.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
