use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregate::{aggregate_campaigns, CampaignTotals};
use crate::forecast::{historical_trend, historical_trend_for_campaign, predict_future_performance};
use crate::numeric::saturating_sum;
use crate::scoring::{score_campaigns, ScoreWeights};
use crate::{
    Campaign, CampaignAnalysis, CampaignStatus, FuturePrediction, HistoricalDataPoint,
    InsightRecord,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub top_performer: usize,
    pub stable: usize,
    pub underperformer: usize,
    pub no_data: usize,
}

impl StatusCounts {
    fn record(&mut self, status: CampaignStatus) {
        match status {
            CampaignStatus::TopPerformer => self.top_performer += 1,
            CampaignStatus::Stable => self.stable += 1,
            CampaignStatus::Underperformer => self.underperformer += 1,
            CampaignStatus::NoData => self.no_data += 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub spend: f64,
    pub clicks: i64,
    pub impressions: i64,
    pub reach: i64,
    pub purchases: i64,
    pub purchase_value: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub status_counts: StatusCounts,
}

impl AccountSummary {
    pub fn from_analyses(analyses: &[CampaignAnalysis]) -> Self {
        let mut totals = CampaignTotals::default();
        let mut status_counts = StatusCounts::default();
        for analysis in analyses {
            totals.spend = saturating_sum(totals.spend, analysis.spend);
            totals.clicks = totals.clicks.saturating_add(analysis.clicks);
            totals.impressions = totals.impressions.saturating_add(analysis.impressions);
            totals.reach = totals.reach.saturating_add(analysis.reach);
            totals.purchases = totals.purchases.saturating_add(analysis.purchases);
            totals.purchase_value = saturating_sum(totals.purchase_value, analysis.purchase_value);
            status_counts.record(analysis.status);
        }

        Self {
            ctr: totals.ctr(),
            cpc: totals.cpc(),
            roas: totals.roas(),
            spend: totals.spend,
            clicks: totals.clicks,
            impressions: totals.impressions,
            reach: totals.reach,
            purchases: totals.purchases,
            purchase_value: totals.purchase_value,
            status_counts,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub campaign_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub history: Vec<HistoricalDataPoint>,
    pub prediction: Option<FuturePrediction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub campaigns: Vec<CampaignAnalysis>,
    pub summary: AccountSummary,
    pub history: Vec<HistoricalDataPoint>,
    pub prediction: Option<FuturePrediction>,
}

pub fn build_forecast(insights: &[InsightRecord], campaign_id: Option<&str>) -> ForecastReport {
    let history = match campaign_id {
        Some(campaign_id) => historical_trend_for_campaign(insights, campaign_id),
        None => historical_trend(insights),
    };
    let prediction = predict_future_performance(&history);
    ForecastReport {
        history,
        prediction,
    }
}

pub fn build_report(
    campaigns: &[Campaign],
    insights: &[InsightRecord],
    options: &ReportOptions,
    weights: &ScoreWeights,
) -> AnalysisReport {
    let totals = aggregate_campaigns(campaigns, insights);
    let analyses = score_campaigns(&totals, weights);
    let summary = AccountSummary::from_analyses(&analyses);
    let forecast = build_forecast(insights, options.campaign_id.as_deref());

    info!(
        campaigns = analyses.len(),
        top_performers = summary.status_counts.top_performer,
        underperformers = summary.status_counts.underperformer,
        history_points = forecast.history.len(),
        forecast = forecast.prediction.is_some(),
        "built analysis report"
    );

    AnalysisReport {
        campaigns: analyses,
        summary,
        history: forecast.history,
        prediction: forecast.prediction,
    }
}
