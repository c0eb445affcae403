pub mod classify;
pub mod normalize;
pub mod pipeline;
pub mod weighted;

pub use classify::{classify, recommendation, NO_DATA_RECOMMENDATION};
pub use normalize::{BatchNormalizer, MetricRange, NormalizedMetrics};
pub use pipeline::ScoringPipeline;
pub use weighted::{ScoreWeights, WeightedScorer};

use crate::aggregate::{aggregate_campaigns, CampaignTotals};
use crate::{Campaign, CampaignAnalysis, InsightRecord};

pub fn score_campaigns(totals: &[CampaignTotals], weights: &ScoreWeights) -> Vec<CampaignAnalysis> {
    ScoringPipeline::new(WeightedScorer::new(weights.clone())).score(totals)
}

pub fn analyze_campaigns(campaigns: &[Campaign], insights: &[InsightRecord]) -> Vec<CampaignAnalysis> {
    let totals = aggregate_campaigns(campaigns, insights);
    score_campaigns(&totals, &ScoreWeights::default())
}
