use tracing::debug;

use crate::aggregate::CampaignTotals;
use crate::scoring::{classify, recommendation, BatchNormalizer, WeightedScorer};
use crate::{CampaignAnalysis, CampaignStatus};

#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    weighted_scorer: WeightedScorer,
}

impl ScoringPipeline {
    pub fn new(weighted_scorer: WeightedScorer) -> Self {
        Self { weighted_scorer }
    }

    pub fn score(&self, totals: &[CampaignTotals]) -> Vec<CampaignAnalysis> {
        let population: Vec<&CampaignTotals> = totals.iter().filter(|t| t.has_data()).collect();

        let normalizer = match BatchNormalizer::from_population(&population) {
            Some(normalizer) => normalizer,
            None => {
                debug!(campaigns = totals.len(), "no campaign has impressions; skipping normalization");
                return totals.iter().map(no_data).collect();
            }
        };

        let analyses: Vec<CampaignAnalysis> = totals
            .iter()
            .map(|campaign| {
                if !campaign.has_data() {
                    return no_data(campaign);
                }
                let metrics = normalizer.normalize(campaign);
                let score = self.weighted_scorer.score(&metrics);
                let status = classify(score);
                build_analysis(campaign, score, status)
            })
            .collect();

        debug!(
            campaigns = analyses.len(),
            scored = population.len(),
            "scored campaign batch"
        );

        analyses
    }
}

fn no_data(campaign: &CampaignTotals) -> CampaignAnalysis {
    build_analysis(campaign, 0.0, CampaignStatus::NoData)
}

fn build_analysis(campaign: &CampaignTotals, score: f64, status: CampaignStatus) -> CampaignAnalysis {
    let ctr = campaign.ctr();
    let cpc = campaign.cpc();
    let roas = campaign.roas();

    CampaignAnalysis {
        id: campaign.id.clone(),
        name: campaign.name.clone(),
        spend: campaign.spend,
        clicks: campaign.clicks,
        impressions: campaign.impressions,
        reach: campaign.reach,
        purchases: campaign.purchases,
        purchase_value: campaign.purchase_value,
        ctr,
        cpc,
        roas,
        performance_score: score,
        status,
        recommendation: recommendation(status, ctr, cpc, roas).to_string(),
    }
}
