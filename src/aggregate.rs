use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::numeric::saturating_sum;
use crate::{Campaign, InsightRecord, PURCHASE_ACTION};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignTotals {
    pub id: String,
    pub name: String,
    pub spend: f64,
    pub clicks: i64,
    pub impressions: i64,
    pub reach: i64,
    pub purchases: i64,
    pub purchase_value: f64,
}

impl CampaignTotals {
    pub fn empty(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id.clone(),
            name: campaign.name.clone(),
            ..Self::default()
        }
    }

    pub fn add(&mut self, insight: &InsightRecord) {
        self.spend = saturating_sum(self.spend, insight.spend());
        self.clicks = self.clicks.saturating_add(insight.clicks());
        self.impressions = self.impressions.saturating_add(insight.impressions());
        self.reach = self.reach.saturating_add(insight.reach());
        self.purchases = self.purchases.saturating_add(insight.action_count(PURCHASE_ACTION));
        self.purchase_value =
            saturating_sum(self.purchase_value, insight.action_value(PURCHASE_ACTION));
    }

    pub fn has_data(&self) -> bool {
        self.impressions > 0
    }

    // Percent, not a fraction.
    pub fn ctr(&self) -> f64 {
        ratio(self.clicks as f64, self.impressions as f64) * 100.0
    }

    pub fn cpc(&self) -> f64 {
        ratio(self.spend, self.clicks as f64)
    }

    pub fn roas(&self) -> f64 {
        ratio(self.purchase_value, self.spend)
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

pub fn aggregate_campaigns(campaigns: &[Campaign], insights: &[InsightRecord]) -> Vec<CampaignTotals> {
    let totals: Vec<CampaignTotals> = campaigns
        .iter()
        .map(|campaign| {
            insights
                .iter()
                .filter(|insight| insight.campaign_id == campaign.id)
                .fold(CampaignTotals::empty(campaign), |mut totals, insight| {
                    totals.add(insight);
                    totals
                })
        })
        .collect();

    debug!(
        campaigns = campaigns.len(),
        insights = insights.len(),
        with_data = totals.iter().filter(|totals| totals.has_data()).count(),
        "aggregated campaign insights"
    );

    totals
}
