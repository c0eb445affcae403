use crate::CampaignStatus;

pub const TOP_PERFORMER_THRESHOLD: f64 = 0.75;
pub const UNDERPERFORMER_THRESHOLD: f64 = 0.4;

pub const NO_DATA_RECOMMENDATION: &str =
    "No data available for this campaign yet. Check back once it has delivered impressions.";

pub fn classify(score: f64) -> CampaignStatus {
    if score > TOP_PERFORMER_THRESHOLD {
        CampaignStatus::TopPerformer
    } else if score < UNDERPERFORMER_THRESHOLD {
        CampaignStatus::Underperformer
    } else {
        CampaignStatus::Stable
    }
}

pub fn recommendation(status: CampaignStatus, ctr: f64, cpc: f64, roas: f64) -> &'static str {
    match status {
        CampaignStatus::TopPerformer => {
            "Excellent performance. Consider increasing the budget to scale these results."
        }
        CampaignStatus::Underperformer => {
            if ctr < 1.0 {
                "Low CTR. Review audience targeting and refresh the ad creative to improve engagement."
            } else if cpc > 20.0 {
                "High cost per click. Adjust the bidding strategy or broaden the audience."
            } else if roas < 2.0 {
                "Low return on ad spend. Review the landing page and conversion funnel."
            } else {
                "Performance needs improvement. Review the campaign settings and objectives."
            }
        }
        CampaignStatus::Stable => {
            if roas > 3.0 {
                "Solid ROAS. Test new creatives to lift CTR and scale gradually."
            } else if ctr > 2.0 {
                "Strong engagement. Optimize the landing page to convert more clicks into purchases."
            } else {
                "Stable performance. Keep monitoring and test small optimizations."
            }
        }
        CampaignStatus::NoData => NO_DATA_RECOMMENDATION,
    }
}
