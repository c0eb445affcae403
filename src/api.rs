use serde::Deserialize;
use campaign_analyzer::{Campaign, InsightRecord, ReportOptions};

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub insights: Vec<InsightRecord>,
    pub campaign_id: Option<String>,
}

impl ApiAnalyzeRequest {
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            campaign_id: non_empty(self.campaign_id.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiForecastRequest {
    #[serde(default)]
    pub insights: Vec<InsightRecord>,
    pub campaign_id: Option<String>,
}

impl ApiForecastRequest {
    pub fn campaign_id(&self) -> Option<String> {
        non_empty(self.campaign_id.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
