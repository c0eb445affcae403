use serde::{Deserialize, Serialize};

use crate::scoring::NormalizedMetrics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub spend: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            ctr: 0.25,
            cpc: 0.25,
            roas: 0.35,
            spend: 0.15,
        }
    }
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.ctr + self.cpc + self.roas + self.spend
    }
}

#[derive(Debug, Clone)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, metrics: &NormalizedMetrics) -> f64 {
        let mut score = 0.0;

        score += self.weights.ctr * metrics.ctr;
        score += self.weights.cpc * metrics.cpc;
        score += self.weights.roas * metrics.roas;
        score += self.weights.spend * metrics.spend;

        score
    }
}
