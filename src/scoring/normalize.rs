use crate::aggregate::CampaignTotals;

pub const FLAT_POPULATION_SCORE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |range, value| match range {
            None => Some(Self {
                min: value,
                max: value,
            }),
            Some(range) => Some(Self {
                min: range.min.min(value),
                max: range.max.max(value),
            }),
        })
    }

    // An infinite width cannot be divided by, so it scores like a flat batch.
    pub fn is_flat(&self) -> bool {
        let width = self.max - self.min;
        width == 0.0 || !width.is_finite()
    }

    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_flat() {
            return FLAT_POPULATION_SCORE;
        }
        (value - self.min) / (self.max - self.min)
    }

    pub fn normalize_inverted(&self, value: f64) -> f64 {
        if self.is_flat() {
            return FLAT_POPULATION_SCORE;
        }
        (self.max - value) / (self.max - self.min)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedMetrics {
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub spend: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct BatchNormalizer {
    pub ctr: MetricRange,
    pub cpc: MetricRange,
    pub roas: MetricRange,
    pub spend: MetricRange,
}

impl BatchNormalizer {
    pub fn from_population(population: &[&CampaignTotals]) -> Option<Self> {
        Some(Self {
            ctr: MetricRange::from_values(population.iter().map(|totals| totals.ctr()))?,
            cpc: MetricRange::from_values(population.iter().map(|totals| totals.cpc()))?,
            roas: MetricRange::from_values(population.iter().map(|totals| totals.roas()))?,
            spend: MetricRange::from_values(population.iter().map(|totals| totals.spend))?,
        })
    }

    pub fn normalize(&self, totals: &CampaignTotals) -> NormalizedMetrics {
        NormalizedMetrics {
            ctr: self.ctr.normalize(totals.ctr()),
            cpc: self.cpc.normalize_inverted(totals.cpc()),
            roas: self.roas.normalize(totals.roas()),
            spend: self.spend.normalize(totals.spend),
        }
    }
}
