use campaign_analyzer::scoring::{
    classify, recommendation, MetricRange, NormalizedMetrics, ScoringPipeline, WeightedScorer,
    NO_DATA_RECOMMENDATION,
};
use campaign_analyzer::{
    aggregate_campaigns, analyze_campaigns, score_campaigns, ActionEntry, Campaign, CampaignStatus,
    CampaignTotals, InsightRecord, ScoreWeights,
};

fn insight(
    campaign_id: &str,
    spend: &str,
    clicks: &str,
    impressions: &str,
    purchases: Option<(&str, &str)>,
) -> InsightRecord {
    let (actions, action_values) = match purchases {
        Some((count, value)) => (
            vec![
                ActionEntry::new("link_click", "3"),
                ActionEntry::new("purchase", count),
            ],
            vec![ActionEntry::new("purchase", value)],
        ),
        None => (Vec::new(), Vec::new()),
    };
    InsightRecord {
        campaign_id: campaign_id.to_string(),
        date_start: "2024-03-01".to_string(),
        spend: Some(spend.to_string()),
        clicks: Some(clicks.to_string()),
        impressions: Some(impressions.to_string()),
        reach: Some(impressions.to_string()),
        actions,
        action_values,
    }
}

fn totals(id: &str, spend: f64, clicks: i64, impressions: i64, purchase_value: f64) -> CampaignTotals {
    CampaignTotals {
        id: id.to_string(),
        name: id.to_string(),
        spend,
        clicks,
        impressions,
        reach: impressions,
        purchases: 0,
        purchase_value,
    }
}

#[test]
fn aggregation_zero_fills_campaigns_without_insights() {
    let campaigns = vec![Campaign::new("a", "Alpha"), Campaign::new("b", "Beta")];
    let insights = vec![insight("a", "10.5", "4", "100", None)];

    let totals = aggregate_campaigns(&campaigns, &insights);

    assert_eq!(totals.len(), 2);
    let empty = &totals[1];
    assert_eq!(empty.id, "b");
    assert_eq!(empty.name, "Beta");
    assert_eq!(empty.spend, 0.0);
    assert_eq!(empty.clicks, 0);
    assert_eq!(empty.impressions, 0);
    assert_eq!(empty.reach, 0);
    assert_eq!(empty.purchases, 0);
    assert_eq!(empty.purchase_value, 0.0);
    assert_eq!(empty.ctr(), 0.0);
    assert_eq!(empty.cpc(), 0.0);
    assert_eq!(empty.roas(), 0.0);
}

#[test]
fn aggregation_sums_rows_and_reads_purchase_actions() {
    let campaigns = vec![Campaign::new("a", "Alpha")];
    let insights = vec![
        insight("a", "10.25", "4", "100", Some(("2", "40.5"))),
        insight("a", "5", "6", "300", None),
        insight("other", "999", "999", "999", Some(("9", "999"))),
    ];

    let totals = aggregate_campaigns(&campaigns, &insights);
    let alpha = &totals[0];

    assert!((alpha.spend - 15.25).abs() < 1e-9);
    assert_eq!(alpha.clicks, 10);
    assert_eq!(alpha.impressions, 400);
    assert_eq!(alpha.reach, 400);
    assert_eq!(alpha.purchases, 2);
    assert!((alpha.purchase_value - 40.5).abs() < 1e-9);
    assert!((alpha.ctr() - 2.5).abs() < 1e-9);
    assert!((alpha.cpc() - 1.525).abs() < 1e-9);
}

#[test]
fn aggregation_treats_malformed_fields_as_zero() {
    let campaigns = vec![Campaign::new("a", "Alpha")];
    let mut row = insight("a", "n/a", "", "50", Some(("oops", "also bad")));
    row.reach = None;
    let totals = aggregate_campaigns(&campaigns, &[row]);

    assert_eq!(totals[0].spend, 0.0);
    assert_eq!(totals[0].clicks, 0);
    assert_eq!(totals[0].impressions, 50);
    assert_eq!(totals[0].reach, 0);
    assert_eq!(totals[0].purchases, 0);
    assert_eq!(totals[0].purchase_value, 0.0);
}

#[test]
fn top_performer_and_underperformer_example() {
    let campaigns = vec![Campaign::new("a", "A"), Campaign::new("b", "B")];
    let insights = vec![
        insight("a", "100", "50", "1000", Some(("5", "500"))),
        insight("b", "100", "10", "1000", None),
    ];

    let analyses = analyze_campaigns(&campaigns, &insights);
    let a = &analyses[0];
    let b = &analyses[1];

    assert!((a.ctr - 5.0).abs() < 1e-9);
    assert!((a.cpc - 2.0).abs() < 1e-9);
    assert!((a.roas - 5.0).abs() < 1e-9);
    assert!((b.ctr - 1.0).abs() < 1e-9);
    assert!((b.cpc - 10.0).abs() < 1e-9);
    assert_eq!(b.roas, 0.0);

    assert!((a.performance_score - 0.925).abs() < 1e-9);
    assert_eq!(a.status, CampaignStatus::TopPerformer);
    assert!((b.performance_score - 0.075).abs() < 1e-9);
    assert_eq!(b.status, CampaignStatus::Underperformer);
    assert!(b.recommendation.contains("landing page"));
}

#[test]
fn batch_without_impressions_is_all_no_data() {
    let batch = vec![totals("a", 50.0, 10, 0, 0.0), totals("b", 0.0, 0, 0, 0.0)];

    let analyses = score_campaigns(&batch, &ScoreWeights::default());

    assert_eq!(analyses.len(), 2);
    for analysis in &analyses {
        assert_eq!(analysis.status, CampaignStatus::NoData);
        assert_eq!(analysis.performance_score, 0.0);
        assert_eq!(analysis.recommendation, NO_DATA_RECOMMENDATION);
    }
}

#[test]
fn campaign_without_impressions_is_no_data_inside_scored_batch() {
    let batch = vec![
        totals("a", 100.0, 50, 1000, 500.0),
        totals("empty", 80.0, 0, 0, 0.0),
        totals("b", 100.0, 10, 1000, 0.0),
    ];

    let analyses = score_campaigns(&batch, &ScoreWeights::default());

    assert_eq!(analyses[1].id, "empty");
    assert_eq!(analyses[1].status, CampaignStatus::NoData);
    assert_eq!(analyses[1].performance_score, 0.0);
    assert!((analyses[0].performance_score - 0.925).abs() < 1e-9);
}

#[test]
fn flat_population_contributes_half_per_metric() {
    let batch = vec![
        totals("a", 100.0, 20, 1000, 300.0),
        totals("b", 100.0, 20, 1000, 300.0),
    ];

    let analyses = score_campaigns(&batch, &ScoreWeights::default());

    for analysis in &analyses {
        assert!((analysis.performance_score - 0.5).abs() < 1e-9);
        assert_eq!(analysis.status, CampaignStatus::Stable);
    }

    let range = MetricRange::from_values([3.0, 3.0, 3.0]).expect("range");
    assert_eq!(range.normalize(3.0), 0.5);
    assert_eq!(range.normalize_inverted(3.0), 0.5);
}

#[test]
fn normalization_is_invariant_to_positive_scaling() {
    let values = [0.4, 1.7, 2.2, 5.0];
    let scaled: Vec<f64> = values.iter().map(|value| value * 37.5).collect();

    let range = MetricRange::from_values(values).expect("range");
    let scaled_range = MetricRange::from_values(scaled.iter().copied()).expect("range");

    for (value, scaled_value) in values.iter().zip(scaled.iter()) {
        assert!((range.normalize(*value) - scaled_range.normalize(*scaled_value)).abs() < 1e-9);
    }
}

#[test]
fn ranking_survives_scaling_every_ctr() {
    let base = vec![
        totals("a", 100.0, 50, 1000, 300.0),
        totals("b", 120.0, 30, 1000, 100.0),
        totals("c", 90.0, 10, 1000, 400.0),
    ];
    // Halving impressions doubles every CTR and leaves the other metrics untouched.
    let scaled: Vec<CampaignTotals> = base
        .iter()
        .map(|campaign| CampaignTotals {
            impressions: campaign.impressions / 2,
            ..campaign.clone()
        })
        .collect();

    let weights = ScoreWeights::default();
    let before = score_campaigns(&base, &weights);
    let after = score_campaigns(&scaled, &weights);

    for (left, right) in before.iter().zip(after.iter()) {
        assert!((left.performance_score - right.performance_score).abs() < 1e-9);
    }
}

#[test]
fn cpc_is_inverted() {
    let range = MetricRange { min: 2.0, max: 10.0 };
    assert_eq!(range.normalize_inverted(2.0), 1.0);
    assert_eq!(range.normalize_inverted(10.0), 0.0);
}

#[test]
fn thresholds_are_strict() {
    assert_eq!(classify(0.75), CampaignStatus::Stable);
    assert_eq!(classify(0.4), CampaignStatus::Stable);
    assert_eq!(classify(0.750_001), CampaignStatus::TopPerformer);
    assert_eq!(classify(0.399_999), CampaignStatus::Underperformer);
    assert_eq!(classify(0.0), CampaignStatus::Underperformer);
    assert_eq!(classify(1.0), CampaignStatus::TopPerformer);
}

#[test]
fn underperformer_recommendation_targets_weakest_metric() {
    let status = CampaignStatus::Underperformer;
    assert!(recommendation(status, 0.5, 50.0, 0.0).contains("CTR"));
    assert!(recommendation(status, 1.5, 25.0, 0.0).contains("bidding"));
    assert!(recommendation(status, 1.5, 5.0, 1.0).contains("landing page"));
    assert!(recommendation(status, 1.5, 5.0, 4.0).contains("needs improvement"));
}

#[test]
fn stable_recommendation_branches() {
    let status = CampaignStatus::Stable;
    assert!(recommendation(status, 0.5, 1.0, 3.5).contains("ROAS"));
    assert!(recommendation(status, 2.5, 1.0, 1.0).contains("engagement"));
    assert!(recommendation(status, 1.0, 1.0, 1.0).contains("Stable performance"));
    assert_eq!(
        recommendation(CampaignStatus::NoData, 9.0, 9.0, 9.0),
        NO_DATA_RECOMMENDATION
    );
}

#[test]
fn weighted_scorer_applies_custom_weights() {
    let scorer = WeightedScorer::new(ScoreWeights {
        ctr: 1.0,
        cpc: 0.0,
        roas: 0.0,
        spend: 0.0,
    });
    let metrics = NormalizedMetrics {
        ctr: 0.3,
        cpc: 1.0,
        roas: 1.0,
        spend: 1.0,
    };

    assert!((scorer.score(&metrics) - 0.3).abs() < 1e-9);

    let pipeline = ScoringPipeline::new(scorer);
    let analyses = pipeline.score(&[
        totals("a", 100.0, 50, 1000, 0.0),
        totals("b", 100.0, 10, 1000, 0.0),
    ]);
    assert!((analyses[0].performance_score - 1.0).abs() < 1e-9);
    assert_eq!(analyses[1].performance_score, 0.0);
}

#[test]
fn analysis_serializes_with_dashboard_field_names() {
    let analyses = analyze_campaigns(&[Campaign::new("a", "A")], &[]);
    let value = serde_json::to_value(&analyses[0]).expect("serialize");

    assert_eq!(value["status"], "No Data");
    assert_eq!(value["performanceScore"], 0.0);
    assert_eq!(value["purchaseValue"], 0.0);
}

#[test]
fn aggregation_saturates_huge_counts() {
    let campaigns = vec![Campaign::new("a", "A")];
    let insights = vec![
        insight("a", "1", "9000000000000000000", "9000000000000000000", Some(("9000000000000000000", "1"))),
        insight("a", "1", "9000000000000000000", "9000000000000000000", Some(("9000000000000000000", "1"))),
    ];

    let totals = aggregate_campaigns(&campaigns, &insights);

    assert_eq!(totals[0].clicks, i64::MAX);
    assert_eq!(totals[0].impressions, i64::MAX);
    assert_eq!(totals[0].reach, i64::MAX);
    assert_eq!(totals[0].purchases, i64::MAX);
}

#[test]
fn overflowing_spend_keeps_scores_in_range() {
    let campaigns = vec![Campaign::new("a", "A"), Campaign::new("b", "B")];
    let insights = vec![
        insight("a", "1e308", "10", "1000", Some(("1", "1e308"))),
        insight("a", "1e308", "10", "1000", Some(("1", "1e308"))),
        insight("b", "5", "10", "1000", None),
    ];

    let analyses = analyze_campaigns(&campaigns, &insights);

    assert_eq!(analyses[0].spend, f64::MAX);
    assert_eq!(analyses[0].purchase_value, f64::MAX);
    for analysis in &analyses {
        assert!(analysis.spend.is_finite());
        assert!(analysis.cpc.is_finite());
        assert!(analysis.roas.is_finite());
        assert!(analysis.performance_score.is_finite());
        assert!((0.0..=1.0).contains(&analysis.performance_score));
    }
}

#[test]
fn infinite_range_width_scores_as_flat() {
    let range = MetricRange {
        min: f64::MIN,
        max: f64::MAX,
    };

    assert!(range.is_flat());
    assert_eq!(range.normalize(0.0), 0.5);
    assert_eq!(range.normalize_inverted(0.0), 0.5);
}
