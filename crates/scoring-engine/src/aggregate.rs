use serde::{Deserialize, Serialize};

use scoring_core::{FundamentalData, ScoreSet};

/// Aggregation weights and the per-field missing-data penalty.
/// The defaults are the production values; they are configurable so a
/// caller can re-weight without patching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub fundamental_weight: f64,
    pub technical_weight: f64,
    pub risk_weight: f64,
    pub missing_field_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fundamental_weight: 0.40,
            technical_weight: 0.35,
            risk_weight: 0.25,
            missing_field_penalty: 10.0,
        }
    }
}

/// Combine the three sub-scores into a final score.
///
/// missing_penalty is 10 per unknown fundamental field. With the record
/// type, an explicit null and an absent key are the same `None`, so one
/// counting rule covers both; half the penalty is charged to the
/// fundamental score and half to the risk score, never to technical.
pub fn aggregate_scores(
    data: &FundamentalData,
    fundamental: f64,
    technical: f64,
    risk: f64,
    config: &ScoringConfig,
) -> ScoreSet {
    let missing_penalty = config.missing_field_penalty * data.missing_field_count() as f64;

    let adjusted_fundamental = (fundamental - missing_penalty / 2.0).clamp(0.0, 100.0);
    let adjusted_risk = (risk - missing_penalty / 2.0).clamp(0.0, 100.0);

    let final_score = (config.fundamental_weight * adjusted_fundamental
        + config.technical_weight * technical
        + config.risk_weight * adjusted_risk)
        .clamp(0.0, 100.0);

    ScoreSet {
        fundamental: adjusted_fundamental,
        technical,
        risk: adjusted_risk,
        final_score,
        missing_penalty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full_data() -> FundamentalData {
        FundamentalData {
            price: Some(100.0),
            market_cap: Some(2e9),
            volume: Some(1e6),
            pe: Some(12.0),
            pbv: Some(1.1),
            eps: Some(8.0),
            roe: Some(0.18),
            debt_equity: Some(0.6),
            revenue_growth: Some(9.0),
            net_margin: Some(14.0),
        }
    }

    #[test]
    fn complete_data_carries_no_penalty() {
        let scores = aggregate_scores(&full_data(), 80.0, 60.0, 70.0, &ScoringConfig::default());
        assert_relative_eq!(scores.missing_penalty, 0.0);
        assert_relative_eq!(scores.fundamental, 80.0);
        assert_relative_eq!(scores.risk, 70.0);
        assert_relative_eq!(
            scores.final_score,
            0.40 * 80.0 + 0.35 * 60.0 + 0.25 * 70.0
        );
    }

    #[test]
    fn each_missing_field_costs_ten() {
        let mut data = full_data();
        data.pe = None;
        data.roe = None;
        data.net_margin = None;
        let scores = aggregate_scores(&data, 80.0, 60.0, 70.0, &ScoringConfig::default());
        assert_relative_eq!(scores.missing_penalty, 30.0);
        assert_relative_eq!(scores.fundamental, 65.0);
        assert_relative_eq!(scores.risk, 55.0);
    }

    #[test]
    fn technical_score_is_never_penalized() {
        let scores = aggregate_scores(
            &FundamentalData::default(),
            80.0,
            60.0,
            70.0,
            &ScoringConfig::default(),
        );
        assert_relative_eq!(scores.missing_penalty, 100.0);
        assert_relative_eq!(scores.technical, 60.0);
    }

    #[test]
    fn penalized_scores_floor_at_zero() {
        let scores = aggregate_scores(
            &FundamentalData::default(),
            30.0,
            50.0,
            20.0,
            &ScoringConfig::default(),
        );
        // 30 - 50 and 20 - 50 both floor at zero
        assert_relative_eq!(scores.fundamental, 0.0);
        assert_relative_eq!(scores.risk, 0.0);
        assert_relative_eq!(scores.final_score, 0.35 * 50.0);
    }

    #[test]
    fn final_score_stays_in_range_at_the_top() {
        let scores = aggregate_scores(&full_data(), 100.0, 100.0, 100.0, &ScoringConfig::default());
        assert_relative_eq!(scores.final_score, 100.0);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let data = full_data();
        let config = ScoringConfig::default();
        assert_eq!(
            aggregate_scores(&data, 70.0, 55.0, 40.0, &config),
            aggregate_scores(&data, 70.0, 55.0, 40.0, &config)
        );
    }
}
