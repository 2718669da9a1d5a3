use scoring_core::{Decision, Horizon, Recommendation, RiskLevel, ScoreSet};

/// Map a score set to a discrete verdict. Pure function: the same scores
/// always produce the same decision.
pub fn decide(scores: &ScoreSet) -> Decision {
    // Strict thresholds: a boundary value falls to the lower tier
    let recommendation = if scores.final_score > 80.0 {
        Recommendation::StrongBuy
    } else if scores.final_score > 60.0 {
        Recommendation::SpeculativeBuy
    } else if scores.final_score > 40.0 {
        Recommendation::Hold
    } else {
        Recommendation::Avoid
    };

    let confidence = (scores.final_score + (100.0 - scores.risk) / 2.0).min(100.0);

    // The risk score is inverse: high score = low risk
    let risk_level = if scores.risk > 70.0 {
        RiskLevel::Low
    } else if scores.risk > 40.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    let horizon = if scores.fundamental > scores.technical {
        Horizon::LongTerm
    } else if scores.technical > scores.fundamental {
        Horizon::ShortTerm
    } else {
        Horizon::MediumTerm
    };

    Decision {
        recommendation,
        confidence,
        risk_level,
        horizon,
    }
}
