use scoring_core::{
    Conclusion, Decision, Explanation, FundamentalData, IndicatorSet, Recommendation, ScoreSet,
    TrendDirection, VolumeTrend,
};

/// Factors that helped or hurt one scoring dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorBreakdown {
    pub helped: Vec<String>,
    pub hurt: Vec<String>,
}

impl FactorBreakdown {
    fn push(&mut self, helped: bool, phrase: String) {
        if helped {
            self.helped.push(phrase);
        } else {
            self.hurt.push(phrase);
        }
    }

    fn render(&self, dimension: &str, score: f64) -> String {
        let helped = if self.helped.is_empty() {
            "nothing".to_string()
        } else {
            self.helped.join(", ")
        };
        let hurt = if self.hurt.is_empty() {
            "nothing".to_string()
        } else {
            self.hurt.join(", ")
        };
        format!(
            "{} score ({:.1}): helped by {}. Hurt by {}.",
            dimension, score, helped, hurt
        )
    }
}

/// Factor thresholds match the scorers: a value on the favorable side of
/// its scoring midpoint helps, otherwise it hurts. Missing fields
/// contribute nothing.
pub fn fundamental_factors(data: &FundamentalData) -> FactorBreakdown {
    let mut factors = FactorBreakdown::default();

    if let Some(pe) = data.pe {
        factors.push(pe < 15.0, format!("P/E ratio of {:.2}", pe));
    }
    if let Some(pbv) = data.pbv {
        factors.push(pbv < 2.0, format!("price-to-book of {:.2}", pbv));
    }
    if let Some(eps) = data.eps {
        factors.push(eps > 0.0, format!("EPS of {:.2}", eps));
    }
    if let Some(roe) = data.roe {
        factors.push(roe > 0.15, format!("ROE of {:.1}%", roe * 100.0));
    }
    if let Some(debt_equity) = data.debt_equity {
        factors.push(
            debt_equity <= 1.5,
            format!("debt-to-equity of {:.2}", debt_equity),
        );
    }
    if let Some(growth) = data.revenue_growth {
        factors.push(growth > 5.0, format!("revenue growth of {:.1}%", growth));
    }
    if let Some(margin) = data.net_margin {
        factors.push(margin > 5.0, format!("net margin of {:.1}%", margin));
    }

    factors
}

pub fn technical_factors(indicators: &IndicatorSet) -> FactorBreakdown {
    let mut factors = FactorBreakdown::default();

    if let Some(rsi) = indicators.rsi {
        if rsi < 30.0 {
            factors.helped.push(format!("oversold RSI ({:.1})", rsi));
        } else if rsi > 70.0 {
            factors.hurt.push(format!("overbought RSI ({:.1})", rsi));
        }
    }

    match indicators.trend {
        TrendDirection::Up => factors.helped.push("a confirmed uptrend".to_string()),
        TrendDirection::Down => factors.hurt.push("a confirmed downtrend".to_string()),
        TrendDirection::Sideways | TrendDirection::Unavailable => {}
    }

    if indicators.macd > indicators.signal && indicators.macd > 0.0 {
        factors.helped.push("positive MACD momentum".to_string());
    } else if indicators.macd < indicators.signal && indicators.macd < 0.0 {
        factors.hurt.push("negative MACD momentum".to_string());
    }

    match indicators.volume_trend {
        VolumeTrend::Increasing => factors.helped.push("rising volume".to_string()),
        VolumeTrend::Decreasing => factors.hurt.push("shrinking volume".to_string()),
        VolumeTrend::Stable | VolumeTrend::Unavailable => {}
    }

    factors
}

pub fn risk_factors(data: &FundamentalData, volatility: Option<f64>) -> FactorBreakdown {
    let mut factors = FactorBreakdown::default();

    if let Some(vol) = volatility {
        if vol > risk_scoring::HIGH_VOLATILITY_THRESHOLD {
            factors
                .hurt
                .push(format!("high annualized volatility ({:.2})", vol));
        } else if vol < 0.3 {
            factors
                .helped
                .push(format!("low annualized volatility ({:.2})", vol));
        }
    }

    if let Some(volume) = data.volume {
        factors.push(
            volume >= 5e6,
            format!("trading volume of {:.1}M shares", volume / 1e6),
        );
    }

    if let Some(cap) = data.market_cap {
        factors.push(
            cap >= risk_scoring::SMALL_CAP_THRESHOLD,
            format!("market capitalization of {:.2}B", cap / 1e9),
        );
    }

    if risk_scoring::is_speculative(data, volatility) {
        factors
            .hurt
            .push("a speculative small-cap, high-volatility profile".to_string());
    }

    factors
}

/// Per-dimension rationale. Pure: identical inputs yield identical text,
/// so the output is snapshot-testable.
pub fn explain(
    data: &FundamentalData,
    indicators: &IndicatorSet,
    scores: &ScoreSet,
    volatility: Option<f64>,
) -> Explanation {
    Explanation {
        fundamental_text: fundamental_factors(data).render("Fundamental", scores.fundamental),
        technical_text: technical_factors(indicators).render("Technical", scores.technical),
        risk_text: risk_factors(data, volatility).render("Risk", scores.risk),
    }
}

/// Analyst-style narrative. Threshold rules over revenue growth, leverage,
/// ROE, volume trend and the recommendation; pure like `explain`.
pub fn conclude(
    data: &FundamentalData,
    indicators: &IndicatorSet,
    decision: &Decision,
) -> Conclusion {
    let strengths = if data.revenue_growth.is_some_and(|g| g > 5.0) {
        vec![
            "Attractive valuation".to_string(),
            "Stable revenue growth".to_string(),
        ]
    } else {
        vec!["Solid profitability".to_string()]
    };

    let weaknesses = if data.debt_equity.is_some_and(|d| d > 1.5) {
        vec!["High debt load".to_string()]
    } else {
        vec!["Thin profit margins".to_string()]
    };

    let risks = vec![
        "Market volatility".to_string(),
        "Sector-specific risk".to_string(),
    ];

    let investor_profile = match decision.recommendation {
        Recommendation::Hold | Recommendation::Avoid => "Conservative investors".to_string(),
        Recommendation::StrongBuy | Recommendation::SpeculativeBuy => {
            "Aggressive investors".to_string()
        }
    };

    let short_outlook = if indicators.volume_trend == VolumeTrend::Increasing {
        "Short-term rebound potential if the volume trend keeps building.".to_string()
    } else {
        "Caution advised: sideways price action likely in the near term.".to_string()
    };

    let long_outlook = if data.roe.is_some_and(|r| r > 0.10) {
        "Long-term outlook is positive, supported by a strong return on equity.".to_string()
    } else {
        "Monitor revenue growth before committing to a long-term position.".to_string()
    };

    Conclusion {
        strengths,
        weaknesses,
        risks,
        investor_profile,
        short_outlook,
        long_outlook,
    }
}
