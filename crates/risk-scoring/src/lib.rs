use scoring_core::{FundamentalData, PriceHistory};
use statrs::statistics::Statistics;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Market cap below this is treated as small-cap for the speculative
/// penalty.
pub const SMALL_CAP_THRESHOLD: f64 = 1e9;

/// Annualized volatility above this marks the high-volatility half of the
/// speculative ("gorengan") pattern.
pub const HIGH_VOLATILITY_THRESHOLD: f64 = 0.5;

const SPECULATIVE_PENALTY: f64 = 50.0;

/// Annualized standard deviation of daily returns (sample std-dev scaled
/// by sqrt(252)). Needs at least two closes; computed even when no other
/// risk input is available, because the speculative penalty depends on it.
pub fn annualized_volatility(history: &PriceHistory) -> Option<f64> {
    let closes = history.closes();
    if closes.len() < 2 {
        return None;
    }

    let returns: Vec<f64> = closes.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();
    if returns.len() < 2 {
        // std_dev of a single return is undefined
        return Some(0.0);
    }

    Some(returns.std_dev() * TRADING_DAYS_PER_YEAR.sqrt())
}

/// Small-cap plus high-volatility: the thinly traded, manipulation-prone
/// profile that gets a flat penalty.
pub fn is_speculative(data: &FundamentalData, volatility: Option<f64>) -> bool {
    matches!(
        (data.market_cap, volatility),
        (Some(cap), Some(vol)) if cap < SMALL_CAP_THRESHOLD && vol > HIGH_VOLATILITY_THRESHOLD
    )
}

/// Risk score 0-100 (inverse indicator: higher means safer). Mean of the
/// available volatility, liquidity and market-cap sub-scores, minus the
/// speculative penalty, clamped to [0, 100]. 0 when nothing is available.
pub fn risk_score(data: &FundamentalData, history: &PriceHistory) -> f64 {
    let volatility = annualized_volatility(history);

    let mut scores: Vec<f64> = Vec::new();

    if let Some(vol) = volatility {
        scores.push((100.0 - 200.0 * vol).clamp(0.0, 100.0));
    }
    if let Some(volume) = data.volume {
        scores.push((10.0 * volume / 1e6).clamp(0.0, 100.0));
    }
    if let Some(market_cap) = data.market_cap {
        scores.push((10.0 * market_cap / 1e9).clamp(0.0, 100.0));
    }

    let base = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    let penalty = if is_speculative(data, volatility) {
        SPECULATIVE_PENALTY
    } else {
        0.0
    };

    (base - penalty).clamp(0.0, 100.0)
}
