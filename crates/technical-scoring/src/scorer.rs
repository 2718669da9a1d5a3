use scoring_core::{IndicatorSet, TrendDirection, VolumeTrend};

const NEUTRAL: f64 = 50.0;

/// RSI zone with trend confirmation: an oversold reading is only a buy
/// signal outside a downtrend, an overbought reading only a sell signal
/// outside an uptrend. Missing RSI reads as neutral.
fn rsi_confirmation_score(rsi: Option<f64>, trend: TrendDirection) -> f64 {
    let rsi = rsi.unwrap_or(NEUTRAL);
    if rsi < 30.0 && trend != TrendDirection::Down {
        100.0
    } else if rsi > 70.0 && trend != TrendDirection::Up {
        0.0
    } else {
        NEUTRAL
    }
}

/// Moving-average alignment. An unavailable trend is explicitly neutral.
fn trend_alignment_score(trend: TrendDirection) -> f64 {
    match trend {
        TrendDirection::Up => 100.0,
        TrendDirection::Sideways | TrendDirection::Unavailable => NEUTRAL,
        TrendDirection::Down => 0.0,
    }
}

fn macd_momentum_score(macd: f64, signal: f64) -> f64 {
    if macd > signal && macd > 0.0 {
        100.0
    } else if macd < signal && macd < 0.0 {
        0.0
    } else {
        NEUTRAL
    }
}

fn volume_confirmation_score(volume_trend: VolumeTrend) -> f64 {
    match volume_trend {
        VolumeTrend::Increasing => 100.0,
        VolumeTrend::Stable => NEUTRAL,
        VolumeTrend::Decreasing | VolumeTrend::Unavailable => 0.0,
    }
}

/// Technical score 0-100: mean of the four confirmation sub-scores.
pub fn technical_score(indicators: &IndicatorSet) -> f64 {
    let scores = [
        rsi_confirmation_score(indicators.rsi, indicators.trend),
        trend_alignment_score(indicators.trend),
        macd_momentum_score(indicators.macd, indicators.signal),
        volume_confirmation_score(indicators.volume_trend),
    ];

    scores.iter().sum::<f64>() / scores.len() as f64
}
