use scoring_core::{IndicatorSet, PriceHistory, TrendDirection, VolumeTrend};

pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST_SPAN: usize = 12;
pub const MACD_SLOW_SPAN: usize = 26;
pub const MACD_SIGNAL_SPAN: usize = 9;

/// Arithmetic mean of the last `window` values; None when the series is
/// shorter than the window.
pub fn moving_average(data: &[f64], window: usize) -> Option<f64> {
    if window == 0 || data.len() < window {
        return None;
    }
    let tail = &data[data.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Exponential moving average series with smoothing factor 2/(span+1),
/// seeded by the first value (no bias adjustment).
pub fn ema(data: &[f64], span: usize) -> Vec<f64> {
    if span == 0 || data.is_empty() {
        return vec![];
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut result = Vec::with_capacity(data.len());
    result.push(data[0]);

    for i in 1..data.len() {
        let ema_val = alpha * data[i] + (1.0 - alpha) * result[i - 1];
        result.push(ema_val);
    }

    result
}

/// RSI over a rolling window: simple mean of gains vs mean of losses
/// (losses as positive magnitudes) across the last `period` day-over-day
/// deltas. The first bar has no prior close and contributes a zero
/// gain/loss slot, so exactly `period` closes are enough. None below
/// that. A zero average loss yields 100, never a division error.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let window = period.min(deltas.len());
    let tail = &deltas[deltas.len() - window..];

    let avg_gain = tail.iter().filter(|d| **d > 0.0).sum::<f64>() / period as f64;
    let avg_loss = tail.iter().filter(|d| **d < 0.0).map(|d| -d).sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// MACD(12,26) with a 9-span signal line, last values of each series.
/// Returns (0.0, 0.0) for an empty close series.
pub fn macd(closes: &[f64]) -> (f64, f64) {
    let ema_fast = ema(closes, MACD_FAST_SPAN);
    let ema_slow = ema(closes, MACD_SLOW_SPAN);

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();

    let signal_line = ema(&macd_line, MACD_SIGNAL_SPAN);

    (
        macd_line.last().copied().unwrap_or(0.0),
        signal_line.last().copied().unwrap_or(0.0),
    )
}

/// Compare the 20-period and 50-period rolling volume means. Requires at
/// least 50 bars.
pub fn volume_trend(volumes: &[f64]) -> VolumeTrend {
    let (vol20, vol50) = match (moving_average(volumes, 20), moving_average(volumes, 50)) {
        (Some(a), Some(b)) => (a, b),
        _ => return VolumeTrend::Unavailable,
    };

    if vol20 > vol50 * 1.1 {
        VolumeTrend::Increasing
    } else if vol20 < vol50 * 0.9 {
        VolumeTrend::Decreasing
    } else {
        VolumeTrend::Stable
    }
}

/// Trend direction with moving-average confirmation: Up only when
/// close > MA20 > MA50 > MA200 holds as a strict chain, Down for the
/// strict reverse chain, Sideways otherwise.
pub fn trend_direction(
    close: Option<f64>,
    ma20: Option<f64>,
    ma50: Option<f64>,
    ma200: Option<f64>,
) -> TrendDirection {
    let (close, ma20, ma50, ma200) = match (close, ma20, ma50, ma200) {
        (Some(c), Some(a), Some(b), Some(d)) => (c, a, b, d),
        _ => return TrendDirection::Unavailable,
    };

    if close > ma20 && ma20 > ma50 && ma50 > ma200 {
        TrendDirection::Up
    } else if close < ma20 && ma20 < ma50 && ma50 < ma200 {
        TrendDirection::Down
    } else {
        TrendDirection::Sideways
    }
}

/// Derive the full indicator set from one history snapshot. An empty
/// history yields an all-unavailable set with neutral MACD.
pub fn compute_indicators(history: &PriceHistory) -> IndicatorSet {
    if history.is_empty() {
        return IndicatorSet::default();
    }

    let closes = history.closes();
    let volumes = history.volumes();

    let ma20 = moving_average(&closes, 20);
    let ma50 = moving_average(&closes, 50);
    let ma200 = moving_average(&closes, 200);
    let (macd_value, signal_value) = macd(&closes);

    IndicatorSet {
        rsi: rsi(&closes, RSI_PERIOD),
        ma20,
        ma50,
        ma200,
        macd: macd_value,
        signal: signal_value,
        volume_trend: volume_trend(&volumes),
        trend: trend_direction(closes.last().copied(), ma20, ma50, ma200),
    }
}
