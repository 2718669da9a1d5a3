use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ScoringError;

/// Daily OHLCV bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Ordered daily price history. Construction rejects unordered or
/// duplicate-dated bars; an empty history is valid (indicators degrade
/// to unavailable).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bar>", into = "Vec<Bar>")]
pub struct PriceHistory {
    bars: Vec<Bar>,
}

impl PriceHistory {
    pub fn new(bars: Vec<Bar>) -> Result<Self, ScoringError> {
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ScoringError::InvalidHistory(format!(
                    "bars must be strictly ascending by date ({} followed by {})",
                    pair[0].date, pair[1].date
                )));
            }
        }
        Ok(Self { bars })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }
}

impl TryFrom<Vec<Bar>> for PriceHistory {
    type Error = ScoringError;

    fn try_from(bars: Vec<Bar>) -> Result<Self, Self::Error> {
        Self::new(bars)
    }
}

impl From<PriceHistory> for Vec<Bar> {
    fn from(history: PriceHistory) -> Self {
        history.bars
    }
}

/// Sparse fundamental snapshot. Every field is optional: `None` means the
/// provider did not report the value (unknown, never zero). The recognized
/// field set is closed by this struct; providers with extra fields simply
/// drop them at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundamentalData {
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume: Option<f64>,
    /// Trailing price/earnings ratio
    pub pe: Option<f64>,
    /// Price-to-book-value ratio
    pub pbv: Option<f64>,
    pub eps: Option<f64>,
    /// Return on equity as a fraction (0.15 = 15%)
    pub roe: Option<f64>,
    pub debt_equity: Option<f64>,
    /// Year-over-year revenue growth in percent
    pub revenue_growth: Option<f64>,
    /// Net profit margin in percent
    pub net_margin: Option<f64>,
}

impl FundamentalData {
    pub const FIELD_COUNT: usize = 10;

    fn fields(&self) -> [Option<f64>; Self::FIELD_COUNT] {
        [
            self.price,
            self.market_cap,
            self.volume,
            self.pe,
            self.pbv,
            self.eps,
            self.roe,
            self.debt_equity,
            self.revenue_growth,
            self.net_margin,
        ]
    }

    /// Number of recognized fields with no value. An explicit JSON null and
    /// a wholly absent key both land here; the missing-data penalty treats
    /// them identically.
    pub fn missing_field_count(&self) -> usize {
        self.fields().iter().filter(|f| f.is_none()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.missing_field_count() == Self::FIELD_COUNT
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeTrend {
    Increasing,
    Decreasing,
    Stable,
    #[default]
    Unavailable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Sideways,
    #[default]
    Unavailable,
}

/// Technical indicators derived from one history snapshot. Computed fresh
/// per analysis, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: Option<f64>,
    pub ma20: Option<f64>,
    pub ma50: Option<f64>,
    pub ma200: Option<f64>,
    pub macd: f64,
    pub signal: f64,
    pub volume_trend: VolumeTrend,
    pub trend: TrendDirection,
}

/// The three sub-scores, the weighted final score, and the raw
/// missing-data penalty that was applied to fundamental and risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub fundamental: f64,
    pub technical: f64,
    pub risk: f64,
    #[serde(rename = "final")]
    pub final_score: f64,
    pub missing_penalty: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    StrongBuy,
    SpeculativeBuy,
    Hold,
    Avoid,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "STRONG BUY",
            Recommendation::SpeculativeBuy => "BUY (Speculative)",
            Recommendation::Hold => "HOLD",
            Recommendation::Avoid => "AVOID",
        }
    }
}

/// Qualitative risk tier. Derived from the risk *score*, which is an
/// inverse indicator: a high score means low risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    LongTerm,
    MediumTerm,
    ShortTerm,
}

impl Horizon {
    pub fn label(&self) -> &'static str {
        match self {
            Horizon::LongTerm => "Long-term",
            Horizon::MediumTerm => "Medium-term",
            Horizon::ShortTerm => "Short-term",
        }
    }
}

/// Discrete verdict derived solely from a ScoreSet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub horizon: Horizon,
}

/// Per-dimension rationale naming the factors that helped or hurt each
/// sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub fundamental_text: String,
    pub technical_text: String,
    pub risk_text: String,
}

/// Analyst-style narrative conclusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conclusion {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub risks: Vec<String>,
    pub investor_profile: String,
    pub short_outlook: String,
    pub long_outlook: String,
}

/// Full analysis result handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockReport {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub current_price: Option<f64>,
    pub fundamentals: FundamentalData,
    pub indicators: IndicatorSet,
    pub scores: ScoreSet,
    pub decision: Decision,
    pub explanation: Explanation,
    pub conclusion: Conclusion,
}

/// History lookback requested from the data provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    SixMonths,
    #[default]
    OneYear,
    TwoYears,
    FiveYears,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
        }
    }

    /// Approximate trading-day count for the lookback
    pub fn trading_days(&self) -> usize {
        match self {
            Period::SixMonths => 126,
            Period::OneYear => 252,
            Period::TwoYears => 504,
            Period::FiveYears => 1260,
        }
    }
}

/// What a data provider returns for one symbol: possibly sparse
/// fundamentals plus a possibly empty price history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub fundamentals: FundamentalData,
    pub history: PriceHistory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, close: f64) -> Bar {
        Bar {
            date: date.parse().unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000_000.0,
        }
    }

    #[test]
    fn history_accepts_ascending_dates() {
        let history = PriceHistory::new(vec![
            bar("2024-01-02", 100.0),
            bar("2024-01-03", 101.0),
            bar("2024-01-04", 102.0),
        ]);
        assert!(history.is_ok());
        assert_eq!(history.unwrap().len(), 3);
    }

    #[test]
    fn history_rejects_duplicate_dates() {
        let result = PriceHistory::new(vec![bar("2024-01-02", 100.0), bar("2024-01-02", 101.0)]);
        assert!(matches!(result, Err(ScoringError::InvalidHistory(_))));
    }

    #[test]
    fn history_rejects_descending_dates() {
        let result = PriceHistory::new(vec![bar("2024-01-03", 100.0), bar("2024-01-02", 101.0)]);
        assert!(matches!(result, Err(ScoringError::InvalidHistory(_))));
    }

    #[test]
    fn empty_history_is_valid() {
        let history = PriceHistory::empty();
        assert!(history.is_empty());
        assert_eq!(history.last_close(), None);
    }

    #[test]
    fn missing_field_count_treats_null_and_absent_alike() {
        // Absent key and explicit null both deserialize to None
        let sparse: FundamentalData =
            serde_json::from_str(r#"{"pe": 12.5, "roe": null}"#).unwrap();
        assert_eq!(sparse.pe, Some(12.5));
        assert_eq!(sparse.roe, None);
        assert_eq!(sparse.missing_field_count(), 9);
    }

    #[test]
    fn unrecognized_fundamental_keys_are_ignored() {
        let data: FundamentalData =
            serde_json::from_str(r#"{"pe": 10.0, "dividend_yield": 0.03}"#).unwrap();
        assert_eq!(data.pe, Some(10.0));
        assert_eq!(data.missing_field_count(), 9);
    }

    #[test]
    fn empty_fundamentals_report_all_fields_missing() {
        let data = FundamentalData::default();
        assert!(data.is_empty());
        assert_eq!(data.missing_field_count(), FundamentalData::FIELD_COUNT);
    }

    #[test]
    fn history_deserialization_validates_order() {
        let json = r#"[
            {"date": "2024-01-03", "open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0, "volume": 1.0},
            {"date": "2024-01-02", "open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0, "volume": 1.0}
        ]"#;
        let result: Result<PriceHistory, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
