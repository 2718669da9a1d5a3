use chrono::Utc;

use fundamental_scoring::fundamental_score;
use risk_scoring::{annualized_volatility, risk_score};
use scoring_core::{
    FundamentalData, MarketDataProvider, Period, PriceHistory, ScoringError, StockReport,
};
use technical_scoring::{compute_indicators, technical_score};

use crate::aggregate::{aggregate_scores, ScoringConfig};
use crate::decision::decide;
use crate::explain::{conclude, explain};

/// Score already-fetched data in one synchronous, side-effect-free pass.
/// This is the cache-agnostic core entry point: no I/O, no shared state,
/// safe to call concurrently across symbols.
pub fn score_snapshot(
    symbol: &str,
    fundamentals: &FundamentalData,
    history: &PriceHistory,
    config: &ScoringConfig,
) -> StockReport {
    let indicators = compute_indicators(history);

    let fundamental = fundamental_score(fundamentals);
    let technical = technical_score(&indicators);
    let risk = risk_score(fundamentals, history);

    let scores = aggregate_scores(fundamentals, fundamental, technical, risk, config);
    let decision = decide(&scores);

    let volatility = annualized_volatility(history);
    let explanation = explain(fundamentals, &indicators, &scores, volatility);
    let conclusion = conclude(fundamentals, &indicators, &decision);

    StockReport {
        symbol: symbol.to_string(),
        timestamp: Utc::now(),
        current_price: fundamentals.price.or_else(|| history.last_close()),
        fundamentals: fundamentals.clone(),
        indicators,
        scores,
        decision,
        explanation,
        conclusion,
    }
}

/// Front door for callers that own a data provider. Fetching is the only
/// async step; everything after the snapshot lands is synchronous.
pub struct StockScorer<P> {
    provider: P,
    config: ScoringConfig,
}

impl<P: MarketDataProvider> StockScorer<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: ScoringConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn analyze(&self, symbol: &str, period: Period) -> Result<StockReport, ScoringError> {
        tracing::info!("Starting analysis for {} (period: {})", symbol, period.as_str());

        let snapshot = self.provider.fetch(symbol, period).await?;

        if snapshot.history.is_empty() {
            tracing::warn!("No price history for {}; technical indicators degrade", symbol);
        }
        let missing = snapshot.fundamentals.missing_field_count();
        if missing > 0 {
            tracing::warn!("{} fundamental fields missing for {}", missing, symbol);
        }

        let report = score_snapshot(symbol, &snapshot.fundamentals, &snapshot.history, &self.config);

        tracing::info!(
            "Analysis for {} complete: final score {:.1}, {}",
            symbol,
            report.scores.final_score,
            report.decision.recommendation.label()
        );

        Ok(report)
    }
}
