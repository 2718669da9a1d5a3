use async_trait::async_trait;

use crate::{MarketSnapshot, Period, ScoringError};

/// External market data collaborator. Implementations own all I/O,
/// caching and retry policy; the scoring core only consumes the snapshot.
/// Partial data is fine (sparse fundamentals, short or empty history);
/// a total failure surfaces as `ScoringError::Provider`.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch(&self, symbol: &str, period: Period) -> Result<MarketSnapshot, ScoringError>;
}
