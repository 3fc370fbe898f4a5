use async_trait::async_trait;
use chrono::NaiveDate;

use super::benchmark_model::{BenchmarkEntry, BenchmarkHistory, SymphonyBenchmark};
use crate::errors::Result;

/// External benchmark data sources.
#[async_trait]
pub trait BenchmarkProviderTrait: Send + Sync {
    /// Fetches performance history for a plain ticker, optionally scoped to
    /// a date range and an account.
    async fn get_benchmark_history(
        &self,
        ticker: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        account_id: Option<&str>,
    ) -> Result<BenchmarkHistory>;

    /// Fetches benchmark data for a composite symphony reference by id.
    async fn get_symphony_benchmark(&self, symphony_id: &str) -> Result<SymphonyBenchmark>;
}

/// Bounded collection of benchmark overlays exposed to the chart layer.
#[async_trait]
pub trait BenchmarkServiceTrait: Send + Sync {
    /// Starts tracking `ticker`. No-op when the collection is at capacity or
    /// the ticker is already tracked. A fetch failure removes the entry
    /// again; nothing is surfaced to the caller.
    async fn add(&self, ticker: &str);

    /// Stops tracking `ticker` if present. Its color becomes reusable.
    fn remove(&self, ticker: &str);

    /// Consistent snapshot of the current collection.
    fn snapshot(&self) -> Vec<BenchmarkEntry>;
}
