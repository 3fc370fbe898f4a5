use async_trait::async_trait;
use chrono::NaiveDate;

use super::calendar_model::TradingDayEvidence;
use crate::errors::Result;

/// External trading-calendar source.
#[async_trait]
pub trait TradingSessionProviderTrait: Send + Sync {
    /// Returns the trading sessions in `[start_date, end_date]` for the
    /// given exchange calendar. Ordering of the returned dates is not
    /// guaranteed.
    async fn get_trading_sessions(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exchange: &str,
    ) -> Result<Vec<NaiveDate>>;
}

#[async_trait]
pub trait CalendarServiceTrait: Send + Sync {
    /// Resolves trading-day evidence for the requested date strings.
    ///
    /// Malformed dates are discarded, fetch failures degrade to empty
    /// evidence; this never errors.
    async fn resolve_observed_sessions(&self, dates: &[String]) -> TradingDayEvidence;
}
