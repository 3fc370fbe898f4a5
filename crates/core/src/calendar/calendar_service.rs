//! Resolves requested calendar dates into observed trading-session evidence.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::{debug, warn};
use moka::future::Cache;
use regex::Regex;

use super::calendar_model::TradingDayEvidence;
use super::calendar_traits::{CalendarServiceTrait, TradingSessionProviderTrait};
use crate::constants::{
    DEFAULT_EXCHANGE_CALENDAR, SESSION_CACHE_MAX_CAPACITY, SESSION_CACHE_TTL_SECS,
};

lazy_static! {
    /// Strict `YYYY-MM-DD` shape. Anything else in the requested dates is
    /// placeholder data from upstream and is discarded, not rejected.
    static ref ISO_DATE_RE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

type SessionRangeKey = (NaiveDate, NaiveDate, String);

pub struct CalendarService {
    provider: Arc<dyn TradingSessionProviderTrait>,
    exchange: String,
    session_cache: Cache<SessionRangeKey, Arc<Vec<NaiveDate>>>,
}

impl CalendarService {
    pub fn new(provider: Arc<dyn TradingSessionProviderTrait>) -> Self {
        Self::with_exchange(provider, DEFAULT_EXCHANGE_CALENDAR)
    }

    pub fn with_exchange(provider: Arc<dyn TradingSessionProviderTrait>, exchange: &str) -> Self {
        Self {
            provider,
            exchange: exchange.to_string(),
            session_cache: Cache::builder()
                .time_to_live(Duration::from_secs(SESSION_CACHE_TTL_SECS))
                .max_capacity(SESSION_CACHE_MAX_CAPACITY)
                .build(),
        }
    }

    fn parse_requested_dates(dates: &[String]) -> Vec<NaiveDate> {
        dates
            .iter()
            .filter(|raw| ISO_DATE_RE.is_match(raw))
            .filter_map(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .collect()
    }

    /// Fetches the session list for `[start, end]`, reusing an equivalent
    /// resolved query for up to an hour. Concurrent callers for the same
    /// range coalesce onto one in-flight request.
    async fn sessions_for_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Option<Arc<Vec<NaiveDate>>> {
        let key = (start, end, self.exchange.clone());
        let provider = Arc::clone(&self.provider);
        let exchange = self.exchange.clone();

        let result = self
            .session_cache
            .try_get_with(key, async move {
                provider
                    .get_trading_sessions(start, end, &exchange)
                    .await
                    .map(Arc::new)
            })
            .await;

        match result {
            Ok(sessions) => Some(sessions),
            Err(err) => {
                warn!(
                    "Trading session fetch for {}..{} ({}) failed: {}",
                    start, end, self.exchange, err
                );
                None
            }
        }
    }
}

#[async_trait]
impl CalendarServiceTrait for CalendarService {
    async fn resolve_observed_sessions(&self, dates: &[String]) -> TradingDayEvidence {
        let valid_dates = Self::parse_requested_dates(dates);
        if valid_dates.is_empty() {
            debug!("No valid calendar dates requested; skipping session lookup");
            return TradingDayEvidence::empty();
        }

        // The requested dates are not assumed sorted.
        let mut min_date = valid_dates[0];
        let mut max_date = valid_dates[0];
        for date in &valid_dates[1..] {
            if *date < min_date {
                min_date = *date;
            }
            if *date > max_date {
                max_date = *date;
            }
        }

        let sessions = match self.sessions_for_range(min_date, max_date).await {
            Some(sessions) if !sessions.is_empty() => sessions,
            _ => return TradingDayEvidence::empty(),
        };

        // Neither is the returned session list.
        let mut observed_start = sessions[0];
        let mut observed_end = sessions[0];
        for session in sessions.iter() {
            if *session < observed_start {
                observed_start = *session;
            }
            if *session > observed_end {
                observed_end = *session;
            }
        }

        TradingDayEvidence {
            observed_trading_dates: Some(sessions.iter().copied().collect::<HashSet<_>>()),
            observed_start_date: Some(observed_start),
            observed_end_date: Some(observed_end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CalendarError, Error, Result};
    use std::sync::Mutex;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn iso(dates: &[&str]) -> Vec<String> {
        dates.iter().map(|d| d.to_string()).collect()
    }

    // =========================================================================
    // Mock session provider
    // =========================================================================

    struct MockSessionProvider {
        sessions: Vec<NaiveDate>,
        fail: bool,
        calls: Mutex<Vec<(NaiveDate, NaiveDate, String)>>,
    }

    impl MockSessionProvider {
        fn returning(sessions: Vec<NaiveDate>) -> Arc<Self> {
            Arc::new(Self {
                sessions,
                fail: false,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                sessions: Vec::new(),
                fail: true,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_call(&self) -> (NaiveDate, NaiveDate, String) {
            self.calls.lock().unwrap().last().unwrap().clone()
        }
    }

    #[async_trait]
    impl TradingSessionProviderTrait for MockSessionProvider {
        async fn get_trading_sessions(
            &self,
            start_date: NaiveDate,
            end_date: NaiveDate,
            exchange: &str,
        ) -> Result<Vec<NaiveDate>> {
            self.calls
                .lock()
                .unwrap()
                .push((start_date, end_date, exchange.to_string()));
            if self.fail {
                return Err(Error::Calendar(CalendarError::SessionFetch(
                    "upstream unavailable".to_string(),
                )));
            }
            Ok(self.sessions.clone())
        }
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    #[tokio::test]
    async fn empty_request_resolves_empty_without_query() {
        let provider = MockSessionProvider::returning(vec![date("2024-01-02")]);
        let service = CalendarService::new(provider.clone());

        let evidence = service.resolve_observed_sessions(&[]).await;

        assert!(evidence.is_empty());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn malformed_dates_resolve_empty_without_query() {
        let provider = MockSessionProvider::returning(vec![date("2024-01-02")]);
        let service = CalendarService::new(provider.clone());

        let evidence = service
            .resolve_observed_sessions(&iso(&["not-a-date", "2024-1-5", "2024-13-45", ""]))
            .await;

        assert!(evidence.is_empty());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn queries_min_max_of_unsorted_request() {
        let provider = MockSessionProvider::returning(vec![date("2024-01-03")]);
        let service = CalendarService::new(provider.clone());

        service
            .resolve_observed_sessions(&iso(&["2024-01-10", "2024-01-02", "2024-01-05"]))
            .await;

        let (start, end, exchange) = provider.last_call();
        assert_eq!(start, date("2024-01-02"));
        assert_eq!(end, date("2024-01-10"));
        assert_eq!(exchange, DEFAULT_EXCHANGE_CALENDAR);
    }

    #[tokio::test]
    async fn malformed_dates_are_excluded_from_the_range() {
        let provider = MockSessionProvider::returning(vec![date("2024-01-03")]);
        let service = CalendarService::new(provider.clone());

        service
            .resolve_observed_sessions(&iso(&["2024-01-05", "garbage", "2024-01-03"]))
            .await;

        let (start, end, _) = provider.last_call();
        assert_eq!(start, date("2024-01-03"));
        assert_eq!(end, date("2024-01-05"));
    }

    #[tokio::test]
    async fn derives_bounds_and_membership_from_unsorted_response() {
        let provider = MockSessionProvider::returning(vec![
            date("2024-01-08"),
            date("2024-01-02"),
            date("2024-01-04"),
        ]);
        let service = CalendarService::new(provider);

        let evidence = service
            .resolve_observed_sessions(&iso(&["2024-01-01", "2024-01-10"]))
            .await;

        assert_eq!(evidence.observed_start_date, Some(date("2024-01-02")));
        assert_eq!(evidence.observed_end_date, Some(date("2024-01-08")));
        assert!(evidence.contains(date("2024-01-04")));
        assert!(!evidence.contains(date("2024-01-03")));
    }

    #[tokio::test]
    async fn provider_failure_resolves_empty() {
        let provider = MockSessionProvider::failing();
        let service = CalendarService::new(provider.clone());

        let evidence = service
            .resolve_observed_sessions(&iso(&["2024-01-02", "2024-01-05"]))
            .await;

        assert!(evidence.is_empty());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_session_list_resolves_empty() {
        let provider = MockSessionProvider::returning(Vec::new());
        let service = CalendarService::new(provider);

        let evidence = service
            .resolve_observed_sessions(&iso(&["2024-01-02", "2024-01-05"]))
            .await;

        assert!(evidence.is_empty());
    }

    // =========================================================================
    // Caching
    // =========================================================================

    #[tokio::test]
    async fn equivalent_resolved_query_is_reused() {
        let provider = MockSessionProvider::returning(vec![date("2024-01-02")]);
        let service = CalendarService::new(provider.clone());
        let dates = iso(&["2024-01-02", "2024-01-05"]);

        let first = service.resolve_observed_sessions(&dates).await;
        let second = service.resolve_observed_sessions(&dates).await;

        assert_eq!(provider.call_count(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn distinct_ranges_query_separately() {
        let provider = MockSessionProvider::returning(vec![date("2024-01-02")]);
        let service = CalendarService::new(provider.clone());

        service
            .resolve_observed_sessions(&iso(&["2024-01-02", "2024-01-05"]))
            .await;
        service
            .resolve_observed_sessions(&iso(&["2024-01-02", "2024-01-08"]))
            .await;

        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn failed_query_is_retried_on_next_resolve() {
        let provider = MockSessionProvider::failing();
        let service = CalendarService::new(provider.clone());
        let dates = iso(&["2024-01-02", "2024-01-05"]);

        service.resolve_observed_sessions(&dates).await;
        service.resolve_observed_sessions(&dates).await;

        // Failures are not cached as resolved results.
        assert_eq!(provider.call_count(), 2);
    }
}
