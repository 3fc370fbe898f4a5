use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only summary of the trading calendar over a requested window.
///
/// The observed bounds and membership describe the sessions the calendar
/// source actually returned, which may differ from the requested dates
/// (weekends and holidays are not sessions). The empty value means no valid
/// dates were requested or no session data has resolved yet.
///
/// Each recomputation replaces the prior value wholesale; callers may rely on
/// content equality only, never on identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingDayEvidence {
    pub observed_trading_dates: Option<HashSet<NaiveDate>>,
    pub observed_start_date: Option<NaiveDate>,
    pub observed_end_date: Option<NaiveDate>,
}

impl TradingDayEvidence {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.observed_trading_dates.is_none()
            && self.observed_start_date.is_none()
            && self.observed_end_date.is_none()
    }

    /// Membership test over the observed session set. Empty evidence
    /// contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.observed_trading_dates
            .as_ref()
            .map_or(false, |dates| dates.contains(&date))
    }
}
