use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Chart period selected in the UI. The period determines which calendar
/// dates are requested from the session resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ChartPeriod {
    OneMonth,
    #[default]
    ThreeMonths,
    SixMonths,
    YearToDate,
    OneYear,
    All,
}

impl ChartPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            ChartPeriod::OneMonth => "1M",
            ChartPeriod::ThreeMonths => "3M",
            ChartPeriod::SixMonths => "6M",
            ChartPeriod::YearToDate => "YTD",
            ChartPeriod::OneYear => "1Y",
            ChartPeriod::All => "All",
        }
    }

    /// Inclusive start of the period ending at `today`. `All` has no lower
    /// bound; its date list comes from the loaded series itself.
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            ChartPeriod::OneMonth => today.checked_sub_months(Months::new(1)),
            ChartPeriod::ThreeMonths => today.checked_sub_months(Months::new(3)),
            ChartPeriod::SixMonths => today.checked_sub_months(Months::new(6)),
            ChartPeriod::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            ChartPeriod::OneYear => today.checked_sub_months(Months::new(12)),
            ChartPeriod::All => None,
        }
    }

    /// Calendar dates requested for this period, ISO-formatted for the
    /// session resolver.
    pub fn requested_dates(&self, today: NaiveDate) -> Vec<String> {
        match self.start_date(today) {
            Some(start) => days_between(start, today)
                .iter()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Inclusive day enumeration. Empty when `start > end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}
