use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One calendar day of portfolio performance.
///
/// All return fields are cumulative percentages (`5` means +5%) except
/// `daily_return_pct`, which covers the single day. `current_drawdown` is the
/// decline from the running peak and is always ≤ 0. Within one series, `date`
/// values are strictly increasing and unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub portfolio_value: Decimal,
    pub net_deposits: Decimal,
    pub cumulative_return_pct: Decimal,
    pub daily_return_pct: Decimal,
    pub time_weighted_return: Decimal,
    pub money_weighted_return: Decimal,
    pub current_drawdown: Decimal,
}
