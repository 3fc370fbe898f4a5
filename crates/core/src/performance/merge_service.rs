//! Merges a live overlay series into a finalized historical series.
//!
//! The live feed reports cumulative returns measured from its own start, so
//! splicing it onto the historical record verbatim would jump the chart at the
//! boundary. The merger rebases the live portion geometrically against its
//! first point so the combined series is continuous.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::performance_model::PerformancePoint;
use crate::constants::DECIMAL_PRECISION;

const HUNDRED: Decimal = dec!(100);

/// Combines a historical series with a live overlay into one ordered,
/// duplicate-free series.
///
/// The live series is authoritative for the dates it covers: a historical
/// point sharing a date with a live point is superseded by the rebased live
/// point. Historical points on other dates are kept verbatim. The output is
/// sorted ascending by date.
///
/// The first live point is the rebasing anchor; its cumulative TWR/MWR become
/// exactly zero and its drawdown is forced to zero (no drawdown has been
/// observed yet relative to the live window's peak). Later live points keep
/// their original drawdown, which is already measured against a running peak.
///
/// Pure and deterministic: no I/O, no error channel.
pub fn merge_live_data(
    live: &[PerformancePoint],
    historical: &[PerformancePoint],
) -> Vec<PerformancePoint> {
    let anchor = match live.first() {
        Some(anchor) => anchor,
        None => return historical.to_vec(),
    };

    let live_dates: HashSet<NaiveDate> = live.iter().map(|point| point.date).collect();

    let mut merged: Vec<PerformancePoint> = historical
        .iter()
        .filter(|point| !live_dates.contains(&point.date))
        .cloned()
        .collect();

    let twr_anchor = anchor.time_weighted_return;
    let mwr_anchor = anchor.money_weighted_return;

    for (index, point) in live.iter().enumerate() {
        let mut rebased = point.clone();
        rebased.time_weighted_return = rebase_cumulative_pct(point.time_weighted_return, twr_anchor);
        rebased.money_weighted_return =
            rebase_cumulative_pct(point.money_weighted_return, mwr_anchor);
        if index == 0 {
            rebased.current_drawdown = Decimal::ZERO;
        }
        merged.push(rebased);
    }

    merged.sort_by_key(|point| point.date);
    merged
}

/// Geometrically rebases a cumulative percentage return against an anchor.
///
/// `((1 + value/100) / (1 + anchor/100) - 1) * 100`, so multiplicative
/// returns compose correctly across the new baseline. An anchor of exactly
/// −100% leaves no growth factor to divide by; the rebased value is pinned to
/// zero in that case.
fn rebase_cumulative_pct(value: Decimal, anchor: Decimal) -> Decimal {
    let anchor_factor = Decimal::ONE + anchor / HUNDRED;
    if anchor_factor.is_zero() {
        return Decimal::ZERO;
    }
    let value_factor = Decimal::ONE + value / HUNDRED;
    ((value_factor / anchor_factor - Decimal::ONE) * HUNDRED).round_dp(DECIMAL_PRECISION)
}
