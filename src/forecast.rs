// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! 12-month liquidity projection.
//!
//! Each month sums the budget rows of the forecast categories by direction,
//! adds an automatic fixed-cost contribution scanned from the cash entries,
//! and rolls the planned net into a cumulative balance that starts from the
//! converted sum of all account balances.

use crate::fx;
use crate::models::{CashEntry, Direction, EntryStatus, Recurrence, Workspace};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

pub const HORIZON_MONTHS: usize = 12;

#[derive(Debug, Clone, Serialize)]
pub struct MonthProjection {
    /// `YYYY-MM`, the budget-row key for this month.
    pub month: String,
    /// Short display label, e.g. `Sep 26`.
    pub label: String,
    pub planned_in: f64,
    pub planned_out: f64,
    pub actual_in: f64,
    pub actual_out: f64,
    pub fixed_planned: f64,
    pub fixed_actual: f64,
    pub planned_net: f64,
    pub actual_net: f64,
    /// Cumulative balance after this month's planned net.
    pub balance: f64,
}

/// Whether an entry contributes to the fixed-cost row of the given month.
///
/// Only fixed or recurring entries participate at all. Monthly recurrence
/// matches every month at or after its anchor date; every other recurrence,
/// including one-off entries, matches only its exact due month.
fn counts_in_month(e: &CashEntry, year: i32, month: u32) -> bool {
    if !e.is_fixed && e.recurrence == Recurrence::None {
        return false;
    }
    match e.recurrence {
        Recurrence::Monthly => {
            e.date.year() < year || (e.date.year() == year && e.date.month() <= month)
        }
        _ => e.date.year() == year && e.date.month() == month,
    }
}

/// Fixed-cost total for one month, as a positive home-currency magnitude.
/// With `paid_only` set, only entries already marked paid are counted.
pub fn fixed_costs(doc: &Workspace, year: i32, month: u32, paid_only: bool) -> f64 {
    doc.entries
        .iter()
        .filter(|e| counts_in_month(e, year, month))
        .filter(|e| !paid_only || e.status == EntryStatus::Paid)
        .map(|e| fx::to_home(&doc.rates, e.amount, &e.currency).abs())
        .sum()
}

fn budget_total(doc: &Workspace, month: &str, direction: Direction, actual: bool) -> f64 {
    doc.budgets
        .iter()
        .filter(|b| b.month_str == month)
        .filter(|b| {
            // Rows pointing at a deleted category count toward neither side.
            doc.liquidity_categories
                .iter()
                .find(|c| c.id == b.category_id)
                .is_some_and(|c| c.direction == direction)
        })
        .map(|b| if actual { b.actual } else { b.planned })
        .sum()
}

/// The next `n` calendar months starting at `start`'s month, as
/// `(first-of-month, YYYY-MM)` pairs.
pub fn month_slots(start: NaiveDate, n: usize) -> Vec<(NaiveDate, String)> {
    let first = start.with_day(1).unwrap_or(start);
    (0..n)
        .map(|i| {
            let d = first + Months::new(i as u32);
            (d, format!("{:04}-{:02}", d.year(), d.month()))
        })
        .collect()
}

/// Project the next 12 months from `start`. Deterministic in the document and
/// the start date, so callers pass today and tests pass a pinned date.
pub fn project(doc: &Workspace, start: NaiveDate) -> Vec<MonthProjection> {
    let mut balance = fx::total_liquidity(&doc.accounts, &doc.rates);
    month_slots(start, HORIZON_MONTHS)
        .into_iter()
        .map(|(d, id)| {
            let planned_in = budget_total(doc, &id, Direction::In, false);
            let planned_out = budget_total(doc, &id, Direction::Out, false);
            let actual_in = budget_total(doc, &id, Direction::In, true);
            let actual_out = budget_total(doc, &id, Direction::Out, true);
            let fixed_planned = fixed_costs(doc, d.year(), d.month(), false);
            let fixed_actual = fixed_costs(doc, d.year(), d.month(), true);
            let planned_net = planned_in - (planned_out + fixed_planned);
            let actual_net = actual_in - (actual_out + fixed_actual);
            balance += planned_net;
            MonthProjection {
                month: id,
                label: d.format("%b %y").to_string(),
                planned_in,
                planned_out,
                actual_in,
                actual_out,
                fixed_planned,
                fixed_actual,
                planned_net,
                actual_net,
                balance,
            }
        })
        .collect()
}
