// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use founderdeck::forecast;
use founderdeck::models::{
    BudgetRow, CashEntry, EntryStatus, Recurrence, Workspace,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(amount: f64, d: NaiveDate, fixed: bool, rec: Recurrence, status: EntryStatus) -> CashEntry {
    CashEntry {
        id: "e1".into(),
        title: "test".into(),
        amount,
        currency: "CHF".into(),
        category_id: String::new(),
        date: d,
        is_fixed: fixed,
        recurrence: rec,
        status,
    }
}

#[test]
fn one_off_paid_fixed_cost_hits_only_its_month() {
    let mut doc = Workspace::default();
    doc.entries.push(entry(
        -500.0,
        date(2026, 8, 10),
        true,
        Recurrence::None,
        EntryStatus::Paid,
    ));

    let months = forecast::project(&doc, date(2026, 8, 29));
    assert_eq!(months.len(), forecast::HORIZON_MONTHS);
    assert_eq!(months[0].month, "2026-08");
    assert_eq!(months[0].fixed_planned, 500.0);
    assert_eq!(months[0].fixed_actual, 500.0);
    for m in &months[1..] {
        assert_eq!(m.fixed_planned, 0.0);
        assert_eq!(m.fixed_actual, 0.0);
    }
}

#[test]
fn monthly_recurrence_repeats_from_its_anchor() {
    let mut doc = Workspace::default();
    doc.entries.push(entry(
        -200.0,
        date(2026, 10, 1),
        false,
        Recurrence::Monthly,
        EntryStatus::Planned,
    ));

    let months = forecast::project(&doc, date(2026, 8, 29));
    // Before the anchor: nothing.
    assert_eq!(months[0].fixed_planned, 0.0);
    assert_eq!(months[1].fixed_planned, 0.0);
    // From October on: every month.
    for m in &months[2..] {
        assert_eq!(m.fixed_planned, 200.0);
        // Not paid, so the actual column stays empty.
        assert_eq!(m.fixed_actual, 0.0);
    }
}

#[test]
fn unpaid_and_deferred_entries_stay_out_of_actuals() {
    let mut doc = Workspace::default();
    doc.entries.push(entry(
        -100.0,
        date(2026, 8, 5),
        true,
        Recurrence::None,
        EntryStatus::Deferred,
    ));
    let months = forecast::project(&doc, date(2026, 8, 29));
    assert_eq!(months[0].fixed_planned, 100.0);
    assert_eq!(months[0].fixed_actual, 0.0);
}

#[test]
fn non_fixed_one_off_entries_are_ignored() {
    let mut doc = Workspace::default();
    doc.entries.push(entry(
        -900.0,
        date(2026, 8, 5),
        false,
        Recurrence::None,
        EntryStatus::Paid,
    ));
    let months = forecast::project(&doc, date(2026, 8, 29));
    assert_eq!(months[0].fixed_planned, 0.0);
    assert_eq!(months[0].fixed_actual, 0.0);
}

#[test]
fn foreign_currency_fixed_costs_are_converted() {
    let mut doc = Workspace::default();
    let mut e = entry(-100.0, date(2026, 8, 5), true, Recurrence::None, EntryStatus::Paid);
    e.currency = "EUR".into();
    doc.entries.push(e);
    let months = forecast::project(&doc, date(2026, 8, 29));
    assert_eq!(months[0].fixed_planned, 94.0);
}

#[test]
fn budgets_split_by_category_direction() {
    let mut doc = Workspace::default();
    // l_cat_1 is seeded IN, l_cat_2 seeded OUT.
    doc.budgets.push(BudgetRow {
        category_id: "l_cat_1".into(),
        month_str: "2026-09".into(),
        planned: 8000.0,
        actual: 7500.0,
    });
    doc.budgets.push(BudgetRow {
        category_id: "l_cat_2".into(),
        month_str: "2026-09".into(),
        planned: 3000.0,
        actual: 0.0,
    });
    // Dangling reference: counts toward neither direction.
    doc.budgets.push(BudgetRow {
        category_id: "gone".into(),
        month_str: "2026-09".into(),
        planned: 999.0,
        actual: 999.0,
    });

    let months = forecast::project(&doc, date(2026, 8, 29));
    let sep = &months[1];
    assert_eq!(sep.month, "2026-09");
    assert_eq!(sep.planned_in, 8000.0);
    assert_eq!(sep.planned_out, 3000.0);
    assert_eq!(sep.actual_in, 7500.0);
    assert_eq!(sep.planned_net, 5000.0);
}

#[test]
fn balance_rolls_the_planned_net_forward() {
    let mut doc = Workspace::default();
    doc.entries.push(entry(
        -1000.0,
        date(2026, 8, 1),
        false,
        Recurrence::Monthly,
        EntryStatus::Planned,
    ));

    // Seeded balance is 25000 CHF; every month loses 1000.
    let months = forecast::project(&doc, date(2026, 8, 29));
    assert_eq!(months[0].balance, 24000.0);
    assert_eq!(months[1].balance, 23000.0);
    assert_eq!(months[11].balance, 13000.0);
}

#[test]
fn month_slots_cross_year_boundaries() {
    let slots = forecast::month_slots(date(2026, 11, 15), 4);
    let ids: Vec<&str> = slots.iter().map(|(_, id)| id.as_str()).collect();
    assert_eq!(ids, vec!["2026-11", "2026-12", "2027-01", "2027-02"]);
}
