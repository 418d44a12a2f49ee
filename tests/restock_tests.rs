// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use founderdeck::commands;
use founderdeck::models::{SupplyChainItem, Workspace};

fn item() -> SupplyChainItem {
    SupplyChainItem::new("1".into(), "Widget".into(), "B000TEST".into())
}

fn restock_args(args: &[&str]) -> clap::ArgMatches {
    founderdeck::cli::build_cli()
        .get_matches_from(args)
        .subcommand_matches("restock")
        .unwrap()
        .clone()
}

#[test]
fn reorder_from_target_coverage() {
    // 150 on hand at 5/day covers 30 days; the 90-day target wants 450,
    // so 300 more are due, which already clears the 200 MOQ.
    let mut i = item();
    i.fba_stock = 100.0;
    i.warehouse_stock = 50.0;
    i.inbound_stock = 0.0;
    i.daily_sales = 5.0;
    i.target_days = 90.0;
    i.moq = 200.0;

    assert_eq!(i.total_on_hand(), 150.0);
    assert_eq!(i.days_of_cover(), 30);
    assert_eq!(i.reorder_qty(), 300.0);
    assert_eq!(i.suggested_order(), Some(300.0));
}

#[test]
fn cover_is_zero_without_sales() {
    let mut i = item();
    i.fba_stock = 500.0;
    i.daily_sales = 0.0;
    assert_eq!(i.days_of_cover(), 0);
}

#[test]
fn cover_rounds_to_nearest_day() {
    let mut i = item();
    i.fba_stock = 10.0;
    i.daily_sales = 3.0;
    assert_eq!(i.days_of_cover(), 3);
    i.fba_stock = 11.0;
    assert_eq!(i.days_of_cover(), 4);
}

#[test]
fn production_stock_counts_against_reorders_but_not_cover() {
    let mut i = item();
    i.fba_stock = 100.0;
    i.production_stock = 400.0;
    i.daily_sales = 5.0;
    i.target_days = 90.0;
    assert_eq!(i.total_on_hand(), 100.0);
    // 450 wanted, 500 on hand or in production: nothing to order.
    assert_eq!(i.reorder_qty(), 0.0);
    assert_eq!(i.suggested_order(), None);
}

#[test]
fn reorder_is_never_negative() {
    let mut i = item();
    i.fba_stock = 10000.0;
    i.daily_sales = 1.0;
    i.target_days = 30.0;
    assert_eq!(i.reorder_qty(), 0.0);
    assert_eq!(i.suggested_order(), None);
}

#[test]
fn rm_stops_tracking_exactly_one_item() {
    let mut doc = Workspace::default();
    doc.supply_chain_items.push(item());
    // Decoy whose ASIN collides with the first item's name.
    doc.supply_chain_items
        .push(SupplyChainItem::new("2".into(), "Gadget".into(), "Widget".into()));
    let m = restock_args(&["founderdeck", "restock", "rm", "Widget"]);
    assert!(commands::restock::handle(&mut doc, &m).unwrap());
    assert_eq!(doc.supply_chain_items.len(), 1);
    assert_eq!(doc.supply_chain_items[0].name, "Gadget");
}

#[test]
fn small_shortfalls_are_bumped_to_the_moq() {
    let mut i = item();
    i.daily_sales = 1.0;
    i.target_days = 30.0;
    i.fba_stock = 25.0;
    i.moq = 100.0;
    assert_eq!(i.reorder_qty(), 5.0);
    assert_eq!(i.suggested_order(), Some(100.0));
}
