// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use founderdeck::fx;
use founderdeck::models::{HOME_CURRENCY, Workspace};
use founderdeck::utils::parse_amount;
use std::collections::BTreeMap;

fn rates() -> BTreeMap<String, f64> {
    BTreeMap::from([("EUR".to_string(), 0.94), ("USD".to_string(), 0.88)])
}

#[test]
fn home_currency_is_always_parity() {
    assert_eq!(fx::rate(&rates(), HOME_CURRENCY), 1.0);
    assert_eq!(fx::to_home(&rates(), 123.45, HOME_CURRENCY), 123.45);
    // Even when someone puts a CHF row in the table, the home currency wins.
    let mut r = rates();
    r.insert(HOME_CURRENCY.to_string(), 0.5);
    assert_eq!(fx::rate(&r, HOME_CURRENCY), 1.0);
}

#[test]
fn known_currencies_use_the_table() {
    assert_eq!(fx::to_home(&rates(), 100.0, "EUR"), 94.0);
    assert_eq!(fx::to_home(&rates(), 100.0, "USD"), 88.0);
}

#[test]
fn unknown_currency_falls_back_to_parity() {
    assert_eq!(fx::rate(&rates(), "GBP"), 1.0);
    assert_eq!(fx::to_home(&rates(), 42.0, "GBP"), 42.0);
}

#[test]
fn seeded_workspace_liquidity_is_the_chf_balance() {
    // 25000 CHF, no other accounts: conversion must not touch it.
    let doc = Workspace::default();
    assert_eq!(fx::total_liquidity(&doc.accounts, &doc.rates), 25000.0);
}

#[test]
fn liquidity_sums_converted_balances() {
    let mut doc = Workspace::default();
    doc.accounts[0].balance = 1000.0;
    let mut eur = doc.accounts[0].clone();
    eur.id = "acc2".into();
    eur.currency = "EUR".into();
    eur.balance = 100.0;
    doc.accounts.push(eur);
    assert_eq!(fx::total_liquidity(&doc.accounts, &doc.rates), 1094.0);
}

#[test]
fn non_numeric_amounts_coerce_to_zero() {
    assert_eq!(parse_amount("abc"), 0.0);
    assert_eq!(parse_amount(""), 0.0);
    assert_eq!(parse_amount("-12.5"), -12.5);
}
