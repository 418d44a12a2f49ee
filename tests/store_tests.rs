// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use founderdeck::models::{
    BudgetRow, CashEntry, EntryStatus, ProductStatus, Recurrence, SupplyChainItem, Workspace,
};
use founderdeck::store;
use tempfile::tempdir;

fn populated() -> Workspace {
    let mut doc = Workspace::default();
    doc.supply_chain_items.push(SupplyChainItem::new(
        "sc1".into(),
        "Widget".into(),
        "B000TEST".into(),
    ));
    doc.entries.push(CashEntry {
        id: "e1".into(),
        title: "Hosting".into(),
        amount: -25.0,
        currency: "USD".into(),
        category_id: "cat_out_4".into(),
        date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        is_fixed: true,
        recurrence: Recurrence::Monthly,
        status: EntryStatus::Paid,
    });
    doc.budgets.push(BudgetRow {
        category_id: "l_cat_1".into(),
        month_str: "2026-09".into(),
        planned: 8000.0,
        actual: 0.0,
    });
    doc
}

#[test]
fn save_and_reload_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    let doc = populated();

    store::save(&path, &doc).unwrap();
    let reloaded = store::load_or_default(&path);

    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        serde_json::to_value(&reloaded).unwrap()
    );
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let doc = store::load_or_default(&dir.path().join("nope.json"));
    assert_eq!(doc.accounts.len(), 1);
    assert_eq!(doc.accounts[0].balance, 25000.0);
}

#[test]
fn malformed_json_is_discarded_wholesale() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let doc = store::load_or_default(&path);
    assert_eq!(doc.products.len(), 1);
    assert_eq!(doc.products[0].name, "Bamboo organizer");
}

#[test]
fn missing_products_collection_falls_back_to_the_seed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    let mut v = serde_json::to_value(Workspace::default()).unwrap();
    v.as_object_mut().unwrap().remove("products");
    std::fs::write(&path, serde_json::to_string(&v).unwrap()).unwrap();

    let doc = store::load_or_default(&path);
    assert_eq!(doc.products.len(), 1);
    assert_eq!(doc.products[0].sku, "BAM-001");
    assert_eq!(doc.products[0].status, ProductStatus::ActiveSales);
}

#[test]
fn stored_products_are_backfilled_from_the_template() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    let mut v = serde_json::to_value(Workspace::default()).unwrap();
    // A product written by an older version: only a few fields present.
    v["products"] = serde_json::json!([
        { "id": "p9", "name": "Steel organizer", "status": "DEV" }
    ]);
    std::fs::write(&path, serde_json::to_string(&v).unwrap()).unwrap();

    let doc = store::load_or_default(&path);
    let p = &doc.products[0];
    assert_eq!(p.id, "p9");
    assert_eq!(p.name, "Steel organizer");
    assert_eq!(p.status, ProductStatus::Dev);
    // Backfilled from the template.
    assert_eq!(p.sku, "BAM-001");
    assert_eq!(p.stock, 450.0);
    assert_eq!(p.costs.exw, 4.5);
    assert!(p.agreements.is_empty());
}

#[test]
fn null_collections_keep_their_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    let mut v = serde_json::to_value(Workspace::default()).unwrap();
    v["liquidityCategories"] = serde_json::Value::Null;
    v["supplyChainItems"] = serde_json::Value::Null;
    std::fs::write(&path, serde_json::to_string(&v).unwrap()).unwrap();

    let doc = store::load_or_default(&path);
    assert_eq!(doc.liquidity_categories.len(), 4);
    assert!(doc.supply_chain_items.is_empty());
}

#[test]
fn unknown_fields_do_not_break_loading() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    let mut v = serde_json::to_value(Workspace::default()).unwrap();
    v["somethingNew"] = serde_json::json!({ "a": 1 });
    std::fs::write(&path, serde_json::to_string(&v).unwrap()).unwrap();

    let doc = store::load_or_default(&path);
    assert_eq!(doc.accounts.len(), 1);
}
