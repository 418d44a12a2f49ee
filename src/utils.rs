// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Product, SupplyChainItem, Workspace};
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use std::sync::atomic::{AtomicI64, Ordering};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

/// Amount fields coerce anything non-numeric to zero instead of failing.
pub fn parse_amount(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(0.0)
}

pub fn fmt_money(v: f64, ccy: &str) -> String {
    format!("{} {:.2}", ccy, v)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond-timestamp identifier, nudged forward when two are generated in
/// the same millisecond.
pub fn gen_id() -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let id = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    id.to_string()
}

pub fn product_mut<'a>(doc: &'a mut Workspace, name: &str) -> Result<&'a mut Product> {
    doc.products
        .iter_mut()
        .find(|p| p.name == name || p.sku == name)
        .ok_or_else(|| anyhow!("Product '{}' not found", name))
}

pub fn product<'a>(doc: &'a Workspace, name: &str) -> Result<&'a Product> {
    doc.products
        .iter()
        .find(|p| p.name == name || p.sku == name)
        .ok_or_else(|| anyhow!("Product '{}' not found", name))
}

pub fn supply_item_mut<'a>(doc: &'a mut Workspace, name: &str) -> Result<&'a mut SupplyChainItem> {
    doc.supply_chain_items
        .iter_mut()
        .find(|i| i.name == name || i.asin == name)
        .ok_or_else(|| anyhow!("Supply-chain item '{}' not found", name))
}

/// Resolve a category by name in whichever list the caller works against.
pub fn category_by_name<'a>(list: &'a [Category], name: &str) -> Result<&'a Category> {
    list.iter()
        .find(|c| c.name == name)
        .ok_or_else(|| anyhow!("Category '{}' not found", name))
}

/// Category name for an id; dangling references render as absent.
pub fn category_name(list: &[Category], id: &str) -> String {
    list.iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_default()
}
