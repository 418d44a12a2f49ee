// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BudgetRow, Workspace};
use crate::utils::{
    category_by_name, category_name, maybe_print_json, parse_amount, parse_month, pretty_table,
};
use anyhow::Result;

pub fn handle(doc: &mut Workspace, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("set", sub)) => set(doc, sub),
        Some(("list", sub)) => {
            list(doc, sub)?;
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn set(doc: &mut Workspace, sub: &clap::ArgMatches) -> Result<bool> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let cat_name = sub.get_one::<String>("category").unwrap();
    let cat_id = category_by_name(&doc.liquidity_categories, cat_name)?.id.clone();
    let planned = sub.get_one::<String>("planned").map(|s| parse_amount(s));
    let actual = sub.get_one::<String>("actual").map(|s| parse_amount(s));
    if planned.is_none() && actual.is_none() {
        println!("Nothing to set; pass --planned and/or --actual");
        return Ok(false);
    }

    // Upsert on the (category, month) composite key.
    let row = match doc
        .budgets
        .iter_mut()
        .find(|b| b.category_id == cat_id && b.month_str == month)
    {
        Some(row) => row,
        None => {
            doc.budgets.push(BudgetRow {
                category_id: cat_id,
                month_str: month.clone(),
                planned: 0.0,
                actual: 0.0,
            });
            doc.budgets.last_mut().unwrap()
        }
    };
    if let Some(v) = planned {
        row.planned = v;
    }
    if let Some(v) = actual {
        row.actual = v;
    }
    println!(
        "Budget for {} / {}: planned {:.2}, actual {:.2}",
        month, cat_name, row.planned, row.actual
    );
    Ok(true)
}

fn list(doc: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub.get_one::<String>("month");
    let mut rows: Vec<&BudgetRow> = doc
        .budgets
        .iter()
        .filter(|b| month.is_none_or(|m| b.month_str == *m))
        .collect();
    rows.sort_by(|a, b| {
        a.month_str
            .cmp(&b.month_str)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let data = rows
        .iter()
        .map(|b| {
            vec![
                b.month_str.clone(),
                category_name(&doc.liquidity_categories, &b.category_id),
                format!("{:.2}", b.planned),
                format!("{:.2}", b.actual),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Category", "Planned", "Actual"], data)
    );
    Ok(())
}
