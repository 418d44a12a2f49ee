// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CashEntry, EntryStatus, Recurrence, Workspace};
use crate::utils::{
    category_by_name, category_name, fmt_money, gen_id, maybe_print_json, parse_amount,
    parse_date, pretty_table,
};
use anyhow::{Result, anyhow};
use chrono::Utc;

pub fn handle(doc: &mut Workspace, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => add(doc, sub),
        Some(("list", sub)) => {
            list(doc, sub)?;
            Ok(false)
        }
        Some(("status", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let status = EntryStatus::parse(sub.get_one::<String>("status").unwrap())?;
            let entry = doc
                .entries
                .iter_mut()
                .find(|e| e.id == *id)
                .ok_or_else(|| anyhow!("Entry '{}' not found", id))?;
            entry.status = status;
            println!("'{}' is now {}", entry.title, status.label());
            Ok(true)
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let before = doc.entries.len();
            doc.entries.retain(|e| e.id != *id);
            if doc.entries.len() == before {
                return Err(anyhow!("Entry '{}' not found", id));
            }
            println!("Removed entry {}", id);
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn add(doc: &mut Workspace, sub: &clap::ArgMatches) -> Result<bool> {
    let title = sub.get_one::<String>("title").unwrap().clone();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap());
    let currency = sub.get_one::<String>("currency").unwrap().to_uppercase();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Utc::now().date_naive(),
    };
    let recurrence = Recurrence::parse(sub.get_one::<String>("recurrence").unwrap())?;
    let category_id = match sub.get_one::<String>("category") {
        Some(name) => category_by_name(&doc.categories, name)?.id.clone(),
        None => doc.categories.first().map(|c| c.id.clone()).unwrap_or_default(),
    };

    doc.entries.push(CashEntry {
        id: gen_id(),
        title: title.clone(),
        amount,
        currency: currency.clone(),
        category_id,
        date,
        is_fixed: sub.get_flag("fixed"),
        recurrence,
        status: EntryStatus::Planned,
    });
    println!("Booked '{}' {} on {}", title, fmt_money(amount, &currency), date);
    Ok(true)
}

fn list(doc: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let mut entries: Vec<&CashEntry> = doc.entries.iter().collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &entries)? {
        return Ok(());
    }
    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.date.to_string(),
                e.title.clone(),
                category_name(&doc.categories, &e.category_id),
                fmt_money(e.amount, &e.currency),
                if e.is_fixed { "fixed".into() } else { String::new() },
                e.status.label().to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Title", "Category", "Amount", "", "Status"],
            rows,
        )
    );
    Ok(())
}
