// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{SupplyChainItem, Workspace};
use crate::utils::{gen_id, maybe_print_json, parse_amount, pretty_table, supply_item_mut};
use anyhow::{Result, anyhow};

pub fn handle(doc: &mut Workspace, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let asin = sub.get_one::<String>("asin").unwrap();
            doc.supply_chain_items
                .push(SupplyChainItem::new(gen_id(), name.clone(), asin.clone()));
            println!("Tracking '{}'", name);
            Ok(true)
        }
        Some(("list", sub)) => {
            list(doc, sub)?;
            Ok(false)
        }
        Some(("set", sub)) => set(doc, sub),
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            // Resolve exactly one item, same lookup as supply_item_mut.
            let idx = doc
                .supply_chain_items
                .iter()
                .position(|i| i.name == *name || i.asin == *name)
                .ok_or_else(|| anyhow!("Supply-chain item '{}' not found", name))?;
            let removed = doc.supply_chain_items.remove(idx);
            println!("Stopped tracking '{}'", removed.name);
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn list(doc: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(
        sub.get_flag("json"),
        sub.get_flag("jsonl"),
        &doc.supply_chain_items,
    )? {
        return Ok(());
    }
    let rows = doc
        .supply_chain_items
        .iter()
        .map(|i| {
            vec![
                format!("{} [{}]", i.name, i.asin),
                format!("{:.0}", i.fba_stock),
                format!("{:.0}", i.warehouse_stock),
                format!("{:.0}", i.inbound_stock),
                format!("{:.0}", i.production_stock),
                format!("{:.1}", i.daily_sales),
                format!("{} d", i.days_of_cover()),
                format!("{:.0}", i.target_days),
                match i.suggested_order() {
                    Some(qty) => format!("{:.0}", qty),
                    None => "-".to_string(),
                },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Product", "FBA", "Warehouse", "Inbound", "Production", "Sales/day", "Cover",
                "Target", "Order qty",
            ],
            rows,
        )
    );
    Ok(())
}

fn set(doc: &mut Workspace, sub: &clap::ArgMatches) -> Result<bool> {
    let item = supply_item_mut(doc, sub.get_one::<String>("name").unwrap())?;
    let mut changed = false;

    if let Some(v) = sub.get_one::<String>("asin") {
        item.asin = v.clone();
        changed = true;
    }
    if let Some(v) = sub.get_one::<u32>("lead-time") {
        item.lead_time = *v;
        changed = true;
    }
    let mut set_amount = |target: &mut f64, v: Option<&String>| {
        if let Some(v) = v {
            *target = parse_amount(v);
            changed = true;
        }
    };
    set_amount(&mut item.fba_stock, sub.get_one("fba"));
    set_amount(&mut item.warehouse_stock, sub.get_one("warehouse"));
    set_amount(&mut item.inbound_stock, sub.get_one("inbound"));
    set_amount(&mut item.production_stock, sub.get_one("production"));
    set_amount(&mut item.daily_sales, sub.get_one("daily-sales"));
    set_amount(&mut item.moq, sub.get_one("moq"));
    set_amount(&mut item.target_days, sub.get_one("target-days"));

    if changed {
        println!(
            "'{}': {:.0} on hand, {} days of cover",
            item.name,
            item.total_on_hand(),
            item.days_of_cover()
        );
    } else {
        println!("Nothing to update");
    }
    Ok(changed)
}
