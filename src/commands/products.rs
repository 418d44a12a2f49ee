// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    Agreement, FileLink, Product, ProductStatus, TaskItem, UpdateNote, Workspace,
};
use crate::utils::{gen_id, maybe_print_json, parse_amount, pretty_table, product, product_mut};
use anyhow::{Result, anyhow};
use chrono::Utc;

pub fn handle(doc: &mut Workspace, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let sku = sub.get_one::<String>("sku").unwrap();
            doc.products
                .push(Product::new(gen_id(), name.clone(), sku.clone()));
            println!("Added product '{}' ({}) at stage {}", name, sku, ProductStatus::Idea.label());
            Ok(true)
        }
        Some(("list", sub)) => {
            list(doc, sub)?;
            Ok(false)
        }
        Some(("board", _)) => {
            board(doc);
            Ok(false)
        }
        Some(("show", sub)) => {
            show(doc, sub.get_one::<String>("name").unwrap())?;
            Ok(false)
        }
        Some(("set", sub)) => set(doc, sub),
        Some(("status", sub)) => {
            let stage = ProductStatus::parse(sub.get_one::<String>("stage").unwrap())?;
            let p = product_mut(doc, sub.get_one::<String>("name").unwrap())?;
            p.status = stage;
            println!("'{}' moved to {}", p.name, stage.label());
            Ok(true)
        }
        Some(("comment", sub)) => {
            let author = sub.get_one::<String>("author").unwrap().clone();
            let text = sub.get_one::<String>("text").unwrap().clone();
            let p = product_mut(doc, sub.get_one::<String>("name").unwrap())?;
            // Newest first, like the update feed renders.
            p.updates.insert(
                0,
                UpdateNote { id: gen_id(), date: Utc::now(), author, text },
            );
            println!("Comment added to '{}'", p.name);
            Ok(true)
        }
        Some(("task-add", sub)) => {
            let text = sub.get_one::<String>("text").unwrap().clone();
            let p = product_mut(doc, sub.get_one::<String>("name").unwrap())?;
            p.tasks.push(TaskItem { id: gen_id(), text, done: false });
            println!("Task added to '{}'", p.name);
            Ok(true)
        }
        Some(("file-add", sub)) => {
            let url = sub.get_one::<String>("url").unwrap().clone();
            let title = sub.get_one::<String>("title").unwrap().clone();
            let p = product_mut(doc, sub.get_one::<String>("name").unwrap())?;
            p.files.push(FileLink { id: gen_id(), name: title, url });
            println!("File linked to '{}'", p.name);
            Ok(true)
        }
        Some(("agreement-add", sub)) => {
            let text = sub.get_one::<String>("text").unwrap().clone();
            let p = product_mut(doc, sub.get_one::<String>("name").unwrap())?;
            let id = gen_id();
            p.agreements.push(Agreement { id: id.clone(), text, tags: Vec::new() });
            println!("Agreement {} recorded for '{}'", id, p.name);
            Ok(true)
        }
        Some(("agreement-tag", sub)) => {
            let agreement_id = sub.get_one::<String>("agreement-id").unwrap();
            let tag = sub.get_one::<String>("tag").unwrap().clone();
            let p = product_mut(doc, sub.get_one::<String>("name").unwrap())?;
            let a = p
                .agreements
                .iter_mut()
                .find(|a| a.id == *agreement_id)
                .ok_or_else(|| anyhow!("Agreement '{}' not found", agreement_id))?;
            a.tags.push(tag);
            println!("Tagged agreement {}", agreement_id);
            Ok(true)
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            // Resolve exactly one product, same lookup as product_mut.
            let idx = doc
                .products
                .iter()
                .position(|p| p.name == *name || p.sku == *name)
                .ok_or_else(|| anyhow!("Product '{}' not found", name))?;
            let removed = doc.products.remove(idx);
            println!("Removed product '{}'", removed.name);
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn list(doc: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &doc.products)? {
        return Ok(());
    }
    let rows = doc
        .products
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.sku.clone(),
                p.status.label().to_string(),
                format!("{:.2}", p.sales_price),
                format!("{:.0}", p.stock),
                format!("{:.1}", p.daily_velocity),
                format!("{:.1}%", p.gross_margin_pct(&doc.rates)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Name", "SKU", "Stage", "Price (EUR)", "Stock", "Sales/day", "Margin"],
            rows,
        )
    );
    Ok(())
}

fn board(doc: &Workspace) {
    for stage in ProductStatus::ALL {
        let in_stage: Vec<&Product> =
            doc.products.iter().filter(|p| p.status == stage).collect();
        println!("{} ({})", stage.label(), in_stage.len());
        for p in in_stage {
            println!("  {} [{}]", p.name, p.sku);
        }
    }
}

fn show(doc: &Workspace, name: &str) -> Result<()> {
    let p = product(doc, name)?;
    println!("{} [{}]", p.name, p.sku);
    println!("  Stage:        {} ({}/8)", p.status.label(), p.status.stage() + 1);
    println!("  Price:        EUR {:.2}", p.sales_price);
    println!("  Stock:        {:.0} units, {:.1}/day", p.stock, p.daily_velocity);
    println!(
        "  Landed cost:  USD {:.2} (exw {:.2}, freight {:.2}, customs {:.2}, packaging {:.2}, other {:.2})",
        p.costs.total(),
        p.costs.exw,
        p.costs.freight,
        p.costs.customs,
        p.costs.packaging,
        p.costs.other
    );
    println!("  Gross margin: {:.1}%", p.gross_margin_pct(&doc.rates));
    if let Some(m) = &p.manufacturer_name {
        let link = p.manufacturer_link.as_deref().unwrap_or("-");
        println!("  Manufacturer: {} ({})", m, link);
        println!("  MOQ {:.0}, lead time {} days", p.moq, p.lead_time);
    }
    for t in &p.tasks {
        println!("  task  [{}] {}", if t.done { "x" } else { " " }, t.text);
    }
    for f in &p.files {
        println!("  file  {} -> {}", f.name, f.url);
    }
    for a in &p.agreements {
        println!("  agmt  {} {} [{}]", a.id, a.text, a.tags.join(", "));
    }
    for u in &p.updates {
        println!("  note  {} {}: {}", u.date.format("%Y-%m-%d %H:%M"), u.author, u.text);
    }
    Ok(())
}

fn set(doc: &mut Workspace, sub: &clap::ArgMatches) -> Result<bool> {
    let p = product_mut(doc, sub.get_one::<String>("name").unwrap())?;
    let mut changed = false;

    if let Some(v) = sub.get_one::<String>("sku") {
        p.sku = v.clone();
        changed = true;
    }
    if let Some(v) = sub.get_one::<String>("manufacturer") {
        p.manufacturer_name = Some(v.clone());
        changed = true;
    }
    if let Some(v) = sub.get_one::<String>("link") {
        p.manufacturer_link = Some(v.clone());
        changed = true;
    }
    if let Some(v) = sub.get_one::<u32>("lead-time") {
        p.lead_time = *v;
        changed = true;
    }

    let mut set_amount = |target: &mut f64, v: Option<&String>| {
        if let Some(v) = v {
            *target = parse_amount(v);
            changed = true;
        }
    };
    set_amount(&mut p.sales_price, sub.get_one("price"));
    set_amount(&mut p.stock, sub.get_one("stock"));
    set_amount(&mut p.daily_velocity, sub.get_one("velocity"));
    set_amount(&mut p.moq, sub.get_one("moq"));
    set_amount(&mut p.costs.exw, sub.get_one("exw"));
    set_amount(&mut p.costs.freight, sub.get_one("freight"));
    set_amount(&mut p.costs.customs, sub.get_one("customs"));
    set_amount(&mut p.costs.packaging, sub.get_one("packaging"));
    set_amount(&mut p.costs.other, sub.get_one("other"));

    if changed {
        println!("Updated '{}'", p.name);
    } else {
        println!("Nothing to update");
    }
    Ok(changed)
}
