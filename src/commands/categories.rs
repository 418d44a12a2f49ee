// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Direction, Workspace};
use crate::utils::{gen_id, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow, bail};

pub fn handle(doc: &mut Workspace, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let direction = Direction::parse(sub.get_one::<String>("direction").unwrap())?;
            let list = pick_mut(doc, sub.get_flag("forecast"));
            list.push(Category {
                id: gen_id(),
                name: name.clone(),
                direction,
                is_system: false,
            });
            println!("Added category '{}'", name);
            Ok(true)
        }
        Some(("list", sub)) => {
            let list = pick(doc, sub.get_flag("forecast"));
            if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &list)? {
                return Ok(false);
            }
            let rows = list
                .iter()
                .map(|c| {
                    vec![
                        c.name.clone(),
                        match c.direction {
                            Direction::In => "IN".into(),
                            Direction::Out => "OUT".into(),
                        },
                        if c.is_system { "system".into() } else { String::new() },
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Category", "Direction", ""], rows));
            Ok(false)
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let list = pick_mut(doc, sub.get_flag("forecast"));
            let cat = list
                .iter()
                .find(|c| c.name == *name)
                .ok_or_else(|| anyhow!("Category '{}' not found", name))?;
            if cat.is_system {
                bail!("Category '{}' is a system category and cannot be removed", name);
            }
            // No cascade: entries and budget rows keep their (now dangling)
            // category id and simply stop resolving.
            list.retain(|c| c.name != *name);
            println!("Removed category '{}'", name);
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn pick(doc: &Workspace, forecast: bool) -> &[Category] {
    if forecast { &doc.liquidity_categories } else { &doc.categories }
}

fn pick_mut(doc: &mut Workspace, forecast: bool) -> &mut Vec<Category> {
    if forecast { &mut doc.liquidity_categories } else { &mut doc.categories }
}
