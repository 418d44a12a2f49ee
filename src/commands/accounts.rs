// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fx;
use crate::models::{Account, Workspace};
use crate::utils::{fmt_money, gen_id, maybe_print_json, parse_amount, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle(doc: &mut Workspace, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let typ = sub.get_one::<String>("type").unwrap();
            let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
            let balance = parse_amount(sub.get_one::<String>("balance").unwrap());
            doc.accounts.push(Account {
                id: gen_id(),
                name: name.clone(),
                r#type: typ.clone(),
                currency: ccy.clone(),
                balance,
            });
            println!("Added account '{}' ({}, {})", name, typ, ccy);
            Ok(true)
        }
        Some(("list", sub)) => {
            list(doc, sub)?;
            Ok(false)
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let before = doc.accounts.len();
            doc.accounts.retain(|a| a.name != *name);
            if doc.accounts.len() == before {
                return Err(anyhow!("Account '{}' not found", name));
            }
            println!("Removed account '{}'", name);
            Ok(true)
        }
        Some(("set-balance", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let amount = parse_amount(sub.get_one::<String>("amount").unwrap());
            let acc = doc
                .accounts
                .iter_mut()
                .find(|a| a.name == *name)
                .ok_or_else(|| anyhow!("Account '{}' not found", name))?;
            acc.balance = amount;
            println!("Balance of '{}' set to {}", name, fmt_money(amount, &acc.currency));
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn list(doc: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &doc.accounts)? {
        return Ok(());
    }
    let rows = doc
        .accounts
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.r#type.clone(),
                a.currency.clone(),
                format!("{:.2}", a.balance),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Name", "Type", "Currency", "Balance"], rows));
    println!(
        "Total liquidity: {}",
        fmt_money(
            fx::total_liquidity(&doc.accounts, &doc.rates),
            crate::models::HOME_CURRENCY
        )
    );
    Ok(())
}
