// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fx;
use crate::models::{HOME_CURRENCY, Workspace};
use crate::utils::{maybe_print_json, parse_amount, pretty_table};
use anyhow::Result;

pub fn handle(doc: &mut Workspace, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
            let rate = parse_amount(sub.get_one::<String>("rate").unwrap());
            doc.rates.insert(ccy.clone(), rate);
            println!("1 {} = {} {}", ccy, rate, HOME_CURRENCY);
            Ok(true)
        }
        Some(("list", sub)) => {
            if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &doc.rates)? {
                return Ok(false);
            }
            let rows = doc
                .rates
                .iter()
                .map(|(ccy, rate)| vec![ccy.clone(), format!("{}", rate)])
                .collect();
            let rate_header = format!("Rate ({})", HOME_CURRENCY);
            println!(
                "{}",
                pretty_table(&["Currency", rate_header.as_str()], rows)
            );
            Ok(false)
        }
        Some(("convert", sub)) => {
            let amount = parse_amount(sub.get_one::<String>("amount").unwrap());
            let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
            let res = fx::to_home(&doc.rates, amount, &ccy);
            println!("{} {} -> {:.4} {}", amount, ccy, res, HOME_CURRENCY);
            Ok(false)
        }
        _ => Ok(false),
    }
}
