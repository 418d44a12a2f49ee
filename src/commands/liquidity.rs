// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::forecast;
use crate::models::{HOME_CURRENCY, Workspace};
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use chrono::{NaiveDate, Utc};

pub fn handle(doc: &Workspace, m: &clap::ArgMatches) -> Result<bool> {
    if let Some(("report", sub)) = m.subcommand() {
        report(doc, sub)?;
    }
    Ok(false)
}

fn report(doc: &Workspace, sub: &clap::ArgMatches) -> Result<()> {
    let start = match sub.get_one::<String>("from") {
        Some(m) => {
            let month = parse_month(m)?;
            NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")?
        }
        None => Utc::now().date_naive(),
    };
    let projection = forecast::project(doc, start);

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &projection)? {
        return Ok(());
    }
    let rows = projection
        .iter()
        .map(|p| {
            vec![
                p.label.clone(),
                format!("{:.0} / {:.0}", p.planned_in, p.actual_in),
                format!("{:.0} / {:.0}", p.planned_out, p.actual_out),
                format!("{:.0} / {:.0}", p.fixed_planned, p.fixed_actual),
                format!("{:.0} / {:.0}", p.planned_net, p.actual_net),
                format!("{:.0}", p.balance),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Month", "In (plan/act)", "Out (plan/act)", "Fixed (plan/act)", "Net (plan/act)", "Balance"],
            rows,
        )
    );
    println!(
        "Starting liquidity: {}",
        fmt_money(
            crate::fx::total_liquidity(&doc.accounts, &doc.rates),
            HOME_CURRENCY
        )
    );
    Ok(())
}
