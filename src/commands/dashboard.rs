// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fx;
use crate::models::{HOME_CURRENCY, ProductStatus, Workspace};
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;

/// The cockpit: aggregate liquidity, fixed costs, inventory value, and the
/// pipeline grouped into four coarse buckets.
pub fn handle(doc: &Workspace) -> Result<bool> {
    let liquid = fx::total_liquidity(&doc.accounts, &doc.rates);
    let monthly_fixed: f64 = doc
        .entries
        .iter()
        .filter(|e| e.is_fixed)
        .map(|e| fx::to_home(&doc.rates, e.amount, &e.currency).abs())
        .sum();
    // Inventory valued at EXW unit cost; costs are quoted in USD.
    let stock_value: f64 = doc
        .products
        .iter()
        .map(|p| p.stock * p.costs.exw * fx::rate(&doc.rates, "USD"))
        .sum();
    let active = doc
        .products
        .iter()
        .filter(|p| p.status == ProductStatus::ActiveSales)
        .count();

    let rows = vec![
        vec!["Total liquidity".into(), fmt_money(liquid, HOME_CURRENCY)],
        vec!["Monthly fixed costs".into(), fmt_money(monthly_fixed, HOME_CURRENCY)],
        vec!["Stock value (EXW)".into(), fmt_money(stock_value, HOME_CURRENCY)],
        vec!["SKUs".into(), doc.products.len().to_string()],
        vec!["Active sales".into(), active.to_string()],
    ];
    println!("{}", pretty_table(&["Cockpit", ""], rows));

    let buckets: [(&str, &[ProductStatus]); 4] = [
        ("Concept", &[ProductStatus::Idea, ProductStatus::Dev]),
        ("Production", &[ProductStatus::Sourcing, ProductStatus::Production]),
        ("Transit", &[ProductStatus::Shipping, ProductStatus::AmazonWarehouse]),
        ("Sales", &[ProductStatus::ActiveSales, ProductStatus::Eol]),
    ];
    let rows = buckets
        .iter()
        .map(|(label, stages)| {
            let names: Vec<String> = doc
                .products
                .iter()
                .filter(|p| stages.contains(&p.status))
                .map(|p| p.name.clone())
                .collect();
            vec![label.to_string(), names.len().to_string(), names.join(", ")]
        })
        .collect();
    println!("{}", pretty_table(&["Pipeline", "#", "Products"], rows));
    Ok(false)
}
