// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, HOME_CURRENCY};
use std::collections::BTreeMap;
use tracing::warn;

/// Home-currency multiplier for a currency code. The home currency is always
/// 1. A currency missing from the table also resolves to 1 (parity); that
/// fallback is inherited behavior and is logged so it does not pass silently.
pub fn rate(rates: &BTreeMap<String, f64>, code: &str) -> f64 {
    if code == HOME_CURRENCY {
        return 1.0;
    }
    match rates.get(code) {
        Some(r) => *r,
        None => {
            warn!("no rate for currency '{}', assuming parity with {}", code, HOME_CURRENCY);
            1.0
        }
    }
}

/// Convert an amount in `code` to the home currency.
pub fn to_home(rates: &BTreeMap<String, f64>, amount: f64, code: &str) -> f64 {
    amount * rate(rates, code)
}

/// Sum of all account balance snapshots, converted to the home currency.
pub fn total_liquidity(accounts: &[Account], rates: &BTreeMap<String, f64>) -> f64 {
    accounts
        .iter()
        .map(|a| to_home(rates, a.balance, &a.currency))
        .sum()
}
