// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod entries;
pub mod liquidity;
pub mod products;
pub mod rates;
pub mod restock;
