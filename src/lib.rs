// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod forecast;
pub mod fx;
pub mod log;
pub mod models;
pub mod store;
pub mod utils;
