// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use founderdeck::commands;
use founderdeck::models::Workspace;

fn category_args(args: &[&str]) -> clap::ArgMatches {
    founderdeck::cli::build_cli()
        .get_matches_from(args)
        .subcommand_matches("category")
        .unwrap()
        .clone()
}

#[test]
fn system_category_refuses_removal() {
    let mut doc = Workspace::default();
    let before = doc.categories.len();
    let m = category_args(&["founderdeck", "category", "rm", "Amazon revenue"]);
    let err = commands::categories::handle(&mut doc, &m).unwrap_err();
    assert!(err.to_string().contains("system category"), "err was {err}");
    assert_eq!(doc.categories.len(), before);
    assert!(doc.categories.iter().any(|c| c.name == "Amazon revenue"));
}

#[test]
fn non_system_category_is_removed() {
    let mut doc = Workspace::default();
    let before = doc.categories.len();
    let m = category_args(&["founderdeck", "category", "rm", "Marketing"]);
    assert!(commands::categories::handle(&mut doc, &m).unwrap());
    assert_eq!(doc.categories.len(), before - 1);
    assert!(doc.categories.iter().all(|c| c.name != "Marketing"));
}

#[test]
fn forecast_flag_targets_the_liquidity_list() {
    let mut doc = Workspace::default();
    let spending = doc.categories.len();
    let m = category_args(&["founderdeck", "category", "rm", "--forecast", "Marketing / ads"]);
    assert!(commands::categories::handle(&mut doc, &m).unwrap());
    assert!(doc.liquidity_categories.iter().all(|c| c.name != "Marketing / ads"));
    assert_eq!(doc.categories.len(), spending);
}
