// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use founderdeck::{cli, commands, log, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    log::init_logging(matches.get_flag("verbose"));

    let path = store::store_path()?;
    let mut doc = store::load_or_default(&path);

    let changed = match matches.subcommand() {
        Some(("init", _)) => {
            println!("Workspace stored at {}", path.display());
            false
        }
        Some(("account", sub)) => commands::accounts::handle(&mut doc, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut doc, sub)?,
        Some(("product", sub)) => commands::products::handle(&mut doc, sub)?,
        Some(("restock", sub)) => commands::restock::handle(&mut doc, sub)?,
        Some(("entry", sub)) => commands::entries::handle(&mut doc, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut doc, sub)?,
        Some(("liquidity", sub)) => commands::liquidity::handle(&doc, sub)?,
        Some(("dashboard", _)) => commands::dashboard::handle(&doc)?,
        Some(("rates", sub)) => commands::rates::handle(&mut doc, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
            false
        }
    };

    if changed {
        store::save(&path, &doc)?;
    }
    Ok(())
}
