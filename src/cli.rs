// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("founderdeck")
        .version(crate_version!())
        .about("Product pipeline, supply-chain restock, and liquidity planning for one-person product businesses")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug diagnostics on stderr"),
        )
        .subcommand(Command::new("init").about("Report where the workspace is stored"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("type").long("type").default_value("BANK"))
                        .arg(Arg::new("currency").long("currency").default_value("CHF"))
                        .arg(Arg::new("balance").long("balance").default_value("0")),
                )
                .subcommand(json_flags(Command::new("list").about("List accounts")))
                .subcommand(
                    Command::new("rm")
                        .about("Remove an account")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("set-balance")
                        .about("Overwrite an account's balance snapshot")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage spending and forecast categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("direction").long("direction").default_value("out"))
                        .arg(
                            Arg::new("forecast")
                                .long("forecast")
                                .action(ArgAction::SetTrue)
                                .help("Target the liquidity-forecast list"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List categories").arg(
                        Arg::new("forecast")
                            .long("forecast")
                            .action(ArgAction::SetTrue),
                    ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category (system categories refuse)")
                        .arg(Arg::new("name").required(true))
                        .arg(
                            Arg::new("forecast")
                                .long("forecast")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("product")
                .about("Manage the product pipeline")
                .subcommand(
                    Command::new("add")
                        .about("Add a product at the idea stage")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("sku").long("sku").default_value("NEW")),
                )
                .subcommand(json_flags(Command::new("list").about("List products")))
                .subcommand(Command::new("board").about("Pipeline board, grouped by stage"))
                .subcommand(
                    Command::new("show")
                        .about("Show one product in full")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("set")
                        .about("Edit product fields")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("sku").long("sku"))
                        .arg(Arg::new("price").long("price").help("Sales price (EUR)"))
                        .arg(Arg::new("stock").long("stock"))
                        .arg(Arg::new("velocity").long("velocity").help("Average units sold per day"))
                        .arg(Arg::new("manufacturer").long("manufacturer"))
                        .arg(Arg::new("link").long("link"))
                        .arg(Arg::new("moq").long("moq"))
                        .arg(Arg::new("lead-time").long("lead-time").value_parser(clap::value_parser!(u32)))
                        .arg(Arg::new("exw").long("exw").help("Unit cost ex works (USD)"))
                        .arg(Arg::new("freight").long("freight"))
                        .arg(Arg::new("customs").long("customs"))
                        .arg(Arg::new("packaging").long("packaging"))
                        .arg(Arg::new("other").long("other")),
                )
                .subcommand(
                    Command::new("status")
                        .about("Move a product to a pipeline stage")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("stage").required(true)),
                )
                .subcommand(
                    Command::new("comment")
                        .about("Append a timestamped update")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("text").required(true))
                        .arg(Arg::new("author").long("author").default_value("me")),
                )
                .subcommand(
                    Command::new("task-add")
                        .about("Add a task")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("text").required(true)),
                )
                .subcommand(
                    Command::new("file-add")
                        .about("Attach a link (stored verbatim, never fetched)")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("url").required(true))
                        .arg(Arg::new("title").long("title").default_value("Document")),
                )
                .subcommand(
                    Command::new("agreement-add")
                        .about("Record a supplier agreement")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("text").required(true)),
                )
                .subcommand(
                    Command::new("agreement-tag")
                        .about("Tag an agreement")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("agreement-id").required(true))
                        .arg(Arg::new("tag").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a product")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("restock")
                .about("Supply-chain stock tracking and reorder suggestions")
                .subcommand(
                    Command::new("add")
                        .about("Track a new SKU")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("asin").long("asin").default_value("")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("Stock buckets, days of cover, and order quantities"),
                ))
                .subcommand(
                    Command::new("set")
                        .about("Edit stock buckets and reorder parameters")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("asin").long("asin"))
                        .arg(Arg::new("fba").long("fba").help("Units at the fulfillment center"))
                        .arg(Arg::new("warehouse").long("warehouse"))
                        .arg(Arg::new("inbound").long("inbound"))
                        .arg(Arg::new("production").long("production"))
                        .arg(Arg::new("daily-sales").long("daily-sales"))
                        .arg(Arg::new("moq").long("moq"))
                        .arg(Arg::new("target-days").long("target-days"))
                        .arg(Arg::new("lead-time").long("lead-time").value_parser(clap::value_parser!(u32))),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Stop tracking a SKU")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("entry")
                .about("Cash entries (bookings)")
                .subcommand(
                    Command::new("add")
                        .about("Record a booking; negative amounts are outflows")
                        .arg(Arg::new("title").required(true))
                        .arg(Arg::new("amount").required(true).allow_hyphen_values(true))
                        .arg(Arg::new("currency").long("currency").default_value("CHF"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("date").long("date").help("Due date, defaults to today"))
                        .arg(
                            Arg::new("fixed")
                                .long("fixed")
                                .action(ArgAction::SetTrue)
                                .help("Count toward monthly fixed costs"),
                        )
                        .arg(Arg::new("recurrence").long("recurrence").default_value("none")),
                )
                .subcommand(json_flags(Command::new("list").about("List bookings, newest first")))
                .subcommand(
                    Command::new("status")
                        .about("Set a booking to planned, paid, or deferred")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("status").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a booking")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Planned vs. actual amounts per forecast category and month")
                .subcommand(
                    Command::new("set")
                        .about("Set the planned and/or actual amount for a month")
                        .arg(Arg::new("category").required(true))
                        .arg(Arg::new("month").required(true).help("YYYY-MM"))
                        .arg(Arg::new("planned").long("planned").allow_hyphen_values(true))
                        .arg(Arg::new("actual").long("actual").allow_hyphen_values(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List budget rows")
                        .arg(Arg::new("month").long("month")),
                )),
        )
        .subcommand(
            Command::new("liquidity")
                .about("12-month liquidity forecast")
                .subcommand(json_flags(
                    Command::new("report")
                        .about("Monthly net cash flow and cumulative balance")
                        .arg(Arg::new("from").long("from").help("Start month YYYY-MM, defaults to the current month")),
                )),
        )
        .subcommand(Command::new("dashboard").about("Cockpit summary: liquidity, fixed costs, stock value, pipeline"))
        .subcommand(
            Command::new("rates")
                .about("Home-currency conversion rates")
                .subcommand(
                    Command::new("set")
                        .about("Set the CHF multiplier for a currency")
                        .arg(Arg::new("currency").required(true))
                        .arg(Arg::new("rate").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List rates")))
                .subcommand(
                    Command::new("convert")
                        .about("Convert an amount to CHF")
                        .arg(Arg::new("amount").required(true).allow_hyphen_values(true))
                        .arg(Arg::new("currency").required(true)),
                ),
        )
}
