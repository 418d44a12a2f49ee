// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference currency for every aggregate total. Account balances and cash
/// entries may be held in other currencies and are converted on the fly.
pub const HOME_CURRENCY: &str = "CHF";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub r#type: String,
    pub currency: String,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "in" => Ok(Direction::In),
            "out" => Ok(Direction::Out),
            other => bail!("Invalid direction '{}', expected in|out", other),
        }
    }
}

/// A row in either the spending-category list or the liquidity-forecast
/// category list. System categories are seeded and cannot be removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_system: bool,
}

/// Pipeline stage of a product, ordered from concept to end-of-life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Idea,
    Dev,
    Sourcing,
    Production,
    Shipping,
    AmazonWarehouse,
    ActiveSales,
    Eol,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 8] = [
        ProductStatus::Idea,
        ProductStatus::Dev,
        ProductStatus::Sourcing,
        ProductStatus::Production,
        ProductStatus::Shipping,
        ProductStatus::AmazonWarehouse,
        ProductStatus::ActiveSales,
        ProductStatus::Eol,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::Idea => "1. Idea",
            ProductStatus::Dev => "2. Development",
            ProductStatus::Sourcing => "3. Sourcing",
            ProductStatus::Production => "4. Production",
            ProductStatus::Shipping => "5. Transit",
            ProductStatus::AmazonWarehouse => "6. FBA check-in",
            ProductStatus::ActiveSales => "7. Active sales",
            ProductStatus::Eol => "8. EOL",
        }
    }

    /// Zero-based position in the pipeline, for progress display.
    pub fn stage(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "idea" => Ok(ProductStatus::Idea),
            "dev" | "development" => Ok(ProductStatus::Dev),
            "sourcing" => Ok(ProductStatus::Sourcing),
            "production" => Ok(ProductStatus::Production),
            "shipping" | "transit" => Ok(ProductStatus::Shipping),
            "warehouse" | "amazon-warehouse" | "check-in" => Ok(ProductStatus::AmazonWarehouse),
            "active" | "active-sales" => Ok(ProductStatus::ActiveSales),
            "eol" => Ok(ProductStatus::Eol),
            other => bail!(
                "Invalid status '{}', expected one of idea|dev|sourcing|production|shipping|warehouse|active|eol",
                other
            ),
        }
    }
}

/// Per-unit landed cost, broken into its five components (USD).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Costs {
    #[serde(default)]
    pub exw: f64,
    #[serde(default)]
    pub freight: f64,
    #[serde(default)]
    pub customs: f64,
    #[serde(default)]
    pub packaging: f64,
    #[serde(default)]
    pub other: f64,
}

impl Costs {
    pub fn total(&self) -> f64 {
        self.exw + self.freight + self.customs + self.packaging + self.other
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// A linked document. The URL is stored verbatim, never fetched or validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLink {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Timestamped comment on a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNote {
    pub id: String,
    pub date: DateTime<Utc>,
    pub author: String,
    pub text: String,
}

/// Free-text supplier agreement with tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_lead_time() -> u32 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub status: ProductStatus,
    #[serde(default)]
    pub sales_price: f64,
    #[serde(default)]
    pub stock: f64,
    #[serde(default)]
    pub daily_velocity: f64,
    #[serde(default)]
    pub costs: Costs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_link: Option<String>,
    #[serde(default)]
    pub moq: f64,
    #[serde(default = "default_lead_time")]
    pub lead_time: u32,
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
    #[serde(default)]
    pub files: Vec<FileLink>,
    #[serde(default)]
    pub updates: Vec<UpdateNote>,
    #[serde(default)]
    pub agreements: Vec<Agreement>,
}

impl Product {
    pub fn new(id: String, name: String, sku: String) -> Self {
        Product {
            id,
            name,
            sku,
            status: ProductStatus::Idea,
            sales_price: 0.0,
            stock: 0.0,
            daily_velocity: 0.0,
            costs: Costs::default(),
            manufacturer_name: None,
            manufacturer_link: None,
            moq: 0.0,
            lead_time: default_lead_time(),
            tasks: Vec::new(),
            files: Vec::new(),
            updates: Vec::new(),
            agreements: Vec::new(),
        }
    }

    /// The seeded product. Stored products are shallow-merged over this
    /// template on load, so fields added later are backfilled from it.
    pub fn template() -> Self {
        Product {
            id: "prod1".into(),
            name: "Bamboo organizer".into(),
            sku: "BAM-001".into(),
            status: ProductStatus::ActiveSales,
            sales_price: 29.90,
            stock: 450.0,
            daily_velocity: 12.0,
            costs: Costs {
                exw: 4.5,
                freight: 1.2,
                customs: 0.5,
                packaging: 0.8,
                other: 0.1,
            },
            manufacturer_name: None,
            manufacturer_link: None,
            moq: 0.0,
            lead_time: default_lead_time(),
            tasks: Vec::new(),
            files: Vec::new(),
            updates: Vec::new(),
            agreements: Vec::new(),
        }
    }

    /// Gross margin in percent: sales price is quoted in EUR, landed cost in
    /// USD, both converted to the home currency via the rate table. A zero
    /// sales price falls back to a unit denominator instead of dividing by
    /// zero.
    pub fn gross_margin_pct(&self, rates: &BTreeMap<String, f64>) -> f64 {
        let revenue = self.sales_price * crate::fx::rate(rates, "EUR");
        let cost = self.costs.total() * crate::fx::rate(rates, "USD");
        let denom = if revenue == 0.0 {
            crate::fx::rate(rates, "EUR")
        } else {
            revenue
        };
        (revenue - cost) / denom * 100.0
    }
}

fn default_target_days() -> f64 {
    90.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub asin: String,
    #[serde(default)]
    pub fba_stock: f64,
    #[serde(default)]
    pub warehouse_stock: f64,
    #[serde(default)]
    pub inbound_stock: f64,
    #[serde(default)]
    pub production_stock: f64,
    #[serde(default)]
    pub daily_sales: f64,
    #[serde(default = "default_lead_time")]
    pub lead_time: u32,
    #[serde(default)]
    pub moq: f64,
    #[serde(default = "default_target_days")]
    pub target_days: f64,
}

impl SupplyChainItem {
    pub fn new(id: String, name: String, asin: String) -> Self {
        SupplyChainItem {
            id,
            name,
            asin,
            fba_stock: 0.0,
            warehouse_stock: 0.0,
            inbound_stock: 0.0,
            production_stock: 0.0,
            daily_sales: 0.0,
            lead_time: default_lead_time(),
            moq: 100.0,
            target_days: default_target_days(),
        }
    }

    /// Sellable units: FBA + warehouse + inbound. Production stock is not on
    /// hand yet and is excluded here, but it does count against reorders.
    pub fn total_on_hand(&self) -> f64 {
        self.fba_stock + self.warehouse_stock + self.inbound_stock
    }

    /// Days until stock-out at the current sales velocity; 0 when there are
    /// no sales.
    pub fn days_of_cover(&self) -> i64 {
        if self.daily_sales > 0.0 {
            (self.total_on_hand() / self.daily_sales).round() as i64
        } else {
            0
        }
    }

    /// Units short of the coverage target, counting everything already on
    /// hand or in production. Never negative.
    pub fn reorder_qty(&self) -> f64 {
        (self.daily_sales * self.target_days - (self.total_on_hand() + self.production_stock))
            .max(0.0)
    }

    /// The quantity to actually order: the shortfall bumped up to the MOQ,
    /// or None when no reorder is due.
    pub fn suggested_order(&self) -> Option<f64> {
        let raw = self.reorder_qty();
        if raw > 0.0 { Some(raw.max(self.moq)) } else { None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recurrence {
    None,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Recurrence {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "once" => Ok(Recurrence::None),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            "quarterly" => Ok(Recurrence::Quarterly),
            "yearly" => Ok(Recurrence::Yearly),
            other => bail!(
                "Invalid recurrence '{}', expected none|weekly|monthly|quarterly|yearly",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Planned,
    Paid,
    Deferred,
}

impl EntryStatus {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "planned" | "open" => Ok(EntryStatus::Planned),
            "paid" => Ok(EntryStatus::Paid),
            "deferred" => Ok(EntryStatus::Deferred),
            other => bail!("Invalid status '{}', expected planned|paid|deferred", other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryStatus::Planned => "PLANNED",
            EntryStatus::Paid => "PAID",
            EntryStatus::Deferred => "DEFERRED",
        }
    }
}

/// A single booking: signed amount, due date, optional recurrence. Fixed or
/// recurring entries feed the liquidity forecast automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub category_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_fixed: bool,
    pub recurrence: Recurrence,
    pub status: EntryStatus,
}

/// Planned-vs-actual pair for one forecast category in one calendar month.
/// `(category_id, month_str)` is the composite key; `month_str` is `YYYY-MM`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRow {
    pub category_id: String,
    pub month_str: String,
    #[serde(default)]
    pub planned: f64,
    #[serde(default)]
    pub actual: f64,
}

/// The whole persisted document. Every mutation edits this in memory and
/// rewrites the file; there is no partial save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub liquidity_categories: Vec<Category>,
    pub products: Vec<Product>,
    pub supply_chain_items: Vec<SupplyChainItem>,
    pub entries: Vec<CashEntry>,
    pub budgets: Vec<BudgetRow>,
    pub rates: BTreeMap<String, f64>,
}

impl Default for Workspace {
    fn default() -> Self {
        let cat = |id: &str, name: &str, direction, is_system| Category {
            id: id.into(),
            name: name.into(),
            direction,
            is_system,
        };
        Workspace {
            accounts: vec![Account {
                id: "acc1".into(),
                name: "Main account CHF".into(),
                r#type: "BANK".into(),
                currency: HOME_CURRENCY.into(),
                balance: 25000.0,
            }],
            categories: vec![
                cat("cat_in_1", "Amazon revenue", Direction::In, true),
                cat("cat_out_1", "Inventory purchasing", Direction::Out, true),
                cat("cat_out_2", "Freight & customs", Direction::Out, false),
                cat("cat_out_3", "Marketing", Direction::Out, false),
                cat("cat_out_4", "Software", Direction::Out, false),
                cat("cat_out_5", "Owner salary", Direction::Out, false),
            ],
            liquidity_categories: vec![
                cat("l_cat_1", "Amazon payouts", Direction::In, false),
                cat("l_cat_2", "Inventory orders", Direction::Out, false),
                cat("l_cat_3", "Marketing / ads", Direction::Out, false),
                cat("l_cat_4", "Fixed costs / tools", Direction::Out, false),
            ],
            products: vec![Product::template()],
            supply_chain_items: Vec::new(),
            entries: Vec::new(),
            budgets: Vec::new(),
            rates: BTreeMap::from([("EUR".to_string(), 0.94), ("USD".to_string(), 0.88)]),
        }
    }
}
