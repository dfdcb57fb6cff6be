//! Wire DTOs for the ledger REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field for field so accessors
//! can deserialize directly. Optional request fields are skipped when absent,
//! which is how the server distinguishes "leave unchanged" in updates and
//! "no filter" in queries.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Whether a record is money in or money out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// The signed-in user as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// LINE user ID.
    pub user_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// A stored income or expense record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Server timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
}

/// One page of `/api/transactions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    pub items: Vec<Transaction>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update; `None` fields are left unchanged by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `{ id, message }` answer to a create call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: i64,
    pub message: String,
}

/// `{ message }` answer to an update or delete call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub transaction_count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub total: f64,
    pub count: u64,
}

/// Income/expense totals for one day, week (`YYYY-WW`) or month (`YYYY-MM`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DateStat {
    pub date: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expense: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Day,
    Week,
    Month,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub monthly_budget: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub monthly_budget: f64,
    pub spent: f64,
    pub remaining: f64,
    /// Share of the budget spent, rounded to one decimal.
    pub percentage: f64,
    pub is_over_budget: bool,
}

/// A monthly income/expense the server books automatically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecurringTransaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Day of the month (1-28) the entry is booked.
    pub day_of_month: u8,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    #[serde(default)]
    pub last_executed: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewRecurring {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "first_day")]
    pub day_of_month: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// =============================================================
// Energy coins
// =============================================================

/// Coin family earned from a keyword-matched transaction.
///
/// Gold is debt repayment (expense), silver is donation (expense) and copper
/// is part-time income. Every 100 units of money earn one coin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinType {
    #[default]
    All,
    Gold,
    Silver,
    Copper,
}

/// Coin totals from `/api/energy`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyCoins {
    pub gold: i64,
    pub silver: i64,
    pub copper: i64,
    /// Money behind each coin family.
    pub gold_amount: f64,
    pub silver_amount: f64,
    pub copper_amount: f64,
    pub total_coins: i64,
    pub gold_transactions_count: u64,
    pub silver_transactions_count: u64,
    pub copper_transactions_count: u64,
}

/// Coins earned by a single transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinEarned {
    #[serde(rename = "type")]
    pub kind: CoinType,
    pub amount: i64,
}

/// One row of `/api/energy/history`: the transaction plus what it earned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyHistoryEntry {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub coin: CoinEarned,
}

// =============================================================
// Query filters
// =============================================================

/// Filters for `/api/transactions`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TransactionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Inclusive `YYYY-MM-DD` bounds used by stats and export endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl DateRange {
    pub fn between(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self { start_date: Some(start_date.into()), end_date: Some(end_date.into()) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStatsQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(flatten)]
    pub range: DateRange,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DateStatsQuery {
    #[serde(flatten)]
    pub range: DateRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,
}

/// Filters for `/api/energy/history`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EnergyHistoryQuery {
    pub coin_type: CoinType,
    pub limit: u32,
}

impl Default for EnergyHistoryQuery {
    fn default() -> Self {
        Self { coin_type: CoinType::All, limit: 20 }
    }
}

fn first_day() -> u8 {
    1
}

/// Accept SQLite-style `0`/`1` integers as well as JSON booleans.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(|n| n != 0)
            .ok_or_else(|| D::Error::custom("expected integer flag")),
        _ => Err(D::Error::custom("expected boolean or integer flag")),
    }
}
