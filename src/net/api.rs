//! Named REST accessors for the ledger API.
//!
//! Each accessor only binds a path and a verb to the generic client calls and
//! deserializes the answer; failure handling stays in `client`. The export
//! helpers build download URLs and perform no request.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::client::ApiClient;
use super::error::ApiError;
use super::request::{RequestOverrides, query_string, with_query};
use super::transport::Transport;
use super::types::{
    Ack, Budget, BudgetStatus, CategoryStat, CategoryStatsQuery, CoinType, Created, CurrentUser, DateRange,
    DateStat, DateStatsQuery, EnergyCoins, EnergyHistoryEntry, EnergyHistoryQuery, NewRecurring, NewTransaction,
    RecurringPatch, RecurringTransaction, Summary, Transaction, TransactionPage, TransactionPatch, TransactionQuery,
};
use crate::util::navigation::Navigator;

pub const CURRENT_USER_PATH: &str = "/auth/me";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const TRANSACTIONS_PATH: &str = "/api/transactions";
pub const CATEGORIES_PATH: &str = "/api/transactions/categories";
pub const SUMMARY_PATH: &str = "/api/stats/summary";
pub const CATEGORY_STATS_PATH: &str = "/api/stats/by-category";
pub const DATE_STATS_PATH: &str = "/api/stats/by-date";
pub const EXPORT_CSV_PATH: &str = "/api/export/csv";
pub const EXPORT_EXCEL_PATH: &str = "/api/export/excel";
pub const BUDGET_PATH: &str = "/api/budget";
pub const BUDGET_STATUS_PATH: &str = "/api/budget/status";
pub const RECURRING_PATH: &str = "/api/recurring";
pub const ENERGY_PATH: &str = "/api/energy";
pub const ENERGY_HISTORY_PATH: &str = "/api/energy/history";

fn transaction_endpoint(id: i64) -> String {
    format!("{TRANSACTIONS_PATH}/{id}")
}

fn recurring_endpoint(id: i64) -> String {
    format!("{RECURRING_PATH}/{id}")
}

/// `path?query` for a download link; filters that fail to encode are dropped.
fn export_url(path: &str, range: &DateRange) -> String {
    let query = query_string(range).unwrap_or_default();
    with_query(path, &query)
}

#[derive(Deserialize)]
struct CategoryList {
    categories: Vec<String>,
}

#[derive(Deserialize)]
struct CategoryStatList {
    categories: Vec<CategoryStat>,
}

#[derive(Deserialize)]
struct TrendList {
    trends: Vec<DateStat>,
}

#[derive(Deserialize)]
struct RecurringList {
    items: Vec<RecurringTransaction>,
}

#[derive(Deserialize)]
struct EnergyHistoryList {
    items: Vec<EnergyHistoryEntry>,
}

impl<T: Transport, N: Navigator> ApiClient<T, N> {
    // ============ auth ============

    /// Fetch the signed-in user from `/auth/me`.
    ///
    /// # Errors
    ///
    /// `AuthRequired` when no session is active; see [`ApiClient::request`].
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.request(CURRENT_USER_PATH, RequestOverrides::default()).await?.into_json()
    }

    /// End the server session via `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post(LOGOUT_PATH, &serde_json::json!({})).await.map(|_| ())
    }

    /// LINE Login entry point the login page links to.
    pub fn login_url(&self) -> String {
        self.config().url(LOGIN_PATH)
    }

    // ============ transactions ============

    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn transactions(&self, query: &TransactionQuery) -> Result<TransactionPage, ApiError> {
        self.get(TRANSACTIONS_PATH, query).await?.into_json()
    }

    /// # Errors
    ///
    /// `RequestFailed` when the record does not exist; see [`ApiClient::request`].
    pub async fn transaction(&self, id: i64) -> Result<Transaction, ApiError> {
        self.request(&transaction_endpoint(id), RequestOverrides::default()).await?.into_json()
    }

    /// # Errors
    ///
    /// `RequestFailed` when the server rejects the kind or amount.
    pub async fn create_transaction(&self, tx: &NewTransaction) -> Result<Created, ApiError> {
        self.post(TRANSACTIONS_PATH, tx).await?.into_json()
    }

    /// # Errors
    ///
    /// `RequestFailed` when the record does not exist or the patch is invalid.
    pub async fn update_transaction(&self, id: i64, patch: &TransactionPatch) -> Result<Ack, ApiError> {
        self.put(&transaction_endpoint(id), patch).await?.into_json()
    }

    /// # Errors
    ///
    /// `RequestFailed` when the record does not exist.
    pub async fn delete_transaction(&self, id: i64) -> Result<Ack, ApiError> {
        self.delete(&transaction_endpoint(id)).await?.into_json()
    }

    /// Categories the user has used so far, sorted by the server.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let list: CategoryList = self.request(CATEGORIES_PATH, RequestOverrides::default()).await?.into_json()?;
        Ok(list.categories)
    }

    // ============ stats ============

    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn summary(&self, range: &DateRange) -> Result<Summary, ApiError> {
        self.get(SUMMARY_PATH, range).await?.into_json()
    }

    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn category_stats(&self, query: &CategoryStatsQuery) -> Result<Vec<CategoryStat>, ApiError> {
        let list: CategoryStatList = self.get(CATEGORY_STATS_PATH, query).await?.into_json()?;
        Ok(list.categories)
    }

    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn date_stats(&self, query: &DateStatsQuery) -> Result<Vec<DateStat>, ApiError> {
        let list: TrendList = self.get(DATE_STATS_PATH, query).await?.into_json()?;
        Ok(list.trends)
    }

    // ============ export ============

    /// Download URL for the CSV export of `range`.
    pub fn export_csv_url(&self, range: &DateRange) -> String {
        export_url(&self.config().url(EXPORT_CSV_PATH), range)
    }

    /// Download URL for the Excel export of `range`.
    pub fn export_excel_url(&self, range: &DateRange) -> String {
        export_url(&self.config().url(EXPORT_EXCEL_PATH), range)
    }

    // ============ budget ============

    /// Monthly budget; `0` when none is set.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn budget(&self) -> Result<Budget, ApiError> {
        self.request(BUDGET_PATH, RequestOverrides::default()).await?.into_json()
    }

    /// # Errors
    ///
    /// `RequestFailed` when `monthly_budget` is negative.
    pub async fn set_budget(&self, monthly_budget: f64) -> Result<Created, ApiError> {
        self.post(BUDGET_PATH, &Budget { monthly_budget }).await?.into_json()
    }

    /// Spending against the budget for the current month.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn budget_status(&self) -> Result<BudgetStatus, ApiError> {
        self.request(BUDGET_STATUS_PATH, RequestOverrides::default()).await?.into_json()
    }

    // ============ recurring ============

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn recurring_items(&self) -> Result<Vec<RecurringTransaction>, ApiError> {
        let list: RecurringList = self.request(RECURRING_PATH, RequestOverrides::default()).await?.into_json()?;
        Ok(list.items)
    }

    /// # Errors
    ///
    /// `RequestFailed` when the entry does not exist.
    pub async fn recurring_item(&self, id: i64) -> Result<RecurringTransaction, ApiError> {
        self.request(&recurring_endpoint(id), RequestOverrides::default()).await?.into_json()
    }

    /// # Errors
    ///
    /// `RequestFailed` when kind, amount or day of month is rejected.
    pub async fn create_recurring(&self, item: &NewRecurring) -> Result<Created, ApiError> {
        self.post(RECURRING_PATH, item).await?.into_json()
    }

    /// # Errors
    ///
    /// `RequestFailed` when the entry does not exist or the patch is invalid.
    pub async fn update_recurring(&self, id: i64, patch: &RecurringPatch) -> Result<Ack, ApiError> {
        self.put(&recurring_endpoint(id), patch).await?.into_json()
    }

    /// # Errors
    ///
    /// `RequestFailed` when the entry does not exist.
    pub async fn delete_recurring(&self, id: i64) -> Result<Ack, ApiError> {
        self.delete(&recurring_endpoint(id)).await?.into_json()
    }

    // ============ energy coins ============

    /// Coins earned by transactions inside `range`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn energy(&self, range: &DateRange) -> Result<EnergyCoins, ApiError> {
        self.get(ENERGY_PATH, range).await?.into_json()
    }

    /// Latest coin-earning transactions of `coin_type`, newest first, at most
    /// `limit` of them.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn energy_history(
        &self,
        coin_type: CoinType,
        limit: u32,
    ) -> Result<Vec<EnergyHistoryEntry>, ApiError> {
        let query = EnergyHistoryQuery { coin_type, limit };
        let list: EnergyHistoryList = self.get(ENERGY_HISTORY_PATH, &query).await?.into_json()?;
        Ok(list.items)
    }
}
