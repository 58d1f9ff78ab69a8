//! The four record collections a generation run produces.
//!
//! Field declaration order is the CSV column order and the SQL insert
//! order. Do not reorder fields without migrating both.

use crate::types::{AccountId, TransactionId, UserId};
use chrono::NaiveDate;
use serde::Serialize;

pub const ISO_CURRENCY: &str = "USD";

/// Round to currency minor units. Applied at the point of creation so
/// downstream sums are exact.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Credit,
    Brokerage,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Credit => "credit",
            Self::Brokerage => "brokerage",
        }
    }

    /// Display label used in account names ("Emma's Checking").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
            Self::Credit => "Credit",
            Self::Brokerage => "Brokerage",
        }
    }

    /// Stable role code used for deterministic id derivation.
    pub fn role_code(&self) -> &'static str {
        match self {
            Self::Checking => "CHK",
            Self::Savings => "SVG",
            Self::Credit => "CRD",
            Self::Brokerage => "BRK",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub persona: String,
    pub persona_priority: u32,
    pub monthly_income: f64,
    pub monthly_spend: f64,
    pub savings_rate: f64,
    pub buffer_months: f64,
    pub credit_utilization: f64,
    pub subscription_share: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub account_id: AccountId,
    pub user_id: UserId,
    pub name: String,
    pub account_type: AccountType,
    pub current_balance: f64,
    /// 0 for non-credit accounts.
    pub credit_limit: f64,
    pub iso_currency_code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub user_id: UserId,
    pub account_id: AccountId,
    pub date: NaiveDate,
    /// Signed: positive = credit/income, negative = debit/expense.
    pub amount: f64,
    pub merchant_name: String,
    pub category_primary: String,
    pub category_detailed: String,
    pub is_subscription: bool,
    pub recurring_group_id: Option<String>,
}

/// Credit-card liability detail, 1:1 with a credit account.
#[derive(Debug, Clone, Serialize)]
pub struct Liability {
    pub account_id: AccountId,
    pub apr_type: String,
    pub apr_percentage: f64,
    pub minimum_payment_amount: f64,
    pub last_payment_amount: f64,
    /// Must equal the credit account's current balance.
    pub last_statement_balance: f64,
    pub is_overdue: bool,
    pub next_payment_due_date: NaiveDate,
}

/// One generation run's complete output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub liabilities: Vec<Liability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_cents_snaps_to_minor_units() {
        assert_eq!(round_cents(12.3456), 12.35);
        assert_eq!(round_cents(-7.891), -7.89);
        assert_eq!(round_cents(100.0 / 3.0), 33.33);
    }
}
