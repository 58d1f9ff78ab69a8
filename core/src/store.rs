//! SQLite persistence layer.
//!
//! RULE: Only this module talks to the database. Loads are idempotent:
//! every insert is INSERT OR REPLACE keyed on the primary key, and each
//! table is written inside its own scoped transaction so a table loads
//! completely or not at all.

use crate::error::GenResult;
use crate::records::Dataset;
use rusqlite::{params, Connection};

pub struct DatasetStore {
    conn: Connection,
}

/// Row counts from one load pass, per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadCounts {
    pub users: usize,
    pub accounts: usize,
    pub transactions: usize,
    pub liabilities: usize,
}

impl DatasetStore {
    /// Open (or create) the dataset database at `path`.
    pub fn open(path: &str) -> GenResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> GenResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> GenResult<()> {
        self.conn
            .execute_batch(include_str!("../migrations/001_schema.sql"))?;
        Ok(())
    }

    /// Bulk-load a dataset. Reloading the same dataset leaves row counts
    /// unchanged.
    pub fn load_dataset(
        &mut self,
        run_label: &str,
        created_at: &str,
        dataset: &Dataset,
    ) -> GenResult<LoadCounts> {
        let counts = LoadCounts {
            users: self.load_users(dataset)?,
            accounts: self.load_accounts(dataset)?,
            transactions: self.load_transactions(dataset)?,
            liabilities: self.load_liabilities(dataset)?,
        };
        self.record_audit(run_label, created_at, counts)?;
        log::info!(
            "loaded run {run_label}: {} users, {} accounts, {} transactions, {} liabilities",
            counts.users,
            counts.accounts,
            counts.transactions,
            counts.liabilities
        );
        Ok(counts)
    }

    fn load_users(&mut self, dataset: &Dataset) -> GenResult<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO users (
                    user_id, full_name, email, persona, persona_priority,
                    monthly_income, monthly_spend, savings_rate, buffer_months,
                    credit_utilization, subscription_share
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for u in &dataset.users {
                stmt.execute(params![
                    &u.user_id,
                    &u.full_name,
                    &u.email,
                    &u.persona,
                    u.persona_priority,
                    u.monthly_income,
                    u.monthly_spend,
                    u.savings_rate,
                    u.buffer_months,
                    u.credit_utilization,
                    u.subscription_share,
                ])?;
            }
        }
        tx.commit()?;
        Ok(dataset.users.len())
    }

    fn load_accounts(&mut self, dataset: &Dataset) -> GenResult<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO accounts (
                    account_id, user_id, name, account_type,
                    current_balance, credit_limit, iso_currency_code
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for a in &dataset.accounts {
                stmt.execute(params![
                    &a.account_id,
                    &a.user_id,
                    &a.name,
                    a.account_type.as_str(),
                    a.current_balance,
                    a.credit_limit,
                    &a.iso_currency_code,
                ])?;
            }
        }
        tx.commit()?;
        Ok(dataset.accounts.len())
    }

    fn load_transactions(&mut self, dataset: &Dataset) -> GenResult<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO transactions (
                    transaction_id, user_id, account_id, date, amount,
                    merchant_name, category_primary, category_detailed,
                    is_subscription, recurring_group_id
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for t in &dataset.transactions {
                stmt.execute(params![
                    &t.transaction_id,
                    &t.user_id,
                    &t.account_id,
                    t.date.to_string(),
                    t.amount,
                    &t.merchant_name,
                    &t.category_primary,
                    &t.category_detailed,
                    if t.is_subscription { 1 } else { 0 },
                    t.recurring_group_id.as_deref(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(dataset.transactions.len())
    }

    fn load_liabilities(&mut self, dataset: &Dataset) -> GenResult<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO liabilities (
                    account_id, apr_type, apr_percentage, minimum_payment_amount,
                    last_payment_amount, last_statement_balance, is_overdue,
                    next_payment_due_date
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for l in &dataset.liabilities {
                stmt.execute(params![
                    &l.account_id,
                    &l.apr_type,
                    l.apr_percentage,
                    l.minimum_payment_amount,
                    l.last_payment_amount,
                    l.last_statement_balance,
                    if l.is_overdue { 1 } else { 0 },
                    l.next_payment_due_date.to_string(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(dataset.liabilities.len())
    }

    fn record_audit(&self, run_label: &str, created_at: &str, counts: LoadCounts) -> GenResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO ingest_audit (
                run_label, created_at, user_rows, account_rows,
                transaction_rows, liability_rows
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                run_label,
                created_at,
                counts.users as i64,
                counts.accounts as i64,
                counts.transactions as i64,
                counts.liabilities as i64,
            ],
        )?;
        Ok(())
    }

    // ── Counts ─────────────────────────────────────────────────

    pub fn user_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM users")
    }

    pub fn account_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM accounts")
    }

    pub fn transaction_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM transactions")
    }

    pub fn liability_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM liabilities")
    }

    pub fn audit_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM ingest_audit")
    }

    fn count(&self, sql: &str) -> GenResult<i64> {
        let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(n)
    }
}
