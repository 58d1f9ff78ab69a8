//! SQLite loader behavior: schema creation, bulk load, idempotent reload.

use chrono::NaiveDate;
use spendsynth_core::{assembler, config::GenConfig, records::Dataset, store::DatasetStore};

fn small_dataset() -> Dataset {
    let as_of = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    assembler::generate(&GenConfig::new(50, 42, 60, as_of)).expect("generate")
}

#[test]
fn load_counts_match_collection_sizes() {
    let ds = small_dataset();
    let mut store = DatasetStore::in_memory().expect("in-memory store");
    store.migrate().expect("migrate");

    let counts = store
        .load_dataset("run-42", "2025-03-01", &ds)
        .expect("load");

    assert_eq!(counts.users, ds.users.len());
    assert_eq!(counts.accounts, ds.accounts.len());
    assert_eq!(counts.transactions, ds.transactions.len());
    assert_eq!(counts.liabilities, ds.liabilities.len());

    assert_eq!(store.user_count().unwrap(), ds.users.len() as i64);
    assert_eq!(store.account_count().unwrap(), ds.accounts.len() as i64);
    assert_eq!(
        store.transaction_count().unwrap(),
        ds.transactions.len() as i64
    );
    assert_eq!(
        store.liability_count().unwrap(),
        ds.liabilities.len() as i64
    );
}

#[test]
fn reload_is_idempotent() {
    let ds = small_dataset();
    let mut store = DatasetStore::in_memory().expect("in-memory store");
    store.migrate().expect("migrate");

    store
        .load_dataset("run-42", "2025-03-01", &ds)
        .expect("first load");
    let users_before = store.user_count().unwrap();
    let txns_before = store.transaction_count().unwrap();

    // Same primary keys, insert-or-replace: row counts must not move.
    store
        .load_dataset("run-42", "2025-03-01", &ds)
        .expect("second load");
    assert_eq!(store.user_count().unwrap(), users_before);
    assert_eq!(store.account_count().unwrap(), ds.accounts.len() as i64);
    assert_eq!(store.transaction_count().unwrap(), txns_before);
    assert_eq!(store.liability_count().unwrap(), ds.liabilities.len() as i64);
    assert_eq!(store.audit_count().unwrap(), 1, "same run label replaces its audit row");
}

#[test]
fn distinct_runs_keep_separate_audit_rows() {
    let ds = small_dataset();
    let mut store = DatasetStore::in_memory().expect("in-memory store");
    store.migrate().expect("migrate");

    store
        .load_dataset("run-a", "2025-03-01", &ds)
        .expect("load a");
    store
        .load_dataset("run-b", "2025-03-02", &ds)
        .expect("load b");

    assert_eq!(store.audit_count().unwrap(), 2);
    assert_eq!(store.user_count().unwrap(), ds.users.len() as i64);
}

#[test]
fn migrate_is_repeatable() {
    let store = DatasetStore::in_memory().expect("in-memory store");
    store.migrate().expect("first migrate");
    store.migrate().expect("second migrate");
}
