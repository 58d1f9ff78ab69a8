//! CSV/JSON output files: presence, headers, row counts.

use chrono::NaiveDate;
use spendsynth_core::{assembler, config::GenConfig, csv_writer};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("spendsynth-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn writes_all_output_files_with_headers() {
    let as_of = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let cfg = GenConfig::new(50, 42, 60, as_of);
    let ds = assembler::generate(&cfg).expect("generate");

    let dir = scratch_dir("csv");
    csv_writer::write_dataset(&ds, &cfg, &dir).expect("write");

    for name in [
        csv_writer::USERS_CSV,
        csv_writer::ACCOUNTS_CSV,
        csv_writer::TRANSACTIONS_CSV,
        csv_writer::LIABILITIES_CSV,
        csv_writer::MANIFEST_JSON,
    ] {
        assert!(dir.join(name).exists(), "missing output file {name}");
    }

    let users = fs::read_to_string(dir.join(csv_writer::USERS_CSV)).expect("read users.csv");
    let mut lines = users.lines();
    let header = lines.next().expect("header row");
    assert!(
        header.starts_with("user_id,full_name,email,persona"),
        "unexpected users.csv header: {header}"
    );
    assert_eq!(lines.count(), ds.users.len(), "users.csv row count");

    let txns =
        fs::read_to_string(dir.join(csv_writer::TRANSACTIONS_CSV)).expect("read transactions.csv");
    assert_eq!(
        txns.lines().count(),
        ds.transactions.len() + 1,
        "transactions.csv row count"
    );

    let manifest: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.join(csv_writer::MANIFEST_JSON)).expect("read manifest"),
    )
    .expect("parse manifest");
    assert_eq!(manifest["num_users"], 50);
    assert_eq!(manifest["seed"], 42);
    assert_eq!(manifest["generated_on"], "2025-03-01");

    fs::remove_dir_all(&dir).ok();
}
