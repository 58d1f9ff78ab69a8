//! CSV/JSON serialization of a generated dataset.
//!
//! Column order follows record field declaration order; dates serialize
//! as ISO-8601 calendar dates, booleans as true/false.

use crate::config::GenConfig;
use crate::error::{GenError, GenResult};
use crate::persona::catalog;
use crate::records::Dataset;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const USERS_CSV: &str = "users.csv";
pub const ACCOUNTS_CSV: &str = "accounts.csv";
pub const TRANSACTIONS_CSV: &str = "transactions.csv";
pub const LIABILITIES_CSV: &str = "liabilities.csv";
pub const MANIFEST_JSON: &str = "manifest.json";

/// Write the four CSV files plus a run manifest into `dir`, creating it
/// if needed.
pub fn write_dataset(dataset: &Dataset, cfg: &GenConfig, dir: &Path) -> GenResult<()> {
    fs::create_dir_all(dir).map_err(|e| GenError::io(dir, e))?;

    write_rows(&dir.join(USERS_CSV), &dataset.users)?;
    write_rows(&dir.join(ACCOUNTS_CSV), &dataset.accounts)?;
    write_rows(&dir.join(TRANSACTIONS_CSV), &dataset.transactions)?;
    write_rows(&dir.join(LIABILITIES_CSV), &dataset.liabilities)?;
    write_manifest(dataset, cfg, &dir.join(MANIFEST_JSON))?;

    log::info!("wrote dataset to {}", dir.display());
    Ok(())
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> GenResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|e| GenError::io(path, e))?;
    Ok(())
}

fn write_manifest(dataset: &Dataset, cfg: &GenConfig, path: &Path) -> GenResult<()> {
    let manifest = serde_json::json!({
        "generated_on": cfg.as_of,
        "num_users": dataset.users.len(),
        "horizon_days": cfg.horizon_days,
        "seed": cfg.seed,
        "personas": catalog().iter().map(|p| p.name).collect::<Vec<_>>(),
    });
    let file = fs::File::create(path).map_err(|e| GenError::io(path, e))?;
    serde_json::to_writer_pretty(file, &manifest)?;
    Ok(())
}
