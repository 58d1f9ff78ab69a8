//! dataset-runner: headless synthetic dataset generator for spendsynth.
//!
//! Usage:
//!   dataset-runner --users 80 --seed 42 --horizon-days 180 --output-dir data/raw
//!   dataset-runner --users 50 --db data/spendsynth.db

use anyhow::Result;
use spendsynth_core::{
    assembler, config::GenConfig, csv_writer, store::DatasetStore,
};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let users = parse_arg(&args, "--users", 75usize);
    let seed = parse_arg(&args, "--seed", 42u64);
    let horizon_days = parse_arg(&args, "--horizon-days", 180u32);
    let output_dir = args
        .windows(2)
        .find(|w| w[0] == "--output-dir")
        .map(|w| PathBuf::from(&w[1]))
        .unwrap_or_else(|| PathBuf::from("./data/raw"));
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| {
            output_dir
                .join("spendsynth.db")
                .to_string_lossy()
                .into_owned()
        });

    let as_of = chrono::Local::now().date_naive();
    log::debug!("generating as of {as_of}");

    println!("spendsynth — dataset-runner");
    println!("  users:        {users}");
    println!("  seed:         {seed}");
    println!("  horizon_days: {horizon_days}");
    println!("  output_dir:   {}", output_dir.display());
    println!("  db:           {db}");
    println!();

    let cfg = GenConfig::new(users, seed, horizon_days, as_of).validated()?;
    let dataset = assembler::generate(&cfg)?;

    csv_writer::write_dataset(&dataset, &cfg, &output_dir)?;

    let mut store = DatasetStore::open(&db)?;
    store.migrate()?;
    let run_label = format!("run-{seed}-{as_of}");
    let counts = store.load_dataset(&run_label, &as_of.to_string(), &dataset)?;

    println!("=== RUN SUMMARY ===");
    println!("  run_label:    {run_label}");
    println!("  users:        {}", counts.users);
    println!("  accounts:     {}", counts.accounts);
    println!("  transactions: {}", counts.transactions);
    println!("  liabilities:  {}", counts.liabilities);
    println!(
        "  avg txns/user: {:.1}",
        counts.transactions as f64 / counts.users.max(1) as f64
    );
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
