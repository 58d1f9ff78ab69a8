//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two runs with the same configuration must produce byte-identical
//! datasets: ids, amounts, dates. Any divergence is a blocker.

use chrono::NaiveDate;
use spendsynth_core::{assembler, config::GenConfig};

fn fixed_as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn cfg(user_count: usize, seed: u64, horizon_days: u32) -> GenConfig {
    GenConfig::new(user_count, seed, horizon_days, fixed_as_of())
}

#[test]
fn same_seed_produces_identical_datasets() {
    let _ = env_logger::builder().is_test(true).try_init();

    let a = assembler::generate(&cfg(60, 0xDEAD_BEEF, 120)).expect("run a");
    let b = assembler::generate(&cfg(60, 0xDEAD_BEEF, 120)).expect("run b");

    let json_a = serde_json::to_string(&a).expect("serialize a");
    let json_b = serde_json::to_string(&b).expect("serialize b");
    assert_eq!(json_a, json_b, "same seed must reproduce the same bytes");
}

#[test]
fn different_seeds_produce_different_datasets() {
    let a = assembler::generate(&cfg(50, 42, 90)).expect("run a");
    let b = assembler::generate(&cfg(50, 99, 90)).expect("run b");

    let json_a = serde_json::to_string(&a).expect("serialize a");
    let json_b = serde_json::to_string(&b).expect("serialize b");
    assert_ne!(
        json_a, json_b,
        "different seeds produced identical datasets; seed is not being used"
    );
}

#[test]
fn repeated_calls_in_one_process_are_independent() {
    // A run in between must not perturb a later identical run: the RNG
    // bank is per call, never shared state.
    let first = assembler::generate(&cfg(50, 7, 60)).expect("first");
    let _noise = assembler::generate(&cfg(80, 1234, 200)).expect("noise");
    let second = assembler::generate(&cfg(50, 7, 60)).expect("second");

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
