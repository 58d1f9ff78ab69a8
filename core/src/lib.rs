//! spendsynth-core: deterministic, persona-driven synthetic financial
//! datasets.
//!
//! A generation run turns (user_count, seed, horizon_days, as_of) into
//! four internally consistent record collections (users, accounts,
//! transactions, liabilities) ready for CSV export and SQLite loading.
//! Same inputs, same bytes: all randomness flows through seeded streams.

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod csv_writer;
pub mod entity_synthesizer;
pub mod error;
pub mod ids;
pub mod name_generator;
pub mod persona;
pub mod records;
pub mod rng;
pub mod roster;
pub mod store;
pub mod transaction_builder;
pub mod types;

pub use assembler::generate;
pub use config::GenConfig;
pub use error::{GenError, GenResult};
pub use records::Dataset;
