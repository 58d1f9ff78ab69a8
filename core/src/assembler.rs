//! The dataset assembler: drives generation across the whole roster.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Catalog validation + config validation
//!   2. Roster composition (roster stream)
//!   3. Per user, in roster order: entity synthesis, then transactions
//!      (one order-stable stream per roster index)
//!
//! RULES:
//!   - `generate` is a pure function of its config: the RNG bank is
//!     created fresh per call, never shared module state.
//!   - A failure for any user aborts the whole run; consumers get a
//!     complete dataset or none.

use crate::config::GenConfig;
use crate::entity_synthesizer::synthesize_user;
use crate::error::GenResult;
use crate::persona::{catalog, validate_catalog};
use crate::records::Dataset;
use crate::rng::{RngBank, StreamSlot};
use crate::roster::build_roster;
use crate::transaction_builder::build_transactions;

/// Generate the four record collections for one run.
pub fn generate(cfg: &GenConfig) -> GenResult<Dataset> {
    validate_catalog(catalog())?;
    let cfg = cfg.clone().validated()?;

    let bank = RngBank::new(cfg.seed);
    let mut roster_rng = bank.for_stream(StreamSlot::Roster);
    let roster = build_roster(catalog(), cfg.user_count, &mut roster_rng);

    let mut dataset = Dataset::default();
    for (index, persona) in roster.into_iter().enumerate() {
        let mut user_rng = bank.for_user(index);
        let bundle = synthesize_user(index, persona, cfg.as_of, &mut user_rng);
        let txns = build_transactions(&bundle, &cfg, &mut user_rng)?;

        dataset.users.push(bundle.user);
        dataset.accounts.extend(bundle.accounts);
        dataset.liabilities.push(bundle.liability);
        dataset.transactions.extend(txns);
    }

    log::info!(
        "generated {} users, {} accounts, {} transactions, {} liabilities (seed={}, horizon={}d)",
        dataset.users.len(),
        dataset.accounts.len(),
        dataset.transactions.len(),
        dataset.liabilities.len(),
        cfg.seed,
        cfg.horizon_days
    );
    Ok(dataset)
}
