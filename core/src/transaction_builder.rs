//! Dated transaction generation for one user.
//!
//! Four batches are produced against the user's sampled targets:
//! income (pay-gap walk back from "today"), subscriptions (per-product
//! cadence walk plus a single shortfall filler), discretionary spending
//! (budget-drain loop over the category catalog), and card interest for
//! personas that carry a revolving balance.
//!
//! Amounts are rounded to cents at the point of creation so downstream
//! sums are exact.

use crate::catalog::{
    EXPENSE_CATEGORIES, FILLER_CATEGORY_DETAILED, FILLER_CATEGORY_PRIMARY, FILLER_MERCHANT,
    INCOME_CATEGORY_DETAILED, INCOME_CATEGORY_PRIMARY, INCOME_SOURCES,
    INTEREST_CATEGORY_DETAILED, INTEREST_CATEGORY_PRIMARY, INTEREST_MERCHANT,
    SUBSCRIPTION_PRODUCTS,
};
use crate::config::GenConfig;
use crate::entity_synthesizer::UserBundle;
use crate::error::{GenError, GenResult};
use crate::ids;
use crate::records::{round_cents, Account, AccountType, Transaction};
use crate::rng::StreamRng;
use chrono::Duration;

const SUBSCRIPTION_CADENCE_DAYS: u64 = 30;

/// A pay event never shrinks below this multiple of the nominal paycheck,
/// whatever the volatility draw says.
const PAYCHECK_MULTIPLIER_FLOOR: f64 = 0.35;

/// Stop draining the discretionary budget once less than this remains.
const DISCRETIONARY_EPSILON: f64 = 20.0;

/// Safety bound: category minimums can exceed a small remaining budget,
/// so the drain loop needs a hard stop.
const MAX_DISCRETIONARY_TXNS: u32 = 500;

/// Subscription shortfalls below this are left uncovered rather than
/// producing a near-zero filler row.
const FILLER_EPSILON: f64 = 1.0;

/// Generate the full transaction set for one user.
///
/// Hard precondition: the bundle carries a checking and a credit account.
/// A user violating it gets no rows at all (all-or-nothing).
pub fn build_transactions(
    bundle: &UserBundle,
    cfg: &GenConfig,
    rng: &mut StreamRng,
) -> GenResult<Vec<Transaction>> {
    let checking = require_account(bundle, AccountType::Checking)?;
    let credit = require_account(bundle, AccountType::Credit)?;

    let horizon_factor = f64::from(cfg.horizon_days) / 30.0;
    let income_target = bundle.user.monthly_income * horizon_factor;
    let expense_target = bundle.user.monthly_spend * horizon_factor;
    let subscription_target = expense_target * bundle.user.subscription_share;
    let discretionary_target = (expense_target - subscription_target).max(50.0);

    let mut txns = Vec::new();
    income_batch(bundle, cfg, checking, income_target, rng, &mut txns);
    subscription_batch(bundle, cfg, credit, subscription_target, rng, &mut txns);
    discretionary_batch(
        bundle,
        cfg,
        checking,
        credit,
        discretionary_target,
        rng,
        &mut txns,
    );
    interest_batch(bundle, cfg, credit, rng, &mut txns);

    log::debug!(
        "user {} generated {} transactions over {} days",
        bundle.user.user_id,
        txns.len(),
        cfg.horizon_days
    );
    Ok(txns)
}

fn require_account<'a>(
    bundle: &'a UserBundle,
    account_type: AccountType,
) -> GenResult<&'a Account> {
    bundle
        .account_of(account_type)
        .ok_or_else(|| GenError::MissingPrecondition {
            user_id: bundle.user.user_id.clone(),
            role: account_type.as_str(),
        })
}

/// Walk pay dates backward from "today", resampling the gap per interval.
/// The first date crossing the horizon boundary is discarded; a horizon
/// too short for any pay date falls back to one payment at the midpoint.
fn income_batch(
    bundle: &UserBundle,
    cfg: &GenConfig,
    checking: &Account,
    income_target: f64,
    rng: &mut StreamRng,
    out: &mut Vec<Transaction>,
) {
    let persona = bundle.persona;
    let user_id = &bundle.user.user_id;
    let start = cfg.horizon_start();

    let mut pay_dates = Vec::new();
    let mut cursor = cfg.as_of;
    loop {
        let gap = rng.next_u64_between(
            u64::from(persona.pay_gap_days.0),
            u64::from(persona.pay_gap_days.1),
        );
        cursor = cursor - Duration::days(gap as i64);
        if cursor < start {
            break;
        }
        pay_dates.push(cursor);
    }
    if pay_dates.is_empty() {
        pay_dates.push(cfg.as_of - Duration::days(i64::from(cfg.horizon_days) / 2));
    }

    let source = INCOME_SOURCES[rng.next_u64_below(INCOME_SOURCES.len() as u64) as usize];
    let group = ids::recurring_group_id(user_id, "payroll");
    let per_payment = income_target / pay_dates.len() as f64;

    let mut seq = 0u32;
    let last_index = pay_dates.len() - 1;
    for (i, date) in pay_dates.iter().enumerate() {
        let spread = (rng.next_f64() - 0.5) * 2.0 * persona.income_volatility;
        let multiplier = (1.0 + spread).max(PAYCHECK_MULTIPLIER_FLOOR);
        let skip = persona.pay_skip_probability > 0.0 && rng.chance(persona.pay_skip_probability);
        // Never skip the final date if nothing was emitted: every user
        // keeps at least one income transaction.
        if skip && !(i == last_index && seq == 0) {
            continue;
        }
        seq += 1;
        out.push(Transaction {
            transaction_id: ids::transaction_id(user_id, "inc", seq),
            user_id: user_id.clone(),
            account_id: checking.account_id.clone(),
            date: *date,
            amount: round_cents(per_payment * multiplier),
            merchant_name: source.to_string(),
            category_primary: INCOME_CATEGORY_PRIMARY.to_string(),
            category_detailed: INCOME_CATEGORY_DETAILED.to_string(),
            is_subscription: false,
            recurring_group_id: Some(group.clone()),
        });
    }
}

/// Charge a persona-sized pick of distinct products on a 30-day cadence,
/// then close any gap to the subscription target with one filler row.
fn subscription_batch(
    bundle: &UserBundle,
    cfg: &GenConfig,
    credit: &Account,
    subscription_target: f64,
    rng: &mut StreamRng,
    out: &mut Vec<Transaction>,
) {
    let persona = bundle.persona;
    let user_id = &bundle.user.user_id;
    let start = cfg.horizon_start();

    let want = rng
        .next_u64_between(
            u64::from(persona.subscription_count.0),
            u64::from(persona.subscription_count.1),
        )
        .min(SUBSCRIPTION_PRODUCTS.len() as u64) as usize;

    // Sample without replacement: partial Fisher-Yates over the indices.
    let mut indices: Vec<usize> = (0..SUBSCRIPTION_PRODUCTS.len()).collect();
    for i in 0..want {
        let j = i + rng.next_u64_below((indices.len() - i) as u64) as usize;
        indices.swap(i, j);
    }

    let mut charged = 0.0;
    let mut seq = 0u32;
    for &pi in &indices[..want] {
        let product = &SUBSCRIPTION_PRODUCTS[pi];
        let group = ids::recurring_group_id(user_id, product.merchant);
        // Anchor the series somewhere inside the most recent cycle, then
        // walk backward one cadence period at a time.
        let anchor_offset = rng.next_u64_below(SUBSCRIPTION_CADENCE_DAYS) as i64;
        let mut cursor = cfg.as_of - Duration::days(anchor_offset);
        while cursor >= start {
            let amount = round_cents(product.base_price * rng.uniform_in((0.95, 1.08)));
            seq += 1;
            out.push(Transaction {
                transaction_id: ids::transaction_id(user_id, "sub", seq),
                user_id: user_id.clone(),
                account_id: credit.account_id.clone(),
                date: cursor,
                amount: -amount,
                merchant_name: product.merchant.to_string(),
                category_primary: product.category_primary.to_string(),
                category_detailed: product.category_detailed.to_string(),
                is_subscription: true,
                recurring_group_id: Some(group.clone()),
            });
            charged += amount;
            cursor = cursor - Duration::days(SUBSCRIPTION_CADENCE_DAYS as i64);
        }
    }

    let shortfall = subscription_target - charged;
    if shortfall > FILLER_EPSILON {
        let days_ago = rng.next_u64_below(u64::from(cfg.horizon_days) + 1) as i64;
        out.push(Transaction {
            transaction_id: ids::transaction_id(user_id, "fill", 1),
            user_id: user_id.clone(),
            account_id: credit.account_id.clone(),
            date: cfg.as_of - Duration::days(days_ago),
            amount: -round_cents(shortfall),
            merchant_name: FILLER_MERCHANT.to_string(),
            category_primary: FILLER_CATEGORY_PRIMARY.to_string(),
            category_detailed: FILLER_CATEGORY_DETAILED.to_string(),
            is_subscription: true,
            recurring_group_id: None,
        });
    }
}

/// Drain the discretionary budget with category-band purchases, routing
/// each to card or checking by the persona's spend bias.
fn discretionary_batch(
    bundle: &UserBundle,
    cfg: &GenConfig,
    checking: &Account,
    credit: &Account,
    discretionary_target: f64,
    rng: &mut StreamRng,
    out: &mut Vec<Transaction>,
) {
    let persona = bundle.persona;
    let user_id = &bundle.user.user_id;

    let mut remaining = discretionary_target;
    let mut seq = 0u32;
    while remaining > DISCRETIONARY_EPSILON && seq < MAX_DISCRETIONARY_TXNS {
        let category = &EXPENSE_CATEGORIES[rng.next_u64_below(EXPENSE_CATEGORIES.len() as u64) as usize];
        let merchant =
            category.merchants[rng.next_u64_below(category.merchants.len() as u64) as usize];
        let amount = round_cents(rng.uniform_in(category.amount_band));
        let account = if rng.chance(persona.card_spend_bias) {
            credit
        } else {
            checking
        };
        let days_ago = rng.next_u64_below(u64::from(cfg.horizon_days) + 1) as i64;
        seq += 1;
        out.push(Transaction {
            transaction_id: ids::transaction_id(user_id, "exp", seq),
            user_id: user_id.clone(),
            account_id: account.account_id.clone(),
            date: cfg.as_of - Duration::days(days_ago),
            amount: -amount,
            merchant_name: merchant.to_string(),
            category_primary: category.primary.to_string(),
            category_detailed: category.detailed.to_string(),
            is_subscription: false,
            recurring_group_id: None,
        });
        remaining -= amount;
    }
}

/// One APR charge per 30-day cycle for personas carrying a balance.
fn interest_batch(
    bundle: &UserBundle,
    cfg: &GenConfig,
    credit: &Account,
    rng: &mut StreamRng,
    out: &mut Vec<Transaction>,
) {
    let persona = bundle.persona;
    if !persona.force_interest {
        return;
    }
    let user_id = &bundle.user.user_id;
    let cycles = (cfg.horizon_days / 30).max(1);
    for cycle in 0..cycles {
        let rate = rng.uniform_in((0.015, 0.025));
        let amount = round_cents(credit.current_balance * rate);
        if amount <= 0.0 {
            break;
        }
        let days_ago = (u64::from(cycle) * 30 + rng.next_u64_below(30))
            .min(u64::from(cfg.horizon_days)) as i64;
        out.push(Transaction {
            transaction_id: ids::transaction_id(user_id, "int", cycle + 1),
            user_id: user_id.clone(),
            account_id: credit.account_id.clone(),
            date: cfg.as_of - Duration::days(days_ago),
            amount: -amount,
            merchant_name: INTEREST_MERCHANT.to_string(),
            category_primary: INTEREST_CATEGORY_PRIMARY.to_string(),
            category_detailed: INTEREST_CATEGORY_DETAILED.to_string(),
            is_subscription: false,
            recurring_group_id: None,
        });
    }
}
