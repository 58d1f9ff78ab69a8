//! Per-user entity synthesis: turns a persona's parameter ranges into one
//! concrete user with accounts and a credit liability.
//!
//! Scalars are sampled once here and fixed for the user's lifetime; the
//! transaction builder sizes its batches from the same scalars, which is
//! what keeps reported balances and transaction sums consistent by
//! construction.

use crate::ids;
use crate::name_generator::NameGenerator;
use crate::persona::Persona;
use crate::records::{round_cents, Account, AccountType, Liability, User, ISO_CURRENCY};
use crate::rng::StreamRng;
use chrono::{Duration, NaiveDate};

/// Savings rate floor applied to personas flagged `ensure_positive_savings`.
const POSITIVE_SAVINGS_FLOOR: f64 = 0.05;

/// Minimum credit-card payment floor in USD.
const MIN_PAYMENT_FLOOR: f64 = 25.0;

/// Everything synthesized for one user, handed to the transaction builder.
#[derive(Debug, Clone)]
pub struct UserBundle {
    pub user: User,
    pub accounts: Vec<Account>,
    pub liability: Liability,
    pub persona: &'static Persona,
}

impl UserBundle {
    pub fn account_of(&self, account_type: AccountType) -> Option<&Account> {
        self.accounts.iter().find(|a| a.account_type == account_type)
    }
}

/// Sample one user's scalars from the persona ranges and build the
/// account set and liability record. Draw order is fixed; changing it
/// changes every downstream id and amount for the seed.
pub fn synthesize_user(
    index: usize,
    persona: &'static Persona,
    as_of: NaiveDate,
    rng: &mut StreamRng,
) -> UserBundle {
    let full_name = NameGenerator::full_name(rng);
    let email = NameGenerator::email(&full_name, index);

    let monthly_income = rng.uniform_in(persona.monthly_income);
    let spend_ratio = rng.uniform_in(persona.spend_ratio);
    let monthly_spend = monthly_income * spend_ratio;

    let mut savings_rate = rng.uniform_in(persona.savings_rate);
    if persona.ensure_positive_savings {
        savings_rate = savings_rate.max(POSITIVE_SAVINGS_FLOOR);
    }
    let buffer_months = rng.uniform_in(persona.buffer_months);
    let credit_utilization = rng.uniform_in(persona.credit_utilization);
    let subscription_share = rng.uniform_in(persona.subscription_share);

    let checking_balance = monthly_spend * buffer_months * rng.uniform_in((0.55, 0.70));
    let savings_balance = monthly_income * savings_rate * rng.uniform_in((6.0, 14.0));
    let credit_limit = rng.uniform_in(persona.credit_limit);
    let credit_balance = credit_limit * credit_utilization;

    let user_id = ids::user_id(index, persona.name);
    let first_name = full_name
        .split_whitespace()
        .next()
        .unwrap_or("Account")
        .to_string();

    let credit_account = build_account(
        index,
        persona,
        &user_id,
        &first_name,
        AccountType::Credit,
        credit_balance,
        credit_limit,
    );
    let liability = build_liability(
        persona,
        &credit_account.account_id,
        credit_account.current_balance,
        as_of,
        rng,
    );

    let mut accounts = vec![
        build_account(
            index,
            persona,
            &user_id,
            &first_name,
            AccountType::Checking,
            checking_balance,
            0.0,
        ),
        build_account(
            index,
            persona,
            &user_id,
            &first_name,
            AccountType::Savings,
            savings_balance,
            0.0,
        ),
        credit_account,
    ];
    if persona.open_brokerage {
        let brokerage_balance = monthly_income * rng.uniform_in((4.0, 10.0));
        accounts.push(build_account(
            index,
            persona,
            &user_id,
            &first_name,
            AccountType::Brokerage,
            brokerage_balance,
            0.0,
        ));
    }

    let user = User {
        user_id,
        full_name,
        email,
        persona: persona.name.to_string(),
        persona_priority: persona.priority,
        monthly_income: round_cents(monthly_income),
        monthly_spend: round_cents(monthly_spend),
        savings_rate: round_ratio(savings_rate),
        buffer_months: round_ratio(buffer_months),
        credit_utilization: round_ratio(credit_utilization),
        subscription_share: round_ratio(subscription_share),
    };

    log::debug!(
        "user {} persona={} income={:.2} spend={:.2} accounts={}",
        user.user_id,
        persona.name,
        user.monthly_income,
        user.monthly_spend,
        accounts.len()
    );

    UserBundle {
        user,
        accounts,
        liability,
        persona,
    }
}

fn build_account(
    index: usize,
    persona: &Persona,
    user_id: &str,
    first_name: &str,
    account_type: AccountType,
    balance: f64,
    credit_limit: f64,
) -> Account {
    Account {
        account_id: ids::account_id(index, persona.name, account_type.role_code()),
        user_id: user_id.to_string(),
        name: format!("{}'s {}", first_name, account_type.label()),
        account_type,
        current_balance: round_cents(balance),
        credit_limit: round_cents(credit_limit),
        iso_currency_code: ISO_CURRENCY.to_string(),
    }
}

fn build_liability(
    persona: &Persona,
    credit_account_id: &str,
    statement_balance: f64,
    as_of: NaiveDate,
    rng: &mut StreamRng,
) -> Liability {
    let apr = rng.uniform_in(persona.apr_band);
    let minimum_payment = round_cents((statement_balance * 0.02).max(MIN_PAYMENT_FLOOR));
    let last_payment = round_cents(minimum_payment * rng.uniform_in((0.9, 1.6)));
    let is_overdue = persona.allow_overdue && rng.chance(persona.overdue_probability);
    let due_in_days = rng.next_u64_between(5, 25) as i64;
    Liability {
        account_id: credit_account_id.to_string(),
        apr_type: "purchase_apr".to_string(),
        apr_percentage: round_ratio(apr),
        minimum_payment_amount: minimum_payment,
        last_payment_amount: last_payment,
        // Mirrors the credit account's (already rounded) current balance.
        last_statement_balance: statement_balance,
        is_overdue,
        next_payment_due_date: as_of + Duration::days(due_in_days),
    }
}

fn round_ratio(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
