//! The persona catalog: a closed set of behavioral archetypes.
//!
//! Each persona is a bundle of statistical parameter ranges. A user is
//! assigned one persona for life; every scalar on the user (income,
//! savings rate, utilization, ...) is sampled once from these ranges.
//! The catalog is static data; there are no operations beyond lookup.

use crate::error::{GenError, GenResult};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Persona {
    pub name: &'static str,
    /// Relative share of roster slots beyond the coverage pass.
    pub weight: f64,
    /// Stable rank exported with each user row.
    pub priority: u32,
    pub monthly_income: (f64, f64),
    /// Total spend as a fraction of income. May exceed 1.0 for personas
    /// that run a structural deficit.
    pub spend_ratio: (f64, f64),
    pub subscription_share: (f64, f64),
    pub buffer_months: (f64, f64),
    pub savings_rate: (f64, f64),
    pub credit_utilization: (f64, f64),
    pub credit_limit: (f64, f64),
    pub apr_band: (f64, f64),
    pub income_volatility: f64,
    /// Days between consecutive pay events, resampled per interval.
    pub pay_gap_days: (u32, u32),
    pub subscription_count: (u32, u32),
    /// Probability a discretionary purchase lands on the credit card.
    pub card_spend_bias: f64,
    /// Probability an individual pay event is skipped entirely.
    pub pay_skip_probability: f64,
    pub overdue_probability: f64,
    pub force_interest: bool,
    pub allow_overdue: bool,
    pub ensure_positive_savings: bool,
    pub open_brokerage: bool,
}

/// The fixed, ordered persona catalog.
pub fn catalog() -> &'static [Persona] {
    &CATALOG
}

static CATALOG: [Persona; 5] = [
    Persona {
        name: "Debt Fighter",
        weight: 0.25,
        priority: 1,
        monthly_income: (3200.0, 6400.0),
        spend_ratio: (1.05, 1.25),
        subscription_share: (0.05, 0.10),
        buffer_months: (0.5, 1.5),
        savings_rate: (0.00, 0.05),
        credit_utilization: (0.55, 0.95),
        credit_limit: (4000.0, 12000.0),
        apr_band: (22.99, 28.99),
        income_volatility: 0.12,
        pay_gap_days: (13, 16),
        subscription_count: (2, 4),
        card_spend_bias: 0.75,
        pay_skip_probability: 0.0,
        overdue_probability: 0.35,
        force_interest: true,
        allow_overdue: true,
        ensure_positive_savings: false,
        open_brokerage: false,
    },
    Persona {
        name: "Gig Worker",
        weight: 0.20,
        priority: 2,
        monthly_income: (3800.0, 7000.0),
        spend_ratio: (0.90, 1.05),
        subscription_share: (0.04, 0.08),
        buffer_months: (1.0, 2.0),
        savings_rate: (0.02, 0.08),
        credit_utilization: (0.25, 0.50),
        credit_limit: (6000.0, 14000.0),
        apr_band: (19.99, 24.99),
        income_volatility: 0.38,
        pay_gap_days: (5, 18),
        subscription_count: (1, 3),
        card_spend_bias: 0.50,
        pay_skip_probability: 0.15,
        overdue_probability: 0.10,
        force_interest: false,
        allow_overdue: true,
        ensure_positive_savings: false,
        open_brokerage: false,
    },
    Persona {
        name: "Auto-Payer",
        weight: 0.20,
        priority: 3,
        monthly_income: (5000.0, 9000.0),
        spend_ratio: (0.85, 1.00),
        subscription_share: (0.12, 0.22),
        buffer_months: (1.5, 3.0),
        savings_rate: (0.05, 0.12),
        credit_utilization: (0.20, 0.45),
        credit_limit: (7000.0, 18000.0),
        apr_band: (17.99, 22.99),
        income_volatility: 0.08,
        pay_gap_days: (14, 16),
        subscription_count: (4, 7),
        card_spend_bias: 0.65,
        pay_skip_probability: 0.0,
        overdue_probability: 0.0,
        force_interest: false,
        allow_overdue: false,
        ensure_positive_savings: false,
        open_brokerage: false,
    },
    Persona {
        name: "Wealth Compounder",
        weight: 0.15,
        priority: 4,
        monthly_income: (12000.0, 22000.0),
        spend_ratio: (0.65, 0.85),
        subscription_share: (0.06, 0.12),
        buffer_months: (3.5, 7.0),
        savings_rate: (0.03, 0.08),
        credit_utilization: (0.05, 0.25),
        credit_limit: (20000.0, 40000.0),
        apr_band: (12.99, 16.99),
        income_volatility: 0.07,
        pay_gap_days: (28, 31),
        subscription_count: (3, 5),
        card_spend_bias: 0.70,
        pay_skip_probability: 0.0,
        overdue_probability: 0.0,
        force_interest: false,
        allow_overdue: false,
        ensure_positive_savings: true,
        open_brokerage: true,
    },
    Persona {
        name: "Optimizer",
        weight: 0.20,
        priority: 5,
        monthly_income: (6500.0, 11000.0),
        spend_ratio: (0.60, 0.80),
        subscription_share: (0.04, 0.09),
        buffer_months: (2.5, 4.0),
        savings_rate: (0.12, 0.20),
        credit_utilization: (0.05, 0.15),
        credit_limit: (10000.0, 20000.0),
        apr_band: (14.99, 18.99),
        income_volatility: 0.05,
        pay_gap_days: (14, 17),
        subscription_count: (2, 4),
        card_spend_bias: 0.45,
        pay_skip_probability: 0.0,
        overdue_probability: 0.0,
        force_interest: false,
        allow_overdue: false,
        ensure_positive_savings: true,
        open_brokerage: true,
    },
];

/// Fail fast on a malformed catalog. Inverted ranges are configuration
/// bugs and must never be silently swapped.
pub fn validate_catalog(personas: &[Persona]) -> GenResult<()> {
    for p in personas {
        check_range(p.name, "monthly_income", p.monthly_income)?;
        check_range(p.name, "spend_ratio", p.spend_ratio)?;
        check_range(p.name, "subscription_share", p.subscription_share)?;
        check_range(p.name, "buffer_months", p.buffer_months)?;
        check_range(p.name, "savings_rate", p.savings_rate)?;
        check_range(p.name, "credit_utilization", p.credit_utilization)?;
        check_range(p.name, "credit_limit", p.credit_limit)?;
        check_range(p.name, "apr_band", p.apr_band)?;
        check_range(
            p.name,
            "pay_gap_days",
            (f64::from(p.pay_gap_days.0), f64::from(p.pay_gap_days.1)),
        )?;
        check_range(
            p.name,
            "subscription_count",
            (
                f64::from(p.subscription_count.0),
                f64::from(p.subscription_count.1),
            ),
        )?;
        if p.weight <= 0.0 {
            return Err(GenError::InvalidConfiguration(format!(
                "persona '{}' has non-positive weight {}",
                p.name, p.weight
            )));
        }
    }
    Ok(())
}

fn check_range(persona: &'static str, field: &'static str, band: (f64, f64)) -> GenResult<()> {
    if band.0 > band.1 {
        return Err(GenError::InvalidPersonaConfig {
            persona,
            field,
            min: band.0,
            max: band.1,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_valid() {
        validate_catalog(catalog()).expect("shipped catalog must validate");
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut broken = CLONE_BASE;
        broken.savings_rate = (0.5, 0.1);
        let err = validate_catalog(&[broken]).unwrap_err();
        assert!(matches!(
            err,
            GenError::InvalidPersonaConfig {
                field: "savings_rate",
                ..
            }
        ));
    }

    // Struct-update base for building broken personas in tests.
    const CLONE_BASE: Persona = Persona {
        name: "Test",
        weight: 1.0,
        priority: 99,
        monthly_income: (1000.0, 2000.0),
        spend_ratio: (0.8, 0.9),
        subscription_share: (0.05, 0.1),
        buffer_months: (1.0, 2.0),
        savings_rate: (0.0, 0.1),
        credit_utilization: (0.1, 0.2),
        credit_limit: (5000.0, 10000.0),
        apr_band: (18.0, 24.0),
        income_volatility: 0.1,
        pay_gap_days: (14, 16),
        subscription_count: (1, 3),
        card_spend_bias: 0.5,
        pay_skip_probability: 0.0,
        overdue_probability: 0.0,
        force_interest: false,
        allow_overdue: false,
        ensure_positive_savings: false,
        open_brokerage: false,
    };
}
