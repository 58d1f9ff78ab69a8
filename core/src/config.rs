//! Run configuration and its validation policy.
//!
//! Policy (applied consistently everywhere):
//!   - `user_count` outside the supported band is CLAMPED to the nearest
//!     bound, with a warning. This is the single documented exception to
//!     fail-fast validation.
//!   - `horizon_days` outside its band is an error, never corrected.

use crate::error::{GenError, GenResult};
use crate::types::HorizonDays;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

pub const MIN_USERS: usize = 50;
pub const MAX_USERS: usize = 100;
pub const MIN_HORIZON_DAYS: HorizonDays = 1;
pub const MAX_HORIZON_DAYS: HorizonDays = 3650;

#[derive(Debug, Clone, Serialize)]
pub struct GenConfig {
    pub user_count: usize,
    pub seed: u64,
    pub horizon_days: HorizonDays,
    /// The "today" anchor all dates are generated relative to. Core never
    /// reads the clock; the binary defaults this to the current local date.
    pub as_of: NaiveDate,
}

impl GenConfig {
    pub fn new(user_count: usize, seed: u64, horizon_days: HorizonDays, as_of: NaiveDate) -> Self {
        Self {
            user_count,
            seed,
            horizon_days,
            as_of,
        }
    }

    /// Apply the clamp policy and reject unsupported horizons.
    pub fn validated(mut self) -> GenResult<Self> {
        if self.horizon_days < MIN_HORIZON_DAYS || self.horizon_days > MAX_HORIZON_DAYS {
            return Err(GenError::InvalidConfiguration(format!(
                "horizon_days must be within {MIN_HORIZON_DAYS}..={MAX_HORIZON_DAYS}, got {}",
                self.horizon_days
            )));
        }
        let clamped = self.user_count.clamp(MIN_USERS, MAX_USERS);
        if clamped != self.user_count {
            log::warn!(
                "user_count {} outside supported band {MIN_USERS}..={MAX_USERS}, clamped to {clamped}",
                self.user_count
            );
            self.user_count = clamped;
        }
        Ok(self)
    }

    /// First day of the generation window (inclusive).
    pub fn horizon_start(&self) -> NaiveDate {
        self.as_of - Duration::days(i64::from(self.horizon_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn user_count_is_clamped() {
        let cfg = GenConfig::new(10, 1, 90, as_of()).validated().unwrap();
        assert_eq!(cfg.user_count, MIN_USERS);
        let cfg = GenConfig::new(500, 1, 90, as_of()).validated().unwrap();
        assert_eq!(cfg.user_count, MAX_USERS);
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let err = GenConfig::new(50, 1, 0, as_of()).validated().unwrap_err();
        assert!(matches!(err, GenError::InvalidConfiguration(_)));
    }

    #[test]
    fn horizon_start_is_inclusive_lower_bound() {
        let cfg = GenConfig::new(50, 1, 30, as_of());
        assert_eq!(
            cfg.horizon_start(),
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
        );
    }
}
