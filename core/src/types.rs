//! Shared primitive types used across the generator.

/// A stable, unique identifier for a generated user.
pub type UserId = String;

/// A stable, unique identifier for a generated account.
pub type AccountId = String;

/// A stable, unique identifier for a generated transaction.
pub type TransactionId = String;

/// Length of the trailing window transactions are generated for, in days.
pub type HorizonDays = u32;
