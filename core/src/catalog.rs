//! Static merchant and category catalogs.
//!
//! Amounts are USD. Subscription base prices are per 30-day cycle;
//! discretionary bands are per single purchase.

/// A recurring product charged on a fixed cadence.
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionProduct {
    pub merchant: &'static str,
    pub category_primary: &'static str,
    pub category_detailed: &'static str,
    pub base_price: f64,
}

pub const SUBSCRIPTION_PRODUCTS: &[SubscriptionProduct] = &[
    SubscriptionProduct {
        merchant: "Netflix",
        category_primary: "Entertainment",
        category_detailed: "Video Streaming",
        base_price: 16.0,
    },
    SubscriptionProduct {
        merchant: "Spotify",
        category_primary: "Entertainment",
        category_detailed: "Music and Audio",
        base_price: 11.0,
    },
    SubscriptionProduct {
        merchant: "Adobe Creative Cloud",
        category_primary: "Shops",
        category_detailed: "Digital Purchases",
        base_price: 55.0,
    },
    SubscriptionProduct {
        merchant: "iCloud Storage",
        category_primary: "Utilities",
        category_detailed: "Internet",
        base_price: 12.0,
    },
    SubscriptionProduct {
        merchant: "Peloton",
        category_primary: "Sports and Fitness",
        category_detailed: "Gym",
        base_price: 45.0,
    },
    SubscriptionProduct {
        merchant: "Calm App",
        category_primary: "Health and Wellness",
        category_detailed: "Mental Health",
        base_price: 70.0,
    },
    SubscriptionProduct {
        merchant: "Amazon Subscribe & Save",
        category_primary: "Shops",
        category_detailed: "Retail",
        base_price: 28.0,
    },
    SubscriptionProduct {
        merchant: "Disney+",
        category_primary: "Entertainment",
        category_detailed: "Video Streaming",
        base_price: 14.0,
    },
    SubscriptionProduct {
        merchant: "Audible",
        category_primary: "Entertainment",
        category_detailed: "Music and Audio",
        base_price: 15.0,
    },
    SubscriptionProduct {
        merchant: "New York Times",
        category_primary: "Shops",
        category_detailed: "Digital Purchases",
        base_price: 17.0,
    },
];

/// A discretionary spending category with its per-purchase amount band.
#[derive(Debug, Clone, Copy)]
pub struct ExpenseCategory {
    pub primary: &'static str,
    pub detailed: &'static str,
    pub amount_band: (f64, f64),
    pub merchants: &'static [&'static str],
}

pub const EXPENSE_CATEGORIES: &[ExpenseCategory] = &[
    ExpenseCategory {
        primary: "Food and Drink",
        detailed: "Groceries",
        amount_band: (40.0, 220.0),
        merchants: &["Whole Foods", "Trader Joe's", "Safeway", "Kroger"],
    },
    ExpenseCategory {
        primary: "Food and Drink",
        detailed: "Restaurants",
        amount_band: (12.0, 85.0),
        merchants: &["Sweetgreen", "Chipotle", "Olive Garden", "Blue Bottle Coffee"],
    },
    ExpenseCategory {
        primary: "Travel",
        detailed: "Gas Stations",
        amount_band: (25.0, 90.0),
        merchants: &["Shell Gas", "Chevron", "Exxon"],
    },
    ExpenseCategory {
        primary: "Travel",
        detailed: "Ride Share",
        amount_band: (8.0, 45.0),
        merchants: &["Lyft", "Uber"],
    },
    ExpenseCategory {
        primary: "Travel",
        detailed: "Airlines",
        amount_band: (180.0, 650.0),
        merchants: &["Delta Airlines", "United Airlines"],
    },
    ExpenseCategory {
        primary: "Shops",
        detailed: "Retail",
        amount_band: (15.0, 160.0),
        merchants: &["Target", "Costco", "Best Buy", "Amazon"],
    },
    ExpenseCategory {
        primary: "Home",
        detailed: "Furniture",
        amount_band: (60.0, 420.0),
        merchants: &["Wayfair", "IKEA", "West Elm"],
    },
    ExpenseCategory {
        primary: "Utilities",
        detailed: "Cable",
        amount_band: (60.0, 160.0),
        merchants: &["Comcast", "Spectrum"],
    },
    ExpenseCategory {
        primary: "Sports and Fitness",
        detailed: "Gym",
        amount_band: (25.0, 210.0),
        merchants: &["Equinox", "Planet Fitness", "CorePower Yoga"],
    },
    ExpenseCategory {
        primary: "Entertainment",
        detailed: "Nightlife",
        amount_band: (30.0, 190.0),
        merchants: &["Soho House", "House of Blues", "AMC Theatres"],
    },
];

/// Payroll counterparties. One is picked per user and reused across the
/// whole income series.
pub const INCOME_SOURCES: &[&str] = &[
    "Acme Corp Payroll",
    "Upwork Payouts",
    "Stripe Atlas Distributions",
    "AngelList Advisory",
    "Monarch Labs Consulting",
];

pub const INCOME_CATEGORY_PRIMARY: &str = "Income";
pub const INCOME_CATEGORY_DETAILED: &str = "Payroll";

/// The synthetic top-up transaction that closes a subscription shortfall.
pub const FILLER_MERCHANT: &str = "Subscription Bundle";
pub const FILLER_CATEGORY_PRIMARY: &str = "Shops";
pub const FILLER_CATEGORY_DETAILED: &str = "Digital Purchases";

pub const INTEREST_MERCHANT: &str = "Card APR Charge";
pub const INTEREST_CATEGORY_PRIMARY: &str = "Finance";
pub const INTEREST_CATEGORY_DETAILED: &str = "Interest";
