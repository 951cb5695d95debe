//! Configuration and constants for the analysis pipeline and CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Bonus multipliers by profit rank (zero-based)
pub const BONUS_RATE_FIRST: f64 = 0.15;
pub const BONUS_RATE_RUNNER_UP: f64 = 0.10;
pub const BONUS_RATE_DEFAULT: f64 = 0.05;

/// Maximum number of entries in a seller's top product list
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Reported money values are rounded to 1 / ROUNDING_SCALE (two decimals)
pub const ROUNDING_SCALE: f64 = 100.0;

/// Collections every dataset must carry as non-empty arrays
pub const REQUIRED_COLLECTIONS: &[&str] = &["sellers", "customers", "products", "purchase_records"];

// Strategy slot names in AnalysisOptions
pub const REVENUE_CALCULATOR: &str = "revenue_calculator";
pub const BONUS_CALCULATOR: &str = "bonus_calculator";

/// Number of option entries the pipeline accepts
pub const REQUIRED_OPTION_COUNT: usize = 2;

// Text summary limits
pub const DEFAULT_SUMMARY_ROWS: usize = 10;
pub const MAX_SUMMARY_ROWS: usize = 1000;
