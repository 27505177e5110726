//! Weights and thresholds of the lead scoring rubric.

/// Share of the monthly bill a switching customer is expected to save.
pub const EXPECTED_SAVING_RATE: f64 = 0.15;
/// Monthly saving, in currency units, that earns the full savings allowance.
pub const REFERENCE_MONTHLY_SAVING: f64 = 50.0;
pub const SAVINGS_CAP: f64 = 40.0;

pub const LONG_TENURE_YEARS: u32 = 2;
pub const LONG_TENURE_POINTS: f64 = 20.0;
pub const MID_TENURE_YEARS: u32 = 1;
pub const MID_TENURE_POINTS: f64 = 10.0;
pub const PRIOR_SWITCH_POINTS: f64 = 10.0;
pub const SWITCH_PROPENSITY_CAP: f64 = 30.0;

/// Inclusive monthly bill band of the ideal customer.
pub const IDEAL_BILL_RANGE: (f64, f64) = (50.0, 150.0);
pub const IDEAL_BILL_POINTS: f64 = 15.0;
/// Contracted power (kVA) above which a household counts as a larger consumer.
pub const HIGH_POWER_KVA: f64 = 4.6;
pub const HIGH_POWER_POINTS: f64 = 5.0;
pub const PROFILE_CAP: f64 = 20.0;

pub const CALCULATOR_POINTS: f64 = 5.0;
/// Seconds on page that signal a considered visit.
pub const ENGAGED_SECONDS: u64 = 120;
pub const ENGAGED_TIME_POINTS: f64 = 5.0;
pub const ENGAGEMENT_CAP: f64 = 10.0;

pub const MAX_SCORE: f64 = 100.0;

pub const HIGH_PRIORITY_MIN: i64 = 80;
pub const MEDIUM_PRIORITY_MIN: i64 = 50;
