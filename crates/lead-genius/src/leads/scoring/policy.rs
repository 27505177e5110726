use super::super::domain::Priority;
use super::rubric::{HIGH_PRIORITY_MIN, MEDIUM_PRIORITY_MIN};

impl Priority {
    /// Map a final score onto its triage tier. Lower bounds are inclusive.
    pub const fn from_score(score: i64) -> Self {
        if score >= HIGH_PRIORITY_MIN {
            Priority::High
        } else if score >= MEDIUM_PRIORITY_MIN {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

/// Clamp the factor sum to the maximum score and round half up.
///
/// Only the upper bound is clamped. Out-of-range bills pass through, so the result is
/// `i64`; sums beyond its range saturate.
pub(crate) fn finalize_score(raw_total: f64) -> i64 {
    let capped = raw_total.min(super::rubric::MAX_SCORE);
    (capped + 0.5).floor() as i64
}
