use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Behavioral signals measured by the landing page while the visitor fills in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSignals {
    pub visited_calculator: bool,
    /// Whole seconds between form mount and submit.
    pub time_on_page: u64,
}

impl EngagementSignals {
    /// Build signals from a caller-measured duration, rounding to the nearest second
    /// with halves rounded up.
    pub fn from_elapsed(visited_calculator: bool, elapsed: Duration) -> Self {
        let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        Self {
            visited_calculator,
            time_on_page: millis.saturating_add(500) / 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_seconds_up() {
        let signals = EngagementSignals::from_elapsed(true, Duration::from_millis(120_500));
        assert_eq!(signals.time_on_page, 121);
        assert!(signals.visited_calculator);
    }

    #[test]
    fn rounds_sub_half_seconds_down() {
        let signals = EngagementSignals::from_elapsed(false, Duration::from_millis(120_499));
        assert_eq!(signals.time_on_page, 120);
    }

    #[test]
    fn zero_elapsed_is_zero_seconds() {
        let signals = EngagementSignals::from_elapsed(false, Duration::ZERO);
        assert_eq!(signals, EngagementSignals::default());
    }
}
