use serde::Deserialize;

use crate::money;

/// Demand-window rules feeding the surge computation. Loaded from
/// configuration; defaults match the product rules (5 minute window,
/// third attempt triggers a 10% uplift).
#[derive(Debug, Clone, Deserialize)]
pub struct SurgePolicy {
    #[serde(default = "default_window_seconds")]
    pub window_seconds: i64,
    #[serde(default = "default_attempt_threshold")]
    pub attempt_threshold: i64,
    #[serde(default = "default_uplift_percent")]
    pub uplift_percent: u32,
}

fn default_window_seconds() -> i64 {
    300
}

fn default_attempt_threshold() -> i64 {
    3
}

fn default_uplift_percent() -> u32 {
    10
}

impl Default for SurgePolicy {
    fn default() -> Self {
        Self {
            window_seconds: default_window_seconds(),
            attempt_threshold: default_attempt_threshold(),
            uplift_percent: default_uplift_percent(),
        }
    }
}

impl SurgePolicy {
    /// Effective price given how many attempts fall inside the trailing
    /// window. Always the base fare or the base fare plus one uplift,
    /// regardless of how far past the threshold the count climbs.
    pub fn effective_price(&self, base_price_cents: i64, attempts_in_window: i64) -> i64 {
        if attempts_in_window >= self.attempt_threshold {
            money::uplift_half_up(base_price_cents, self.uplift_percent)
        } else {
            base_price_cents
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_is_base_fare() {
        let policy = SurgePolicy::default();
        assert_eq!(policy.effective_price(200_000, 0), 200_000);
        assert_eq!(policy.effective_price(200_000, 2), 200_000);
    }

    #[test]
    fn at_threshold_applies_uplift() {
        let policy = SurgePolicy::default();
        assert_eq!(policy.effective_price(200_000, 3), 220_000);
    }

    #[test]
    fn uplift_never_compounds() {
        let policy = SurgePolicy::default();
        assert_eq!(
            policy.effective_price(200_000, 50),
            policy.effective_price(200_000, 3)
        );
    }

    #[test]
    fn custom_policy() {
        let policy = SurgePolicy {
            window_seconds: 60,
            attempt_threshold: 1,
            uplift_percent: 25,
        };
        assert_eq!(policy.effective_price(1_000, 1), 1_250);
    }
}
