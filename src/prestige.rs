//! Prestige: a voluntary full reset that grants a permanent bonus.

use crate::core::constants::{PRESTIGE_BONUS_PER_LEVEL, PRESTIGE_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Permanent prestige progress. The level never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrestigeState {
    level: u32,
}

impl PrestigeState {
    pub fn new(level: u32) -> Self {
        Self { level }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Permanent rate multiplier: `1 + level × 0.05`.
    pub fn bonus_multiplier(&self) -> f64 {
        bonus_multiplier_at(self.level)
    }

    /// Bonus fraction as a percentage, e.g. 15.0 at level 3.
    pub fn bonus_percent(&self) -> f64 {
        f64::from(self.level) * PRESTIGE_BONUS_PER_LEVEL * 100.0
    }

    /// Bonus percentage after one more prestige.
    pub fn next_bonus_percent(&self) -> f64 {
        f64::from(self.level.saturating_add(1)) * PRESTIGE_BONUS_PER_LEVEL * 100.0
    }

    pub(crate) fn advance(&mut self) -> u32 {
        self.level = self.level.saturating_add(1);
        self.level
    }
}

pub fn bonus_multiplier_at(level: u32) -> f64 {
    1.0 + f64::from(level) * PRESTIGE_BONUS_PER_LEVEL
}

/// Checks if a run with this lifetime amount may prestige.
pub fn can_prestige(lifetime_amount: f64) -> bool {
    lifetime_amount >= PRESTIGE_THRESHOLD
}

/// Progress toward the threshold, clamped to [0, 1].
pub fn progress_fraction(lifetime_amount: f64) -> f64 {
    (lifetime_amount / PRESTIGE_THRESHOLD).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_is_additive_per_level() {
        assert_eq!(PrestigeState::default().bonus_multiplier(), 1.0);
        assert!((bonus_multiplier_at(1) - 1.05).abs() < 1e-9);
        assert!((bonus_multiplier_at(10) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_can_prestige_threshold() {
        assert!(!can_prestige(999_999.0));
        assert!(can_prestige(1_000_000.0));
        assert!(can_prestige(5_000_000.0));
    }

    #[test]
    fn test_progress_fraction_clamped() {
        assert_eq!(progress_fraction(0.0), 0.0);
        assert!((progress_fraction(250_000.0) - 0.25).abs() < 1e-9);
        assert_eq!(progress_fraction(3_000_000.0), 1.0);
    }

    #[test]
    fn test_advance_and_percentages() {
        let mut state = PrestigeState::default();
        assert_eq!(state.advance(), 1);
        assert_eq!(state.advance(), 2);
        assert!((state.bonus_percent() - 10.0).abs() < 1e-9);
        assert!((state.next_bonus_percent() - 15.0).abs() < 1e-9);
    }
}
