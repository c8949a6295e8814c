//! Click combo: a short-window multiplier for rapid consecutive clicks.
//!
//! The tracker only counts. The inactivity window is a decay timer owned by
//! the engine's scheduler, which calls [`ComboTracker::reset`] when it fires.

use crate::core::constants::{COMBO_MAX_MULTIPLIER, COMBO_STEP_BONUS, COMBO_STEP_SIZE};

/// `min(1 + floor(clicks / 5) × 0.5, 5)`.
pub fn multiplier_for(consecutive_clicks: u32) -> f64 {
    let steps = f64::from(consecutive_clicks / COMBO_STEP_SIZE);
    (1.0 + steps * COMBO_STEP_BONUS).min(COMBO_MAX_MULTIPLIER)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboTracker {
    consecutive_clicks: u32,
    multiplier: f64,
    last_click_at: Option<i64>,
}

impl Default for ComboTracker {
    fn default() -> Self {
        Self {
            consecutive_clicks: 0,
            multiplier: 1.0,
            last_click_at: None,
        }
    }
}

impl ComboTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consecutive_clicks(&self) -> u32 {
        self.consecutive_clicks
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn last_click_at(&self) -> Option<i64> {
        self.last_click_at
    }

    /// Count a click. Returns the new consecutive count.
    pub fn register_click(&mut self, now_ms: i64) -> u32 {
        self.consecutive_clicks = self.consecutive_clicks.saturating_add(1);
        self.multiplier = multiplier_for(self.consecutive_clicks);
        self.last_click_at = Some(now_ms);
        self.consecutive_clicks
    }

    /// Back to (0, ×1). Returns true if there was a combo to drop.
    pub fn reset(&mut self) -> bool {
        let had_combo = self.consecutive_clicks > 0;
        self.consecutive_clicks = 0;
        self.multiplier = 1.0;
        had_combo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_step_function() {
        assert_eq!(multiplier_for(0), 1.0);
        assert_eq!(multiplier_for(4), 1.0);
        assert_eq!(multiplier_for(5), 1.5);
        assert_eq!(multiplier_for(9), 1.5);
        assert_eq!(multiplier_for(10), 2.0);
        assert_eq!(multiplier_for(14), 2.0);
        assert_eq!(multiplier_for(35), 4.5);
        assert_eq!(multiplier_for(40), 5.0);
        assert_eq!(multiplier_for(10_000), 5.0);
    }

    #[test]
    fn test_register_click_tracks_count_and_multiplier() {
        let mut combo = ComboTracker::new();
        for i in 1..=5 {
            assert_eq!(combo.register_click(i * 100), i as u32);
        }
        assert_eq!(combo.multiplier(), 1.5);
        assert_eq!(combo.last_click_at(), Some(500));
    }

    #[test]
    fn test_reset_returns_to_baseline() {
        let mut combo = ComboTracker::new();
        combo.register_click(0);
        assert!(combo.reset());
        assert_eq!(combo.consecutive_clicks(), 0);
        assert_eq!(combo.multiplier(), 1.0);
        assert!(!combo.reset());
    }
}
