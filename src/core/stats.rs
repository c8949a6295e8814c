//! Aggregate statistics fed to achievement predicates and persisted with
//! every save.

use serde::{Deserialize, Serialize};

/// Lifetime counters. Every field only grows during normal play.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stats {
    pub total_clicks: u64,
    /// Everything ever credited, across prestiges.
    pub total_cookies_ever_earned: f64,
    pub golden_bonuses_caught: u64,
    pub max_combo_reached: u32,
    pub festivals_joined: u64,
    pub play_time_seconds: u64,
    pub prestige_level: u32,
}

impl Stats {
    pub fn record_combo(&mut self, consecutive_clicks: u32) {
        self.max_combo_reached = self.max_combo_reached.max(consecutive_clicks);
    }

    pub fn record_earnings(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.total_cookies_ever_earned += amount;
        }
    }
}

/// Read-only snapshot handed to achievement predicates: the persisted
/// counters plus values derived from the rest of the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsView<'a> {
    pub stats: &'a Stats,
    /// Producers and click upgrades owned, summed.
    pub owned_upgrades: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_combo_keeps_maximum() {
        let mut stats = Stats::default();
        stats.record_combo(7);
        stats.record_combo(3);
        assert_eq!(stats.max_combo_reached, 7);
    }

    #[test]
    fn test_stats_json_uses_camel_case() {
        let stats = Stats {
            total_clicks: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"totalClicks\":3"));
        assert!(json.contains("\"totalCookiesEverEarned\""));
        assert!(json.contains("\"prestigeLevel\""));
    }
}
